use pulse_core::{
    Eye, EyeFrame, EyeSide, HeadTransform, LifecycleError, PulseScene, StereoParams, Viewport,
};

/// Run the per-frame callbacks up to, but not including, finish: new pose,
/// then left and right eye. The caller renders the returned frames and then
/// calls [`PulseScene::on_finish_frame`] whether or not rendering succeeded.
pub fn begin_stereo_frame(
    scene: &mut PulseScene,
    head: &HeadTransform,
    stereo: &StereoParams,
    (width, height): (u32, u32),
) -> Result<[EyeFrame; 2], LifecycleError> {
    scene.on_new_frame(head)?;
    let mut draw = |side| {
        let eye = Eye::from_head(side, head, stereo, Viewport::half(side, width, height));
        scene.on_draw_eye(&eye)
    };
    let left = draw(EyeSide::Left)?;
    let right = draw(EyeSide::Right)?;
    Ok([left, right])
}

/// Whole surface, as handed to the finish callback.
pub fn full_viewport((width, height): (u32, u32)) -> Viewport {
    Viewport {
        x: 0,
        y: 0,
        width,
        height,
    }
}
