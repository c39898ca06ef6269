//! Side-by-side stereo renderer for the heart and the floor.

use glam::{Mat4, Vec3};
use pulse_core::geometry::{floor_colors, floor_mesh, heart_mesh, HEART_VERTEX_COUNT};
use pulse_core::{DrawCall, EyeFrame, Rgba, CLEAR_COLOR, SCENE_WGSL};
use std::sync::{Arc, Mutex};
use thiserror::Error;

mod helpers;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("error compiling shader: {0}")]
    ShaderCompile(String),
    #[error("{label}: gpu error {message}")]
    Backend { label: &'static str, message: String },
    #[error(transparent)]
    Surface(#[from] wgpu::SurfaceError),
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct DrawUniforms {
    model: [[f32; 4]; 4],
    model_view: [[f32; 4]; 4],
    mvp: [[f32; 4]; 4],
    light_pos: [f32; 4],
}

impl DrawUniforms {
    fn new(call: &DrawCall, light_pos_eye: Vec3) -> Self {
        let cols = |m: Mat4| m.to_cols_array_2d();
        Self {
            model: cols(call.model),
            model_view: cols(call.model_view),
            mvp: cols(call.model_view_projection),
            light_pos: light_pos_eye.extend(1.0).to_array(),
        }
    }
}

struct MeshBuffers {
    positions: wgpu::Buffer,
    normals: wgpu::Buffer,
    vertex_count: u32,
}

/// Uniforms and heart colours owned by one eye. Both eyes are written before
/// the single submit, so they cannot share buffers.
struct EyeResources {
    heart_uniforms: wgpu::Buffer,
    heart_bind_group: wgpu::BindGroup,
    heart_colors: wgpu::Buffer,
    floor_uniforms: wgpu::Buffer,
    floor_bind_group: wgpu::BindGroup,
}

pub struct GpuState<'w> {
    pub window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    heart_pipeline: wgpu::RenderPipeline,
    floor_pipeline: wgpu::RenderPipeline,
    heart: MeshBuffers,
    floor: MeshBuffers,
    floor_colors: wgpu::Buffer,
    eyes: [EyeResources; 2],
    // backs depth_view
    depth_texture: wgpu::Texture,
    depth_view: wgpu::TextureView,
    backend_error: Arc<Mutex<Option<String>>>,
}

impl<'w> GpuState<'w> {
    pub async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        // Anything the backend reports outside an error scope is fatal; the
        // render loop picks it up and shuts down.
        let backend_error = Arc::new(Mutex::new(None));
        {
            let sink = Arc::clone(&backend_error);
            device.on_uncaptured_error(Box::new(move |e| {
                log::error!("uncaptured gpu error: {e}");
                if let Ok(mut slot) = sink.lock() {
                    slot.get_or_insert_with(|| e.to_string());
                }
            }));
        }

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("draw_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let heart_pipeline = helpers::make_scene_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            "heart_pipeline",
            "fs_passthrough",
            format,
        );
        let floor_pipeline = helpers::make_scene_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            "floor_pipeline",
            "fs_grid",
            format,
        );
        if let Some(err) = device.pop_error_scope().await {
            log::error!("Error compiling shader: {err}");
            return Err(RenderError::ShaderCompile(err.to_string()).into());
        }

        let heart_mesh = heart_mesh();
        let floor_mesh = floor_mesh();
        let heart = MeshBuffers {
            positions: helpers::create_vertex_buffer(
                &device,
                "heart_positions",
                &heart_mesh.positions,
            ),
            normals: helpers::create_vertex_buffer(&device, "heart_normals", &heart_mesh.normals),
            vertex_count: heart_mesh.vertex_count() as u32,
        };
        let floor = MeshBuffers {
            positions: helpers::create_vertex_buffer(
                &device,
                "floor_positions",
                &floor_mesh.positions,
            ),
            normals: helpers::create_vertex_buffer(&device, "floor_normals", &floor_mesh.normals),
            vertex_count: floor_mesh.vertex_count() as u32,
        };
        let floor_colors = helpers::create_vertex_buffer(&device, "floor_colors", &floor_colors());

        let eyes = [
            Self::eye_resources(&device, &bind_group_layout, "left"),
            Self::eye_resources(&device, &bind_group_layout, "right"),
        ];
        let (depth_texture, depth_view) =
            helpers::create_depth_texture(&device, config.width, config.height);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            heart_pipeline,
            floor_pipeline,
            heart,
            floor,
            floor_colors,
            eyes,
            depth_texture,
            depth_view,
            backend_error,
        })
    }

    fn eye_resources(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        eye: &str,
    ) -> EyeResources {
        let size = std::mem::size_of::<DrawUniforms>() as u64;
        let heart_uniforms =
            helpers::create_uniform_buffer(device, &format!("{eye}_heart_u"), size);
        let floor_uniforms =
            helpers::create_uniform_buffer(device, &format!("{eye}_floor_u"), size);
        let bind = |buffer: &wgpu::Buffer, label: String| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(&label),
                layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            })
        };
        let heart_bind_group = bind(&heart_uniforms, format!("{eye}_heart_bg"));
        let floor_bind_group = bind(&floor_uniforms, format!("{eye}_floor_bg"));
        let heart_colors = helpers::create_vertex_buffer(
            device,
            &format!("{eye}_heart_colors"),
            &[[0.0f32; 4]; HEART_VERTEX_COUNT],
        );
        EyeResources {
            heart_uniforms,
            heart_bind_group,
            heart_colors,
            floor_uniforms,
            floor_bind_group,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        let (tex, view) =
            helpers::create_depth_texture(&self.device, new_size.width, new_size.height);
        self.depth_texture = tex;
        self.depth_view = view;
    }

    fn check_backend(&self, label: &'static str) -> Result<(), RenderError> {
        let pending = self
            .backend_error
            .lock()
            .map(|mut slot| slot.take())
            .unwrap_or_else(|_| Some("error sink poisoned".into()));
        match pending {
            Some(message) => Err(RenderError::Backend { label, message }),
            None => Ok(()),
        }
    }

    fn upload_eye(&self, eye: &EyeResources, frame: &EyeFrame) {
        self.queue.write_buffer(
            &eye.heart_uniforms,
            0,
            bytemuck::bytes_of(&DrawUniforms::new(&frame.heart, frame.light_pos_eye)),
        );
        self.queue.write_buffer(
            &eye.floor_uniforms,
            0,
            bytemuck::bytes_of(&DrawUniforms::new(&frame.floor, frame.light_pos_eye)),
        );
        let color: Rgba = frame.heart.color.unwrap_or([1.0; 4]);
        let colors = vec![color; self.heart.vertex_count as usize];
        self.queue
            .write_buffer(&eye.heart_colors, 0, bytemuck::cast_slice(&colors));
    }

    /// Draw both eyes into their halves of the surface and present.
    pub fn render(&mut self, frames: &[EyeFrame; 2]) -> Result<(), RenderError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        for eye_frame in frames {
            let eye = &self.eyes[eye_frame.side.index()];
            self.upload_eye(eye, eye_frame);
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("stereo_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: CLEAR_COLOR[0],
                            g: CLEAR_COLOR[1],
                            b: CLEAR_COLOR[2],
                            a: CLEAR_COLOR[3],
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            for eye_frame in frames {
                let eye = &self.eyes[eye_frame.side.index()];
                let vp = eye_frame.viewport;
                rpass.set_viewport(
                    vp.x as f32,
                    vp.y as f32,
                    vp.width as f32,
                    vp.height as f32,
                    0.0,
                    1.0,
                );
                rpass.set_scissor_rect(vp.x, vp.y, vp.width, vp.height);

                rpass.set_pipeline(&self.heart_pipeline);
                rpass.set_bind_group(0, &eye.heart_bind_group, &[]);
                rpass.set_vertex_buffer(0, self.heart.positions.slice(..));
                rpass.set_vertex_buffer(1, self.heart.normals.slice(..));
                rpass.set_vertex_buffer(2, eye.heart_colors.slice(..));
                rpass.draw(0..self.heart.vertex_count, 0..1);

                rpass.set_pipeline(&self.floor_pipeline);
                rpass.set_bind_group(0, &eye.floor_bind_group, &[]);
                rpass.set_vertex_buffer(0, self.floor.positions.slice(..));
                rpass.set_vertex_buffer(1, self.floor.normals.slice(..));
                rpass.set_vertex_buffer(2, self.floor_colors.slice(..));
                rpass.draw(0..self.floor.vertex_count, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        self.check_backend("drawing frame")
    }
}
