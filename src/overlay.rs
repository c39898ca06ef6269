//! Toast messages, shown in the window title for a few seconds.

use std::time::{Duration, Instant};

const TOAST_DURATION: Duration = Duration::from_secs(5);
const BASE_TITLE: &str = "Pulse VR";

#[derive(Default)]
pub struct Toast {
    shown_at: Option<Instant>,
}

impl Toast {
    pub fn new() -> Self {
        Self { shown_at: None }
    }

    pub fn show(&mut self, window: &winit::window::Window, text: &str) {
        log::info!("toast: {}", text.replace('\n', " "));
        window.set_title(&format!("{BASE_TITLE} | {}", text.replace('\n', " | ")));
        self.shown_at = Some(Instant::now());
    }

    /// Restore the plain title once the toast has expired.
    pub fn tick(&mut self, window: &winit::window::Window) {
        if self.shown_at.is_some_and(|at| at.elapsed() >= TOAST_DURATION) {
            window.set_title(BASE_TITLE);
            self.shown_at = None;
        }
    }
}

pub fn base_title() -> &'static str {
    BASE_TITLE
}
