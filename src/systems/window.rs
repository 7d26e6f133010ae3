//! Window management system
//!
//! Handles window creation and title updates.

use std::sync::Arc;
use winit::{event_loop::ActiveEventLoop, window::Window};

use refract_core::Point;

use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    ///
    /// The inner size is set in physical pixels so one canvas pixel is one
    /// pointer pixel.
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::PhysicalSize::new(config.width, config.height))
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        log::info!("Created {}x{} window", config.width, config.height);

        Ok(Self {
            window,
            base_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Show the prism center and drag state in the title
    pub fn update_title(&self, prism_center: Point, dragging: bool) {
        self.window
            .set_title(&format_title(&self.base_title, prism_center, dragging));
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

fn format_title(base: &str, center: Point, dragging: bool) -> String {
    let hint = if dragging { "[Release to drop]" } else { "[Drag the prism, R to recenter]" };
    format!("{} - ({:.1}, {:.1}) {}", base, center.x, center.y, hint)
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
