//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The line pipeline and its vertex upload
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use refract_core::Viewport;
use refract_render::{
    context::{ContextError, RenderContext},
    pipeline::{CanvasUniforms, LinePipeline},
    LineBatch,
};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: LinePipeline,
    clear_color: wgpu::Color,
}

impl RenderSystem {
    /// Create render system from window and config
    ///
    /// The canvas keeps the viewport's pixel size; the surface is stretched
    /// over it.
    pub fn new(
        window: Arc<Window>,
        viewport: &Viewport,
        render_config: &RenderingConfig,
        vsync: bool,
    ) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let pipeline = LinePipeline::new(&context.device, context.config.format);
        pipeline.update_uniforms(
            &context.queue,
            &CanvasUniforms::new(viewport.width as f32, viewport.height as f32),
        );

        Ok(Self {
            context,
            pipeline,
            clear_color: to_wgpu_color(render_config.background_color),
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Upload the batch drawn by the latest redraw
    pub fn upload(&mut self, batch: &LineBatch) {
        self.pipeline
            .upload(&self.context.device, &self.context.queue, batch.vertices());
        log::debug!("Uploaded {} vertices", batch.vertex_count());
    }

    /// Render a single frame
    pub fn render_frame(&mut self) -> Result<(), RenderError> {
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline.render(&mut encoder, &view, self.clear_color);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Reconfigure the surface after it was lost
    pub fn recover_surface(&mut self) {
        self.context.reconfigure();
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

fn to_wgpu_color(c: [f32; 4]) -> wgpu::Color {
    wgpu::Color {
        r: c[0] as f64,
        g: c[1] as f64,
        b: c[2] as f64,
        a: c[3] as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }

    #[test]
    fn test_background_conversion() {
        let c = to_wgpu_color([0.5, 0.25, 0.0, 1.0]);
        assert_eq!((c.r, c.g, c.b, c.a), (0.5, 0.25, 0.0, 1.0));
    }
}
