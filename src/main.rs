//! Refract - Prism Ray Tracer
//!
//! Drag the prism with the left mouse button and watch the spectrum refract
//! through it.

use std::time::{Duration, Instant};

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use refract::config::AppConfig;
use refract::input::{InputAction, InputMapper};
use refract::scene::SceneBuilder;
use refract::systems::{RenderError, RenderSystem, WindowSystem};
use refract_core::Color;
use refract_input::DragController;
use refract_render::{LineBatch, SceneView};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    /// Scene and its tessellated drawing
    view: SceneView,
    controller: DragController,
}

impl App {
    fn new(config: AppConfig) -> Result<Self, refract_core::GeometryError> {
        let scene = SceneBuilder::from_config(&config).build()?;

        let batch = LineBatch::new(scene.viewport())
            .with_background(Color::from(config.rendering.background_color))
            .with_circle_segments(config.rendering.circle_segments);
        let view = SceneView::new(scene, batch);

        for path in view.paths() {
            log::info!(
                "Ray n={}: {} hit(s), {:?}",
                path.index,
                path.segments.len(),
                path.termination
            );
        }

        let controller = DragController::new()
            .with_min_interval(Duration::from_millis(config.interaction.drag_interval_ms));

        Ok(Self {
            config,
            window: None,
            render: None,
            view,
            controller,
        })
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::Recenter => {
                self.view.recenter();
                self.request_redraw();
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render = RenderSystem::new(
            window.window().clone(),
            self.view.scene().viewport(),
            &self.config.rendering,
            self.config.window.vsync,
        );
        match render {
            Ok(mut render) => {
                render.upload(self.view.batch());
                self.view.take_dirty();
                self.render = Some(render);
            }
            Err(e) => {
                log::error!("Failed to initialize GPU: {}", e);
                event_loop.exit();
                return;
            }
        }

        window.update_title(self.view.scene().prism().center(), false);
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
                self.request_redraw();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(action, event_loop);
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.controller.process_cursor_moved(position.x, position.y);
                if self.controller.is_dragging() {
                    self.request_redraw();
                }
            }

            WindowEvent::CursorLeft { .. } => {
                self.controller.process_cursor_left();
                self.request_redraw();
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if self.controller.process_mouse_button(button, state, &self.view) {
                    self.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                // Apply this frame's accumulated drag
                self.controller.update(&mut self.view, Instant::now());

                if let Some(window) = &self.window {
                    window.update_title(
                        self.view.scene().prism().center(),
                        self.controller.is_dragging(),
                    );
                }

                if let Some(render) = &mut self.render {
                    if self.view.take_dirty() {
                        render.upload(self.view.batch());
                    }
                    match render.render_frame() {
                        Ok(()) => {}
                        Err(RenderError::SurfaceLost) => {
                            render.recover_surface();
                            if let Some(window) = &self.window {
                                window.request_redraw();
                            }
                        }
                        Err(RenderError::OutOfMemory) => {
                            log::error!("{}", RenderError::OutOfMemory);
                            event_loop.exit();
                        }
                        Err(e) => log::warn!("{}", e),
                    }
                }

                // Throttled motion still waiting for its turn
                if !self.controller.pending_delta().is_zero() {
                    self.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let mut app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Failed to build scene: {}", e);
            std::process::exit(1);
        }
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Wait);

    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
    }
}
