//! Application shell: window, event loop and frame presentation.
//!
//! `run` owns the host side of the screen lifecycle: it creates the window
//! and the root view, loads the screen, runs a layout pass on every window
//! resize, and presents frames through a softbuffer surface. Everything
//! happens synchronously on the main thread.

use std::num::NonZeroU32;
use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event as WinitEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::constants::{BACKGROUND, WHEEL_LINE_HEIGHT};
use crate::event::{Event, MouseButton};
use crate::layout::{Point, Size};
use crate::raster;
use crate::renderer::Renderer;
use crate::screen::{Screen, ScreenHost};

/// Settings for running an application.
pub struct Settings {
    /// Window title
    pub window_title: String,

    /// Initial window size
    pub window_size: (u32, u32),

    /// Whether the window should be resizable
    pub resizable: bool,

    /// Default log level (RUST_LOG still takes precedence)
    pub log_level: log::LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "slate".to_string(),
            window_size: (800, 600),
            resizable: true,
            log_level: log::LevelFilter::Info,
        }
    }
}

impl Settings {
    /// Set the window title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    /// Set the initial window size.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Set the default log level.
    pub fn log_level(mut self, level: log::LevelFilter) -> Self {
        self.log_level = level;
        self
    }
}

/// Errors from the application shell.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create render surface: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),
}

/// Run a screen with the given settings.
///
/// Creates a window, loads the screen into a [`ScreenHost`] and runs the
/// event loop. Returns when the window is closed.
pub fn run<S: Screen + 'static>(screen: S, settings: Settings) -> Result<(), Error> {
    let _ = env_logger::Builder::new()
        .filter_level(settings.log_level)
        .parse_default_env()
        .try_init();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(settings.window_title.clone())
            .with_inner_size(LogicalSize::new(
                settings.window_size.0,
                settings.window_size.1,
            ))
            .with_resizable(settings.resizable)
            .build(&event_loop)?,
    );

    let context = softbuffer::Context::new(window.clone())?;
    let mut surface = softbuffer::Surface::new(&context, window.clone())?;

    let initial = window.inner_size();
    let mut host = ScreenHost::new(
        screen,
        Size::new(initial.width as f32, initial.height as f32),
    );
    host.load();

    let mut renderer = Renderer::new();
    let mut mouse_position = Point::ZERO;

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Wait);

        let WinitEvent::WindowEvent { event, .. } = event else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => {
                elwt.exit();
            }
            WindowEvent::Resized(size) => {
                host.resize(Size::new(size.width as f32, size.height as f32));
                window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                let size = window.inner_size();
                // A minimized window has no pixels to present
                let (Some(width), Some(height)) =
                    (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                else {
                    return;
                };

                renderer.begin_frame(Size::new(size.width as f32, size.height as f32));
                host.draw(&mut renderer);

                if let Err(e) = surface.resize(width, height) {
                    log::error!("surface resize failed: {e}");
                    return;
                }
                match surface.buffer_mut() {
                    Ok(mut buffer) => {
                        raster::rasterize(
                            renderer.commands(),
                            size.width,
                            size.height,
                            BACKGROUND,
                            &mut buffer,
                        );
                        if let Err(e) = buffer.present() {
                            log::error!("present failed: {e}");
                        }
                    }
                    Err(e) => log::error!("no frame buffer: {e}"),
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                mouse_position = Point::new(position.x as f32, position.y as f32);
                let ui_event = Event::MouseMoved {
                    position: mouse_position,
                };
                if host.dispatch_event(&ui_event) {
                    window.request_redraw();
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let mouse_button = match button {
                    winit::event::MouseButton::Left => MouseButton::Left,
                    winit::event::MouseButton::Right => MouseButton::Right,
                    winit::event::MouseButton::Middle => MouseButton::Middle,
                    winit::event::MouseButton::Other(n) => MouseButton::Other(n),
                    _ => return,
                };

                let ui_event = match state {
                    ElementState::Pressed => Event::MousePressed {
                        button: mouse_button,
                        position: mouse_position,
                    },
                    ElementState::Released => Event::MouseReleased {
                        button: mouse_button,
                        position: mouse_position,
                    },
                };
                if host.dispatch_event(&ui_event) {
                    window.request_redraw();
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta_y = match delta {
                    MouseScrollDelta::LineDelta(_x, y) => y * WHEEL_LINE_HEIGHT,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };

                let ui_event = Event::MouseWheel {
                    delta: delta_y,
                    position: mouse_position,
                };
                if host.dispatch_event(&ui_event) {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    })?;

    Ok(())
}
