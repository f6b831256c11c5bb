//! Native window: winit for the OS window and events, wgpu for drawing
//!
//! Instead of handing control to `EventLoop::run_app`, the frame loop pumps
//! pending events once per frame with a zero timeout, so the game keeps the
//! single-threaded poll → draw → step → wait structure.

use std::sync::Arc;
use std::time::Duration;

use glam::IVec2;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowAttributes, WindowId};

use super::{Color, FrameEvent, Presentation, TextAnchor, TextBlock};
use crate::error::PongError;
use crate::renderer::shapes::{self, CIRCLE_SEGMENTS};
use crate::renderer::vertex::{Vertex, colors};
use crate::renderer::RenderState;
use crate::settings::Settings;
use crate::sim::Rect;

/// Collects winit callbacks between pumps
struct WindowHandler {
    attributes: WindowAttributes,
    window: Option<Arc<Window>>,
    creation_error: Option<winit::error::OsError>,
    events: Vec<FrameEvent>,
}

impl ApplicationHandler for WindowHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match event_loop.create_window(self.attributes.clone()) {
            Ok(window) => {
                log::info!("Window created ({:?})", window.inner_size());
                self.window = Some(Arc::new(window));
            }
            Err(e) => {
                self.creation_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                self.events.push(FrameEvent::Quit);
            }
            WindowEvent::Resized(size) => self.events.push(FrameEvent::Resized {
                width: size.width,
                height: size.height,
            }),
            WindowEvent::Focused(focused) => self.events.push(FrameEvent::Focused(focused)),
            _ => {}
        }
    }
}

/// OS window implementing [`Presentation`]
///
/// Draw calls tessellate into a CPU-side vertex list; `present` uploads and
/// renders it in a single pass.
pub struct NativeWindow {
    event_loop: EventLoop<()>,
    handler: WindowHandler,
    window: Arc<Window>,
    render_state: RenderState,
    vertices: Vec<Vertex>,
    clear_color: Color,
    logical_size: IVec2,
}

impl NativeWindow {
    /// Open the window and set up the GPU. Any failure here is fatal.
    pub fn open(settings: &Settings) -> Result<Self, PongError> {
        let mut event_loop = EventLoop::new()?;
        let (width, height) = (settings.window_width, settings.window_height);

        let mut handler = WindowHandler {
            attributes: Window::default_attributes()
                .with_title(settings.title.as_str())
                .with_inner_size(LogicalSize::new(width, height))
                .with_resizable(false),
            window: None,
            creation_error: None,
            events: Vec::new(),
        };

        // The window only exists after the first `resumed` callback
        let window = loop {
            let status = event_loop.pump_app_events(Some(Duration::ZERO), &mut handler);
            if let Some(e) = handler.creation_error.take() {
                return Err(e.into());
            }
            if let Some(window) = handler.window.clone() {
                break window;
            }
            if let PumpStatus::Exit(code) = status {
                log::error!("Event loop exited with code {} during startup", code);
                return Err(PongError::NoWindow);
            }
        };

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let physical = window.inner_size();
        let logical_size = IVec2::new(width as i32, height as i32);
        let render_state = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            physical.width,
            physical.height,
            logical_size.as_vec2(),
        ))?;

        Ok(Self {
            event_loop,
            handler,
            window,
            render_state,
            vertices: Vec::new(),
            clear_color: colors::BACKGROUND,
            logical_size,
        })
    }
}

impl Presentation for NativeWindow {
    fn poll_events(&mut self) -> Vec<FrameEvent> {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.handler);
        if let PumpStatus::Exit(_) = status {
            self.handler.events.push(FrameEvent::Quit);
        }

        let events = std::mem::take(&mut self.handler.events);
        for event in &events {
            if let FrameEvent::Resized { width, height } = *event {
                self.render_state.resize(width, height);
            }
        }
        events
    }

    fn fill_background(&mut self, color: Color) {
        self.vertices.clear();
        self.clear_color = color;
    }

    fn draw_filled_circle(&mut self, color: Color, center: IVec2, radius: i32) {
        self.vertices.extend(shapes::circle(
            center.as_vec2(),
            radius as f32,
            color,
            CIRCLE_SEGMENTS,
        ));
    }

    fn draw_filled_rect(&mut self, color: Color, rect: Rect) {
        self.vertices.extend(shapes::rect(rect, color));
    }

    fn render_text(&mut self, text: &str, size: u32, fg: Color, bg: Color) -> TextBlock {
        TextBlock {
            text: text.to_string(),
            size,
            fg,
            bg,
            extent: shapes::text_extent(text, size),
        }
    }

    fn blit_text(&mut self, block: &TextBlock, anchor: TextAnchor) {
        let origin = anchor.origin(block.extent);
        self.vertices.extend(shapes::text(
            &block.text,
            origin,
            block.size,
            block.fg,
            block.bg,
        ));
    }

    fn present(&mut self) -> Result<(), PongError> {
        match self.render_state.render(&self.vertices, self.clear_color) {
            Ok(()) => Ok(()),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = self.window.inner_size();
                self.render_state.resize(size.width, size.height);
                self.render_state.reconfigure();
                Ok(())
            }
            Err(e @ wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                Err(PongError::Present(e))
            }
            Err(e) => {
                log::warn!("Render error: {:?}", e);
                Ok(())
            }
        }
    }

    fn surface_size(&self) -> IVec2 {
        self.logical_size
    }
}

impl std::fmt::Debug for NativeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeWindow")
            .field("window", &self.window.id())
            .field("logical_size", &self.logical_size)
            .field("vertices", &self.vertices.len())
            .finish()
    }
}
