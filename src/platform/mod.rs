//! Platform abstraction layer
//!
//! The simulation and the frame loop only ever talk to the window through
//! these traits:
//! - `Presentation`: event polling, primitive drawing, text, present
//! - `FrameClock`: fixed-rate frame pacing
//!
//! `native` implements `Presentation` on top of winit + wgpu.

pub mod clock;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

pub use clock::{FixedRateClock, FrameClock};

use glam::IVec2;

use crate::error::PongError;
use crate::sim::Rect;

/// Linear RGBA color
pub type Color = [f32; 4];

/// Default palette
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
    pub const FOREGROUND: Color = [1.0, 1.0, 1.0, 1.0];
}

/// Window events the frame loop cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    /// User or OS asked to close the window
    Quit,
    /// Drawable surface changed size (physical pixels)
    Resized { width: u32, height: u32 },
    /// Window gained or lost focus
    Focused(bool),
}

/// A rendered run of text, sized but not yet placed
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub text: String,
    pub size: u32,
    pub fg: Color,
    pub bg: Color,
    /// Width and height in pixels
    pub extent: IVec2,
}

/// Where to place a [`TextBlock`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Point is the block's top-left corner
    TopLeft(IVec2),
    /// Point is the block's top-right corner
    TopRight(IVec2),
}

impl TextAnchor {
    /// Top-left corner of a block with the given extent
    pub fn origin(&self, extent: IVec2) -> IVec2 {
        match *self {
            TextAnchor::TopLeft(p) => p,
            TextAnchor::TopRight(p) => IVec2::new(p.x - extent.x, p.y),
        }
    }
}

/// Window surface, drawing primitives and event source
pub trait Presentation {
    /// Drain every pending window event
    fn poll_events(&mut self) -> Vec<FrameEvent>;

    fn fill_background(&mut self, color: Color);

    fn draw_filled_circle(&mut self, color: Color, center: IVec2, radius: i32);

    fn draw_filled_rect(&mut self, color: Color, rect: Rect);

    /// Lay out `text` at `size` and return the block to blit
    fn render_text(&mut self, text: &str, size: u32, fg: Color, bg: Color) -> TextBlock;

    fn blit_text(&mut self, block: &TextBlock, anchor: TextAnchor);

    /// Flush everything drawn this frame to the visible window
    fn present(&mut self) -> Result<(), PongError>;

    /// Drawable size in logical pixels
    fn surface_size(&self) -> IVec2;
}
