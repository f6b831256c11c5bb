//! Paddles and the integer rectangle they occupy

use glam::IVec2;

use crate::platform::{Color, Presentation, colors};

/// Axis-aligned integer rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn top_left(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }
}

/// A static paddle. Its region is fixed once the match is set up.
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    region: Rect,
    pub color: Color,
}

impl Paddle {
    pub fn new(region: Rect) -> Self {
        Self {
            region,
            color: colors::FOREGROUND,
        }
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    /// Top edge, the only coordinate the ball needs to test a hit
    pub fn top(&self) -> i32 {
        self.region.y
    }

    pub fn draw<P: Presentation + ?Sized>(&self, out: &mut P) {
        out.draw_filled_rect(self.color, self.region);
    }
}
