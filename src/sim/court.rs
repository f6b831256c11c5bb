//! Court geometry
//!
//! Paddle placement and every collision band the ball tests against are
//! derived here from the court size and the layout constants, so the hit
//! windows stay glued to the drawn paddles at any window size.

use glam::IVec2;

use super::paddle::Rect;
use crate::consts::*;

/// Inclusive integer interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub lo: i32,
    pub hi: i32,
}

impl Band {
    pub const fn new(lo: i32, hi: i32) -> Self {
        Self { lo, hi }
    }

    #[inline]
    pub fn contains(&self, v: i32) -> bool {
        self.lo <= v && v <= self.hi
    }
}

/// The playing surface and the fixed paddle layout on it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Court {
    pub width: i32,
    pub height: i32,
}

impl Default for Court {
    fn default() -> Self {
        Self::new(COURT_WIDTH, COURT_HEIGHT)
    }
}

impl Court {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    /// Top edge shared by both paddles (vertically centered)
    pub fn paddle_top(&self) -> i32 {
        self.height / 2 - PADDLE_HEIGHT / 2
    }

    pub fn left_paddle_rect(&self) -> Rect {
        Rect::new(PADDLE_INSET, self.paddle_top(), PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    pub fn right_paddle_rect(&self) -> Rect {
        Rect::new(
            self.width - PADDLE_INSET,
            self.paddle_top(),
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
        )
    }

    /// Ball kickoff position
    pub fn kickoff(&self) -> IVec2 {
        IVec2::new(
            self.width / 2 - BALL_KICKOFF_OFFSET,
            self.height / 2 - BALL_KICKOFF_OFFSET,
        )
    }

    /// Projected leading-edge x that counts as touching the left paddle face.
    ///
    /// Reference values on a 500 wide court: `[105, 111]`.
    pub fn left_paddle_band(&self) -> Band {
        let face = self.left_paddle_rect().right();
        Band::new(face - BALL_RADIUS, face + PADDLE_FACE_SLACK)
    }

    /// Projected x that counts as touching the right paddle face.
    ///
    /// Tested with the same `center - EDGE_MARGIN` probe as the left band,
    /// which puts it at `[width - 101, width - 95]`.
    pub fn right_paddle_band(&self) -> Band {
        let face = self.right_paddle_rect().x;
        Band::new(face - PADDLE_FACE_SLACK, face + BALL_RADIUS)
    }

    /// Vertical window around a paddle whose top edge is at `top`
    pub fn paddle_span(&self, top: i32) -> Band {
        Band::new(
            top - PADDLE_SPAN_SLACK,
            top + PADDLE_HEIGHT + PADDLE_SPAN_SLACK,
        )
    }

    /// True when moving `pos` by `vel` would push the ball past either end of
    /// `extent` (goal lines horizontally, walls vertically)
    #[inline]
    pub fn crosses_edge(pos: i32, vel: i32, extent: i32) -> bool {
        extent < pos + EDGE_MARGIN + vel || 0 > pos - EDGE_MARGIN + vel
    }

    /// Whether a court of this size leaves room for the paddle layout
    pub fn fits_layout(&self) -> bool {
        let left = self.left_paddle_rect();
        let right = self.right_paddle_rect();
        left.right() < right.x && self.paddle_top() >= 0 && left.bottom() <= self.height
    }
}
