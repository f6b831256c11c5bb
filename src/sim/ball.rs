//! The ball and its per-frame physics step

use glam::IVec2;

use super::court::Court;
use crate::consts::*;
use crate::platform::{Color, Presentation, colors};

/// Outcome of a single [`Ball::advance`], naming whose counter goes up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreEvent {
    #[default]
    None,
    /// Ball left through the right goal line
    LeftScored,
    /// Ball left through the left goal line
    RightScored,
}

impl ScoreEvent {
    pub fn is_goal(&self) -> bool {
        !matches!(self, ScoreEvent::None)
    }
}

/// A ball entity
///
/// Position and velocity are whole pixels (per frame). Both velocity
/// components must stay non-zero, otherwise that axis never reflects.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub center: IVec2,
    pub radius: i32,
    pub velocity: IVec2,
    pub color: Color,
}

impl Ball {
    pub fn new(center: IVec2, velocity: IVec2) -> Self {
        debug_assert!(
            velocity.x != 0 && velocity.y != 0,
            "ball velocity components must be non-zero, got {velocity}"
        );
        Self {
            center,
            radius: BALL_RADIUS,
            velocity,
            color: colors::FOREGROUND,
        }
    }

    /// Ball at the court's kickoff spot with the standard opening velocity
    pub fn kickoff(court: &Court) -> Self {
        let (vx, vy) = BALL_START_VELOCITY;
        Self::new(court.kickoff(), IVec2::new(vx, vy))
    }

    /// Move one frame, bouncing off goal lines, paddles and walls.
    ///
    /// The x axis is resolved first, then the y axis. The paddle test on the
    /// x pass looks one step ahead vertically using the y position and y
    /// velocity as they were before this call touched them. A goal is only
    /// ever reported from the x pass.
    pub fn advance(&mut self, court: &Court, left_top: i32, right_top: i32) -> ScoreEvent {
        let mut scored = ScoreEvent::None;

        // x: goal lines take priority over paddles
        let probe_x = self.center.x - EDGE_MARGIN + self.velocity.x;
        let probe_y = self.center.y + self.velocity.y;
        if Court::crosses_edge(self.center.x, self.velocity.x, court.width) {
            self.velocity.x = -self.velocity.x;
            // Heading right after the bounce means it went out on the left
            scored = if self.velocity.x > 0 {
                ScoreEvent::RightScored
            } else {
                ScoreEvent::LeftScored
            };
        } else if self.velocity.x < 0
            && court.left_paddle_band().contains(probe_x)
            && court.paddle_span(left_top).contains(probe_y)
        {
            self.velocity.x = -self.velocity.x;
        } else if self.velocity.x > 0
            && court.right_paddle_band().contains(probe_x)
            && court.paddle_span(right_top).contains(probe_y)
        {
            self.velocity.x = -self.velocity.x;
        }
        self.center.x += self.velocity.x;

        // y: plain walls, never a goal
        if Court::crosses_edge(self.center.y, self.velocity.y, court.height) {
            self.velocity.y = -self.velocity.y;
        }
        self.center.y += self.velocity.y;

        scored
    }

    pub fn draw<P: Presentation + ?Sized>(&self, out: &mut P) {
        out.draw_filled_circle(self.color, self.center, self.radius);
    }
}
