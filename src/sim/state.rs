//! Match state
//!
//! Everything one game session owns: the ball, both paddles, both scores
//! and the two loop flags.

use super::ball::{Ball, ScoreEvent};
use super::court::Court;
use super::paddle::Paddle;
use crate::consts::WIN_SCORE;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPhase {
    /// Ball is live and the simulation steps every frame
    #[default]
    Active,
    /// A side reached the winning score. Terminal: the final frame stays on
    /// screen until the window is closed.
    Finished,
}

/// Left or right side of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// One complete game session
#[derive(Debug, Clone)]
pub struct Match {
    pub court: Court,
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub left_score: u32,
    pub right_score: u32,
    pub phase: MatchPhase,
    /// Set once a close request is seen; the only way out of the frame loop
    pub close_requested: bool,
    /// Simulated frames so far (frozen once the match is finished)
    pub frame_counter: u64,
}

impl Match {
    /// Set up a match on a court of the given size: ball at kickoff,
    /// paddles vertically centered
    pub fn new(court: Court) -> Self {
        Self {
            court,
            ball: Ball::kickoff(&court),
            left_paddle: Paddle::new(court.left_paddle_rect()),
            right_paddle: Paddle::new(court.right_paddle_rect()),
            left_score: 0,
            right_score: 0,
            phase: MatchPhase::Active,
            close_requested: false,
            frame_counter: 0,
        }
    }

    /// Whether the simulation should still be stepped
    pub fn continue_game(&self) -> bool {
        self.phase == MatchPhase::Active
    }

    /// Credit a goal to the side named by the event
    pub fn apply_score(&mut self, event: ScoreEvent) {
        match event {
            ScoreEvent::LeftScored => self.left_score += 1,
            ScoreEvent::RightScored => self.right_score += 1,
            ScoreEvent::None => {}
        }
    }

    /// Side that reached the winning score, if any
    pub fn winner(&self) -> Option<Side> {
        if self.left_score >= WIN_SCORE {
            Some(Side::Left)
        } else if self.right_score >= WIN_SCORE {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Move to `Finished` once either score hits the target.
    ///
    /// Returns true only on the call that performs the transition.
    pub fn decide_continue(&mut self) -> bool {
        if self.phase == MatchPhase::Active && self.winner().is_some() {
            self.phase = MatchPhase::Finished;
            return true;
        }
        false
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new(Court::default())
    }
}
