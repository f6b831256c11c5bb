//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Integer pixel positions and velocities only
//! - One fixed step per simulated frame
//! - Drawing goes through the `Presentation` trait, never a concrete backend

pub mod ball;
pub mod court;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::{Ball, ScoreEvent};
pub use court::{Band, Court};
pub use paddle::{Paddle, Rect};
pub use state::{Match, MatchPhase, Side};
pub use tick::tick;
