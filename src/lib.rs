//! Classic Pong - two static paddles, one ball, first to 11
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, court geometry, match state)
//! - `platform`: Presentation adapter contract, frame clock, native window
//! - `renderer`: WebGPU rendering pipeline and scene drawing
//! - `app`: Fixed-order frame loop tying the three together
//! - `settings`: Presentation settings loaded from JSON

pub mod app;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::App;
pub use error::PongError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Frame rate the loop is capped at
    pub const TARGET_FPS: u32 = 60;
    /// A match ends as soon as either side reaches this score
    pub const WIN_SCORE: u32 = 11;

    /// Default court (window) dimensions in pixels
    pub const COURT_WIDTH: i32 = 500;
    pub const COURT_HEIGHT: i32 = 400;

    /// Ball defaults
    pub const BALL_RADIUS: i32 = 5;
    pub const BALL_START_VELOCITY: (i32, i32) = (6, 2);
    /// Kickoff is offset up-left of the exact court center
    pub const BALL_KICKOFF_OFFSET: i32 = 3;
    /// Half-extent used by the wall tests (tighter than the drawn radius)
    pub const EDGE_MARGIN: i32 = 2;

    /// Paddle defaults - both paddles sit this far in from their goal line
    pub const PADDLE_INSET: i32 = 100;
    pub const PADDLE_WIDTH: i32 = 10;
    pub const PADDLE_HEIGHT: i32 = 40;
    /// Extra pixels past the paddle face that still count as a hit
    pub const PADDLE_FACE_SLACK: i32 = 1;
    /// Vertical overlap tolerance above and below a paddle
    pub const PADDLE_SPAN_SLACK: i32 = 3;

    /// Score text
    pub const SCORE_FONT_SIZE: u32 = 75;
    pub const MAX_SCORE_FONT_SIZE: u32 = 1024;
    pub const SCORE_LEFT_ORIGIN: (i32, i32) = (5, 0);
}
