//! Fixed-step simulation tick
//!
//! One call is one simulated frame. The caller is responsible for pacing.

use super::ball::ScoreEvent;
use super::state::{Match, MatchPhase};

/// Advance the match by one frame.
///
/// Does nothing once the match is finished, so scores and the ball freeze on
/// the final state. Returns the goal scored this frame, if any.
pub fn tick(state: &mut Match) -> ScoreEvent {
    if state.phase == MatchPhase::Finished {
        return ScoreEvent::None;
    }

    let scored = state
        .ball
        .advance(&state.court, state.left_paddle.top(), state.right_paddle.top());
    state.apply_score(scored);
    if scored.is_goal() {
        log::debug!(
            "{:?} at frame {} ({} - {})",
            scored,
            state.frame_counter,
            state.left_score,
            state.right_score
        );
    }
    state.frame_counter += 1;

    if state.decide_continue() {
        log::info!(
            "Match finished after {} frames: {} - {}",
            state.frame_counter,
            state.left_score,
            state.right_score
        );
    }

    scored
}
