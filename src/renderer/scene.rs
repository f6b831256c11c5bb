//! Scene drawing: turns a `Match` into presentation calls

use glam::IVec2;

use crate::platform::{Presentation, TextAnchor};
use crate::settings::Settings;
use crate::sim::Match;

/// Draw one full frame of the match (does not present)
pub fn draw_match<P: Presentation + ?Sized>(state: &Match, settings: &Settings, out: &mut P) {
    out.fill_background(settings.background);
    state.ball.draw(out);
    state.left_paddle.draw(out);
    state.right_paddle.draw(out);
    draw_scores(state, settings, out);
}

/// Right score hugs the right edge, left score sits at the top-left corner
fn draw_scores<P: Presentation + ?Sized>(state: &Match, settings: &Settings, out: &mut P) {
    let size = settings.score_font_size;
    let (fg, bg) = (settings.foreground, settings.background);

    let right = out.render_text(&state.right_score.to_string(), size, fg, bg);
    out.blit_text(&right, TextAnchor::TopRight(IVec2::new(state.court.width, 0)));

    let left = out.render_text(&state.left_score.to_string(), size, fg, bg);
    let (x, y) = crate::consts::SCORE_LEFT_ORIGIN;
    out.blit_text(&left, TextAnchor::TopLeft(IVec2::new(x, y)));
}
