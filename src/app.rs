//! Frame loop
//!
//! Every frame runs the same fixed sequence, whatever the match phase:
//! 1. drain window events (a close request is honoured even after the match ends)
//! 2. draw and present the current state
//! 3. step the simulation, only while the match is active
//! 4. wait out the rest of the frame interval
//!
//! The loop exits only on a close request.

use crate::error::PongError;
use crate::platform::{FrameClock, FrameEvent, Presentation};
use crate::renderer::draw_match;
use crate::settings::Settings;
use crate::sim::{Match, tick};

/// A running game: match state plus the window and clock it runs against
pub struct App<P: Presentation, C: FrameClock> {
    state: Match,
    settings: Settings,
    presenter: P,
    clock: C,
}

impl<P: Presentation, C: FrameClock> App<P, C> {
    pub fn new(settings: Settings, presenter: P, clock: C) -> Self {
        let mut state = Match::new(settings.court());
        state.ball.color = settings.foreground;
        state.left_paddle.color = settings.foreground;
        state.right_paddle.color = settings.foreground;

        Self {
            state,
            settings,
            presenter,
            clock,
        }
    }

    pub fn state(&self) -> &Match {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn handle_events(&mut self) {
        for event in self.presenter.poll_events() {
            match event {
                FrameEvent::Quit => {
                    if !self.state.close_requested {
                        log::info!("Close requested");
                    }
                    self.state.close_requested = true;
                }
                FrameEvent::Resized { width, height } => {
                    log::debug!("Surface resized to {}x{}", width, height);
                }
                FrameEvent::Focused(focused) => {
                    log::debug!("Window focus: {}", focused);
                }
            }
        }
    }

    fn render(&mut self) -> Result<(), PongError> {
        draw_match(&self.state, &self.settings, &mut self.presenter);
        self.presenter.present()
    }

    /// Run one frame of the fixed sequence
    pub fn run_frame(&mut self) -> Result<(), PongError> {
        self.handle_events();
        self.render()?;
        if self.state.continue_game() {
            tick(&mut self.state);
        }
        self.clock.tick(self.settings.target_fps);
        Ok(())
    }

    /// Run frames until the window is closed
    pub fn run(&mut self) -> Result<(), PongError> {
        log::info!(
            "Classic Pong running ({}x{} @ {} fps)",
            self.state.court.width,
            self.state.court.height,
            self.settings.target_fps
        );

        while !self.state.close_requested {
            self.run_frame()?;
        }

        log::info!(
            "Window closed at {} - {} after {} simulated frames",
            self.state.left_score,
            self.state.right_score,
            self.state.frame_counter
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glam::IVec2;

    use super::*;
    use crate::platform::clock::manual::ManualClock;
    use crate::platform::recording::{DrawCall, RecordingPresenter};
    use crate::renderer::vertex::colors;
    use crate::sim::{MatchPhase, Rect};

    fn app() -> App<RecordingPresenter, ManualClock> {
        App::new(
            Settings::default(),
            RecordingPresenter::new(500, 400),
            ManualClock::default(),
        )
    }

    fn script(app: &mut App<RecordingPresenter, ManualClock>, idle: usize) {
        let scripted = &mut app.presenter.scripted;
        for _ in 0..idle {
            scripted.push_back(Vec::new());
        }
        scripted.push_back(vec![FrameEvent::Quit]);
    }

    #[test]
    fn test_frame_draws_before_stepping() {
        let mut app = app();
        app.run_frame().unwrap();

        // Drawn at kickoff, then moved one step
        assert!(app.presenter().calls.contains(&DrawCall::Circle(
            colors::FOREGROUND,
            IVec2::new(247, 197),
            5
        )));
        assert_eq!(app.state().ball.center, IVec2::new(253, 199));
        assert_eq!(app.state().frame_counter, 1);
        assert_eq!(app.presenter().frames_presented(), 1);
        assert_eq!(app.clock().ticks, vec![60]);
    }

    #[test]
    fn test_quit_ends_run() {
        let mut app = app();
        script(&mut app, 2);
        app.run().unwrap();

        assert!(app.state().close_requested);
        assert_eq!(app.presenter().polls, 3);
        assert_eq!(app.presenter().frames_presented(), 3);
        // The frame that saw the close request still completes
        assert_eq!(app.state().frame_counter, 3);
        assert_eq!(app.clock().ticks.len(), 3);
    }

    #[test]
    fn test_finished_match_keeps_rendering_without_stepping() {
        let mut app = app();
        app.state.right_score = 11;
        app.state.phase = MatchPhase::Finished;
        let ball = app.state().ball.clone();

        script(&mut app, 9);
        app.run().unwrap();

        assert_eq!(app.presenter().frames_presented(), 10);
        assert_eq!(app.state().ball, ball);
        assert_eq!(app.state().frame_counter, 0);
        assert_eq!((app.state().left_score, app.state().right_score), (0, 11));
    }

    #[test]
    fn test_full_match_then_close() {
        let mut app = app();
        script(&mut app, 2000);
        app.run().unwrap();

        let state = app.state();
        assert_eq!(state.phase, MatchPhase::Finished);
        assert_eq!(state.frame_counter, 1805);
        assert_eq!((state.left_score, state.right_score), (10, 11));
        assert_eq!(app.presenter().frames_presented(), 2001);

        // Final frame still shows the frozen score and the paddles
        let last = app.presenter().last_frame();
        assert!(last.contains(&DrawCall::Text("11".to_string(), IVec2::new(438, 0))));
        assert!(last.contains(&DrawCall::Text("10".to_string(), IVec2::new(5, 0))));
        assert!(last.contains(&DrawCall::Rect(
            colors::FOREGROUND,
            Rect::new(100, 180, 10, 40)
        )));
    }

    #[test]
    fn test_settings_colors_reach_entities() {
        let settings = Settings {
            foreground: [0.0, 1.0, 0.0, 1.0],
            ..Settings::default()
        };
        let app = App::new(settings, RecordingPresenter::new(500, 400), ManualClock::default());
        assert_eq!(app.state().ball.color, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(app.state().right_paddle.color, [0.0, 1.0, 0.0, 1.0]);
    }
}
