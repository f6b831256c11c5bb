//! Classic Pong entry point
//!
//! Opens the window, runs the frame loop until the window is closed and
//! exits with status 0. Window or GPU setup failure exits non-zero.

use std::process::ExitCode;

use classic_pong::platform::FixedRateClock;
use classic_pong::platform::native::NativeWindow;
use classic_pong::{App, PongError, Settings};

fn run(settings: Settings) -> Result<(), PongError> {
    let window = NativeWindow::open(&settings)?;
    let mut app = App::new(settings, window, FixedRateClock::new());
    app.run()
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Classic Pong starting...");

    let settings = Settings::load();
    match run(settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("classic-pong: {e}");
            ExitCode::FAILURE
        }
    }
}
