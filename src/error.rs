//! Crate error type
//!
//! The simulation itself cannot fail; everything here comes from the window,
//! the GPU, or the settings file.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the presentation layer and settings loading
#[derive(Debug, Error)]
pub enum PongError {
    #[error("event loop creation failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window creation failed: {0}")]
    WindowCreation(#[from] winit::error::OsError),

    /// The event loop exited before it ever produced a window
    #[error("event loop exited before a window was created")]
    NoWindow,

    #[error("surface creation failed: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("GPU device request failed: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    /// Surface errors the renderer cannot recover from (e.g. out of memory)
    #[error("fatal surface error: {0}")]
    Present(wgpu::SurfaceError),

    #[error("could not read settings file {path:?}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings: {0}")]
    SettingsParse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_settings_message() {
        let err = PongError::InvalidSettings("window too narrow".to_string());
        assert_eq!(err.to_string(), "invalid settings: window too narrow");
    }

    #[test]
    fn test_parse_error_converts() {
        let parse = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: PongError = parse.into();
        assert!(matches!(err, PongError::SettingsParse(_)));
    }
}
