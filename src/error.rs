//! Centralized error types for the application.
//!
//! The animation itself never fails; everything here belongs to the SDL
//! shell around it, the drawing backend, or start-up.

use bevy_ecs::event::Event;

/// Main error type of the application.
///
/// This is the primary error type that should be used in public APIs. It is also
/// an ECS event, so per-frame failures can be reported without stopping the loop.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("Draw error: {0}")]
    Draw(#[from] DrawError),

    #[error("Invalid options: {0}")]
    Options(#[from] OptionsError),

    #[error("SDL error: {0}")]
    Sdl(String),
}

/// Platform-specific errors.
#[derive(thiserror::Error, Debug)]
pub enum PlatformError {
    #[error("Logging initialization failed: {0}")]
    LoggingInit(String),
}

/// Errors raised by a drawing surface.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DrawError {
    #[error("Primitive rendering failed: {0}")]
    Primitive(String),

    #[error("Polygon needs at least 3 vertices, got {0}")]
    DegeneratePolygon(usize),
}

/// Errors from parsing the command line.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error("Missing value for {0}")]
    MissingValue(&'static str),

    #[error("Invalid value for {flag}: {value}")]
    InvalidValue { flag: &'static str, value: String },
}

/// Result type for application operations.
pub type GameResult<T> = Result<T, GameError>;
