use thiserror::Error;

/// Errors surfaced by the simulation core and the renderer.
///
/// Out-of-bounds cell access is deliberately absent: reads outside the grid
/// are dead and writes are dropped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifeError {
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("pattern not found: {0}")]
    PatternNotFound(String),

    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LifeError>;
