// Domain layer - Core simulation
pub mod domain;

// Application layer - Run loop state machine
pub mod application;

// Infrastructure layer - rendering, input, configuration
pub mod config;
pub mod error;
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use application::{GameState, RunState};
pub use config::Settings;
pub use domain::{Cell, Grid, Pattern, presets};
pub use error::{LifeError, Result};
pub use rendering::{Layout, Renderer, Surface, Theme};
