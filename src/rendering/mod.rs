//! Presentation: grid-to-pixel geometry, the drawing surface contract and
//! the frame renderer.

mod hud;
mod layout;
mod renderer;
mod surface;

pub use hud::{draw_status, status_covers};
pub use layout::Layout;
pub use renderer::Renderer;
pub use surface::{DrawCommand, MacroquadSurface, RecordingSurface, Surface};

use macroquad::color::Color;

use crate::config::{ThemeConfig, rgba};

/// Colours used for a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub grid_line: Color,
    pub alive: Color,
    /// Overlay for the cell under the pointer
    pub highlight: Color,
}

impl From<&ThemeConfig> for Theme {
    fn from(config: &ThemeConfig) -> Self {
        Self {
            background: rgba(config.background),
            grid_line: rgba(config.grid_line),
            alive: rgba(config.alive),
            highlight: rgba(config.highlight),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from(&ThemeConfig::default())
    }
}
