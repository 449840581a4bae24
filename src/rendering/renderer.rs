use macroquad::color::Color;
use tracing::{debug, warn};

use super::{Layout, Surface, Theme};
use crate::config::LayoutConfig;
use crate::domain::Grid;
use crate::error::{LifeError, Result};

/// Draws a [`Grid`] onto a [`Surface`] and maps pointer positions back to
/// cells. Holds no simulation state: the grid is borrowed per call.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: LayoutConfig,
    theme: Theme,
    layout: Layout,
}

impl Renderer {
    /// Fails when the sizing rules are inconsistent or the surface reports
    /// no usable area.
    pub fn new<S: Surface>(
        surface: &S,
        grid: &Grid,
        config: LayoutConfig,
        theme: Theme,
    ) -> Result<Self> {
        config.validate()?;

        let (width, height) = surface.logical_size();
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            warn!(width, height, "surface has no drawable area");
            return Err(LifeError::SurfaceUnavailable(format!(
                "surface reports {width}x{height}"
            )));
        }

        let layout = Layout::compute(
            grid.dimensions(),
            (width, height),
            surface.device_pixel_ratio(),
            &config,
        );
        Ok(Self { config, theme, layout })
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Rebuild the layout for a new surface size or pixel ratio
    pub fn recompute_layout(
        &mut self,
        grid_dims: (usize, usize),
        surface_width: f32,
        surface_height: f32,
        device_pixel_ratio: f32,
    ) {
        let layout = Layout::compute(
            grid_dims,
            (surface_width, surface_height),
            device_pixel_ratio,
            &self.config,
        );
        self.apply(layout);
    }

    /// Re-read the surface and recompute if anything the layout depends on
    /// moved. Returns whether it did.
    pub fn sync<S: Surface>(&mut self, surface: &S, grid_dims: (usize, usize)) -> bool {
        let layout = Layout::compute(
            grid_dims,
            surface.logical_size(),
            surface.device_pixel_ratio(),
            &self.config,
        );
        if layout == self.layout {
            return false;
        }

        self.apply(layout);
        true
    }

    fn apply(&mut self, layout: Layout) {
        self.layout = layout;
        debug!(
            cell_size = layout.cell_size,
            offset_x = layout.offset_x,
            offset_y = layout.offset_y,
            grid_lines = layout.grid_lines,
            dpr = layout.device_pixel_ratio,
            "recomputed layout"
        );
    }

    pub fn surface_to_grid(&self, x: f32, y: f32) -> (usize, usize) {
        self.layout.surface_to_grid(x, y)
    }

    /// Full redraw: background, separator lines, then live cells.
    pub fn render_frame<S: Surface>(&self, grid: &Grid, surface: &mut S) {
        let layout = &self.layout;
        let size = layout.cell_size as f32;
        let (origin_x, origin_y) = (layout.offset_x as f32, layout.offset_y as f32);
        let (grid_px_w, grid_px_h) = layout.grid_pixel_size();
        let show_lines = layout.grid_lines && layout.cell_size >= self.config.grid_line_threshold;

        surface.fill_background(self.theme.background);

        if show_lines {
            for col in 0..=layout.grid_width {
                let x = origin_x + col as f32 * size;
                surface.stroke_line(x, origin_y, x, origin_y + grid_px_h, 1.0, self.theme.grid_line);
            }
            for row in 0..=layout.grid_height {
                let y = origin_y + row as f32 * size;
                surface.stroke_line(origin_x, y, origin_x + grid_px_w, y, 1.0, self.theme.grid_line);
            }
        }

        // Leave the separator visible around each live cell
        let inset = if show_lines && layout.cell_size > self.config.grid_line_threshold {
            1.0
        } else {
            0.0
        };

        for (x, y) in grid.iter_live() {
            let (px, py) = layout.grid_to_surface(x, y);
            surface.fill_rect(
                px + inset,
                py + inset,
                size - 2.0 * inset,
                size - 2.0 * inset,
                self.theme.alive,
            );
        }
    }

    /// Paint a translucent overlay on one cell over the current frame.
    /// Cells outside the grid are ignored.
    pub fn highlight_cell<S: Surface>(&self, surface: &mut S, x: i32, y: i32, color: Color) {
        if !self.layout.contains(x, y) {
            return;
        }

        let size = self.layout.cell_size as f32;
        let (px, py) = self.layout.grid_to_surface(x as usize, y as usize);
        surface.fill_rounded_rect(px, py, size, size, size * 0.2, color);
    }
}
