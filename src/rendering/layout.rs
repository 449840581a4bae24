//! Pure geometry between grid cells and surface pixels.
//!
//! A [`Layout`] is derived from the grid dimensions, the surface's logical
//! size and its device pixel ratio. It is recomputed from scratch whenever any
//! of those change, never patched.

use crate::config::LayoutConfig;

const MIN_DPR: f32 = 0.25;
const MAX_DPR: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub grid_width: usize,
    pub grid_height: usize,
    pub surface_width: f32,
    pub surface_height: f32,
    pub device_pixel_ratio: f32,
    /// Edge length of one cell in logical pixels
    pub cell_size: u32,
    /// Top-left corner of the grid, may be negative when the grid overflows
    pub offset_x: i32,
    pub offset_y: i32,
    pub grid_lines: bool,
}

fn normalized_dpr(dpr: f32) -> f32 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr.clamp(MIN_DPR, MAX_DPR)
    } else {
        1.0
    }
}

fn normalized_extent(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Cells of `cells_across` that fit into `extent` pixels
fn fit(extent: f32, cells_across: usize) -> u32 {
    (extent / cells_across.max(1) as f32).floor() as u32
}

/// floor((extent - used) / 2) in whole pixels
fn centered(extent: f32, used: i64) -> i32 {
    (extent.floor() as i64 - used).div_euclid(2) as i32
}

impl Layout {
    pub fn compute(
        grid: (usize, usize),
        surface: (f32, f32),
        device_pixel_ratio: f32,
        config: &LayoutConfig,
    ) -> Self {
        let (grid_width, grid_height) = grid;
        let surface_width = normalized_extent(surface.0);
        let surface_height = normalized_extent(surface.1);

        // Max wins over min, and no cell is ever narrower than a pixel
        let min_size = config.min_cell_size.max(1);
        let max_size = config.max_cell_size.max(1);
        let fitted = fit(surface_width, grid_width).min(fit(surface_height, grid_height));

        let cell_size = fitted.max(min_size).min(max_size);
        let grid_lines = fitted >= min_size && cell_size >= config.grid_line_threshold;

        let size = i64::from(cell_size);
        Self {
            grid_width,
            grid_height,
            surface_width,
            surface_height,
            device_pixel_ratio: normalized_dpr(device_pixel_ratio),
            cell_size,
            offset_x: centered(surface_width, size * grid_width as i64),
            offset_y: centered(surface_height, size * grid_height as i64),
            grid_lines,
        }
    }

    /// Size of the whole grid in logical pixels
    pub fn grid_pixel_size(&self) -> (f32, f32) {
        let size = self.cell_size as f32;
        (size * self.grid_width as f32, size * self.grid_height as f32)
    }

    /// Physical size of the backing store for a host that scales its
    /// drawing context by the pixel ratio
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.surface_width * self.device_pixel_ratio).round() as u32,
            (self.surface_height * self.device_pixel_ratio).round() as u32,
        )
    }

    /// Map a surface pixel to the cell under it, clamped into the grid so
    /// pointer events at or past the edge still land on a real cell
    pub fn surface_to_grid(&self, x: f32, y: f32) -> (usize, usize) {
        let axis = |pixel: f32, offset: i32, cells: usize| {
            let cell = ((pixel - offset as f32) / self.cell_size as f32).floor();
            let last = cells.saturating_sub(1);
            if cell.is_nan() || cell < 0.0 {
                0
            } else {
                (cell as usize).min(last)
            }
        };

        (
            axis(x, self.offset_x, self.grid_width),
            axis(y, self.offset_y, self.grid_height),
        )
    }

    /// Top-left surface pixel of a cell
    pub fn grid_to_surface(&self, x: usize, y: usize) -> (f32, f32) {
        let size = self.cell_size as f32;
        (
            self.offset_x as f32 + x as f32 * size,
            self.offset_y as f32 + y as f32 * size,
        )
    }

    /// Whether a surface pixel lies over the grid itself rather than the
    /// margin around it
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        let (grid_px_w, grid_px_h) = self.grid_pixel_size();
        let (left, top) = (self.offset_x as f32, self.offset_y as f32);
        (left..left + grid_px_w).contains(&x) && (top..top + grid_px_h).contains(&y)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        usize::try_from(x).is_ok_and(|x| x < self.grid_width)
            && usize::try_from(y).is_ok_and(|y| y < self.grid_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(grid: (usize, usize), surface: (f32, f32)) -> Layout {
        Layout::compute(grid, surface, 1.0, &LayoutConfig::default())
    }

    #[test]
    fn test_fits_and_centers() {
        let l = layout((80, 50), (1000.0, 700.0));

        // min(1000/80, 700/50) = min(12, 14)
        assert_eq!(l.cell_size, 12);
        assert_eq!((l.offset_x, l.offset_y), (20, 50));
        assert!(l.grid_lines);
    }

    #[test]
    fn test_caps_at_max_cell_size() {
        let l = layout((10, 10), (1920.0, 1080.0));

        assert_eq!(l.cell_size, 20);
        assert_eq!((l.offset_x, l.offset_y), (860, 440));
    }

    #[test]
    fn test_floor_clamps_and_hides_lines() {
        let l = layout((80, 50), (200.0, 100.0));

        assert_eq!(l.cell_size, 4);
        assert!(!l.grid_lines);
        // 320px of grid in a 200px surface hangs off both sides
        assert_eq!(l.offset_x, -60);
    }

    #[test]
    fn test_small_cells_have_no_lines() {
        let l = layout((80, 50), (400.0, 400.0));
        assert_eq!(l.cell_size, 5);
        assert!(!l.grid_lines);

        let l = layout((80, 50), (480.0, 400.0));
        assert_eq!(l.cell_size, 6);
        assert!(l.grid_lines);
    }

    #[test]
    fn test_degenerate_surface() {
        let l = Layout::compute((8, 8), (f32::NAN, -5.0), f32::INFINITY, &LayoutConfig::default());

        assert_eq!(l.cell_size, 4);
        assert_eq!(l.device_pixel_ratio, 1.0);
        assert_eq!((l.offset_x, l.offset_y), (-16, -16));
    }

    #[test]
    fn test_surface_to_grid_clamps() {
        let l = layout((80, 50), (1000.0, 700.0));

        assert_eq!(l.surface_to_grid(20.0, 50.0), (0, 0));
        assert_eq!(l.surface_to_grid(31.9, 61.9), (0, 0));
        assert_eq!(l.surface_to_grid(32.0, 62.0), (1, 1));
        assert_eq!(l.surface_to_grid(-500.0, -1.0), (0, 0));
        assert_eq!(l.surface_to_grid(5000.0, 5000.0), (79, 49));
        assert_eq!(l.surface_to_grid(f32::NAN, f32::INFINITY), (0, 49));
    }

    #[test]
    fn test_contains_point_excludes_margin() {
        let l = layout((80, 50), (1000.0, 700.0));

        assert!(l.contains_point(20.0, 50.0));
        assert!(l.contains_point(979.9, 649.9));
        assert!(!l.contains_point(19.9, 300.0));
        assert!(!l.contains_point(500.0, 650.0));
        assert!(!l.contains_point(500.0, 10.0));
        assert!(!l.contains_point(f32::NAN, 300.0));
    }

    #[test]
    fn test_inverted_bounds_still_respect_max() {
        let config = LayoutConfig {
            min_cell_size: 30,
            max_cell_size: 20,
            grid_line_threshold: 6,
        };
        let l = Layout::compute((10, 10), (1000.0, 1000.0), 1.0, &config);
        assert_eq!(l.cell_size, 20);

        let l = Layout::compute((10, 10), (50.0, 50.0), 1.0, &config);
        assert!(l.cell_size <= 20);
    }

    #[test]
    fn test_zero_min_never_yields_empty_cells() {
        let config = LayoutConfig {
            min_cell_size: 0,
            max_cell_size: 20,
            grid_line_threshold: 0,
        };
        let l = Layout::compute((10, 10), (5.0, 5.0), 1.0, &config);

        assert_eq!(l.cell_size, 1);
        assert!(!l.grid_lines);
        assert_eq!(l.offset_x, -3);
        assert_eq!(l.surface_to_grid(4.0, 4.0), (7, 7));
    }

    #[test]
    fn test_grid_to_surface_inverts_mapping() {
        let l = layout((80, 50), (1000.0, 700.0));
        let (px, py) = l.grid_to_surface(7, 3);

        assert_eq!((px, py), (104.0, 86.0));
        assert_eq!(l.surface_to_grid(px + 0.5, py + 0.5), (7, 3));
    }

    #[test]
    fn test_backing_size_follows_pixel_ratio() {
        let l = Layout::compute((80, 50), (1000.0, 700.0), 2.0, &LayoutConfig::default());

        assert_eq!(l.backing_size(), (2000, 1400));
        // Logical geometry does not change with density
        assert_eq!(l.cell_size, 12);

        let l = Layout::compute((80, 50), (1000.0, 700.0), 100.0, &LayoutConfig::default());
        assert_eq!(l.device_pixel_ratio, 8.0);
    }
}
