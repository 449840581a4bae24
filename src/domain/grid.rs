use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::{Cell, presets};
use crate::error::{LifeError, Result};

/// Grid owns the cellular automaton state: a fixed `width x height` field
/// with dead borders, plus a working buffer for the next generation.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    generation: u64,
    cells: Vec<Cell>,
    next: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead. Both sides must be
    /// addressable by `i32` coordinates.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let addressable = |side: usize| i32::try_from(side).is_ok();
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0 && addressable(width) && addressable(height))
            .ok_or(LifeError::InvalidDimensions { width, height })?;

        Ok(Self {
            width,
            height,
            generation: 0,
            cells: vec![Cell::Dead; len],
            next: vec![Cell::Dead; len],
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Row-major index, `None` outside the field
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Cell state at (x, y); anything outside the grid reads as dead
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|idx| self.cells[idx].is_alive())
    }

    /// Set cell state at (x, y); writes outside the grid are dropped
    pub fn set(&mut self, x: i32, y: i32, alive: bool) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = Cell::from(alive);
        }
    }

    pub fn toggle(&mut self, x: i32, y: i32) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = self.cells[idx].toggle();
        }
    }

    /// Count live cells in the Moore neighborhood. Neighbors past the edge
    /// are dead: the field does not wrap.
    pub fn count_live_neighbors(&self, x: i32, y: i32) -> u8 {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter(|&(dx, dy)| self.get(x.saturating_add(dx), y.saturating_add(dy)))
            .count() as u8
    }

    /// Advance one generation.
    ///
    /// Successors are computed from `cells` into `next`, then the two buffers
    /// trade places. A reader never observes a half-written generation.
    pub fn step(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                let neighbors = self.count_live_neighbors(x as i32, y as i32);
                self.next[idx] = self.cells[idx].evolve(neighbors);
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next);
        self.generation += 1;
        debug!(generation = self.generation, "advanced grid");
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
        self.generation = 0;
        info!("cleared grid");
    }

    /// Fill each cell independently with probability `density`, using the
    /// thread-local generator
    pub fn randomize(&mut self, density: f64) {
        self.randomize_with(density, &mut rand::rng());
    }

    /// Same as [`Grid::randomize`] but reproducible for a given seed
    pub fn randomize_seeded(&mut self, density: f64, seed: u64) {
        self.randomize_with(density, &mut StdRng::seed_from_u64(seed));
    }

    pub fn randomize_with<R: Rng>(&mut self, density: f64, rng: &mut R) {
        let density = if density.is_finite() {
            density.clamp(0.0, 1.0)
        } else {
            0.0
        };

        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
        self.generation = 0;
        info!(density, population = self.population(), "randomized grid");
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Independent copy of the current field, row-major
    pub fn snapshot(&self) -> Vec<bool> {
        self.cells.iter().map(|&cell| cell.into()).collect()
    }

    /// Clear the grid, then stamp the named preset with its top-left corner
    /// at (x, y). An unknown name leaves the grid untouched.
    pub fn load_pattern(&mut self, name: &str, x: i32, y: i32) -> Result<()> {
        let Some(pattern) = presets::find(name) else {
            warn!(name, "unknown pattern");
            return Err(LifeError::PatternNotFound(name.to_owned()));
        };

        self.clear();
        pattern.place_on(self, x, y);
        info!(pattern = pattern.name, x, y, "loaded pattern");
        Ok(())
    }

    /// Iterate over the coordinates of live cells in row-major order
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(idx, _)| (idx % self.width, idx / self.width))
    }
}
