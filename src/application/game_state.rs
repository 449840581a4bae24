use std::time::Instant;

use tracing::{info, warn};

use crate::config::{GridConfig, SpeedConfig};
use crate::domain::{Grid, presets};
use crate::error::{LifeError, Result};

/// Where the simulation loop stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    /// Freshly built, cleared, randomized or loaded; nothing has run yet
    #[default]
    Idle,
    Running,
    Paused,
}

/// GameState drives the simulation on behalf of the shell.
/// Transitions take and return the state so input handlers can fold over them.
pub struct GameState {
    pub grid: Grid,
    pub run_state: RunState,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_step_time_ms: f32,
    density: f64,
    seed: Option<u64>,
    speed: SpeedConfig,
}

impl GameState {
    /// Create new game state with given grid dimensions
    pub fn new(grid: &GridConfig, speed: SpeedConfig) -> Result<Self> {
        speed.validate()?;

        Ok(Self {
            grid: Grid::new(grid.width, grid.height)?,
            run_state: RunState::Idle,
            update_timer: 0.0,
            updates_per_second: speed.updates_per_second.clamp(speed.min, speed.max),
            last_step_time_ms: 0.0,
            density: grid.density,
            seed: grid.seed,
            speed,
        })
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    fn transition(&mut self, to: RunState) {
        if self.run_state != to {
            info!(from = ?self.run_state, to = ?to, "run state changed");
            self.run_state = to;
        }
        self.update_timer = 0.0;
    }

    pub fn play(mut self) -> Self {
        self.transition(RunState::Running);
        self
    }

    pub fn pause(mut self) -> Self {
        if self.is_running() {
            self.transition(RunState::Paused);
        }
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(self) -> Self {
        if self.is_running() { self.pause() } else { self.play() }
    }

    /// Advance exactly one generation and stay paused
    pub fn step(mut self) -> Self {
        self.transition(RunState::Paused);
        self.advance();
        self
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        self.grid.clear();
        self.transition(RunState::Idle);
        self
    }

    /// Randomize grid and reset generation counter. A configured seed makes
    /// every randomize produce the same field.
    pub fn randomize(mut self) -> Self {
        match self.seed {
            Some(seed) => self.grid.randomize_seeded(self.density, seed),
            None => self.grid.randomize(self.density),
        }
        self.transition(RunState::Idle);
        self
    }

    /// Load a preset in the middle of the grid
    pub fn load_pattern(&mut self, name: &str) -> Result<()> {
        let Some(pattern) = presets::find(name) else {
            warn!(name, "unknown pattern");
            return Err(LifeError::PatternNotFound(name.to_owned()));
        };
        let (width, height) = self.grid.dimensions();
        let (x, y) = pattern.centered_origin(width, height);

        self.grid.clear();
        pattern.place_on(&mut self.grid, x, y);
        info!(pattern = pattern.name, x, y, "loaded pattern");
        self.transition(RunState::Idle);
        Ok(())
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        if !delta.is_finite() {
            return self;
        }
        self.updates_per_second = (self.updates_per_second + delta).clamp(self.speed.min, self.speed.max);
        self
    }

    fn advance(&mut self) {
        let start = Instant::now();
        self.grid.step();
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
    }

    /// Feed elapsed seconds; advances at most one generation per call once
    /// the update interval has passed. Returns whether it advanced.
    pub fn tick(&mut self, delta_time: f32) -> bool {
        if !self.is_running() {
            return false;
        }

        self.update_timer += delta_time.max(0.0);
        if self.update_timer < 1.0 / self.updates_per_second {
            return false;
        }

        self.advance();
        self.update_timer = 0.0;
        true
    }
}
