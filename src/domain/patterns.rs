use super::Grid;

/// A named template that can be stamped onto the grid.
/// Anchored at its top-left corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Build a pattern from rows of `#` (alive) and `.` (dead).
    /// The template keeps the full matrix size, dead margins included.
    pub fn from_rows(name: &'static str, description: &'static str, rows: &[&str]) -> Self {
        let cells = rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.chars()
                    .enumerate()
                    .filter(|&(_, c)| c == '#')
                    .map(move |(x, _)| (x, y))
            })
            .collect();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);

        Self { name, description, width, height: rows.len(), cells }
    }

    /// Stamp the live cells with the top-left corner at (x, y).
    /// Does not clear first; cells landing outside the grid are dropped.
    pub fn place_on(&self, grid: &mut Grid, x: i32, y: i32) {
        for &(dx, dy) in &self.cells {
            grid.set(x.saturating_add(dx as i32), y.saturating_add(dy as i32), true);
        }
    }

    /// Origin that puts the template in the middle of a grid
    pub fn centered_origin(&self, grid_width: usize, grid_height: usize) -> (i32, i32) {
        let x = (grid_width as i64 - self.width as i64) / 2;
        let y = (grid_height as i64 - self.height as i64) / 2;
        (x.max(0) as i32, y.max(0) as i32)
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::from_rows(
            "glider",
            "Moves diagonally (period 4)",
            &[
                ".#.",
                "..#",
                "###",
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::from_rows("blinker", "Oscillator (period 2)", &["###"])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::from_rows(
            "toad",
            "Oscillator (period 2)",
            &[
                ".###",
                "###.",
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::from_rows(
            "beacon",
            "Oscillator (period 2)",
            &[
                "##..",
                "##..",
                "..##",
                "..##",
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::from_rows("block", "Still life", &["##", "##"])
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![glider(), blinker(), toad(), beacon(), block()]
    }

    /// Look a preset up by name, ignoring case
    pub fn find(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }
}
