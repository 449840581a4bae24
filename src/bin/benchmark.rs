//! Times `Grid::step` across grid sizes

use std::time::Instant;

use life_canvas::{Grid, LifeError};

const DENSITY: f64 = 0.3;
const SEED: u64 = 0x5eed;

fn benchmark_step(size: usize, iterations: u32) -> Result<f64, LifeError> {
    let mut grid = Grid::new(size, size)?;
    grid.randomize_seeded(DENSITY, SEED);

    let start = Instant::now();
    for _ in 0..iterations {
        grid.step();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<(), LifeError> {
    println!("=== Game of Life step() benchmark ===\n");

    let sizes = [50, 100, 200, 500, 1000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>16}", "Size", "ms/gen", "M cells/sec");
    println!("{:-<40}", "");

    for size in sizes {
        let ms = benchmark_step(size, iterations)?;
        let cells = (size * size) as f64;
        println!(
            "{:>10} {:>12.3} {:>16.1}",
            format!("{}x{}", size, size),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0
        );
    }

    Ok(())
}
