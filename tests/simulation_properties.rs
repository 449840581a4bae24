//! Behavioural properties of the simulation engine.

use life_canvas::{Grid, LifeError, presets};

fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
    grid.iter_live().collect()
}

#[test]
fn empty_grid_stays_empty_and_counts_generations() {
    let mut grid = Grid::new(16, 16).unwrap();
    grid.step();

    assert_eq!(grid.population(), 0);
    assert_eq!(grid.generation(), 1);
}

#[test]
fn isolated_cells_die() {
    let mut grid = Grid::new(10, 10).unwrap();
    grid.set(5, 5, true);
    grid.step();
    assert_eq!(grid.population(), 0);

    // A pair: each has a single neighbor
    grid.set(2, 2, true);
    grid.set(3, 2, true);
    grid.step();
    assert_eq!(grid.population(), 0);
}

#[test]
fn block_is_still_life() {
    let mut grid = Grid::new(10, 10).unwrap();
    presets::block().place_on(&mut grid, 4, 4);
    let before = grid.snapshot();

    grid.step();

    assert_eq!(grid.snapshot(), before);
    assert_eq!(grid.population(), 4);
}

#[test]
fn block_in_corner_is_still_life() {
    let mut grid = Grid::new(5, 5).unwrap();
    presets::block().place_on(&mut grid, 0, 0);
    let before = grid.snapshot();

    grid.step();
    assert_eq!(grid.snapshot(), before);
}

#[test]
fn blinker_has_period_two() {
    let mut grid = Grid::new(9, 9).unwrap();
    grid.load_pattern("blinker", 3, 4).unwrap();
    let start = grid.snapshot();

    grid.step();
    assert_eq!(live_cells(&grid), vec![(4, 3), (4, 4), (4, 5)]);

    grid.step();
    assert_eq!(grid.snapshot(), start);
    assert_eq!(grid.generation(), 2);
}

#[test]
fn glider_translates_after_four_generations() {
    let mut grid = Grid::new(20, 20).unwrap();
    grid.load_pattern("glider", 2, 2).unwrap();
    let start: Vec<_> = live_cells(&grid).into_iter().map(|(x, y)| (x + 1, y + 1)).collect();

    for _ in 0..4 {
        grid.step();
    }

    assert_eq!(live_cells(&grid), start);
}

#[test]
fn clear_resets_everything() {
    let mut grid = Grid::new(30, 30).unwrap();
    grid.randomize_seeded(0.5, 3);
    grid.step();
    grid.step();

    grid.clear();

    assert_eq!(grid.population(), 0);
    assert_eq!(grid.generation(), 0);
}

#[test]
fn randomize_density_is_statistically_close() {
    let mut grid = Grid::new(80, 50).unwrap();

    for _ in 0..10 {
        grid.randomize(0.3);
        let population = grid.population();
        assert!(
            (900..=1500).contains(&population),
            "population {population} far from 1200"
        );
        assert_eq!(grid.generation(), 0);
    }
}

#[test]
fn load_pattern_places_exact_glider() {
    let mut grid = Grid::new(80, 50).unwrap();
    grid.set(0, 0, true);
    grid.set(70, 40, true);

    grid.load_pattern("glider", 10, 10).unwrap();

    assert_eq!(
        live_cells(&grid),
        vec![(11, 10), (12, 11), (10, 12), (11, 12), (12, 12)]
    );
    assert_eq!(grid.generation(), 0);
}

#[test]
fn unknown_pattern_reports_and_preserves_state() {
    let mut grid = Grid::new(10, 10).unwrap();
    grid.set(1, 1, true);
    grid.step();
    let before = grid.snapshot();

    assert_eq!(
        grid.load_pattern("gosper", 0, 0),
        Err(LifeError::PatternNotFound("gosper".into()))
    );
    assert_eq!(grid.snapshot(), before);
    assert_eq!(grid.generation(), 1);
}

#[test]
fn snapshot_is_independent_copy() {
    let mut grid = Grid::new(8, 8).unwrap();
    grid.load_pattern("blinker", 2, 3).unwrap();
    let mut snapshot = grid.snapshot();
    let original = snapshot.clone();

    grid.step();
    grid.set(0, 0, true);
    assert_eq!(snapshot, original);

    snapshot[0] = true;
    snapshot[1] = true;
    assert!(!grid.get(1, 0));
}

#[test]
fn population_never_exceeds_area() {
    let mut grid = Grid::new(12, 7).unwrap();
    grid.randomize_seeded(1.0, 1);
    assert_eq!(grid.population(), 84);

    grid.step();
    assert!(grid.population() <= 84);
}
