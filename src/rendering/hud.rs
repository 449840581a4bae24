use macroquad::prelude::*;

use crate::application::{GameState, RunState};

const PANEL_WIDTH: f32 = 560.0;
const PANEL_HEIGHT: f32 = 44.0;

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

fn status_line(state: &GameState) -> String {
    let status = match state.run_state {
        RunState::Idle => "Idle",
        RunState::Running => "Running",
        RunState::Paused => "Paused",
    };
    format!(
        "{} | Gen {} | Pop {} | {:.0} gen/s | step {:.2}ms",
        status,
        state.grid.generation(),
        format_number(state.grid.population()),
        state.updates_per_second,
        state.last_step_time_ms,
    )
}

/// Whether a window point sits under the status panel
pub fn status_covers(x: f32, y: f32) -> bool {
    (0.0..PANEL_WIDTH).contains(&x) && (0.0..PANEL_HEIGHT).contains(&y)
}

/// Status line and key help in the top-left corner of the window
pub fn draw_status(state: &GameState) {
    let lines = [
        (status_line(state), 16.0, WHITE),
        (
            "Space: Play  N: Step  C: Clear  R: Random  Up/Down: Speed  1-5: Patterns".to_owned(),
            13.0,
            GRAY,
        ),
    ];

    draw_rectangle(0.0, 0.0, PANEL_WIDTH, PANEL_HEIGHT, Color::from_rgba(0, 0, 0, 170));
    lines.iter().enumerate().for_each(|(i, (text, size, color))| {
        draw_text(text, 8.0, 18.0 + i as f32 * 18.0, *size, *color);
    });
}
