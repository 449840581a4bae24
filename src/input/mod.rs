use macroquad::prelude::*;
use tracing::warn;

use crate::application::GameState;
use crate::domain::presets;
use crate::rendering::{self, Renderer};

/// Number keys that load presets, in `presets::all_patterns` order
const PATTERN_KEYS: [KeyCode; 5] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
];

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 6] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::N, GameState::step),
        (KeyCode::C, GameState::clear),
        (KeyCode::R, GameState::randomize),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    let mut state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    let patterns = presets::all_patterns();
    for (key, pattern) in PATTERN_KEYS.iter().zip(&patterns) {
        if is_key_pressed(*key) {
            if let Err(err) = state.load_pattern(pattern.name) {
                warn!(%err, "failed to load pattern");
            }
        }
    }

    state
}

/// Cell under a window point, or `None` over the margin or the status panel
pub fn cell_at(renderer: &Renderer, x: f32, y: f32) -> Option<(i32, i32)> {
    if rendering::status_covers(x, y) || !renderer.layout().contains_point(x, y) {
        return None;
    }

    let (col, row) = renderer.surface_to_grid(x, y);
    Some((col as i32, row as i32))
}

/// Cell currently under the pointer
pub fn hovered_cell(renderer: &Renderer) -> Option<(i32, i32)> {
    let (mx, my) = mouse_position();
    cell_at(renderer, mx, my)
}

/// Left click toggles the cell under the pointer while the simulation is
/// not running
pub fn handle_mouse_toggle(state: &mut GameState, renderer: &Renderer) {
    if state.is_running() || !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }

    // Clicks off the grid are ignored
    let Some((x, y)) = hovered_cell(renderer) else {
        return;
    };
    state.grid.toggle(x, y);
}
