use std::path::PathBuf;

use clap::Parser;
use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use life_canvas::{
    GameState, Renderer, Settings, Theme, input,
    rendering::{self, MacroquadSurface},
};

#[derive(Parser, Debug)]
#[command(version, about = "Conway's Game of Life")]
struct Cli {
    /// YAML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<usize>,

    #[arg(long)]
    height: Option<usize>,

    /// Seed for reproducible random fills
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn settings(&self) -> life_canvas::Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };

        settings.grid.width = self.width.unwrap_or(settings.grid.width);
        settings.grid.height = self.height.unwrap_or(settings.grid.height);
        settings.grid.seed = self.seed.or(settings.grid.seed);
        settings.validate()?;
        Ok(settings)
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1000,
        window_height: 700,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = match Cli::parse().settings() {
        Ok(settings) => settings,
        Err(err) => {
            error!(%err, "invalid settings");
            return;
        }
    };

    let mut state = match GameState::new(&settings.grid, settings.speed) {
        Ok(state) => state.randomize(),
        Err(err) => {
            error!(%err, "cannot create grid");
            return;
        }
    };

    let mut surface = MacroquadSurface;
    let theme = Theme::from(&settings.theme);
    let mut renderer = match Renderer::new(&surface, &state.grid, settings.layout, theme) {
        Ok(renderer) => renderer,
        Err(err) => {
            error!(%err, "cannot start renderer");
            return;
        }
    };
    info!(
        width = settings.grid.width,
        height = settings.grid.height,
        cell_size = renderer.layout().cell_size,
        "started"
    );

    loop {
        renderer.sync(&surface, state.grid.dimensions());

        state = input::process_keyboard_input(state);
        input::handle_mouse_toggle(&mut state, &renderer);
        state.tick(get_frame_time());

        renderer.render_frame(&state.grid, &mut surface);
        if let Some((hx, hy)) = input::hovered_cell(&renderer) {
            renderer.highlight_cell(&mut surface, hx, hy, theme.highlight);
        }
        rendering::draw_status(&state);

        next_frame().await;
    }
}
