use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::{Conf, get_time, next_frame};
use tracing::{error, info};

use snake_bend::input::{Command, poll_commands};
use snake_bend::{Game, GameConfig, TickClock, TickOutcome, render};

const WINDOW_TITLE: &str = "Snake";

#[derive(Parser)]
#[command(name = "snake_bend")]
#[command(version, about = "Snake on a wrap-around grid")]
struct Cli {
    /// JSON file with game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<u32>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<u32>,

    /// Starting speed in ticks per second
    #[arg(long)]
    speed: Option<u32>,
}

impl Cli {
    fn resolve(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path).context("loading game settings")?,
            None => GameConfig::default(),
        };
        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(speed) = self.speed {
            config.initial_speed = speed;
        }
        config.validate().context("checking game settings")?;
        Ok(config)
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

// The window size depends on the config, and `window_conf` runs before `main`.
fn launch_config() -> &'static GameConfig {
    static CONFIG: OnceLock<GameConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        init_tracing();
        match Cli::parse().resolve() {
            Ok(config) => config,
            Err(err) => {
                error!("{err:#}");
                std::process::exit(2);
            }
        }
    })
}

fn window_conf() -> Conf {
    let (width, height) = launch_config().grid().pixel_size();
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = launch_config();
    let mut game = Game::new(config);
    let mut clock = TickClock::new(get_time());
    info!(
        width = config.grid_width,
        height = config.grid_height,
        speed = game.speed(),
        "starting game"
    );

    'frames: loop {
        for command in poll_commands() {
            match command {
                Command::Turn(heading) => game.set_pending_heading(heading),
                Command::SpeedUp => game.speed_up(),
                Command::SlowDown => game.slow_down(),
                Command::Quit => break 'frames,
            }
        }

        if clock.due(get_time(), game.speed()) {
            if let TickOutcome::Crashed | TickOutcome::Ate { reset: true, .. } = game.tick() {
                info!(status = %game.status(), "game reset");
            }
        }

        render::draw(&game);
        next_frame().await;
    }

    info!(record = game.record(), "quitting");
}
