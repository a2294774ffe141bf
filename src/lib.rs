//! Snake on a wrap-around grid.
//!
//! The game rules (`grid`, `heading`, `snake`, `apple`, `game`) have no
//! window dependency; `input` and `render` bridge them to macroquad.

pub mod apple;
pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod heading;
pub mod input;
pub mod render;
pub mod snake;

pub use apple::{Apple, Effect};
pub use clock::TickClock;
pub use config::GameConfig;
pub use error::ConfigError;
pub use game::{Game, TickOutcome};
pub use grid::{Cell, Grid};
pub use heading::Heading;
pub use snake::Snake;
