use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::apple::{Apple, Effect};
use crate::config::GameConfig;
use crate::grid::{Cell, Grid};
use crate::heading::Heading;
use crate::snake::Snake;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    // The head landed on an apple; `reset` tells whether the snake died from it
    Ate { effect: Effect, reset: bool },
    Crashed,
}

pub struct Game {
    grid: Grid,
    pub snake: Snake,
    // One apple per effect, in evaluation order
    pub apples: Vec<Apple>,
    speed: u32,
    min_speed: u32,
    max_speed: u32,
    speed_step: u32,
    record: usize,
    rng: StdRng,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: &GameConfig, mut rng: StdRng) -> Self {
        let grid = config.grid();
        let snake = Snake::spawn(grid, &mut rng);

        let mut occupied: HashSet<Cell> = snake.cells().collect();
        let mut apples = Vec::with_capacity(Effect::ALL.len());
        for effect in Effect::ALL {
            let apple = Apple::spawn(effect, &grid, &occupied, &mut rng);
            occupied.insert(apple.cell);
            apples.push(apple);
        }

        Self {
            grid,
            snake,
            apples,
            speed: config.initial_speed,
            min_speed: config.min_speed,
            max_speed: config.max_speed,
            speed_step: config.speed_step,
            record: 1,
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn record(&self) -> usize {
        self.record
    }

    pub fn set_pending_heading(&mut self, turn: Heading) {
        self.snake.set_pending_heading(turn);
    }

    pub fn speed_up(&mut self) {
        self.speed = (self.speed + self.speed_step).min(self.max_speed);
        debug!(speed = self.speed, "speed up");
    }

    pub fn slow_down(&mut self) {
        self.speed = self.speed.saturating_sub(self.speed_step).max(self.min_speed);
        debug!(speed = self.speed, "slow down");
    }

    pub fn status(&self) -> String {
        format!(
            "Snake | Speed: {} | Length: {} | Record: {}",
            self.speed,
            self.snake.len(),
            self.record
        )
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.snake.advance();
        let head = self.snake.head();

        if let Some(index) = self.apples.iter().position(|a| a.cell == head) {
            let effect = self.apples[index].effect();
            let reset = self.apply(effect);
            self.respawn_apple(index);
            return TickOutcome::Ate { effect, reset };
        }

        if self.snake.check_self_collision() {
            info!(length = self.snake.len(), "snake ran into itself");
            self.snake.reset(&mut self.rng);
            return TickOutcome::Crashed;
        }

        TickOutcome::Moved
    }

    fn apply(&mut self, effect: Effect) -> bool {
        debug!(?effect, length = self.snake.len(), "apple eaten");
        match effect {
            Effect::Grow => {
                self.snake.grow();
                let length = self.snake.target_length();
                if length > self.record {
                    self.record = length;
                    info!(record = self.record, "new record");
                }
                // Every free cell is taken, so the eaten apple has nowhere to go.
                if length + self.apples.len() > self.grid.capacity() {
                    info!(length, "board full");
                    self.snake.reset(&mut self.rng);
                    return true;
                }
                false
            }
            Effect::Shrink => {
                let reset = self.snake.shrink(&mut self.rng);
                if reset {
                    info!("shrunk below one cell");
                }
                reset
            }
            Effect::Lethal => {
                info!(length = self.snake.len(), "lethal apple");
                self.snake.reset(&mut self.rng);
                true
            }
        }
    }

    fn respawn_apple(&mut self, index: usize) {
        let mut excluded: HashSet<Cell> = self.snake.cells().collect();
        excluded.extend(
            self.apples
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, a)| a.cell),
        );
        self.apples[index].respawn(&self.grid, &excluded, &mut self.rng);
    }
}
