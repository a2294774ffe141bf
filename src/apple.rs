use std::collections::HashSet;

use rand::Rng;

use crate::grid::{Cell, Grid};

/// What happens to the snake when it eats an apple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    Grow,
    Shrink,
    Lethal,
}

impl Effect {
    /// Evaluation order used by the tick.
    pub const ALL: [Effect; 3] = [Effect::Grow, Effect::Shrink, Effect::Lethal];
}

#[derive(Debug, Clone, PartialEq)]
pub struct Apple {
    pub cell: Cell,
    effect: Effect,
}

impl Apple {
    pub fn new(cell: Cell, effect: Effect) -> Self {
        Self { cell, effect }
    }

    /// Places a fresh apple on a free cell.
    pub fn spawn<R: Rng + ?Sized>(
        effect: Effect,
        grid: &Grid,
        excluded: &HashSet<Cell>,
        rng: &mut R,
    ) -> Self {
        Self::new(free_cell(grid, excluded, rng), effect)
    }

    pub fn effect(&self) -> Effect {
        self.effect
    }

    /// Moves the apple to a cell chosen uniformly among those not in `excluded`.
    ///
    /// # Panics
    ///
    /// If `excluded` covers every cell of `grid`. That only happens when the
    /// grid is too small for the snake and apple layout.
    pub fn respawn<R: Rng + ?Sized>(&mut self, grid: &Grid, excluded: &HashSet<Cell>, rng: &mut R) {
        self.cell = free_cell(grid, excluded, rng);
    }
}

fn free_cell<R: Rng + ?Sized>(grid: &Grid, excluded: &HashSet<Cell>, rng: &mut R) -> Cell {
    let free: Vec<Cell> = grid.cells().filter(|c| !excluded.contains(c)).collect();
    assert!(
        !free.is_empty(),
        "no free cell left for an apple on a {}x{} grid",
        grid.width,
        grid.height
    );
    free[rng.gen_range(0..free.len())]
}
