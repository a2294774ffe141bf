use std::collections::VecDeque;

use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::heading::Heading;

// `positions[0]` is the head.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    grid: Grid,
    positions: VecDeque<Cell>,
    heading: Heading,
    pending: Option<Heading>,
    target_length: usize,
    last_vacated: Option<Cell>,
}

impl Snake {
    pub fn new(grid: Grid, heading: Heading) -> Self {
        Self {
            grid,
            positions: VecDeque::from([grid.center()]),
            heading,
            pending: None,
            target_length: 1,
            last_vacated: None,
        }
    }

    pub fn spawn<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Self {
        Self::new(grid, Heading::random(rng))
    }

    pub fn from_cells(grid: Grid, cells: impl IntoIterator<Item = Cell>, heading: Heading) -> Self {
        let positions: VecDeque<Cell> = cells.into_iter().collect();
        assert!(!positions.is_empty(), "a snake needs at least one cell");
        assert!(
            positions.iter().all(|c| grid.contains(*c)),
            "snake cells must lie on the grid"
        );
        Self {
            grid,
            target_length: positions.len(),
            positions,
            heading,
            pending: None,
            last_vacated: None,
        }
    }

    pub fn head(&self) -> Cell {
        self.positions[0]
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn pending_heading(&self) -> Option<Heading> {
        self.pending
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.positions.iter().copied()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.positions.contains(&cell)
    }

    pub fn last_vacated(&self) -> Option<Cell> {
        self.last_vacated
    }

    pub fn set_pending_heading(&mut self, turn: Heading) {
        if let Some(next) = self.heading.transition(turn) {
            self.pending = Some(next);
        }
    }

    pub fn advance(&mut self) -> Option<Cell> {
        if let Some(next) = self.pending.take() {
            self.heading = next;
        }

        let new_head = self.grid.step(self.head(), self.heading);
        self.positions.push_front(new_head);

        self.last_vacated = None;
        while self.positions.len() > self.target_length {
            self.last_vacated = self.positions.pop_back();
        }
        self.last_vacated
    }

    pub fn grow(&mut self) {
        self.target_length += 1;
        // Give back the tail dropped this tick so the body already has the new length.
        if let Some(tail) = self.last_vacated.take() {
            self.positions.push_back(tail);
        }
    }

    // At length one this kills the snake; returns `true` when it was reset.
    pub fn shrink<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.target_length <= 1 {
            self.reset(rng);
            return true;
        }

        self.target_length -= 1;
        while self.positions.len() > self.target_length {
            self.last_vacated = self.positions.pop_back();
        }
        false
    }

    pub fn check_self_collision(&self) -> bool {
        let head = self.head();
        self.positions.iter().skip(1).any(|c| *c == head)
    }

    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.positions.clear();
        self.positions.push_back(self.grid.center());
        self.heading = Heading::random(rng);
        self.pending = None;
        self.target_length = 1;
        self.last_vacated = None;
    }
}
