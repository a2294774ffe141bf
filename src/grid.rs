use crate::heading::Heading;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub cell_size: f32,
}

impl Grid {
    pub const fn new(width: i32, height: i32, cell_size: f32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn capacity(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    // Leaving an edge re-enters on the opposite one.
    pub fn step(&self, cell: Cell, heading: Heading) -> Cell {
        let (dx, dy) = heading.delta();
        Cell::new(
            (cell.x + dx).rem_euclid(self.width),
            (cell.y + dy).rem_euclid(self.height),
        )
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }

    pub fn pixel_origin(&self, cell: Cell) -> (f32, f32) {
        (
            cell.x as f32 * self.cell_size,
            cell.y as f32 * self.cell_size,
        )
    }

    pub fn pixel_size(&self) -> (f32, f32) {
        (
            self.width as f32 * self.cell_size,
            self.height as f32 * self.cell_size,
        )
    }
}
