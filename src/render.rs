use macroquad::prelude::*;

use crate::apple::Effect;
use crate::game::Game;
use crate::grid::{Cell, Grid};

const BOARD_BACKGROUND: Color = Color::new(0.0, 0.0, 0.0, 1.0);
const BORDER: Color = Color::new(0.365, 0.847, 0.894, 1.0); // (93, 216, 228)
const SNAKE: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const GROW_APPLE: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const SHRINK_APPLE: Color = Color::new(0.6, 0.4, 0.1, 1.0);
const LETHAL_APPLE: Color = Color::new(0.6, 0.0, 0.8, 1.0);
const STATUS_TEXT: Color = Color::new(1.0, 1.0, 1.0, 0.85);

pub fn apple_color(effect: Effect) -> Color {
    match effect {
        Effect::Grow => GROW_APPLE,
        Effect::Shrink => SHRINK_APPLE,
        Effect::Lethal => LETHAL_APPLE,
    }
}

fn draw_cell(grid: &Grid, cell: Cell, color: Color) {
    let (x, y) = grid.pixel_origin(cell);
    let size = grid.cell_size;
    draw_rectangle(x, y, size, size, color);
    draw_rectangle_lines(x, y, size, size, 1.0, BORDER);
}

/// Full redraw of the board and the status line.
pub fn draw(game: &Game) {
    let grid = game.grid();
    clear_background(BOARD_BACKGROUND);

    for apple in &game.apples {
        draw_cell(grid, apple.cell, apple_color(apple.effect()));
    }
    for cell in game.snake.cells() {
        draw_cell(grid, cell, SNAKE);
    }

    draw_text(&game.status(), 6.0, 16.0, 18.0, STATUS_TEXT);
}
