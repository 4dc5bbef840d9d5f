//! Scene drawing. Reads game state, owns nothing; all positioning goes
//! through `GridConfig` so grid coordinates stay pixel-free until here.

use macroquad::color::{Color, WHITE};
use macroquad::shapes::{draw_rectangle, draw_rectangle_lines};
use macroquad::text::draw_text;
use macroquad::texture::draw_texture;
use macroquad::window::clear_background;

use crate::assets::Assets;
use crate::core::Game;
use crate::types::WINDOW_TITLE;

// Nokia-era palette from the original art: light green lawn, dark segments.
const LAWN_GREEN: Color = Color::new(0.067, 0.8, 0.376, 1.0);
const DARK_GREEN: Color = Color::new(0.016, 0.2, 0.094, 1.0);

const BORDER_GAP: f32 = 5.0;
const BORDER_THICKNESS: f32 = 5.0;

pub fn draw_scene(game: &Game, assets: &Assets) {
    let grid = game.grid();

    clear_background(LAWN_GREEN);

    // Border hugs the playfield with a small gap on every side.
    let field_px = (grid.cell_size * grid.cell_count) as f32;
    draw_rectangle_lines(
        grid.offset as f32 - BORDER_GAP,
        grid.offset as f32 - BORDER_GAP,
        field_px + 2.0 * BORDER_GAP,
        field_px + 2.0 * BORDER_GAP,
        BORDER_THICKNESS,
        DARK_GREEN,
    );

    draw_text(WINDOW_TITLE, grid.offset as f32 - BORDER_GAP, 50.0, 40.0, DARK_GREEN);
    draw_text(
        &game.score().to_string(),
        grid.offset as f32 - BORDER_GAP,
        grid.offset as f32 + field_px + 40.0,
        40.0,
        DARK_GREEN,
    );

    let (food_x, food_y) = grid.cell_px(game.food().position());
    draw_texture(&assets.food, food_x, food_y, WHITE);

    for &segment in game.snake().body() {
        let (x, y) = grid.cell_px(segment);
        draw_rectangle(
            x,
            y,
            grid.cell_size as f32,
            grid.cell_size as f32,
            DARK_GREEN,
        );
    }
}
