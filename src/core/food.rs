//! Food entity: a single cell, rejection-sampled to never land on the snake.

use rand::Rng;

use crate::core::snake::Snake;
use crate::types::{Cell, GridConfig};

#[derive(Debug, Clone)]
pub struct Food {
    position: Cell,
}

impl Food {
    /// Place food on a random free cell, avoiding the snake body.
    pub fn new(rng: &mut impl Rng, grid: &GridConfig, snake: &Snake) -> Self {
        Self {
            position: sample_free_cell(rng, grid, snake),
        }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Re-place the food in place, after a consumption or a round reset.
    pub fn respawn(&mut self, rng: &mut impl Rng, grid: &GridConfig, snake: &Snake) {
        self.position = sample_free_cell(rng, grid, snake);
    }

    #[cfg(test)]
    pub(crate) fn place_at(&mut self, cell: Cell) {
        self.position = cell;
    }
}

/// Rejection sampling: draw uniform cells until one is off the snake.
/// Expected O(1) draws at the occupancy fractions this game reaches.
fn sample_free_cell(rng: &mut impl Rng, grid: &GridConfig, snake: &Snake) -> Cell {
    loop {
        let candidate = Cell::new(
            rng.gen_range(0..grid.cell_count),
            rng.gen_range(0..grid.cell_count),
        );
        if !snake.occupies(candidate) {
            return candidate;
        }
    }
}
