//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Grid geometry constants (pixels / cells)
pub const CELL_SIZE: i32 = 30;
pub const CELL_COUNT: i32 = 25;
pub const GRID_OFFSET: i32 = 75;

/// Seconds between game ticks. Rendering runs faster; the tick gate
/// decides when game state may advance.
pub const TICK_INTERVAL_SECS: f64 = 0.2;

pub const WINDOW_TITLE: &str = "Retro Snake";

/// One grid-aligned unit of space, addressed by (column, row).
/// Row 0 is the top of the grid; rows grow downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one unit step away in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Movement directions (unit vectors on the grid)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit-vector (dx, dy) for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True when `other` is the 180-degree reversal of `self`.
    pub fn is_opposite(self, other: Self) -> bool {
        self.opposite() == other
    }
}

/// Events published by the game core, consumed once by the presentation
/// layer (sound playback, logging).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The snake's head landed on the food this tick.
    Ate,
    /// The round ended on a wall or self collision. Carries the score the
    /// round ended with, since the core resets its own counter immediately.
    Crashed { final_score: u32 },
}

/// Grid geometry passed explicitly to constructors and the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Edge length of one cell, in pixels.
    pub cell_size: i32,
    /// Number of cells per axis (the grid is square).
    pub cell_count: i32,
    /// Pixel margin between the window edge and the grid.
    pub offset: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            cell_count: CELL_COUNT,
            offset: GRID_OFFSET,
        }
    }
}

impl GridConfig {
    /// Window edge length in pixels: the grid plus the margin on both sides.
    pub fn canvas_px(&self) -> i32 {
        2 * self.offset + self.cell_size * self.cell_count
    }

    /// Whether `cell` lies inside the playfield.
    ///
    /// Movement is unit-step, so a head leaving the grid always lands
    /// exactly on column/row -1 or `cell_count`; it can never skip past.
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.cell_count && cell.y >= 0 && cell.y < self.cell_count
    }

    /// Top-left pixel corner of `cell`.
    pub fn cell_px(&self, cell: Cell) -> (f32, f32) {
        (
            (self.offset + cell.x * self.cell_size) as f32,
            (self.offset + cell.y * self.cell_size) as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_deltas_are_unit_vectors() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1, "{:?} is not a unit step", dir);
        }
    }

    #[test]
    fn test_direction_opposites() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Right.is_opposite(Direction::Right));
    }

    #[test]
    fn test_cell_step() {
        let cell = Cell::new(6, 9);
        assert_eq!(cell.step(Direction::Right), Cell::new(7, 9));
        assert_eq!(cell.step(Direction::Up), Cell::new(6, 8));
    }

    #[test]
    fn test_default_grid_is_900px_canvas() {
        let grid = GridConfig::default();
        assert_eq!(grid.canvas_px(), 900);
    }

    #[test]
    fn test_in_bounds_rejects_sentinel_rows_and_columns() {
        let grid = GridConfig::default();

        assert!(grid.in_bounds(Cell::new(0, 0)));
        assert!(grid.in_bounds(Cell::new(24, 24)));

        // The only out-of-grid coordinates reachable by unit steps.
        assert!(!grid.in_bounds(Cell::new(-1, 9)));
        assert!(!grid.in_bounds(Cell::new(25, 9)));
        assert!(!grid.in_bounds(Cell::new(9, -1)));
        assert!(!grid.in_bounds(Cell::new(9, 25)));
    }

    #[test]
    fn test_cell_px_applies_offset_and_cell_size() {
        let grid = GridConfig::default();
        assert_eq!(grid.cell_px(Cell::new(0, 0)), (75.0, 75.0));
        assert_eq!(grid.cell_px(Cell::new(2, 1)), (135.0, 105.0));
    }
}
