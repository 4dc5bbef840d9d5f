//! Snake entity: an ordered body of grid cells plus a movement direction.
//!
//! The body is a deque with the head at the front; `advance` pushes the new
//! head and pops the tail unless growth is pending. Reversal filtering is
//! the orchestrator's job, not the snake's.

use std::collections::VecDeque;

use crate::types::{Cell, Direction};

const INITIAL_BODY: [Cell; 3] = [Cell::new(6, 9), Cell::new(5, 9), Cell::new(4, 9)];
const INITIAL_DIRECTION: Direction = Direction::Right;

#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    /// `None` is the idle state between a death and the next restart steer.
    direction: Option<Direction>,
    pending_growth: bool,
}

impl Snake {
    pub fn new() -> Self {
        Self {
            body: INITIAL_BODY.into(),
            direction: Some(INITIAL_DIRECTION),
            pending_growth: false,
        }
    }

    pub fn head(&self) -> Cell {
        *self.body.front().expect("snake body is never empty")
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn set_direction(&mut self, dir: Direction) {
        self.direction = Some(dir);
    }

    /// Linear membership test over the body (at most a few hundred cells).
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// True when the head cell reappears anywhere in the rest of the body.
    pub fn self_collided(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&segment| segment == head)
    }

    /// Mark the next `advance` as growing: the tail is kept for one tick.
    pub fn grow(&mut self) {
        self.pending_growth = true;
    }

    pub fn growth_pending(&self) -> bool {
        self.pending_growth
    }

    /// Advance one tick: prepend head + direction, then drop the tail unless
    /// growth is pending. Idle snakes (no direction) do not move.
    pub fn advance(&mut self) {
        let Some(dir) = self.direction else {
            return;
        };

        let new_head = self.head().step(dir);
        self.body.push_front(new_head);

        if self.pending_growth {
            self.pending_growth = false;
        } else {
            self.body.pop_back();
        }
    }

    /// Restore the fixed 3-cell starting body and go idle.
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.extend(INITIAL_BODY);
        self.direction = None;
        self.pending_growth = false;
    }

    #[cfg(test)]
    pub(crate) fn from_parts(cells: &[Cell], dir: Direction) -> Self {
        assert!(!cells.is_empty());
        Self {
            body: cells.iter().copied().collect(),
            direction: Some(dir),
            pending_growth: false,
        }
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}
