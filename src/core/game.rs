//! Game orchestrator: owns the snake and the food, advances one tick at a
//! time, and runs the three collision checks in order (food, edge, self).
//!
//! Two states, modeled by the running flag: a running round, and game over
//! awaiting a restart steer. Collision checks happen at tick cadence only;
//! the presentation layer gates `update` behind the tick gate.

use arrayvec::ArrayVec;
use rand::Rng;

use crate::core::{Food, Snake};
use crate::types::{Direction, GameEvent, GridConfig};

/// At most two direction changes may be buffered between ticks.
const MAX_QUEUED_TURNS: usize = 2;

#[derive(Debug, Clone)]
pub struct Game {
    grid: GridConfig,
    snake: Snake,
    food: Food,
    queued_turns: ArrayVec<Direction, MAX_QUEUED_TURNS>,
    running: bool,
    score: u32,
    /// Last eat/crash event, consumed by the presentation layer.
    last_event: Option<GameEvent>,
}

impl Game {
    pub fn new(grid: GridConfig, rng: &mut impl Rng) -> Self {
        let snake = Snake::new();
        let food = Food::new(rng, &grid, &snake);
        Self {
            grid,
            snake,
            food,
            queued_turns: ArrayVec::new(),
            running: true,
            score: 0,
            last_event: None,
        }
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn running(&self) -> bool {
        self.running
    }

    /// Take the pending event, leaving none. The presentation layer calls
    /// this once per frame to play sounds and log.
    pub fn take_event(&mut self) -> Option<GameEvent> {
        self.last_event.take()
    }

    /// Handle a directional key press.
    ///
    /// While running, the turn is queued and applied at the next tick;
    /// 180-degree reversals of the last effective direction are dropped, as
    /// are presses beyond the queue capacity. While game over, the press
    /// restarts the round instead: the reset snake is idle, so any of the
    /// four directions is a legal opener.
    pub fn steer(&mut self, dir: Direction) {
        if !self.running {
            self.running = true;
            self.snake.set_direction(dir);
            return;
        }

        let last_effective = self
            .queued_turns
            .last()
            .copied()
            .or_else(|| self.snake.direction());

        if let Some(current) = last_effective {
            if dir == current || dir.is_opposite(current) {
                return;
            }
        }

        let _ = self.queued_turns.try_push(dir);
    }

    /// Advance one game tick. No-op while game over.
    pub fn update(&mut self, rng: &mut impl Rng) {
        if !self.running {
            return;
        }

        self.apply_queued_turn();
        self.snake.advance();
        self.check_food_collision(rng);
        self.check_edge_collision(rng);
        self.check_self_collision(rng);
    }

    fn apply_queued_turn(&mut self) {
        if self.queued_turns.is_empty() {
            return;
        }
        let next = self.queued_turns.remove(0);

        // Filtered again against the direction actually in effect; the
        // queue-time check cannot see restarts that happened in between.
        match self.snake.direction() {
            Some(current) if next.is_opposite(current) => {}
            _ => self.snake.set_direction(next),
        }
    }

    fn check_food_collision(&mut self, rng: &mut impl Rng) {
        if self.snake.head() == self.food.position() {
            // Resample against the post-advance body so the new food cannot
            // land under the segment that just grew.
            self.food.respawn(rng, &self.grid, &self.snake);
            self.snake.grow();
            self.score += 1;
            self.last_event = Some(GameEvent::Ate);
        }
    }

    fn check_edge_collision(&mut self, rng: &mut impl Rng) {
        if !self.grid.in_bounds(self.snake.head()) {
            self.end_round(rng);
        }
    }

    fn check_self_collision(&mut self, rng: &mut impl Rng) {
        if self.running && self.snake.self_collided() {
            self.end_round(rng);
        }
    }

    /// Fatal to the round, not to the process: freeze, reset the board, and
    /// leave the score at zero until the next restart steer.
    fn end_round(&mut self, rng: &mut impl Rng) {
        let final_score = self.score;
        self.running = false;
        self.snake.reset();
        self.score = 0;
        self.queued_turns.clear();
        self.food.respawn(rng, &self.grid, &self.snake);
        self.last_event = Some(GameEvent::Crashed { final_score });
    }

    #[cfg(test)]
    pub(crate) fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }

    #[cfg(test)]
    pub(crate) fn food_mut(&mut self) -> &mut Food {
        &mut self.food
    }
}
