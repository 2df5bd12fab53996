use std::collections::HashSet;

use crate::{Coords, GridInt};

/// What a cell renders as. Precedence on overlap: wall > food > snake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Wall,
    Food,
    SnakeBody,
    SnakeHead,
}

/// The fixed-size grid. Walls and food are independent per-cell sets; snake
/// occupancy lives in `Snake`. A cell is empty iff none of the three apply.
pub struct Board {
    rows: GridInt,
    cols: GridInt,
    walls: HashSet<Coords>,
    food: HashSet<Coords>,
}

impl Board {
    pub fn new(rows: GridInt, cols: GridInt) -> Self {
        Board {
            rows,
            cols,
            walls: HashSet::new(),
            food: HashSet::new(),
        }
    }

    pub fn rows(&self) -> GridInt {
        self.rows
    }

    pub fn cols(&self) -> GridInt {
        self.cols
    }

    pub fn clear(&mut self) {
        self.walls.clear();
        self.food.clear();
    }

    pub fn is_wall(&self, pos: Coords) -> bool {
        self.walls.contains(&pos)
    }

    pub fn set_wall(&mut self, pos: Coords) {
        self.walls.insert(pos);
    }

    pub fn is_food(&self, pos: Coords) -> bool {
        self.food.contains(&pos)
    }

    pub fn place_food(&mut self, pos: Coords) {
        debug_assert!(!self.is_wall(pos), "food must never land on a wall");
        self.food.insert(pos);
    }

    pub fn remove_food(&mut self, pos: Coords) {
        self.food.remove(&pos);
    }

    #[cfg(test)]
    pub(crate) fn food_cells(&self) -> Vec<Coords> {
        self.food.iter().copied().collect()
    }
}
