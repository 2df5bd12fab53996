use crate::{Coords, GridInt};
use Direction::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (row, col) delta of one step.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
        }
    }

    pub fn head_char(self) -> char {
        match self {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

/// Ordered body: index 0 is the tail, the last index is the head.
pub struct Snake {
    body: Vec<Coords>,
    direction: Direction,
    max_len: usize,
}

impl Snake {
    /// Horizontal snake moving right: tail at `tail`, growing rightwards for
    /// `len` cells.
    pub fn new_horizontal(tail: Coords, len: usize, max_len: usize) -> Self {
        let body = (0..len)
            .map(|i| (tail.0, tail.1 + i as GridInt))
            .collect();
        Snake {
            body,
            direction: Right,
            max_len,
        }
    }

    /// Placeholder before the first game start; never stepped, because the
    /// game stays NotStarted until the board is populated.
    pub fn empty(max_len: usize) -> Self {
        Snake {
            body: Vec::new(),
            direction: Right,
            max_len,
        }
    }

    pub fn body(&self) -> &[Coords] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn head(&self) -> Coords {
        *self.body.last().expect("snake body is never empty once placed")
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cell the head moves into on the next step, in signed coordinates so
    /// the caller can bounds-check it.
    pub fn next_head(&self) -> (i32, i32) {
        let (row, col) = self.head();
        let (dr, dc) = self.direction.offset();
        (row as i32 + dr, col as i32 + dc)
    }

    /// Ignores a change that would steer the head straight into the second
    /// segment (instant reversal). A single-segment snake may turn anywhere.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.body.len() > 1 {
            let (row, col) = self.head();
            let (dr, dc) = direction.offset();
            let neck = self.body[self.body.len() - 2];
            if (row as i32 + dr, col as i32 + dc) == (neck.0 as i32, neck.1 as i32) {
                return;
            }
        }
        self.direction = direction;
    }

    pub fn contains(&self, pos: Coords) -> bool {
        self.body.contains(&pos)
    }

    /// True when `pos` hits the pre-move body minus the head. Moving into
    /// the cell the tail currently occupies is fatal, even though the tail
    /// would vacate it this tick.
    pub fn hits_body(&self, pos: Coords) -> bool {
        let len = self.body.len();
        self.body[..len.saturating_sub(1)].contains(&pos)
    }

    /// Advances to `new_head`. On `grow` the old tail is kept for one extra
    /// step; growth past `max_len` degrades to a normal move so the body
    /// never exceeds its cap.
    pub fn advance(&mut self, new_head: Coords, grow: bool) {
        self.body.push(new_head);
        if !(grow && self.body.len() <= self.max_len) {
            self.body.remove(0);
        }
    }
}
