use log::debug;

use crate::board::Board;
use crate::rng::GameRng;
use crate::snake::Snake;
use crate::{Coords, GridInt};

/// Upper bound on rejection-sampling draws for a single placement. Hitting
/// it means the configuration left too little free space.
const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Randomized content placement over a board. On a fresh start the four
/// operations must run in order (borders, obstacles, food, snake): each one
/// relies on the emptiness state left by the previous.
pub struct BoardGenerator;

impl BoardGenerator {
    /// Marks the outermost ring of cells as wall.
    pub fn generate_borders(board: &mut Board) {
        let (rows, cols) = (board.rows(), board.cols());
        for row in 0..rows {
            board.set_wall((row, 0));
            board.set_wall((row, cols - 1));
        }
        for col in 1..cols - 1 {
            board.set_wall((0, col));
            board.set_wall((rows - 1, col));
        }
    }

    /// Marks `count` distinct empty interior cells as wall.
    pub fn generate_obstacles(
        board: &mut Board,
        rng: &mut GameRng,
        count: usize,
    ) -> Result<(), String> {
        let mut placed = 0;
        let mut attempts = 0;
        while placed < count {
            attempts += 1;
            if attempts > MAX_PLACEMENT_ATTEMPTS {
                return Err(format!(
                    "could not place {} obstacles after {} attempts",
                    count, MAX_PLACEMENT_ATTEMPTS
                ));
            }
            let pos = Self::random_interior(board, rng);
            if board.is_wall(pos) || board.is_food(pos) {
                continue;
            }
            board.set_wall(pos);
            placed += 1;
        }
        Ok(())
    }

    /// Places one food cell at least 2 cells from every border, with at
    /// least 3 of its 4 orthogonal neighbors empty so it never spawns boxed
    /// in. `snake` is None on a fresh start, where food lands before the
    /// snake exists.
    pub fn generate_food(
        board: &mut Board,
        snake: Option<&Snake>,
        rng: &mut GameRng,
    ) -> Result<Coords, String> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let row = rng.gen_range(2..board.rows() - 2);
            let col = rng.gen_range(2..board.cols() - 2);
            if !Self::is_empty(board, snake, (row, col)) {
                continue;
            }
            let free_neighbors = [(row - 1, col), (row + 1, col), (row, col - 1), (row, col + 1)]
                .iter()
                .filter(|&&pos| Self::is_empty(board, snake, pos))
                .count();
            if free_neighbors < 3 {
                continue;
            }
            board.place_food((row, col));
            debug!("food placed at ({}, {})", row, col);
            return Ok((row, col));
        }
        Err(format!(
            "no room for food after {} attempts",
            MAX_PLACEMENT_ATTEMPTS
        ))
    }

    /// Builds the snake on a random interior row, horizontal and moving
    /// right; the whole span is verified empty before committing.
    pub fn generate_snake(
        board: &Board,
        rng: &mut GameRng,
        initial_len: usize,
        max_len: usize,
    ) -> Result<Snake, String> {
        let len = initial_len as GridInt;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let row = rng.gen_range(1..board.rows() - 1);
            let tail_col = rng.gen_range(1..board.cols() - len);
            let span_empty = (0..len).all(|i| {
                let pos = (row, tail_col + i);
                !board.is_wall(pos) && !board.is_food(pos)
            });
            if !span_empty {
                continue;
            }
            debug!("snake placed on row {}, cols {}..{}", row, tail_col, tail_col + len - 1);
            return Ok(Snake::new_horizontal((row, tail_col), initial_len, max_len));
        }
        Err(format!(
            "no room for a snake of length {} after {} attempts",
            initial_len, MAX_PLACEMENT_ATTEMPTS
        ))
    }

    fn is_empty(board: &Board, snake: Option<&Snake>, pos: Coords) -> bool {
        !board.is_wall(pos)
            && !board.is_food(pos)
            && snake.map_or(true, |s| !s.contains(pos))
    }

    fn random_interior(board: &Board, rng: &mut GameRng) -> Coords {
        (
            rng.gen_range(1..board.rows() - 1),
            rng.gen_range(1..board.cols() - 1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bordered_board() -> Board {
        let mut board = Board::new(30, 30);
        BoardGenerator::generate_borders(&mut board);
        board
    }

    #[test]
    fn test_borders_form_a_ring() {
        let board = bordered_board();
        for col in 0..30 {
            assert!(board.is_wall((0, col)));
            assert!(board.is_wall((29, col)));
        }
        for row in 0..30 {
            assert!(board.is_wall((row, 0)));
            assert!(board.is_wall((row, 29)));
        }
        assert!(!board.is_wall((1, 1)));
        assert!(!board.is_wall((28, 28)));
    }

    #[test]
    fn test_obstacles_land_on_distinct_interior_cells() {
        let mut board = bordered_board();
        let mut rng = GameRng::new(42);
        BoardGenerator::generate_obstacles(&mut board, &mut rng, 20).unwrap();

        let mut interior_walls = 0;
        for row in 1..29 {
            for col in 1..29 {
                if board.is_wall((row, col)) {
                    interior_walls += 1;
                }
            }
        }
        assert_eq!(interior_walls, 20);
    }

    #[test]
    fn test_obstacle_overflow_is_an_error() {
        // 7x7 board has a 25-cell interior; 26 obstacles cannot fit.
        let mut board = Board::new(7, 7);
        BoardGenerator::generate_borders(&mut board);
        let mut rng = GameRng::new(42);
        assert!(BoardGenerator::generate_obstacles(&mut board, &mut rng, 26).is_err());
    }

    #[test]
    fn test_food_lands_away_from_borders_with_free_neighbors() {
        let mut board = bordered_board();
        let mut rng = GameRng::new(42);
        let (row, col) = BoardGenerator::generate_food(&mut board, None, &mut rng).unwrap();

        assert!((2..=27).contains(&row));
        assert!((2..=27).contains(&col));
        assert!(board.is_food((row, col)));

        let free = [(row - 1, col), (row + 1, col), (row, col - 1), (row, col + 1)]
            .iter()
            .filter(|&&pos| !board.is_wall(pos) && !board.is_food(pos))
            .count();
        assert!(free >= 3);
    }

    #[test]
    fn test_food_avoids_the_snake() {
        for seed in 0..20 {
            let mut board = bordered_board();
            let mut rng = GameRng::new(seed);
            let snake = BoardGenerator::generate_snake(&board, &mut rng, 5, 200).unwrap();
            let pos = BoardGenerator::generate_food(&mut board, Some(&snake), &mut rng).unwrap();
            assert!(!snake.contains(pos));
        }
    }

    #[test]
    fn test_snake_spans_empty_interior_cells() {
        let mut board = bordered_board();
        let mut rng = GameRng::new(42);
        BoardGenerator::generate_obstacles(&mut board, &mut rng, 20).unwrap();
        BoardGenerator::generate_food(&mut board, None, &mut rng).unwrap();
        let snake = BoardGenerator::generate_snake(&board, &mut rng, 5, 200).unwrap();

        assert_eq!(snake.len(), 5);
        let (row, tail_col) = snake.body()[0];
        for (i, &(r, c)) in snake.body().iter().enumerate() {
            assert_eq!(r, row);
            assert_eq!(c, tail_col + i as GridInt);
            assert!(!board.is_wall((r, c)));
            assert!(!board.is_food((r, c)));
        }
    }
}
