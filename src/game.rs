use log::{debug, info};

use crate::board::{Board, CellKind};
use crate::config::GameConfig;
use crate::generator::BoardGenerator;
use crate::rng::GameRng;
use crate::snake::{Direction, Snake};
use crate::{Coords, GridInt};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    TogglePause,
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    Paused,
    Running,
    GameOver,
}

/// The engine. Owns board, snake and RNG; consumes discrete commands and
/// ticks, hands out render snapshots. The driver serializes all calls on a
/// single thread, so no interior locking is needed.
pub struct GameState {
    config: GameConfig,
    board: Board,
    snake: Snake,
    status: GameStatus,
    rng: GameRng,
}

impl GameState {
    pub fn new(config: GameConfig, rng: GameRng) -> Result<Self, String> {
        config.validate()?;
        let board = Board::new(config.rows, config.cols);
        let snake = Snake::empty(config.max_snake_len);
        Ok(GameState {
            config,
            board,
            snake,
            status: GameStatus::NotStarted,
            rng,
        })
    }

    /// Full reset: regenerates walls, food and snake, and leaves the game
    /// Paused waiting for the first directional command.
    pub fn start_game(&mut self) -> Result<(), String> {
        self.board.clear();
        BoardGenerator::generate_borders(&mut self.board);
        BoardGenerator::generate_obstacles(&mut self.board, &mut self.rng, self.config.obstacle_count)?;
        BoardGenerator::generate_food(&mut self.board, None, &mut self.rng)?;
        self.snake = BoardGenerator::generate_snake(
            &self.board,
            &mut self.rng,
            self.config.initial_snake_len,
            self.config.max_snake_len,
        )?;
        self.status = GameStatus::Paused;
        info!("game started (seed {})", self.rng.seed());
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    pub fn score(&self) -> usize {
        self.snake.len().saturating_sub(self.config.initial_snake_len)
    }

    pub fn handle_command(&mut self, command: Command) -> Result<(), String> {
        match command {
            Command::MoveUp => self.steer(Direction::Up),
            Command::MoveDown => self.steer(Direction::Down),
            Command::MoveLeft => self.steer(Direction::Left),
            Command::MoveRight => self.steer(Direction::Right),
            Command::TogglePause => match self.status {
                GameStatus::Running => self.status = GameStatus::Paused,
                GameStatus::Paused => self.status = GameStatus::Running,
                GameStatus::NotStarted | GameStatus::GameOver => {}
            },
            Command::Restart => {
                if matches!(self.status, GameStatus::Paused | GameStatus::GameOver) {
                    self.start_game()?;
                }
            }
        }
        Ok(())
    }

    fn steer(&mut self, direction: Direction) {
        match self.status {
            GameStatus::Paused => {
                self.snake.set_direction(direction);
                self.status = GameStatus::Running;
            }
            GameStatus::Running => self.snake.set_direction(direction),
            GameStatus::NotStarted | GameStatus::GameOver => {}
        }
    }

    /// One tick. Only meaningful while Running; a tick either fully applies
    /// or transitions to GameOver, there is no partial state.
    pub fn step(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        let new_head = match self.target_cell() {
            Some(pos) => pos,
            None => {
                self.game_over("ran off the grid");
                return;
            }
        };

        if self.board.is_wall(new_head) {
            self.game_over("hit a wall");
            return;
        }
        if self.snake.hits_body(new_head) {
            self.game_over("ran into itself");
            return;
        }

        let ate = self.board.is_food(new_head);
        self.snake.advance(new_head, ate);

        if ate {
            self.board.remove_food(new_head);
            debug!(
                "ate food at ({}, {}), length now {}",
                new_head.0,
                new_head.1,
                self.snake.len()
            );
            if BoardGenerator::generate_food(&mut self.board, Some(&self.snake), &mut self.rng)
                .is_err()
            {
                // Nowhere left to put food; the board is effectively full.
                self.game_over("no room left for food");
            }
        }
    }

    /// Render snapshot: rows x cols cell classifications, precedence
    /// wall > food > snake head > snake body > empty.
    pub fn snapshot(&self) -> Vec<Vec<CellKind>> {
        let mut grid =
            vec![vec![CellKind::Empty; self.board.cols() as usize]; self.board.rows() as usize];

        for (i, &(row, col)) in self.snake.body().iter().enumerate() {
            grid[row as usize][col as usize] = if i == self.snake.len() - 1 {
                CellKind::SnakeHead
            } else {
                CellKind::SnakeBody
            };
        }
        for row in 0..self.board.rows() {
            for col in 0..self.board.cols() {
                if self.board.is_wall((row, col)) {
                    grid[row as usize][col as usize] = CellKind::Wall;
                } else if self.board.is_food((row, col)) {
                    grid[row as usize][col as usize] = CellKind::Food;
                }
            }
        }
        grid
    }

    fn target_cell(&self) -> Option<Coords> {
        let (row, col) = self.snake.next_head();
        if row < 0
            || col < 0
            || row >= self.board.rows() as i32
            || col >= self.board.cols() as i32
        {
            return None;
        }
        Some((row as GridInt, col as GridInt))
    }

    fn game_over(&mut self, reason: &str) {
        info!("game over: {} (score {})", reason, self.score());
        self.status = GameStatus::GameOver;
    }
}
