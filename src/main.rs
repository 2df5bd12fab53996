mod board;
mod config;
mod game;
mod generator;
mod rng;
mod snake;
mod term;

use std::thread::sleep;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;

use config::GameConfig;
use game::{Command, GameState, GameStatus};
use rng::GameRng;
use term::TermManager;

pub type GridInt = u16;
/// (row, col), row 0 at the top of the screen.
pub type Coords = (GridInt, GridInt);

const POLL_INTERVAL_MS: u64 = 5;

#[derive(Parser)]
#[command(name = "gridsnake", about = "Terminal grid snake")]
struct Args {
    /// Board height in cells
    #[arg(long, default_value_t = 30)]
    rows: u16,
    /// Board width in cells
    #[arg(long, default_value_t = 30)]
    cols: u16,
    /// Interior wall cells to scatter over the board
    #[arg(long, default_value_t = 20)]
    obstacles: usize,
    /// Snake length at game start
    #[arg(long, default_value_t = 5)]
    initial_length: usize,
    /// Hard cap on snake length
    #[arg(long, default_value_t = 200)]
    max_length: usize,
    /// RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Milliseconds between simulation steps
    #[arg(long, default_value_t = 150)]
    tick_ms: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let args = Args::parse();

    let config = GameConfig {
        rows: args.rows,
        cols: args.cols,
        obstacle_count: args.obstacles,
        initial_snake_len: args.initial_length,
        max_snake_len: args.max_length,
    };
    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };

    let mut state = GameState::new(config, rng)?;
    state.start_game()?;

    let mut term = TermManager::new(args.rows, args.cols);
    term.setup()?;
    let result = run(&mut state, &mut term, args.tick_ms);
    term.restore()?;
    result
}

fn run(
    state: &mut GameState,
    term: &mut TermManager,
    tick_ms: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    term.clear()?;
    term.draw(&state.snapshot(), state.direction().head_char())?;
    term.show_message(&[
        "Arrow keys or WASD to move",
        "Esc to pause, R to restart",
        "Ctrl+C to quit",
    ])?;

    let mut elapsed_ms = 0;
    let mut last_status = state.status();

    loop {
        sleep(Duration::from_millis(POLL_INTERVAL_MS));
        elapsed_ms += POLL_INTERVAL_MS;

        for key_ev in term.read_key_events_queue()? {
            if is_ctrl_c(&key_ev) {
                return Ok(());
            }
            if let Some(command) = map_key(&key_ev) {
                debug!("command: {:?}", command);
                state.handle_command(command)?;
            }
        }

        let mut stepped = false;
        if elapsed_ms >= tick_ms {
            elapsed_ms = 0;
            state.step();
            stepped = true;
        }

        let status = state.status();
        match status {
            // One snapshot per tick, plus one on unpausing.
            GameStatus::Running if stepped || last_status != GameStatus::Running => {
                term.draw(&state.snapshot(), state.direction().head_char())?;
                term.draw_score(state.score())?;
            }
            GameStatus::Paused if last_status != GameStatus::Paused => {
                term.draw(&state.snapshot(), state.direction().head_char())?;
                term.show_message(&["Paused", "Esc to resume, R to restart"])?;
            }
            GameStatus::GameOver if last_status != GameStatus::GameOver => {
                term.draw(&state.snapshot(), state.direction().head_char())?;
                term.draw_score(state.score())?;
                term.show_message(&[
                    "Game over!",
                    &*format!("Score: {}", state.score()),
                    "",
                    "R to restart, Ctrl+C to quit",
                ])?;
            }
            _ => {}
        }
        last_status = status;
    }
}

fn map_key(ev: &KeyEvent) -> Option<Command> {
    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Command::MoveUp),
        KeyCode::Char('a') | KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Char('s') | KeyCode::Down => Some(Command::MoveDown),
        KeyCode::Char('d') | KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Esc => Some(Command::TogglePause),
        KeyCode::Char('r') => Some(Command::Restart),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(
        ev,
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL
        }
    )
}
