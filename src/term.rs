use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style};

use crate::board::CellKind;
use crate::GridInt;

const WALL_CHAR: char = '#';
const FOOD_CHAR: char = 'O';
const SNAKE_BODY_CHAR: char = '█';

/// Terminal adapter: owns the alternate screen and raw mode, draws render
/// snapshots and message overlays, drains pending key events.
pub struct TermManager {
    stdout: Stdout,
    rows: GridInt,
    cols: GridInt,
}

impl TermManager {
    pub fn new(rows: GridInt, cols: GridInt) -> Self {
        TermManager {
            stdout: stdout(),
            rows,
            cols,
        }
    }

    pub fn setup(&mut self) -> crossterm::Result<()> {
        execute!(self.stdout, EnterAlternateScreen, cursor::Hide)?;
        terminal::enable_raw_mode()
    }

    pub fn restore(&mut self) -> crossterm::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, LeaveAlternateScreen)
    }

    pub fn clear(&mut self) -> crossterm::Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))
    }

    /// Draws a full snapshot. The head glyph follows the travel direction,
    /// so it is picked by the caller.
    pub fn draw(&mut self, grid: &[Vec<CellKind>], head_glyph: char) -> crossterm::Result<()> {
        for (row, cells) in grid.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, row as u16))?;
            for kind in cells {
                let ch = match kind {
                    CellKind::Empty => ' ',
                    CellKind::Wall => WALL_CHAR,
                    CellKind::Food => FOOD_CHAR,
                    CellKind::SnakeBody => SNAKE_BODY_CHAR,
                    CellKind::SnakeHead => head_glyph,
                };
                queue!(self.stdout, style::Print(ch))?;
            }
        }
        self.stdout.flush()?;
        Ok(())
    }

    pub fn draw_score(&mut self, score: usize) -> crossterm::Result<()> {
        let row = self.rows as u16;
        queue!(
            self.stdout,
            cursor::MoveTo(0, row),
            style::Print(format!("Score: {}", score))
        )?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Centered message box over the play field.
    pub fn show_message(&mut self, lines: &[&str]) -> crossterm::Result<()> {
        let height = lines.len() as u16 + 2;
        let width = lines.iter().map(|line| line.len()).max().unwrap_or(0) as u16 + 4;
        let top = u16::from(self.rows).saturating_sub(height) / 2;
        let left = u16::from(self.cols).saturating_sub(width) / 2;

        for dy in 0..height {
            queue!(self.stdout, cursor::MoveTo(left, top + dy))?;
            for _ in 0..width {
                queue!(self.stdout, style::Print(' '))?;
            }
        }
        for (i, line) in lines.iter().enumerate() {
            let padded = format!("{line: ^width$}", line = line, width = width as usize);
            queue!(
                self.stdout,
                cursor::MoveTo(left, top + 1 + i as u16),
                style::Print(padded)
            )?;
        }
        self.stdout.flush()?;
        Ok(())
    }

    /// Drains all pending key events without blocking for longer than the
    /// poll interval.
    pub fn read_key_events_queue(&self) -> crossterm::Result<Vec<KeyEvent>> {
        let mut events = vec![];
        while poll(Duration::from_millis(1))? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }
        Ok(events)
    }
}
