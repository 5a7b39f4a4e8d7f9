//! Line-oriented text front end: reads moves from a reader, writes the board
//! and verdicts to a writer.

use std::io::{self, BufRead, Write};

use crate::game::{GameState, MoveError, Player, Point, DIMS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Point),
    Reset,
    Board,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            return Ok(None);
        }
        match line.to_ascii_lowercase().as_str() {
            "reset" | "r" => return Ok(Some(Command::Reset)),
            "board" | "b" => return Ok(Some(Command::Board)),
            "quit" | "q" | "exit" => return Ok(Some(Command::Quit)),
            _ => {}
        }

        let parts: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .collect();
        if parts.len() != DIMS {
            return Err(format!(
                "expected {DIMS} coordinates or a command, got '{line}'"
            ));
        }
        let mut coords = [0; DIMS];
        for (c, part) in coords.iter_mut().zip(&parts) {
            *c = part
                .parse()
                .map_err(|_| format!("'{part}' is not a coordinate"))?;
        }
        Ok(Some(Command::Place(Point::from_coords(coords))))
    }
}

pub struct App {
    game_state: GameState,
    show_board: bool,
    should_quit: bool,
}

impl App {
    pub fn new(first_player: Player, show_board: bool) -> Self {
        App {
            game_state: GameState::new(first_player),
            show_board,
            should_quit: false,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Main loop: one command per line until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.game_state.status())?;
        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                Ok(Some(command)) => self.handle_command(command, out)?,
                Ok(None) => {}
                Err(msg) => writeln!(out, "error: {msg}")?,
            }
            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    fn handle_command<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<()> {
        match command {
            Command::Quit => self.should_quit = true,
            Command::Board => write!(out, "{}", self.game_state.board())?,
            Command::Reset => {
                self.game_state.reset();
                writeln!(out, "New game started!")?;
                writeln!(out, "{}", self.game_state.status())?;
            }
            Command::Place(point) => self.place(point, out)?,
        }
        Ok(())
    }

    fn place<W: Write>(&mut self, point: Point, out: &mut W) -> io::Result<()> {
        match self.game_state.play(point) {
            Ok(_) => {
                if self.show_board {
                    write!(out, "{}", self.game_state.board())?;
                }
                writeln!(out, "{}", self.game_state.status())?;
                // A decided game starts over, like dismissing the result popup
                if self.game_state.is_terminal() {
                    self.game_state.reset();
                    writeln!(out, "{}", self.game_state.status())?;
                }
            }
            Err(MoveError::GameOver) => writeln!(out, "Game over! Type 'reset' to restart.")?,
            Err(e) => writeln!(out, "error: {e}")?,
        }
        Ok(())
    }
}
