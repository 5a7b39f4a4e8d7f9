use tracing::{debug, info};

use super::board::{BoardError, Cell};
use super::win::{self, GameOutcome, Verdict};
use super::{Board, MoveHistory, Player, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove,
    Checking,
    Decided,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("point {0} is outside the board")]
    OutOfBounds(Point),
    #[error("cell {0} is already taken")]
    CellOccupied(Point),
    #[error("the game is over")]
    GameOver,
    #[error("it is {expected}'s turn, not {got}'s")]
    OutOfTurn { expected: Player, got: Player },
}

impl From<BoardError> for MoveError {
    fn from(e: BoardError) -> Self {
        match e {
            BoardError::OutOfBounds(p) => MoveError::OutOfBounds(p),
            BoardError::CellOccupied(p) => MoveError::CellOccupied(p),
        }
    }
}

/// One game session: the board, both move histories and whose turn it is.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    history: MoveHistory,
    first_player: Player,
    current_player: Player,
    phase: Phase,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        Self::new(Player::X)
    }

    /// Fresh game where `first_player` moves first, now and after every reset
    pub fn new(first_player: Player) -> Self {
        GameState {
            board: Board::new(),
            history: MoveHistory::new(),
            first_player,
            current_player: first_player,
            phase: Phase::AwaitingMove,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Decided
    }

    pub fn occupant(&self, point: Point) -> Result<Cell, MoveError> {
        Ok(self.board.occupant(point)?)
    }

    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Every empty cell, or nothing once the game is decided
    pub fn legal_moves(&self) -> Vec<Point> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.empty_points().collect()
    }

    /// "X to play", or the announcement once the game is decided
    pub fn status(&self) -> String {
        match self.outcome {
            Some(outcome) => outcome.announcement(),
            None => format!("{} to play", self.current_player),
        }
    }

    /// Apply a move for the player to move
    pub fn play(&mut self, point: Point) -> Result<Verdict, MoveError> {
        self.apply_move(point, self.current_player)
    }

    /// Apply a move for `player`.
    ///
    /// Rejections leave the session exactly as it was. A non-deciding move
    /// passes the turn; a win or draw ends the game until [`GameState::reset`].
    pub fn apply_move(&mut self, point: Point, player: Player) -> Result<Verdict, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if player != self.current_player {
            return Err(MoveError::OutOfTurn {
                expected: self.current_player,
                got: player,
            });
        }

        self.phase = Phase::Checking;
        let verdict = match win::apply_move(point, player, &mut self.board, &mut self.history) {
            Ok(verdict) => verdict,
            Err(e) => {
                self.phase = Phase::AwaitingMove;
                debug!(%player, %point, error = %e, "move rejected");
                return Err(e.into());
            }
        };

        match verdict.outcome() {
            Some(outcome) => {
                info!(%player, %point, moves = self.history.len(), "{}", outcome.announcement());
                self.outcome = Some(outcome);
                self.phase = Phase::Decided;
            }
            None => {
                self.current_player = player.other();
                self.phase = Phase::AwaitingMove;
            }
        }

        Ok(verdict)
    }

    /// Clear the board and histories and hand the move back to the first player
    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
        self.current_player = self.first_player;
        self.phase = Phase::AwaitingMove;
        self.outcome = None;
        info!(first = %self.first_player, "game reset");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
