//! Per-move win detection.
//!
//! A completed line must pass through the mark just placed and through one of
//! its Moore neighbors held by the same player, so only the lines through
//! those neighbors are checked.

use tracing::debug;

use super::board::{Board, BoardError};
use super::history::MoveHistory;
use super::line::line_is_complete;
use super::neighbors::neighbors;
use super::player::Player;
use super::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

impl GameOutcome {
    /// Message shown when the game ends
    pub fn announcement(&self) -> String {
        match self {
            GameOutcome::Winner(player) => format!("{player} wins!"),
            GameOutcome::Draw => "Draw... nobody wins!".to_string(),
        }
    }
}

/// Result of applying one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    NoWin,
    Win(Player),
    Draw,
}

impl Verdict {
    /// The final outcome, if this verdict ends the game
    pub fn outcome(self) -> Option<GameOutcome> {
        match self {
            Verdict::NoWin => None,
            Verdict::Win(player) => Some(GameOutcome::Winner(player)),
            Verdict::Draw => Some(GameOutcome::Draw),
        }
    }

    pub fn is_decisive(self) -> bool {
        self.outcome().is_some()
    }
}

/// Place `point` for `player`, record it, and judge the result.
///
/// Rejected moves leave both `board` and `history` untouched.
pub fn apply_move(
    point: Point,
    player: Player,
    board: &mut Board,
    history: &mut MoveHistory,
) -> Result<Verdict, BoardError> {
    board.place(point, player)?;
    let first_move = history.moves(player).is_empty();
    history.record(player, point);

    if first_move {
        return Ok(Verdict::NoWin);
    }

    if let Some(neighbor) = completing_neighbor(point, player, board, history) {
        debug!(%player, %point, %neighbor, "line completed");
        return Ok(Verdict::Win(player));
    }

    if board.is_full() {
        Ok(Verdict::Draw)
    } else {
        Ok(Verdict::NoWin)
    }
}

/// First same-player neighbor of `point` whose line through `point` holds a
/// full row of the player's marks.
pub fn completing_neighbor(
    point: Point,
    player: Player,
    board: &Board,
    history: &MoveHistory,
) -> Option<Point> {
    let candidates = neighbors(point, player, board);
    debug!(%player, %point, candidates = candidates.len(), "checking lines");
    let moves = history.moves(player);
    candidates
        .into_iter()
        .find(|&neighbor| line_is_complete(moves, point, neighbor))
}
