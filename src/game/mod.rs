//! Core game logic: the 4D lattice, neighbor scan, line checks, per-move win
//! detection and the game session state machine.

mod board;
mod history;
pub mod line;
pub mod neighbors;
mod player;
mod point;
mod state;
pub mod win;

pub use board::{Board, BoardError, Cell};
pub use history::MoveHistory;
pub use line::{line_is_complete, point_on_line, Line, WIN_LENGTH};
pub use neighbors::neighbors;
pub use player::Player;
pub use point::{Point, CELLS, DIMS, SIZE};
pub use state::{GameState, MoveError, Phase};
pub use win::{apply_move, GameOutcome, Verdict};
