use std::fmt;

use super::player::Player;
use super::point::{Point, CELLS, SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// The 5x5x5x5 lattice, stored flat in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELLS],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("point {0} is outside the board")]
    OutOfBounds(Point),
    #[error("cell {0} is already taken")]
    CellOccupied(Point),
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Get the cell at a point, failing for off-board coordinates
    pub fn occupant(&self, point: Point) -> Result<Cell, BoardError> {
        self.get(point).ok_or(BoardError::OutOfBounds(point))
    }

    /// Get the cell at a point, `None` when off-board
    pub fn get(&self, point: Point) -> Option<Cell> {
        point.index().map(|i| self.cells[i])
    }

    /// Claim an empty cell for `player`
    pub fn place(&mut self, point: Point, player: Player) -> Result<(), BoardError> {
        let index = point.index().ok_or(BoardError::OutOfBounds(point))?;
        if self.cells[index] != Cell::Empty {
            return Err(BoardError::CellOccupied(point));
        }
        self.cells[index] = player.to_cell();
        Ok(())
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Number of occupied cells
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELLS];
    }

    /// Iterate over the empty cells in index order
    pub fn empty_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| Point::from_index(i))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// One text row per (x, y) pair; columns are (z, w) with a gap between z
/// blocks and a blank line between x blocks.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = SIZE as i32;
        for x in 0..n {
            if x > 0 {
                writeln!(f)?;
            }
            for y in 0..n {
                let mut line = String::with_capacity(SIZE * (SIZE + 1));
                for z in 0..n {
                    if z > 0 {
                        line.push(' ');
                    }
                    for w in 0..n {
                        let cell = self.get(Point::new(x, y, z, w)).unwrap_or(Cell::Empty);
                        line.push(cell.symbol());
                    }
                }
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}
