use super::player::Player;
use super::point::Point;

/// Per-player record of claimed cells, in play order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    moves: [Vec<Point>; 2],
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves made so far by `player`
    pub fn moves(&self, player: Player) -> &[Point] {
        &self.moves[player.index()]
    }

    pub fn record(&mut self, player: Player, point: Point) {
        self.moves[player.index()].push(point);
    }

    /// Total moves by both players
    pub fn len(&self) -> usize {
        self.moves.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.iter().all(Vec::is_empty)
    }

    pub fn clear(&mut self) {
        for moves in &mut self.moves {
            moves.clear();
        }
    }
}
