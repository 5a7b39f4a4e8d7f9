//! Moore-neighborhood scan around a freshly placed mark.

use super::board::Board;
use super::player::Player;
use super::point::{Point, DIMS};

/// Size of the Moore neighborhood, center excluded.
pub const NEIGHBORHOOD: usize = 3usize.pow(DIMS as u32) - 1;

/// All offsets with components in {-1, 0, 1} except the zero vector, in
/// lexicographic order (axis 0 most significant).
pub fn offsets() -> impl Iterator<Item = [i32; DIMS]> {
    (0..3usize.pow(DIMS as u32)).filter_map(|n| {
        let mut offset = [0; DIMS];
        let mut rest = n;
        for d in offset.iter_mut().rev() {
            *d = (rest % 3) as i32 - 1;
            rest /= 3;
        }
        (offset != [0; DIMS]).then_some(offset)
    })
}

/// Cells within Chebyshev distance 1 of `center` held by `player`.
///
/// Off-board candidates are skipped; the center is never included.
pub fn neighbors(center: Point, player: Player, board: &Board) -> Vec<Point> {
    let target = player.to_cell();
    offsets()
        .map(|delta| center.offset(delta))
        .filter(|&candidate| board.get(candidate) == Some(target))
        .collect()
}
