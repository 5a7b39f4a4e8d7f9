use std::fmt;
use std::ops::Index;

/// Cells per axis.
pub const SIZE: usize = 5;
/// Number of axes of the lattice.
pub const DIMS: usize = 4;
/// Total number of cells on the board.
pub const CELLS: usize = SIZE.pow(DIMS as u32);

/// A lattice coordinate. Coordinates are signed so that off-board points can be
/// represented and rejected rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point([i32; DIMS]);

impl Point {
    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Point([x, y, z, w])
    }

    pub const fn from_coords(coords: [i32; DIMS]) -> Self {
        Point(coords)
    }

    pub fn coords(&self) -> [i32; DIMS] {
        self.0
    }

    /// True if every coordinate is in `[0, SIZE - 1]`
    pub fn in_bounds(&self) -> bool {
        self.0.iter().all(|&c| (0..SIZE as i32).contains(&c))
    }

    /// Translate by `delta` without any bounds check
    pub fn offset(self, delta: [i32; DIMS]) -> Point {
        let mut coords = self.0;
        for (c, d) in coords.iter_mut().zip(delta) {
            *c += d;
        }
        Point(coords)
    }

    /// Row-major linear index (axis 0 most significant), `None` when off-board
    pub fn index(&self) -> Option<usize> {
        if !self.in_bounds() {
            return None;
        }
        Some(self.0.iter().fold(0, |acc, &c| acc * SIZE + c as usize))
    }

    /// Inverse of [`Point::index`]. Panics if `index >= CELLS`.
    pub fn from_index(index: usize) -> Point {
        assert!(index < CELLS, "cell index {index} out of range");
        let mut coords = [0; DIMS];
        let mut rest = index;
        for c in coords.iter_mut().rev() {
            *c = (rest % SIZE) as i32;
            rest /= SIZE;
        }
        Point(coords)
    }

    /// Every on-board point in index order
    pub fn all() -> impl Iterator<Item = Point> {
        (0..CELLS).map(Point::from_index)
    }
}

impl Index<usize> for Point {
    type Output = i32;

    fn index(&self, axis: usize) -> &i32 {
        &self.0[axis]
    }
}

impl From<[i32; DIMS]> for Point {
    fn from(coords: [i32; DIMS]) -> Self {
        Point(coords)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.0;
        write!(f, "({x}, {y}, {z}, {w})")
    }
}
