//! Collinearity tests for lines through two lattice points.

use super::point::{Point, DIMS};

/// Marks in a row needed to win, regardless of board extent.
pub const WIN_LENGTH: usize = 5;

/// The line through two distinct points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    p1: Point,
    p2: Point,
}

impl Line {
    /// Panics if `p1 == p2`: such a pair defines no line and can only come
    /// from a broken caller.
    pub fn through(p1: Point, p2: Point) -> Self {
        assert!(p1 != p2, "invalid line: both points are {p1}");
        Line { p1, p2 }
    }

    /// Whether `m` lies on the line.
    ///
    /// Axes where the two points agree must also agree for `m`. On the other
    /// axes the ratio `(m - p1) / (p2 - p1)` must be the same everywhere; the
    /// first such axis sets the reference and later ones are compared to it by
    /// cross-multiplication, so no division happens.
    pub fn contains(&self, m: Point) -> bool {
        let mut reference: Option<(i32, i32)> = None;
        for axis in 0..DIMS {
            let den = self.p2[axis] - self.p1[axis];
            let num = m[axis] - self.p1[axis];
            if den == 0 {
                if num != 0 {
                    return false;
                }
                continue;
            }
            match reference {
                None => reference = Some((num, den)),
                Some((ref_num, ref_den)) => {
                    if num * ref_den != ref_num * den {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// How many of `moves` lie on the line
    pub fn count_on(&self, moves: &[Point]) -> usize {
        moves.iter().filter(|&&m| self.contains(m)).count()
    }
}

/// Whether `m` lies on the line through `p1` and `p2`. Panics if `p1 == p2`.
pub fn point_on_line(m: Point, p1: Point, p2: Point) -> bool {
    Line::through(p1, p2).contains(m)
}

/// Whether exactly [`WIN_LENGTH`] of `moves` lie on the line through `p1` and `p2`.
pub fn line_is_complete(moves: &[Point], p1: Point, p2: Point) -> bool {
    Line::through(p1, p2).count_on(moves) == WIN_LENGTH
}
