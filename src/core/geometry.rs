//! Board coordinates and direction vectors.
//!
//! Coordinates are `(row, col)` with row 0 at the top of the rendered
//! board. Both types are plain `Copy` values; nothing here knows about
//! board dimensions, so stepping off the board is the caller's concern.

use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// A cell on the board, zero-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Vector that leads from `self` to `other`.
    #[must_use]
    pub const fn delta_to(self, other: Point) -> Vector {
        Vector::new(other.row - self.row, other.col - self.col)
    }

    /// Midpoint between two cells (integer division, used for jumps).
    #[must_use]
    pub const fn midpoint(self, other: Point) -> Point {
        Point::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, v: Vector) -> Point {
        Point::new(self.row + v.d_row, self.col + v.d_col)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A move template offset.
///
/// The same type describes single steps, jumps and long-range directions;
/// move generators decide how to interpret it by its magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector {
    pub d_row: i32,
    pub d_col: i32,
}

impl Vector {
    #[must_use]
    pub const fn new(d_row: i32, d_col: i32) -> Self {
        Self { d_row, d_col }
    }

    /// Chebyshev length: 1 for steps, 2 for checkers jumps.
    #[must_use]
    pub fn magnitude(self) -> i32 {
        self.d_row.abs().max(self.d_col.abs())
    }

    /// True if the vector moves along a diagonal.
    #[must_use]
    pub fn is_diagonal(self) -> bool {
        self.d_row != 0 && self.d_row.abs() == self.d_col.abs()
    }

    /// True if the vector moves along a row or a column.
    #[must_use]
    pub fn is_orthogonal(self) -> bool {
        (self.d_row == 0) != (self.d_col == 0)
    }

    /// Reduce to the smallest vector with the same direction.
    ///
    /// `(0, 0)` reduces to itself.
    #[must_use]
    pub fn reduced(self) -> Vector {
        let g = gcd(self.d_row.abs(), self.d_col.abs());
        if g == 0 {
            self
        } else {
            Vector::new(self.d_row / g, self.d_col / g)
        }
    }

    /// The vector pointing the other way.
    #[must_use]
    pub const fn reversed(self) -> Vector {
        Vector::new(-self.d_row, -self.d_col)
    }
}

impl Mul<i32> for Vector {
    type Output = Vector;

    fn mul(self, k: i32) -> Vector {
        Vector::new(self.d_row * k, self.d_col * k)
    }
}

fn gcd(a: i32, b: i32) -> i32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}
