//! Definition of the triangle shape.

use crate::math::{Point, Real};
use crate::utils;

/// A triangle shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The lengths of the sides `ab`, `ac` and `bc`.
    #[inline]
    pub fn side_lengths(&self) -> [Real; 3] {
        [
            na::distance(&self.a, &self.b),
            na::distance(&self.a, &self.c),
            na::distance(&self.b, &self.c),
        ]
    }

    /// The area of this triangle, computed with Heron's formula.
    ///
    /// The radicand `s(s - a)(s - b)(s - c)` is not clamped: for collinear points it
    /// is zero, and rounding on nearly-flat triangles can make it slightly negative,
    /// in which case the area is NaN.
    #[inline]
    pub fn area(&self) -> Real {
        let [a, b, c] = self.side_lengths();
        let s = (a + b + c) / 2.0;
        let sqr = s * (s - a) * (s - b) * (s - c);

        if sqr < 0.0 {
            log::debug!("Negative Heron radicand {} for triangle {:?}.", sqr, self);
        }

        sqr.sqrt()
    }

    /// The perimeter of this triangle.
    #[inline]
    pub fn perimeter(&self) -> Real {
        let [a, b, c] = self.side_lengths();
        a + b + c
    }

    /// The geometric center of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        utils::center(&[self.a, self.b, self.c])
    }
}
