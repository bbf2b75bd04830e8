use crate::math::{Point, Real};
use ordered_float::OrderedFloat;

/// A point with totally-ordered, hashable coordinates.
///
/// Floating-point points are neither `Ord` nor `Hash`. A `PointKey` wraps each
/// coordinate into an [`OrderedFloat`] so that points can be sorted into a canonical
/// order and fed to a hasher. Two keys are equal iff the points have exactly equal
/// coordinates, with two exceptions inherited from `OrderedFloat`: `-0.0` and `0.0`
/// are the same key, and every NaN equals every other NaN.
///
/// Keys order lexicographically on `(x, y, z)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointKey([OrderedFloat<Real>; 3]);

impl PointKey {
    /// Builds the key of the given point.
    #[inline]
    pub fn new(pt: &Point<Real>) -> Self {
        PointKey([OrderedFloat(pt.x), OrderedFloat(pt.y), OrderedFloat(pt.z)])
    }

    /// The point this key was built from.
    #[inline]
    pub fn point(&self) -> Point<Real> {
        Point::new(self.0[0].0, self.0[1].0, self.0[2].0)
    }
}

impl From<Point<Real>> for PointKey {
    fn from(pt: Point<Real>) -> Self {
        PointKey::new(&pt)
    }
}

/// Keys of `pts`, sorted in increasing order.
///
/// Two arrays of points that are permutations of each other have the same
/// canonical keys. This is what the vertex-based shapes compare and hash, which
/// makes their equality independent of the order their vertices were given in.
/// Duplicated vertices are kept, so the comparison is a multiset comparison.
pub fn canonical_keys<const N: usize>(pts: &[Point<Real>; N]) -> [PointKey; N] {
    let mut keys: [PointKey; N] = core::array::from_fn(|i| PointKey::new(&pts[i]));
    keys.sort_unstable();
    keys
}
