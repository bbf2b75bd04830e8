use crate::math::{Point, Real};
use rand::Rng;

/// A point with each coordinate drawn uniformly from `[0, 1)`.
pub(crate) fn random_point<R: Rng + ?Sized>(rng: &mut R) -> Point<Real> {
    Point::new(rng.gen(), rng.gen(), rng.gen())
}
