use crate::math::{Point, Real, Vector};

/// Computes the geometric center (centroid) of a set of points.
///
/// The coordinates are summed component-wise first and the sum is divided by the
/// number of points afterwards, so the result is the plain arithmetic mean of the
/// inputs. All points are weighted equally.
///
/// # Panics
///
/// Panics if the input slice is empty.
///
/// # Example
///
/// ```
/// use solids3d::utils::center;
/// use solids3d::math::Point;
///
/// let points = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(4.0, 0.0, 0.0),
///     Point::new(0.0, 4.0, 0.0),
///     Point::new(0.0, 0.0, 4.0),
/// ];
///
/// assert_eq!(center(&points), Point::new(1.0, 1.0, 1.0));
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    assert!(
        !pts.is_empty(),
        "Cannot compute the center of less than 1 point."
    );

    let sum = pts
        .iter()
        .fold(Vector::zeros(), |acc: Vector<Real>, pt| acc + pt.coords);

    Point::from(sum / pts.len() as Real)
}
