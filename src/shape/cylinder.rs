//! Definition of the cylinder shape.

use crate::math::{Point, Real};
use crate::utils::PointKey;
use approx::{AbsDiffEq, RelativeEq};
use core::f64::consts::PI;
use core::hash::{Hash, Hasher};
use ordered_float::OrderedFloat;

/// A right circular cylinder given by its radius and the centers of its two caps.
///
/// The cylinder axis is the segment `base1 -> base2`, so it can have any orientation.
/// The radius is not validated: a negative radius is stored as-is and yields
/// negative or otherwise meaningless areas.
///
/// Equality compares the radius, `base1` and `base2` exactly and in that role:
/// swapping the two bases gives the same solid but a *different* `Cylinder` value.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone)]
pub struct Cylinder {
    radius: Real,
    base1: Point<Real>,
    base2: Point<Real>,
}

impl Cylinder {
    /// Creates a new cylinder.
    ///
    /// # Arguments:
    /// * `radius` - the radius of both circular caps.
    /// * `base1` - the center of the first cap.
    /// * `base2` - the center of the second cap.
    #[inline]
    pub fn new(radius: Real, base1: Point<Real>, base2: Point<Real>) -> Cylinder {
        Cylinder {
            radius,
            base1,
            base2,
        }
    }

    /// The radius of this cylinder.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The center of the first cap.
    #[inline]
    pub fn base1(&self) -> Point<Real> {
        self.base1
    }

    /// The center of the second cap.
    #[inline]
    pub fn base2(&self) -> Point<Real> {
        self.base2
    }

    /// The distance between the centers of the two caps.
    #[inline]
    pub fn height(&self) -> Real {
        na::distance(&self.base1, &self.base2)
    }

    /// The area of one circular cap: `π r²`.
    #[inline]
    pub fn bottom_area(&self) -> Real {
        PI * self.radius.powi(2)
    }

    /// The volume of this cylinder.
    #[inline]
    pub fn volume(&self) -> Real {
        self.bottom_area() * self.height()
    }

    /// The area of the curved side alone: `2π r h`.
    #[inline]
    pub fn lateral_area(&self) -> Real {
        2.0 * PI * self.radius * self.height()
    }

    /// The total surface area, both caps included: `2π r (r + h)`.
    #[inline]
    pub fn surface_area(&self) -> Real {
        2.0 * PI * self.radius * (self.radius + self.height())
    }

    /// The centroid of this cylinder: the middle of its axis.
    #[inline]
    pub fn centroid(&self) -> Point<Real> {
        na::center(&self.base1, &self.base2)
    }
}

impl PartialEq for Cylinder {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.radius) == OrderedFloat(other.radius)
            && PointKey::new(&self.base1) == PointKey::new(&other.base1)
            && PointKey::new(&self.base2) == PointKey::new(&other.base2)
    }
}

impl Eq for Cylinder {}

impl Hash for Cylinder {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.radius).hash(state);
        PointKey::new(&self.base1).hash(state);
        PointKey::new(&self.base2).hash(state);
    }
}

impl AbsDiffEq for Cylinder {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.radius.abs_diff_eq(&other.radius, epsilon)
            && self.base1.abs_diff_eq(&other.base1, epsilon)
            && self.base2.abs_diff_eq(&other.base2, epsilon)
    }
}

impl RelativeEq for Cylinder {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.radius
            .relative_eq(&other.radius, epsilon, max_relative)
            && self.base1.relative_eq(&other.base1, epsilon, max_relative)
            && self.base2.relative_eq(&other.base2, epsilon, max_relative)
    }
}

#[cfg(feature = "rand")]
impl rand::distributions::Distribution<Cylinder> for rand::distributions::Standard {
    /// Samples a cylinder with both cap centers in `[0, 1)³` and a radius in `[0, 5)`.
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Cylinder {
        let base1 = crate::utils::random_point(rng);
        let base2 = crate::utils::random_point(rng);
        let radius = rng.gen::<Real>() * 5.0;
        Cylinder::new(radius, base1, base2)
    }
}
