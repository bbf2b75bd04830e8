//! Definition of the cuboid shape.

use crate::math::{Point, Real, Vector};
use crate::shape::ShapeError;
use crate::utils::{self, PointKey};
use core::hash::{Hash, Hasher};

/// Shape of a box given by its 8 corners.
///
/// # Canonical vertex order
///
/// [`Cuboid::width`], [`Cuboid::height`], [`Cuboid::depth`] and every measure built
/// on them ([`Cuboid::volume`], [`Cuboid::surface_area`]) read the vertices by index
/// and assume an axis-aligned box listed in this order:
///
/// | index | corner                       |
/// |-------|------------------------------|
/// | 0     | reference corner `(x0, y0, z0)` |
/// | 1     | `(x1, y0, z0)`               |
/// | 2     | `(x1, y1, z0)`               |
/// | 3     | `(x0, y1, z0)`               |
/// | 4     | `(x0, y0, z1)`               |
/// | 5     | `(x1, y0, z1)`               |
/// | 6     | `(x1, y1, z1)`               |
/// | 7     | `(x0, y1, z1)`               |
///
/// This order is not validated. Any 8 points are accepted; if they are not an
/// axis-aligned box in the order above, the measures are silently meaningless.
///
/// Equality, on the other hand, ignores the order entirely: two cuboids are equal
/// if they have the same vertices, in any order. Two equal cuboids can therefore
/// report different volumes. Use [`Cuboid::axis_aligned`] to build the vertices in
/// canonical order.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone)]
pub struct Cuboid {
    vertices: [Point<Real>; 8],
}

impl Cuboid {
    /// The number of vertices of a cuboid.
    pub const NUM_VERTICES: usize = 8;

    /// Creates a cuboid from a slice of vertices.
    ///
    /// Fails with [`ShapeError::InvalidVertexCount`] unless exactly 8 vertices are
    /// given. The vertices are otherwise taken as-is (see the type-level docs for the
    /// order the measures expect).
    pub fn new(vertices: &[Point<Real>]) -> Result<Cuboid, ShapeError> {
        let vertices: [Point<Real>; 8] = vertices.try_into().map_err(|_| {
            log::debug!(
                "Rejected cuboid built from {} vertices instead of {}.",
                vertices.len(),
                Self::NUM_VERTICES
            );
            ShapeError::InvalidVertexCount {
                expected: Self::NUM_VERTICES,
                found: vertices.len(),
            }
        })?;

        Ok(Cuboid { vertices })
    }

    /// Creates a cuboid from an array of exactly 8 vertices.
    #[inline]
    pub fn from_array(vertices: [Point<Real>; 8]) -> Cuboid {
        Cuboid { vertices }
    }

    /// Creates the axis-aligned box with the reference corner `corner` and the
    /// given extents along `x`, `y` and `z`, with its vertices in canonical order.
    pub fn axis_aligned(corner: Point<Real>, extents: Vector<Real>) -> Cuboid {
        let [x0, y0, z0] = [corner.x, corner.y, corner.z];
        let [x1, y1, z1] = [x0 + extents.x, y0 + extents.y, z0 + extents.z];

        Cuboid::from_array([
            Point::new(x0, y0, z0),
            Point::new(x1, y0, z0),
            Point::new(x1, y1, z0),
            Point::new(x0, y1, z0),
            Point::new(x0, y0, z1),
            Point::new(x1, y0, z1),
            Point::new(x1, y1, z1),
            Point::new(x0, y1, z1),
        ])
    }

    /// The eight vertices of this cuboid, in construction order.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>; 8] {
        &self.vertices
    }

    /// The i-th vertex of this cuboid.
    ///
    /// Panics if `i >= 8`.
    #[inline]
    pub fn vertex(&self, i: usize) -> Point<Real> {
        self.vertices[i]
    }

    /// Computes the centroid of this cuboid: the mean of its eight vertices.
    ///
    /// Unlike the other measures, this does not depend on the vertex order.
    #[inline]
    pub fn centroid(&self) -> Point<Real> {
        utils::center(&self.vertices)
    }

    /// The extent along `x`: `|v1.x - v0.x|`.
    #[inline]
    pub fn width(&self) -> Real {
        (self.vertices[1].x - self.vertices[0].x).abs()
    }

    /// The extent along `y`: `|v3.y - v0.y|`.
    #[inline]
    pub fn height(&self) -> Real {
        (self.vertices[3].y - self.vertices[0].y).abs()
    }

    /// The extent along `z`: `|v4.z - v0.z|`.
    #[inline]
    pub fn depth(&self) -> Real {
        (self.vertices[4].z - self.vertices[0].z).abs()
    }

    /// Computes the volume of this cuboid.
    ///
    /// Only meaningful for an axis-aligned box in canonical vertex order.
    #[inline]
    pub fn volume(&self) -> Real {
        self.width() * self.depth() * self.height()
    }

    /// Computes the surface area of this cuboid.
    ///
    /// Only meaningful for an axis-aligned box in canonical vertex order.
    pub fn surface_area(&self) -> Real {
        let (width, height, depth) = (self.width(), self.height(), self.depth());
        2.0 * (width * height + width * depth + height * depth)
    }

    fn canonical_keys(&self) -> [PointKey; 8] {
        utils::canonical_keys(&self.vertices)
    }
}

impl TryFrom<&[Point<Real>]> for Cuboid {
    type Error = ShapeError;

    fn try_from(vertices: &[Point<Real>]) -> Result<Self, Self::Error> {
        Cuboid::new(vertices)
    }
}

impl TryFrom<Vec<Point<Real>>> for Cuboid {
    type Error = ShapeError;

    fn try_from(vertices: Vec<Point<Real>>) -> Result<Self, Self::Error> {
        Cuboid::new(&vertices)
    }
}

impl From<[Point<Real>; 8]> for Cuboid {
    fn from(vertices: [Point<Real>; 8]) -> Self {
        Cuboid::from_array(vertices)
    }
}

impl PartialEq for Cuboid {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.canonical_keys() == other.canonical_keys()
    }
}

impl Eq for Cuboid {}

impl Hash for Cuboid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_keys().hash(state)
    }
}

#[cfg(feature = "rand")]
impl rand::distributions::Distribution<Cuboid> for rand::distributions::Standard {
    /// Samples an axis-aligned box in canonical vertex order, with its reference
    /// corner and its extents both drawn from `[0, 1)³`.
    ///
    /// This is not a sample of 8 arbitrary points: such a sample is almost never a
    /// box, and its width, height, depth, volume and surface area would be
    /// meaningless. Build a cuboid with [`Cuboid::from_array`] from random points if
    /// that is what is needed.
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Cuboid {
        let corner = utils::random_point(rng);
        let extents = utils::random_point(rng).coords;
        Cuboid::axis_aligned(corner, extents)
    }
}
