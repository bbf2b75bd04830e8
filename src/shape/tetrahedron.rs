//! Definition of the tetrahedron shape.

use crate::math::{Matrix, Point, Real};
use crate::shape::Triangle;
use crate::utils::{self, PointKey};
use core::hash::{Hash, Hasher};

/// A tetrahedron with 4 vertices.
///
/// Two tetrahedra are equal if they have the same vertices, in any order:
///
/// ```
/// use solids3d::math::Point;
/// use solids3d::shape::Tetrahedron;
///
/// let [a, b, c, d] = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
///     Point::new(0.0, 0.0, 1.0),
/// ];
///
/// assert_eq!(Tetrahedron::new(a, b, c, d), Tetrahedron::new(d, c, a, b));
/// ```
///
/// No degeneracy check is performed: flat or collinear vertices are accepted and
/// yield zero (or NaN) areas and volumes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug)]
pub struct Tetrahedron {
    vertices: [Point<Real>; 4],
}

impl Tetrahedron {
    /// Creates a tetrahedron from four points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>, d: Point<Real>) -> Tetrahedron {
        Tetrahedron {
            vertices: [a, b, c, d],
        }
    }

    /// Creates a tetrahedron from an array of four points.
    #[inline]
    pub fn from_array(vertices: [Point<Real>; 4]) -> Tetrahedron {
        Tetrahedron { vertices }
    }

    /// The four vertices of this tetrahedron, in construction order.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>; 4] {
        &self.vertices
    }

    /// The i-th vertex of this tetrahedron.
    ///
    /// Panics if `i >= 4`.
    #[inline]
    pub fn vertex(&self, i: usize) -> Point<Real> {
        self.vertices[i]
    }

    /// Returns the i-th face of this tetrahedron.
    ///
    /// The 0-th face is the triangle ABC.
    /// The 1-st face is the triangle ABD.
    /// The 2-nd face is the triangle ACD.
    /// The 3-rd face is the triangle BCD.
    pub fn face(&self, i: usize) -> Triangle {
        let (a, b, c) = Self::face_ids(i as u32);
        Triangle::new(
            self.vertices[a as usize],
            self.vertices[b as usize],
            self.vertices[c as usize],
        )
    }

    /// Returns the vertex indices of the i-th face of this tetrahedron.
    ///
    /// The 0-th face is the triangle ABC.
    /// The 1-st face is the triangle ABD.
    /// The 2-nd face is the triangle ACD.
    /// The 3-rd face is the triangle BCD.
    pub fn face_ids(i: u32) -> (u32, u32, u32) {
        match i {
            0 => (0, 1, 2),
            1 => (0, 1, 3),
            2 => (0, 2, 3),
            3 => (1, 2, 3),
            _ => panic!("Tetrahedron face index {} out of bounds (must be < 4).", i),
        }
    }

    /// Computes the centroid of this tetrahedron: the mean of its four vertices.
    #[inline]
    pub fn centroid(&self) -> Point<Real> {
        utils::center(&self.vertices)
    }

    /// Computes the surface area of this tetrahedron.
    ///
    /// This is the sum of the Heron areas of the faces ABC, ABD, ACD and BCD. A
    /// degenerate face contributes zero, or NaN if rounding made its Heron radicand
    /// negative.
    pub fn surface_area(&self) -> Real {
        (0..4).map(|i| self.face(i).area()).sum()
    }

    /// Computes the volume of this tetrahedron.
    #[inline]
    pub fn volume(&self) -> Real {
        self.signed_volume().abs()
    }

    /// Computes the signed volume of this tetrahedron.
    ///
    /// If it is positive, `d` is on the half-space pointed by the normal of the oriented triangle
    /// `(a, b, c)`.
    #[inline]
    pub fn signed_volume(&self) -> Real {
        let [a, b, c, d] = self.vertices;
        let ab = b - a;
        let ac = c - a;
        let ad = d - a;

        let mat = Matrix::new(ab.x, ac.x, ad.x, ab.y, ac.y, ad.y, ab.z, ac.z, ad.z);

        mat.determinant() / 6.0
    }

    fn canonical_keys(&self) -> [PointKey; 4] {
        utils::canonical_keys(&self.vertices)
    }
}

impl PartialEq for Tetrahedron {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.canonical_keys() == other.canonical_keys()
    }
}

impl Eq for Tetrahedron {}

impl Hash for Tetrahedron {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_keys().hash(state)
    }
}

#[cfg(feature = "rand")]
impl rand::distributions::Distribution<Tetrahedron> for rand::distributions::Standard {
    /// Samples a tetrahedron with all its vertex coordinates in `[0, 1)`.
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Tetrahedron {
        Tetrahedron::from_array([
            utils::random_point(rng),
            utils::random_point(rng),
            utils::random_point(rng),
            utils::random_point(rng),
        ])
    }
}
