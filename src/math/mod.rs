//! Linear algebra type aliases.

pub use na::{Matrix3, Point3, Vector3};

/// The scalar type used throughout this crate.
pub type Real = f64;

/// The point type.
pub use Point3 as Point;

/// A point of the 3D space with `Real` coordinates.
pub type Point3D = Point<Real>;

/// The vector type.
pub use Vector3 as Vector;

/// The matrix type.
pub use Matrix3 as Matrix;
