//! Shapes supported by solids3d.

pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::error::ShapeError;
#[doc(inline)]
pub use self::shape::{Shape, ShapeType, TypedShape};
pub use self::tetrahedron::Tetrahedron;
pub use self::triangle::Triangle;

mod cuboid;
mod cylinder;
mod error;
mod shape;
mod tetrahedron;
mod triangle;
