use crate::math::{Point, Real};
use crate::shape::{Cuboid, Cylinder, Tetrahedron};
use core::fmt::Debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// Enum representing the type of a shape.
pub enum ShapeType {
    /// A tetrahedron shape.
    Tetrahedron = 0,
    /// A cuboid shape.
    Cuboid,
    /// A cylindrical shape.
    Cylinder,
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize))]
/// Enum representing the shape with its actual type
pub enum TypedShape<'a> {
    /// A tetrahedron shape.
    Tetrahedron(&'a Tetrahedron),
    /// A cuboid shape.
    Cuboid(&'a Cuboid),
    /// A cylindrical shape.
    Cylinder(&'a Cylinder),
}

/// Trait implemented by all solids supported by solids3d.
///
/// Every method is a pure function of the shape's stored fields: nothing is
/// cached and nothing is mutated, so a `&dyn Shape` can be queried from any
/// number of threads at once.
pub trait Shape: Debug + Send + Sync {
    /// The centroid of this shape.
    fn centroid(&self) -> Point<Real>;

    /// The volume enclosed by this shape.
    fn volume(&self) -> Real;

    /// The total area of the boundary of this shape.
    fn surface_area(&self) -> Real;

    /// Gets the type tag of this shape.
    fn shape_type(&self) -> ShapeType;

    /// Gets the underlying shape as an enum.
    fn as_typed_shape(&self) -> TypedShape<'_>;
}

impl Shape for Tetrahedron {
    fn centroid(&self) -> Point<Real> {
        self.centroid()
    }

    fn volume(&self) -> Real {
        self.volume()
    }

    fn surface_area(&self) -> Real {
        self.surface_area()
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Tetrahedron
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Tetrahedron(self)
    }
}

impl Shape for Cuboid {
    fn centroid(&self) -> Point<Real> {
        self.centroid()
    }

    fn volume(&self) -> Real {
        self.volume()
    }

    fn surface_area(&self) -> Real {
        self.surface_area()
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Cuboid
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Cuboid(self)
    }
}

impl Shape for Cylinder {
    fn centroid(&self) -> Point<Real> {
        self.centroid()
    }

    fn volume(&self) -> Real {
        self.volume()
    }

    fn surface_area(&self) -> Real {
        self.surface_area()
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Cylinder
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Cylinder(self)
    }
}

static_assertions::assert_impl_all!(Tetrahedron: Shape, Copy, Eq, core::hash::Hash);
static_assertions::assert_impl_all!(Cuboid: Shape, Copy, Eq, core::hash::Hash);
static_assertions::assert_impl_all!(Cylinder: Shape, Copy, Eq, core::hash::Hash);
static_assertions::assert_obj_safe!(Shape);
