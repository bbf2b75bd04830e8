/// Errors that can occur while building a shape.
///
/// Geometric inputs are otherwise never validated: a degenerate tetrahedron, a
/// negative cylinder radius or a cuboid given in the wrong vertex order are all
/// accepted and simply produce zero, negative or NaN measures. The only hard
/// precondition is the number of vertices a shape is built from.
///
/// # Example
///
/// ```
/// use solids3d::math::Point;
/// use solids3d::shape::{Cuboid, ShapeError};
///
/// let seven_vertices: Vec<Point<f64>> = vec![Point::origin(); 7];
///
/// match Cuboid::new(&seven_vertices) {
///     Err(ShapeError::InvalidVertexCount { expected, found }) => {
///         assert_eq!(expected, 8);
///         assert_eq!(found, 7);
///     }
///     Ok(_) => unreachable!(),
/// }
/// ```
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// The shape was given the wrong number of vertices.
    #[error("a cuboid must have {expected} vertices, got {found}")]
    InvalidVertexCount {
        /// The number of vertices the shape requires.
        expected: usize,
        /// The number of vertices that were actually given.
        found: usize,
    },
}
