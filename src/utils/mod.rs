//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::point_key::{canonical_keys, PointKey};
#[cfg(feature = "rand")]
pub(crate) use self::random::random_point;

mod center;
mod point_key;
#[cfg(feature = "rand")]
mod random;
