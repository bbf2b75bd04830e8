/*!
solids3d
========

**solids3d** is a small library of 3-dimensional solids (tetrahedra, cuboids
and cylinders) written with the rust programming language.

Every solid is an immutable value: its centroid, volume and surface area are
recomputed from the stored vertices on each call, and equality is structural.

```
use solids3d::math::Point;
use solids3d::shape::{Cylinder, Tetrahedron};

let tetra = Tetrahedron::new(
    Point::new(0.0, 0.0, 0.0),
    Point::new(1.0, 0.0, 0.0),
    Point::new(0.0, 1.0, 0.0),
    Point::new(0.0, 0.0, 1.0),
);
assert_eq!(tetra.centroid(), Point::new(0.25, 0.25, 0.25));

let cylinder = Cylinder::new(2.0, Point::origin(), Point::new(0.0, 0.0, 5.0));
assert_eq!(cylinder.height(), 5.0);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod math;
pub mod shape;
pub mod utils;
