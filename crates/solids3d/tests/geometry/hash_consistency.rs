use crate::common::{hash_of, random_point, shuffled, unit_cube_vertices};
use solids3d::math::{Point, Vector};
use solids3d::shape::{Cuboid, Cylinder, Tetrahedron};
use std::collections::HashSet;

#[test]
fn equal_shapes_hash_equally() {
    let mut rng = oorandom::Rand32::new(99);

    for _ in 0..200 {
        let vertices = [
            random_point(&mut rng),
            random_point(&mut rng),
            random_point(&mut rng),
            random_point(&mut rng),
        ];
        let t1 = Tetrahedron::from_array(vertices);
        let t2 = Tetrahedron::from_array(shuffled(vertices, &mut rng));
        assert_eq!(t1, t2);
        assert_eq!(hash_of(&t1), hash_of(&t2));

        let corner = random_point(&mut rng);
        let extents = random_point(&mut rng).coords;
        let c1 = Cuboid::axis_aligned(corner, extents);
        let c2 = Cuboid::from_array(shuffled(*c1.vertices(), &mut rng));
        assert_eq!(c1, c2);
        assert_eq!(hash_of(&c1), hash_of(&c2));

        let radius = rng.rand_float() as f64;
        let cyl1 = Cylinder::new(radius, vertices[0], vertices[1]);
        let cyl2 = Cylinder::new(radius, vertices[0], vertices[1]);
        assert_eq!(cyl1, cyl2);
        assert_eq!(hash_of(&cyl1), hash_of(&cyl2));
    }
}

#[test]
fn signed_zeros_are_the_same_vertex() {
    let t1 = Tetrahedron::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    );
    let t2 = Tetrahedron::new(
        Point::new(-0.0, 0.0, -0.0),
        Point::new(1.0, -0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    );

    assert_eq!(t1, t2);
    assert_eq!(hash_of(&t1), hash_of(&t2));
}

#[test]
fn hashed_collections_deduplicate_permuted_shapes() {
    let mut rng = oorandom::Rand32::new(3);
    let mut cubes = HashSet::new();

    for _ in 0..10 {
        let _ = cubes.insert(Cuboid::from_array(shuffled(unit_cube_vertices(), &mut rng)));
    }
    let _ = cubes.insert(Cuboid::axis_aligned(Point::origin(), Vector::repeat(2.0)));

    assert_eq!(cubes.len(), 2);
}
