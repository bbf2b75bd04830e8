use rand::{Rng, SeedableRng};
use rand_isaac::IsaacRng;
use solids3d::shape::{Cuboid, Cylinder, Tetrahedron};

#[test]
fn random_tetrahedra_lie_in_the_unit_cube() {
    let mut rng = IsaacRng::seed_from_u64(0);

    for _ in 0..100 {
        let tetra: Tetrahedron = rng.gen();
        for pt in tetra.vertices() {
            assert!(pt.iter().all(|x| (0.0..1.0).contains(x)));
        }
        assert!(tetra.volume() <= 1.0);
    }
}

#[test]
fn random_cuboids_are_canonical_boxes() {
    let mut rng = IsaacRng::seed_from_u64(1);

    for _ in 0..100 {
        let cube: Cuboid = rng.gen();
        let expected = cube.width() * cube.height() * cube.depth();

        assert_eq!(cube.volume(), expected);
        assert!(cube.width() <= 1.0 && cube.height() <= 1.0 && cube.depth() <= 1.0);

        let v = cube.vertices();
        assert_eq!(v[6].x, v[1].x);
        assert_eq!(v[6].y, v[3].y);
        assert_eq!(v[6].z, v[4].z);
    }
}

#[test]
fn random_cylinders_have_bounded_radius() {
    let mut rng = IsaacRng::seed_from_u64(2);

    for _ in 0..100 {
        let cyl: Cylinder = rng.gen();
        assert!((0.0..5.0).contains(&cyl.radius()));
        assert!(cyl.height() <= 3.0f64.sqrt());
    }
}

#[test]
fn seeded_sampling_is_reproducible() {
    let a: Vec<Tetrahedron> = (0..5)
        .map({
            let mut rng = IsaacRng::seed_from_u64(42);
            move |_| rng.gen()
        })
        .collect();
    let b: Vec<Tetrahedron> = (0..5)
        .map({
            let mut rng = IsaacRng::seed_from_u64(42);
            move |_| rng.gen()
        })
        .collect();

    assert_eq!(a, b);
}
