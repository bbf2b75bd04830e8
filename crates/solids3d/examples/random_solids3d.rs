use rand::Rng;
use solids3d::shape::{Cuboid, Cylinder, Shape, Tetrahedron};

fn main() {
    let mut rng = rand::thread_rng();
    let mut shapes: Vec<Box<dyn Shape>> = Vec::new();

    for _ in 0..5 {
        shapes.push(Box::new(rng.gen::<Cuboid>()));
        shapes.push(Box::new(rng.gen::<Cylinder>()));
    }
    for _ in 0..5 {
        shapes.push(Box::new(rng.gen::<Tetrahedron>()));
    }

    for (i, shape) in shapes.iter().enumerate() {
        println!(
            "{:>2} {:?} Surface Area: {}",
            i + 1,
            shape.shape_type(),
            shape.surface_area()
        );
    }
}
