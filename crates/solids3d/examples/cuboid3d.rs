use solids3d::math::Point;
use solids3d::shape::{Cuboid, ShapeError};

fn main() -> Result<(), ShapeError> {
    let vertices = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(1.0, 1.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(1.0, 0.0, 1.0),
        Point::new(1.0, 1.0, 1.0),
        Point::new(0.0, 1.0, 1.0),
    ];

    let cuboid = Cuboid::new(&vertices)?;

    let centroid = cuboid.centroid();
    println!("Centroid: ({}, {}, {})", centroid.x, centroid.y, centroid.z);
    println!("Volume: {}", cuboid.volume());
    println!("Surface Area: {}", cuboid.surface_area());

    if let Err(err) = Cuboid::new(&vertices[..7]) {
        println!("Seven vertices: {err}");
    }

    Ok(())
}
