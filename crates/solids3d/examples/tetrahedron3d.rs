use solids3d::math::Point;
use solids3d::shape::Tetrahedron;

fn main() {
    let tetra = Tetrahedron::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    );

    let centroid = tetra.centroid();
    println!("Centroid: ({}, {}, {})", centroid.x, centroid.y, centroid.z);
    println!("Surface Area: {}", tetra.surface_area());
    println!("Volume: {}", tetra.volume());
}
