use solids3d::math::Point;
use solids3d::shape::Cylinder;

fn main() {
    let cylinder = Cylinder::new(2.0, Point::new(0.0, 0.0, 0.0), Point::new(0.0, 0.0, 5.0));

    println!("Height: {}", cylinder.height());
    println!("Bottom Area: {}", cylinder.bottom_area());
    println!("Volume: {}", cylinder.volume());
    println!("Surface Area: {}", cylinder.surface_area());

    let same = Cylinder::new(2.0, Point::new(0.0, 0.0, 0.0), Point::new(0.0, 0.0, 5.0));
    let flipped = Cylinder::new(2.0, cylinder.base2(), cylinder.base1());
    println!("Equal to an identical cylinder: {}", cylinder == same);
    println!("Equal with swapped bases: {}", cylinder == flipped);
}
