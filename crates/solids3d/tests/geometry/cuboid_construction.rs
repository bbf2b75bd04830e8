use crate::common::unit_cube_vertices;
use solids3d::math::Point;
use solids3d::shape::{Cuboid, ShapeError};
use std::sync::Mutex;

/// Keeps the text of every record logged by this test binary.
struct RecordingLogger {
    messages: Mutex<Vec<String>>,
}

impl log::Log for RecordingLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Debug
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            self.messages
                .lock()
                .unwrap()
                .push(format!("{}: {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: RecordingLogger = RecordingLogger {
    messages: Mutex::new(Vec::new()),
};

#[test]
fn cuboid_needs_exactly_eight_vertices() {
    let mut vertices = unit_cube_vertices().to_vec();

    assert!(Cuboid::new(&vertices).is_ok());

    vertices.push(Point::new(2.0, 2.0, 2.0));
    assert_eq!(
        Cuboid::new(&vertices),
        Err(ShapeError::InvalidVertexCount {
            expected: 8,
            found: 9
        })
    );

    let _ = vertices.pop();
    let _ = vertices.pop();
    assert_eq!(
        Cuboid::new(&vertices),
        Err(ShapeError::InvalidVertexCount {
            expected: 8,
            found: 7
        })
    );
}

#[test]
fn cuboid_try_from_collections() {
    let vertices = unit_cube_vertices();

    let from_slice = Cuboid::try_from(&vertices[..]).expect("8 vertices");
    let from_vec = Cuboid::try_from(vertices.to_vec()).expect("8 vertices");
    let from_array = Cuboid::from(vertices);

    assert_eq!(from_slice.vertices(), &vertices);
    assert_eq!(from_vec.vertices(), &vertices);
    assert_eq!(from_array.vertices(), &vertices);

    assert!(Cuboid::try_from(Vec::<Point<f64>>::new()).is_err());
    assert!(Cuboid::try_from(vec![Point::<f64>::origin(); 16]).is_err());
}

#[test]
fn unit_cube_scenario() {
    let cube = Cuboid::new(&unit_cube_vertices()).expect("8 vertices");

    assert_eq!(cube.volume(), 1.0);
    assert_eq!(cube.surface_area(), 6.0);
    assert_eq!(cube.centroid(), Point::new(0.5, 0.5, 0.5));
}

#[test]
fn cuboid_measures_read_the_canonical_indices() {
    let cube = Cuboid::from_array([
        Point::new(1.0, 1.0, 1.0),
        Point::new(4.0, 1.0, 1.0),
        Point::new(4.0, 3.0, 1.0),
        Point::new(1.0, 3.0, 1.0),
        Point::new(1.0, 1.0, 7.0),
        Point::new(4.0, 1.0, 7.0),
        Point::new(4.0, 3.0, 7.0),
        Point::new(1.0, 3.0, 7.0),
    ]);

    assert_eq!(cube.width(), 3.0);
    assert_eq!(cube.height(), 2.0);
    assert_eq!(cube.depth(), 6.0);
    assert_eq!(cube.volume(), 36.0);
    assert_eq!(cube.surface_area(), 2.0 * (6.0 + 18.0 + 12.0));
}

#[test]
fn rejected_cuboid_is_logged_at_debug_level() {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log::LevelFilter::Debug);

    let vertices = unit_cube_vertices();
    assert!(Cuboid::new(&vertices[..5]).is_err());

    let messages = LOGGER.messages.lock().unwrap();
    assert!(messages
        .iter()
        .any(|msg| msg == "DEBUG: Rejected cuboid built from 5 vertices instead of 8."));
}
