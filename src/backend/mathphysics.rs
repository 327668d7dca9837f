use derive_more::{Add, Display};
use serde::{Deserialize, Serialize};


pub type Meter = f32;


// `x` points north and `y` points east on the map, `z` is the altitude.
#[derive(
    Clone, Copy, Debug, Default, Display, PartialEq, Add,
    Serialize, Deserialize
)]
#[display("({x}, {y}, {z})")]
pub struct Point3D {
    pub x: Meter,
    pub y: Meter,
    pub z: Meter,
}

impl Point3D {
    #[must_use]
    pub const fn new(x: Meter, y: Meter, z: Meter) -> Self {
        Self { x, y, z }
    }
}


#[must_use]
pub fn centroid(points: &[Point3D]) -> Option<Point3D> {
    if points.is_empty() {
        return None;
    }

    let sum = points
        .iter()
        .fold(Point3D::default(), |sum, point| sum + *point);
    let count = points.len() as Meter;

    Some(Point3D::new(sum.x / count, sum.y / count, sum.z / count))
}


pub trait Position {
    fn position(&self) -> &Point3D;
}
