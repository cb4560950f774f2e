//! Geometric primitives for pointer tracking.

use std::ops::Sub;

/// A position in document (page) coordinates, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtraction_yields_displacement() {
        let start = Point::new(10.0, 40.0);
        let end = Point::new(70.0, 35.0);
        assert_eq!(end - start, Point::new(60.0, -5.0));
    }
}
