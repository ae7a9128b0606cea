//! Core geometric types and operations
//!
//! This module defines pure value types for points and line segments.
//! Coordinates are in canvas units and carry no knowledge of the host
//! windowing system or its pixel density.

/// A position on the 2D canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Creates a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// A line segment between two points
///
/// While a stroke is being drawn its `end` follows the pointer; once the
/// stroke finishes the segment is treated as immutable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub begin: Point,
    pub end: Point,
}

impl Line {
    /// Creates a new line segment
    pub fn new(begin: Point, end: Point) -> Self {
        Self { begin, end }
    }

    /// Creates a zero-length line anchored at a single point
    ///
    /// This is the shape of every stroke at the moment the touch lands,
    /// before any movement has been reported.
    pub fn anchored_at(point: Point) -> Self {
        Self {
            begin: point,
            end: point,
        }
    }

    /// Returns the point at parameter `t` along the segment
    ///
    /// `t = 0.0` yields `begin` and `t = 1.0` yields `end`. Values outside
    /// `[0.0, 1.0]` extrapolate; callers are expected to stay in range.
    pub fn sample(&self, t: f32) -> Point {
        Point::new(
            self.begin.x + (self.end.x - self.begin.x) * t,
            self.begin.y + (self.end.y - self.begin.y) * t,
        )
    }

    /// Returns the segment length
    pub fn length(&self) -> f32 {
        self.begin.distance_to(self.end)
    }

    /// Returns the stroke direction in degrees, normalized to `[0, 360)`
    ///
    /// The angle is `atan2(Δx, Δy)`: a stroke drawn straight down the
    /// canvas (positive Δy) reads as 0°, one drawn to the right as 90°.
    pub fn angle_degrees(&self) -> f32 {
        let dx = self.end.x - self.begin.x;
        let dy = self.end.y - self.begin.y;
        let mut degrees = dx.atan2(dy).to_degrees();
        if degrees < 0.0 {
            degrees += 360.0;
        }
        degrees
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Point::new(7.5, -2.0);
        assert_eq!(p.distance_to(p), 0.0);
    }

    #[test]
    fn anchored_line_is_zero_length() {
        let line = Line::anchored_at(Point::new(12.0, 34.0));
        assert_eq!(line.begin, line.end);
        assert_eq!(line.length(), 0.0);
    }

    #[test]
    fn sample_hits_endpoints_and_midpoint() {
        let line = Line::new(Point::new(10.0, 20.0), Point::new(110.0, 20.0));
        assert_eq!(line.sample(0.0), line.begin);
        assert_eq!(line.sample(1.0), line.end);
        assert_eq!(line.sample(0.5), Point::new(60.0, 20.0));
    }

    #[test]
    fn sample_of_zero_length_line_stays_put() {
        let line = Line::anchored_at(Point::new(5.0, 5.0));
        assert_eq!(line.sample(0.0), line.begin);
        assert_eq!(line.sample(0.7), line.begin);
        assert_eq!(line.sample(1.0), line.begin);
    }

    #[test]
    fn angle_covers_cardinal_directions() {
        let origin = Point::new(0.0, 0.0);
        let down = Line::new(origin, Point::new(0.0, 100.0));
        let right = Line::new(origin, Point::new(100.0, 0.0));
        let up = Line::new(origin, Point::new(0.0, -100.0));
        let left = Line::new(origin, Point::new(-100.0, 0.0));

        assert!((down.angle_degrees() - 0.0).abs() < 1e-3);
        assert!((right.angle_degrees() - 90.0).abs() < 1e-3);
        assert!((up.angle_degrees() - 180.0).abs() < 1e-3);
        assert!((left.angle_degrees() - 270.0).abs() < 1e-3);
    }

    #[test]
    fn angle_is_always_in_range() {
        let origin = Point::new(50.0, 50.0);
        let targets = [
            Point::new(53.0, 41.0),
            Point::new(-20.0, 14.0),
            Point::new(50.0, 50.0),
            Point::new(49.0, 120.0),
            Point::new(0.0, -3.0),
        ];
        for target in targets {
            let angle = Line::new(origin, target).angle_degrees();
            assert!((0.0..360.0).contains(&angle), "angle {angle} out of range");
        }
    }
}
