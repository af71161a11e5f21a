use crate::error::Result;
use crate::math::distance_2d::{closest_point_on_segment, point_to_segment_dist};
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::{Point2, Vector2};

use super::{Line2, RectangleF};

/// A bounded segment from `start` to `end`.
///
/// The general line equation is derived on demand by [`line`](Self::line)
/// rather than stored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LineSegment2 {
    /// First endpoint.
    pub start: Point2,
    /// Second endpoint.
    pub end: Point2,
}

impl LineSegment2 {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the supporting line, directed from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::CoincidentPoints` for a zero-length segment.
    pub fn line(&self) -> Result<Line2> {
        Line2::from_points(&self.start, &self.end)
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.direction().norm_squared()
    }

    /// Returns the direction angle in radians, in `(-pi, pi]`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        let d = self.direction();
        d.y.atan2(d.x)
    }

    /// Component-wise minimum of the endpoints.
    #[must_use]
    pub fn minimum(&self) -> Point2 {
        self.start.inf(&self.end)
    }

    /// Component-wise maximum of the endpoints.
    #[must_use]
    pub fn maximum(&self) -> Point2 {
        self.start.sup(&self.end)
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.start, &self.end)
    }

    /// Returns the bounding rectangle of the two endpoints.
    #[must_use]
    pub fn bounding_rectangle(&self) -> RectangleF {
        RectangleF::from_min_max(&self.minimum(), &self.maximum())
    }

    /// Returns the point of the segment closest to `point`.
    #[must_use]
    pub fn closest_point(&self, point: &Point2) -> Point2 {
        closest_point_on_segment(point, &self.start, &self.end)
    }

    /// Returns the distance from `point` to the nearest point of the segment.
    #[must_use]
    pub fn distance_to(&self, point: &Point2) -> f64 {
        point_to_segment_dist(point, &self.start, &self.end)
    }

    /// Returns the crossing point of two segments.
    ///
    /// Parallel or collinear segments report `None`, even when they overlap.
    #[must_use]
    pub fn intersection(&self, other: &LineSegment2) -> Option<Point2> {
        segment_segment_intersect_2d(&self.start, &self.end, &other.start, &other.end)
            .map(|(point, _, _)| point)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn derived_measures() {
        let s = LineSegment2::new(p(4.0, 0.0), p(1.0, 4.0));
        assert_relative_eq!(s.length(), 5.0);
        assert_relative_eq!(s.length_squared(), 25.0);
        assert_eq!(s.minimum(), p(1.0, 0.0));
        assert_eq!(s.maximum(), p(4.0, 4.0));
        assert_eq!(s.midpoint(), p(2.5, 2.0));
        assert_eq!(s.bounding_rectangle(), RectangleF::new(1.0, 0.0, 3.0, 4.0));
    }

    #[test]
    fn supporting_line_contains_endpoints() {
        let s = LineSegment2::new(p(1.0, 1.0), p(3.0, 5.0));
        let l = s.line().unwrap();
        assert_relative_eq!(l.evaluate(&s.start), 0.0);
        assert_relative_eq!(l.evaluate(&s.end), 0.0);
        assert_relative_eq!(l.angle(), s.angle(), epsilon = 1e-12);
    }

    #[test]
    fn zero_length_has_no_line() {
        let s = LineSegment2::new(p(1.0, 1.0), p(1.0, 1.0));
        assert!(s.line().is_err());
    }

    #[test]
    fn closest_point_and_distance() {
        let s = LineSegment2::new(p(0.0, 0.0), p(10.0, 0.0));
        assert_eq!(s.closest_point(&p(3.0, 4.0)), p(3.0, 0.0));
        assert_relative_eq!(s.distance_to(&p(13.0, 4.0)), 5.0);
    }

    #[test]
    fn segment_crossing() {
        let a = LineSegment2::new(p(0.0, 0.0), p(4.0, 4.0));
        let b = LineSegment2::new(p(0.0, 4.0), p(4.0, 0.0));
        assert_relative_eq!(a.intersection(&b).unwrap(), p(2.0, 2.0), epsilon = 1e-12);
        let c = LineSegment2::new(p(5.0, 0.0), p(6.0, 1.0));
        assert!(a.intersection(&c).is_none());
    }
}
