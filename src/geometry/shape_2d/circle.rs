use std::f64::consts::{PI, TAU};

use crate::math::Point2;
use crate::operations::query::Intersects;

use super::{Rectangle, RectangleF};

/// A circle in the plane.
///
/// The radius is not validated; a negative radius contains nothing under
/// [`contains`](Circle::contains).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Circle {
    /// Center point.
    pub center: Point2,
    /// Radius.
    pub radius: f64,
}

impl Circle {
    /// Creates a new circle.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Creates a circle centred on `rect` with a radius of half its longer side.
    ///
    /// This is not the circle through all four corners; corners of a
    /// non-degenerate rectangle lie outside it.
    #[must_use]
    pub fn from_rectangle(rect: &RectangleF) -> Self {
        Self::new(rect.center(), rect.width.max(rect.height) * 0.5)
    }

    /// Returns the enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Returns the circumference.
    #[must_use]
    pub fn circumference(&self) -> f64 {
        TAU * self.radius
    }

    /// Returns the axis-aligned bounding rectangle.
    #[must_use]
    pub fn bounding_rectangle(&self) -> RectangleF {
        let d = self.radius * 2.0;
        RectangleF::new(self.center.x - self.radius, self.center.y - self.radius, d, d)
    }

    /// Returns whether `point` lies inside or on the circle.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        nalgebra::distance(&self.center, point) <= self.radius
    }

    /// Legacy containment predicate that accepts points up to one unit
    /// outside the circle.
    ///
    /// Kept for callers that depend on the historical result; new code
    /// should use [`contains`](Self::contains). The slack must exceed the
    /// smallest positive subnormal, so a point exactly `radius + 1` away is
    /// rejected.
    #[must_use]
    pub fn contains_legacy(&self, point: &Point2) -> bool {
        let distance = nalgebra::distance(&self.center, point);
        (self.radius + 1.0 - distance) >= f64::from_bits(1)
    }

    /// Returns the point of `rect` closest to the center.
    fn closest_point_in(&self, rect: &RectangleF) -> Point2 {
        self.center.sup(&rect.minimum()).inf(&rect.maximum())
    }
}

impl Intersects<Circle> for Circle {
    type Output = bool;

    fn intersects(&self, other: &Circle) -> bool {
        let r = self.radius + other.radius;
        nalgebra::distance_squared(&self.center, &other.center) <= r * r
    }
}

impl Intersects<RectangleF> for Circle {
    type Output = bool;

    fn intersects(&self, other: &RectangleF) -> bool {
        let closest = self.closest_point_in(other);
        nalgebra::distance_squared(&self.center, &closest) <= self.radius * self.radius
    }
}

impl Intersects<Rectangle> for Circle {
    type Output = bool;

    fn intersects(&self, other: &Rectangle) -> bool {
        self.intersects(&other.to_rectangle_f())
    }
}

impl Intersects<Circle> for RectangleF {
    type Output = bool;

    fn intersects(&self, other: &Circle) -> bool {
        other.intersects(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn origin_circle() -> Circle {
        Circle::new(Point2::origin(), 5.0)
    }

    #[test]
    fn contains_center() {
        let c = origin_circle();
        assert!(c.contains(&Point2::origin()));
        assert!(c.contains_legacy(&Point2::origin()));
    }

    #[test]
    fn contains_boundary_point() {
        let c = origin_circle();
        assert!(c.contains(&Point2::new(5.0, 0.0)));
        assert!(c.contains_legacy(&Point2::new(5.0, 0.0)));
    }

    #[test]
    fn legacy_predicate_accepts_points_just_outside() {
        let c = origin_circle();
        let p = Point2::new(5.5, 0.0);
        assert!(!c.contains(&p));
        assert!(c.contains_legacy(&p));
        assert!(!c.contains_legacy(&Point2::new(6.5, 0.0)));
    }

    #[test]
    fn legacy_slack_edge_is_exclusive() {
        let c = origin_circle();
        assert!(!c.contains_legacy(&Point2::new(6.0, 0.0)));
        assert!(c.contains_legacy(&Point2::new(6.0 - 1e-9, 0.0)));
        assert!(f64::from_bits(1) < f64::MIN_POSITIVE);
    }

    #[test]
    fn corrected_predicate_matches_distance() {
        let c = Circle::new(Point2::new(1.0, 1.0), 2.0);
        for p in [
            Point2::new(1.0, 3.0),
            Point2::new(2.5, 2.5),
            Point2::new(3.0, 3.0),
            Point2::new(-1.1, 1.0),
        ] {
            let expected = nalgebra::distance(&c.center, &p) <= c.radius;
            assert_eq!(c.contains(&p), expected, "point {p}");
        }
    }

    #[test]
    fn from_rectangle_uses_longer_side() {
        let c = Circle::from_rectangle(&RectangleF::new(0.0, 0.0, 10.0, 4.0));
        assert_eq!(c.center, Point2::new(5.0, 2.0));
        assert_relative_eq!(c.radius, 5.0);
    }

    #[test]
    fn circle_circle() {
        let a = origin_circle();
        assert!(a.intersects(&Circle::new(Point2::new(10.0, 0.0), 5.0)));
        assert!(!a.intersects(&Circle::new(Point2::new(10.1, 0.0), 5.0)));
    }

    #[test]
    fn circle_rectangle() {
        let c = Circle::new(Point2::new(-2.0, -2.0), 2.0);
        let r = RectangleF::new(0.0, 0.0, 10.0, 10.0);
        // Corner at distance sqrt(8) > 2.
        assert!(!c.intersects(&r));
        assert!(Circle::new(Point2::new(-1.0, 5.0), 1.0).intersects(&r));
        assert!(Circle::new(Point2::new(5.0, 5.0), 1.0).intersects(&Rectangle::new(0, 0, 10, 10)));
        assert!(r.intersects(&Circle::new(Point2::new(11.0, 11.0), 1.5)));
    }

    #[test]
    fn measures() {
        let c = Circle::new(Point2::origin(), 2.0);
        assert_relative_eq!(c.area(), 4.0 * PI);
        assert_relative_eq!(c.circumference(), 4.0 * PI);
        assert_eq!(c.bounding_rectangle(), RectangleF::new(-2.0, -2.0, 4.0, 4.0));
    }
}
