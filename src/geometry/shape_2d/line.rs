use crate::error::{GeometryError, Result};
use crate::math::distance_2d::point_to_line_dist;
use crate::math::{cross_2d, Point2, Vector2, AXIS_EPSILON, TOLERANCE};

/// An infinite line in general form `a*x + b*y + c = 0`.
///
/// Lines built by [`from_points`](Line2::from_points) or
/// [`from_angle`](Line2::from_angle) have direction `(-b, a)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Line2 {
    /// Coefficient of `x`.
    pub a: f64,
    /// Coefficient of `y`.
    pub b: f64,
    /// Constant term.
    pub c: f64,
}

impl Line2 {
    /// Creates a line directly from its coefficients.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Creates the line through `point` with direction angle `angle` (radians,
    /// measured counter-clockwise from +x).
    #[must_use]
    pub fn from_angle(angle: f64, point: &Point2) -> Self {
        let (sin, cos) = angle.sin_cos();
        let a = sin;
        let b = -cos;
        Self::new(a, b, -(a * point.x + b * point.y))
    }

    /// Creates the line through two distinct points, directed from `p1` to `p2`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::CoincidentPoints` if the points are equal.
    pub fn from_points(p1: &Point2, p2: &Point2) -> Result<Self> {
        if p1 == p2 {
            return Err(GeometryError::CoincidentPoints.into());
        }
        let a = p2.y - p1.y;
        let b = p1.x - p2.x;
        Ok(Self::new(a, b, -(a * p1.x + b * p1.y)))
    }

    /// Returns the direction angle in radians, in `(-pi, pi]`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.a.atan2(-self.b)
    }

    /// Returns the (unnormalized) direction vector `(-b, a)`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        Vector2::new(-self.b, self.a)
    }

    /// Returns the (unnormalized) normal vector `(a, b)`.
    #[must_use]
    pub fn normal(&self) -> Vector2 {
        Vector2::new(self.a, self.b)
    }

    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.b.abs() < AXIS_EPSILON
    }

    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.a.abs() < AXIS_EPSILON
    }

    /// Returns whether the two lines have parallel directions.
    #[must_use]
    pub fn is_parallel(&self, other: &Line2) -> bool {
        cross_2d(&self.normal(), &other.normal()).abs() < TOLERANCE
    }

    /// Returns `a*x + b*y + c` for `point`; zero on the line, sign gives the side.
    #[must_use]
    pub fn evaluate(&self, point: &Point2) -> f64 {
        self.a * point.x + self.b * point.y + self.c
    }

    /// Returns the perpendicular distance from `point` to the line.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if both `a` and `b` are zero.
    pub fn distance_to(&self, point: &Point2) -> Result<f64> {
        point_to_line_dist(point, self.a, self.b, self.c).ok_or_else(|| GeometryError::ZeroVector.into())
    }

    /// Returns the point where the two lines cross, or `None` if they are
    /// parallel.
    #[must_use]
    pub fn intersection(&self, other: &Line2) -> Option<Point2> {
        let det = cross_2d(&self.normal(), &other.normal());
        if det.abs() < TOLERANCE {
            return None;
        }
        // Cramer's rule on [a1 b1; a2 b2] [x y]^T = [-c1 -c2]^T.
        let x = (self.b * other.c - other.b * self.c) / det;
        let y = (other.a * self.c - self.a * other.c) / det;
        Some(Point2::new(x, y))
    }
}
