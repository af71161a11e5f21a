use crate::math::{Point2, Vector2};

use super::LineSegment2;

/// A bare segment between two points, without any derived line data.
///
/// Used on hot paths such as rectangle clipping. Converts to and from
/// [`LineSegment2`] with `From`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FastLineSegment2 {
    pub start: Point2,
    pub end: Point2,
}

impl FastLineSegment2 {
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.direction().norm_squared()
    }

    /// Returns `start + t * (end - start)`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.start + self.direction() * t
    }
}

impl From<LineSegment2> for FastLineSegment2 {
    fn from(segment: LineSegment2) -> Self {
        Self::new(segment.start, segment.end)
    }
}

impl From<FastLineSegment2> for LineSegment2 {
    fn from(segment: FastLineSegment2) -> Self {
        LineSegment2::new(segment.start, segment.end)
    }
}
