use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::point_in_spanned_rect;
use crate::math::{rotate_about, Point2, Vector2, TOLERANCE};
use crate::operations::query::Intersects;

use super::{FastLineSegment2, LineSegment2, RectangleF};

/// A rectangle rotated in the plane, stored as three of its corners.
///
/// The fourth corner is derived as
/// `lower_right = lower_left - (upper_left - upper_right)`, so only true
/// rectangles (and parallelograms) are representable.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrientedRectangleF {
    pub upper_left: Point2,
    pub upper_right: Point2,
    pub lower_left: Point2,
}

impl OrientedRectangleF {
    #[must_use]
    pub fn new(upper_left: Point2, upper_right: Point2, lower_left: Point2) -> Self {
        Self {
            upper_left,
            upper_right,
            lower_left,
        }
    }

    /// Rotates `rect` by `angle` radians about its center.
    #[must_use]
    pub fn from_rectangle(rect: &RectangleF, angle: f64) -> Self {
        let center = rect.center();
        let [upper_left, upper_right, _, lower_left] = rect.corners();
        Self::new(
            rotate_about(&upper_left, &center, angle),
            rotate_about(&upper_right, &center, angle),
            rotate_about(&lower_left, &center, angle),
        )
    }

    /// Builds a rectangle of the given `width` centred on `line`.
    ///
    /// The upper edge runs parallel to the line at `width / 2` on its left,
    /// the lower edge at `width / 2` on its right.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the segment has zero length.
    pub fn from_line(line: &LineSegment2, width: f64) -> Result<Self> {
        let len = line.length();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let dir = line.direction() / len;
        let offset = Vector2::new(-dir.y, dir.x) * (width * 0.5);
        Ok(Self::new(
            line.start + offset,
            line.end + offset,
            line.start - offset,
        ))
    }

    /// Returns the derived fourth corner.
    #[must_use]
    pub fn lower_right(&self) -> Point2 {
        self.lower_left - (self.upper_left - self.upper_right)
    }

    /// Returns the corners in order: upper-left, upper-right, lower-right,
    /// lower-left.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [
            self.upper_left,
            self.upper_right,
            self.lower_right(),
            self.lower_left,
        ]
    }

    /// Returns the four boundary edges, following [`corners`](Self::corners).
    #[must_use]
    pub fn edges(&self) -> [FastLineSegment2; 4] {
        let c = self.corners();
        [
            FastLineSegment2::new(c[0], c[1]),
            FastLineSegment2::new(c[1], c[2]),
            FastLineSegment2::new(c[2], c[3]),
            FastLineSegment2::new(c[3], c[0]),
        ]
    }

    /// Length of the upper edge.
    #[must_use]
    pub fn width(&self) -> f64 {
        nalgebra::distance(&self.upper_left, &self.upper_right)
    }

    /// Length of the left edge.
    #[must_use]
    pub fn height(&self) -> f64 {
        nalgebra::distance(&self.upper_left, &self.lower_left)
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.upper_right, &self.lower_left)
    }

    /// Returns whether `point` lies inside or on the rectangle.
    #[must_use]
    pub fn contains_point(&self, point: &Point2) -> bool {
        point_in_spanned_rect(
            point,
            &self.upper_left,
            &(self.upper_right - self.upper_left),
            &(self.lower_left - self.upper_left),
        )
    }
}

impl Intersects<RectangleF> for OrientedRectangleF {
    type Output = bool;

    fn intersects(&self, other: &RectangleF) -> bool {
        self.edges().iter().any(|edge| other.intersects(edge))
            || other.contains_point(&self.upper_left)
            || self.contains_point(&other.position())
    }
}

impl Intersects<OrientedRectangleF> for RectangleF {
    type Output = bool;

    fn intersects(&self, other: &OrientedRectangleF) -> bool {
        other.intersects(self)
    }
}
