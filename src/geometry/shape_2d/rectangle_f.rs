use crate::error::{OperationError, Result};
use crate::math::intersect_2d::clip_segment_to_bounds;
use crate::math::{rotate_about, Point2, Vector2};
use crate::operations::query::{ContainmentType, Contains, Intersects};

use super::{FastLineSegment2, LineSegment2, OrientedRectangleF, Polygon2, Rectangle};

/// An axis-aligned rectangle with floating-point coordinates.
///
/// `minimum()` and `maximum()` are synonyms for the top-left position and
/// `position + size`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RectangleF {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl RectangleF {
    /// The zero rectangle.
    pub const EMPTY: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle spanning `minimum` to `maximum`.
    #[must_use]
    pub fn from_min_max(minimum: &Point2, maximum: &Point2) -> Self {
        Self::new(
            minimum.x,
            minimum.y,
            maximum.x - minimum.x,
            maximum.y - minimum.y,
        )
    }

    /// Returns the bounding rectangle of a sequence of points.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::EmptyInput` if the sequence is empty.
    pub fn from_points<'a, I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Point2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next().ok_or(OperationError::EmptyInput("points"))?;
        let (min, max) = iter.fold((*first, *first), |(min, max), p| (min.inf(p), max.sup(p)));
        Ok(Self::from_min_max(&min, &max))
    }

    /// Returns the bounding rectangle of a polygon's vertices.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::EmptyInput` if the polygon has no vertices.
    pub fn from_polygon(polygon: &Polygon2) -> Result<Self> {
        Self::from_points(polygon.vertices())
    }

    /// Returns the bounding rectangle of an oriented rectangle's corners.
    #[must_use]
    pub fn from_oriented_rectangle(rect: &OrientedRectangleF) -> Self {
        let corners = rect.corners();
        let (min, max) = corners[1..]
            .iter()
            .fold((corners[0], corners[0]), |(min, max), p| (min.inf(p), max.sup(p)));
        Self::from_min_max(&min, &max)
    }

    /// Rotates `rect` by `angle` radians around `origin` and returns the
    /// axis-aligned bounds of the result.
    #[must_use]
    pub fn from_rotated_rectangle(rect: &RectangleF, origin: &Point2, angle: f64) -> Self {
        let corners = rect.corners().map(|c| rotate_about(&c, origin, angle));
        let (min, max) = corners[1..]
            .iter()
            .fold((corners[0], corners[0]), |(min, max), p| (min.inf(p), max.sup(p)));
        Self::from_min_max(&min, &max)
    }

    /// Returns the top-left corner.
    #[must_use]
    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Returns `(width, height)` as a vector.
    #[must_use]
    pub fn size(&self) -> Vector2 {
        Vector2::new(self.width, self.height)
    }

    /// Synonym for [`position`](Self::position).
    #[must_use]
    pub fn minimum(&self) -> Point2 {
        self.position()
    }

    /// Returns `position + size`.
    #[must_use]
    pub fn maximum(&self) -> Point2 {
        self.position() + self.size()
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.position() + self.size() * 0.5
    }

    /// Returns the four corners: top-left, top-right, bottom-right, bottom-left.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [
            Point2::new(self.x, self.y),
            Point2::new(self.right(), self.y),
            Point2::new(self.right(), self.bottom()),
            Point2::new(self.x, self.bottom()),
        ]
    }

    /// Returns whether the rectangle has no area.
    ///
    /// Unlike [`Rectangle::is_empty`], which only matches the all-zero
    /// sentinel, any non-positive width or height counts as empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Returns whether `point` lies inside the half-open area
    /// `[left, right) x [top, bottom)`.
    #[must_use]
    pub fn contains_point(&self, point: &Point2) -> bool {
        self.x <= point.x && point.x < self.right() && self.y <= point.y && point.y < self.bottom()
    }

    /// Returns whether `other` lies entirely inside this rectangle.
    #[must_use]
    pub fn contains_rect(&self, other: &RectangleF) -> bool {
        self.x <= other.x
            && other.right() <= self.right()
            && self.y <= other.y
            && other.bottom() <= self.bottom()
    }

    /// Moves the rectangle by `delta`.
    pub fn offset(&mut self, delta: &Vector2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Grows the rectangle outward by `horizontal` and `vertical` on each side.
    pub fn inflate(&mut self, horizontal: f64, vertical: f64) {
        self.x -= horizontal;
        self.y -= vertical;
        self.width += horizontal * 2.0;
        self.height += vertical * 2.0;
    }

    /// Returns the overlapping area, or [`EMPTY`](Self::EMPTY) when disjoint.
    #[must_use]
    pub fn intersection(a: &RectangleF, b: &RectangleF) -> RectangleF {
        let min = a.minimum().sup(&b.minimum());
        let max = a.maximum().inf(&b.maximum());
        if max.x < min.x || max.y < min.y {
            return Self::EMPTY;
        }
        Self::from_min_max(&min, &max)
    }

    /// Returns the smallest rectangle containing both inputs.
    #[must_use]
    pub fn union(a: &RectangleF, b: &RectangleF) -> RectangleF {
        Self::from_min_max(&a.minimum().inf(&b.minimum()), &a.maximum().sup(&b.maximum()))
    }

    /// Clips a segment to this rectangle.
    ///
    /// Returns the part of the segment inside the rectangle, or `None` if
    /// the segment misses it.
    #[must_use]
    pub fn clip_segment(&self, segment: &FastLineSegment2) -> Option<FastLineSegment2> {
        let (t0, t1) =
            clip_segment_to_bounds(&self.minimum(), &self.maximum(), &segment.start, &segment.end)?;
        Some(FastLineSegment2::new(segment.point_at(t0), segment.point_at(t1)))
    }

    /// Converts to an integer rectangle, truncating each component toward zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_rectangle(&self) -> Rectangle {
        Rectangle::new(
            self.x as i32,
            self.y as i32,
            self.width as i32,
            self.height as i32,
        )
    }
}

impl Contains<Point2> for RectangleF {
    fn containment(&self, other: &Point2) -> ContainmentType {
        if self.contains_point(other) {
            ContainmentType::Contains
        } else {
            ContainmentType::Disjoint
        }
    }
}

impl Contains<RectangleF> for RectangleF {
    fn containment(&self, other: &RectangleF) -> ContainmentType {
        if !self.intersects(other) {
            ContainmentType::Disjoint
        } else if self.contains_rect(other) {
            ContainmentType::Contains
        } else {
            ContainmentType::Intersects
        }
    }
}

impl Intersects<RectangleF> for RectangleF {
    type Output = bool;

    fn intersects(&self, other: &RectangleF) -> bool {
        other.x <= self.right()
            && self.x <= other.right()
            && other.y <= self.bottom()
            && self.y <= other.bottom()
    }
}

impl Intersects<FastLineSegment2> for RectangleF {
    type Output = bool;

    fn intersects(&self, other: &FastLineSegment2) -> bool {
        clip_segment_to_bounds(&self.minimum(), &self.maximum(), &other.start, &other.end)
            .is_some()
    }
}

impl Intersects<LineSegment2> for RectangleF {
    type Output = bool;

    fn intersects(&self, other: &LineSegment2) -> bool {
        self.intersects(&FastLineSegment2::from(*other))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn min_max_synonyms() {
        let r = RectangleF::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.minimum(), r.position());
        assert_eq!(r.maximum(), p(4.0, 6.0));
        assert_eq!(r.center(), p(2.5, 4.0));
    }

    #[test]
    fn contains_point_half_open() {
        let r = RectangleF::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(&p(0.0, 0.0)));
        assert!(r.contains_point(&p(9.99, 5.0)));
        assert!(!r.contains_point(&p(10.0, 5.0)));
        assert_eq!(r.containment(&p(5.0, 5.0)), ContainmentType::Contains);
    }

    #[test]
    fn rectangle_containment() {
        let r = RectangleF::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(r.containment(&r), ContainmentType::Contains);
        assert_eq!(
            r.containment(&RectangleF::new(8.0, 8.0, 4.0, 4.0)),
            ContainmentType::Intersects
        );
        assert_eq!(
            r.containment(&RectangleF::new(10.0, 0.0, 4.0, 4.0)),
            ContainmentType::Intersects
        );
        assert_eq!(
            r.containment(&RectangleF::new(10.5, 0.0, 4.0, 4.0)),
            ContainmentType::Disjoint
        );
    }

    #[test]
    fn bounds_of_polygon() {
        let poly = Polygon2::from_vertices([p(1.0, 2.0), p(5.0, -1.0), p(3.0, 7.0)]);
        let r = RectangleF::from_polygon(&poly).unwrap();
        assert_eq!(r, RectangleF::new(1.0, -1.0, 4.0, 8.0));
    }

    #[test]
    fn bounds_of_empty_polygon_fails() {
        assert!(RectangleF::from_polygon(&Polygon2::new()).is_err());
    }

    #[test]
    fn rotated_bounds() {
        let r = RectangleF::new(0.0, 0.0, 4.0, 2.0);
        let b = RectangleF::from_rotated_rectangle(&r, &Point2::origin(), FRAC_PI_2);
        assert_relative_eq!(b.x, -2.0, epsilon = 1e-12);
        assert_relative_eq!(b.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(b.width, 2.0, epsilon = 1e-12);
        assert_relative_eq!(b.height, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn bounds_of_oriented_rectangle() {
        let o = OrientedRectangleF::new(p(0.0, 1.0), p(1.0, 0.0), p(1.0, 2.0));
        let b = RectangleF::from_oriented_rectangle(&o);
        assert_relative_eq!(b.minimum(), p(0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(b.maximum(), p(2.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn segment_clip() {
        let r = RectangleF::new(0.0, 0.0, 10.0, 10.0);
        let s = FastLineSegment2::new(p(-5.0, 5.0), p(15.0, 5.0));
        let clipped = r.clip_segment(&s).unwrap();
        assert_relative_eq!(clipped.start, p(0.0, 5.0), epsilon = 1e-12);
        assert_relative_eq!(clipped.end, p(10.0, 5.0), epsilon = 1e-12);
    }

    #[test]
    fn segment_intersection() {
        let r = RectangleF::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.intersects(&FastLineSegment2::new(p(2.0, 2.0), p(3.0, 3.0))));
        assert!(r.intersects(&FastLineSegment2::new(p(-1.0, 11.0), p(11.0, -1.0))));
        assert!(!r.intersects(&FastLineSegment2::new(p(11.0, 0.0), p(20.0, 10.0))));
        assert!(r.intersects(&LineSegment2::new(p(-1.0, 5.0), p(1.0, 5.0))));
    }

    #[test]
    fn intersection_union() {
        let a = RectangleF::new(0.0, 0.0, 4.0, 4.0);
        let b = RectangleF::new(2.0, 1.0, 4.0, 4.0);
        assert_eq!(RectangleF::intersection(&a, &b), RectangleF::new(2.0, 1.0, 2.0, 3.0));
        assert_eq!(RectangleF::union(&a, &b), RectangleF::new(0.0, 0.0, 6.0, 5.0));
    }

    #[test]
    fn truncating_conversion() {
        let r = RectangleF::new(1.7, -2.7, 3.2, 4.9).to_rectangle();
        assert_eq!(r, Rectangle::new(1, -2, 3, 4));
    }
}
