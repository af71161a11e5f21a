use crate::math::Point2i;
use crate::operations::query::{ContainmentType, Contains, Intersects};

use super::{FastLineSegment2, LineSegment2, RectangleF};

/// An axis-aligned rectangle with integer coordinates.
///
/// The position is the top-left corner; `right = x + width` and
/// `bottom = y + height`. Negative sizes are not validated and produce
/// empty results from the tests. Edge comparisons are done in `i64`, so
/// rectangles reaching past `i32::MAX` never overflow; derived rectangles
/// saturate at the `i32` range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rectangle {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Rectangle {
    /// The zero rectangle.
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the left edge.
    #[must_use]
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Returns the right edge (exclusive), wrapping on overflow.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x.wrapping_add(self.width)
    }

    /// Returns the top edge.
    #[must_use]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Returns the bottom edge (exclusive), wrapping on overflow.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y.wrapping_add(self.height)
    }

    #[allow(clippy::cast_lossless)]
    const fn right_wide(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    #[allow(clippy::cast_lossless)]
    const fn bottom_wide(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Returns the top-left corner.
    #[must_use]
    pub fn location(&self) -> Point2i {
        Point2i::new(self.x, self.y)
    }

    /// Returns the center, rounded toward the top-left.
    #[must_use]
    pub fn center(&self) -> Point2i {
        Point2i::new(
            saturate(i64::from(self.x) + i64::from(self.width / 2)),
            saturate(i64::from(self.y) + i64::from(self.height / 2)),
        )
    }

    /// Returns whether every component is zero.
    ///
    /// This is the [`EMPTY`](Self::EMPTY) sentinel test; a rectangle with a
    /// non-positive size but a non-zero position is not empty here, unlike
    /// [`RectangleF::is_empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Returns whether `(x, y)` lies inside the half-open area
    /// `[left, right) x [top, bottom)`.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        let (x, y) = (x as i64, y as i64);
        self.x as i64 <= x && x < self.right_wide() && self.y as i64 <= y && y < self.bottom_wide()
    }

    /// Point form of [`contains`](Self::contains).
    #[must_use]
    pub fn contains_point(&self, point: &Point2i) -> bool {
        self.contains(point.x, point.y)
    }

    /// Returns whether `other` lies entirely inside this rectangle.
    #[must_use]
    pub const fn contains_rect(&self, other: &Rectangle) -> bool {
        self.x <= other.x
            && other.right_wide() <= self.right_wide()
            && self.y <= other.y
            && other.bottom_wide() <= self.bottom_wide()
    }

    /// Moves the rectangle by `(dx, dy)`, saturating at the `i32` range.
    pub fn offset(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }

    /// Grows the rectangle outward by `horizontal` on the left and right and
    /// by `vertical` on the top and bottom, saturating at the `i32` range.
    pub fn inflate(&mut self, horizontal: i32, vertical: i32) {
        self.x = self.x.saturating_sub(horizontal);
        self.y = self.y.saturating_sub(vertical);
        self.width = saturate(i64::from(self.width) + 2 * i64::from(horizontal));
        self.height = saturate(i64::from(self.height) + 2 * i64::from(vertical));
    }

    /// Returns the overlapping area of two rectangles, or [`EMPTY`](Self::EMPTY)
    /// when they do not overlap.
    #[must_use]
    pub fn intersection(a: &Rectangle, b: &Rectangle) -> Rectangle {
        let left = a.x.max(b.x);
        let top = a.y.max(b.y);
        let right = a.right_wide().min(b.right_wide());
        let bottom = a.bottom_wide().min(b.bottom_wide());
        if right < i64::from(left) || bottom < i64::from(top) {
            return Self::EMPTY;
        }
        Self::new(
            left,
            top,
            saturate(right - i64::from(left)),
            saturate(bottom - i64::from(top)),
        )
    }

    /// Returns the smallest rectangle containing both inputs.
    #[must_use]
    pub fn union(a: &Rectangle, b: &Rectangle) -> Rectangle {
        let left = a.x.min(b.x);
        let top = a.y.min(b.y);
        let right = a.right_wide().max(b.right_wide());
        let bottom = a.bottom_wide().max(b.bottom_wide());
        Self::new(
            left,
            top,
            saturate(right - i64::from(left)),
            saturate(bottom - i64::from(top)),
        )
    }

    /// Converts to a floating-point rectangle.
    #[must_use]
    pub fn to_rectangle_f(&self) -> RectangleF {
        RectangleF::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.width),
            f64::from(self.height),
        )
    }
}

impl Contains<Point2i> for Rectangle {
    fn containment(&self, other: &Point2i) -> ContainmentType {
        if self.contains_point(other) {
            ContainmentType::Contains
        } else {
            ContainmentType::Disjoint
        }
    }
}

impl Contains<Rectangle> for Rectangle {
    fn containment(&self, other: &Rectangle) -> ContainmentType {
        if !self.intersects(other) {
            ContainmentType::Disjoint
        } else if self.contains_rect(other) {
            ContainmentType::Contains
        } else {
            ContainmentType::Intersects
        }
    }
}

impl Intersects<Rectangle> for Rectangle {
    type Output = bool;

    fn intersects(&self, other: &Rectangle) -> bool {
        let (sx, sy) = (i64::from(self.x), i64::from(self.y));
        let (ox, oy) = (i64::from(other.x), i64::from(other.y));
        ox <= self.right_wide()
            && sx <= other.right_wide()
            && oy <= self.bottom_wide()
            && sy <= other.bottom_wide()
    }
}

/// Clamps a widened coordinate back into `i32`.
fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

impl Intersects<FastLineSegment2> for Rectangle {
    type Output = bool;

    fn intersects(&self, other: &FastLineSegment2) -> bool {
        self.to_rectangle_f().intersects(other)
    }
}

impl Intersects<LineSegment2> for Rectangle {
    type Output = bool;

    fn intersects(&self, other: &LineSegment2) -> bool {
        self.to_rectangle_f().intersects(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;

    #[test]
    fn edges() {
        let r = Rectangle::new(2, 3, 10, 20);
        assert_eq!(r.left(), 2);
        assert_eq!(r.right(), 12);
        assert_eq!(r.top(), 3);
        assert_eq!(r.bottom(), 23);
        assert_eq!(r.center(), Point2i::new(7, 13));
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rectangle::new(0, 0, 10, 10);
        assert!(r.contains(9, 5));
        assert!(r.contains(0, 0));
        assert!(!r.contains(10, 5));
        assert!(!r.contains(5, 10));
        assert!(!r.contains(-1, 5));
    }

    #[test]
    fn point_containment_type() {
        let r = Rectangle::new(0, 0, 10, 10);
        assert_eq!(r.containment(&Point2i::new(3, 3)), ContainmentType::Contains);
        assert_eq!(r.containment(&Point2i::new(10, 3)), ContainmentType::Disjoint);
    }

    #[test]
    fn rectangle_containment_type() {
        let r = Rectangle::new(0, 0, 10, 10);
        assert_eq!(r.containment(&r), ContainmentType::Contains);
        assert_eq!(
            r.containment(&Rectangle::new(2, 2, 3, 3)),
            ContainmentType::Contains
        );
        assert_eq!(
            r.containment(&Rectangle::new(5, 5, 10, 10)),
            ContainmentType::Intersects
        );
        assert_eq!(
            r.containment(&Rectangle::new(20, 20, 1, 1)),
            ContainmentType::Disjoint
        );
    }

    #[test]
    fn touching_rectangles_intersect() {
        let a = Rectangle::new(0, 0, 10, 10);
        let b = Rectangle::new(10, 0, 5, 5);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&Rectangle::new(11, 0, 5, 5)));
    }

    #[test]
    fn intersection_and_union() {
        let a = Rectangle::new(0, 0, 10, 10);
        let b = Rectangle::new(5, 5, 10, 10);
        assert_eq!(Rectangle::intersection(&a, &b), Rectangle::new(5, 5, 5, 5));
        assert_eq!(Rectangle::union(&a, &b), Rectangle::new(0, 0, 15, 15));
        assert!(Rectangle::intersection(&a, &Rectangle::new(20, 20, 1, 1)).is_empty());
    }

    #[test]
    fn offset_and_inflate() {
        let mut r = Rectangle::new(0, 0, 10, 10);
        r.offset(2, 3);
        assert_eq!(r, Rectangle::new(2, 3, 10, 10));
        r.inflate(1, 2);
        assert_eq!(r, Rectangle::new(1, 1, 12, 14));
    }

    #[test]
    fn segment_through_rectangle() {
        let r = Rectangle::new(0, 0, 10, 10);
        let through = FastLineSegment2::new(Point2::new(-5.0, 5.0), Point2::new(15.0, 5.0));
        let beside = FastLineSegment2::new(Point2::new(-5.0, -5.0), Point2::new(15.0, -5.0));
        assert!(r.intersects(&through));
        assert!(!r.intersects(&beside));
    }

    #[test]
    fn edges_near_i32_max_do_not_overflow() {
        let far = Rectangle::new(i32::MAX - 5, 0, 10, 10);
        assert!(!far.intersects(&Rectangle::new(0, 0, 1, 1)));
        assert!(far.contains(i32::MAX, 5));
        assert!(far.intersects(&Rectangle::new(i32::MAX - 1, 2, 1, 1)));
        assert_eq!(far.right(), i32::MIN + 4);

        let joined = Rectangle::union(&far, &Rectangle::new(i32::MIN, 0, 1, 1));
        assert_eq!(joined, Rectangle::new(i32::MIN, 0, i32::MAX, 10));

        let mut grown = far;
        grown.inflate(i32::MAX, 1);
        assert_eq!(grown.width, i32::MAX);
        assert_eq!(grown.x, -5);
    }

    #[test]
    fn empty_means_the_zero_sentinel() {
        assert!(Rectangle::EMPTY.is_empty());
        let degenerate = Rectangle::new(3, 4, 0, 0);
        assert!(!degenerate.is_empty());
        assert!(degenerate.to_rectangle_f().is_empty());
    }

    #[test]
    fn converts_to_float() {
        let r = Rectangle::new(1, 2, 3, 4).to_rectangle_f();
        assert_eq!(r, RectangleF::new(1.0, 2.0, 3.0, 4.0));
    }
}
