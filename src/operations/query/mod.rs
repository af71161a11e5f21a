//! Shape-versus-shape containment and intersection queries.
//!
//! Each supported pair implements [`Contains`] and/or [`Intersects`] on the
//! shape types themselves; the free functions [`containment`] and
//! [`intersects`] give the same queries in call form.

/// How much of one shape lies inside another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainmentType {
    /// The shapes share no point.
    Disjoint,
    /// The shapes overlap or touch but neither rule below applies.
    Intersects,
    /// The queried shape lies entirely inside, boundary included.
    Contains,
}

/// Classifies how much of `Rhs` lies inside `Self`.
pub trait Contains<Rhs: ?Sized> {
    fn containment(&self, other: &Rhs) -> ContainmentType;
}

/// Tests whether `Self` meets `Rhs`.
///
/// The output depends on the pair: `bool` for solid-solid tests,
/// [`PlaneIntersectionType`](crate::math::intersect_3d::PlaneIntersectionType)
/// against a plane and `Option<f64>` (nearest hit distance) against a ray.
pub trait Intersects<Rhs: ?Sized> {
    type Output;

    fn intersects(&self, other: &Rhs) -> Self::Output;
}

/// Classifies how much of `b` lies inside `a`.
pub fn containment<A, B>(a: &A, b: &B) -> ContainmentType
where
    A: Contains<B> + ?Sized,
    B: ?Sized,
{
    a.containment(b)
}

/// Tests whether `a` meets `b`.
pub fn intersects<A, B>(a: &A, b: &B) -> A::Output
where
    A: Intersects<B> + ?Sized,
    B: ?Sized,
{
    a.intersects(b)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Aabb, Circle, Polygon2, Ray, Rectangle, RectangleF, Sphere};
    use crate::math::{Point2, Point2i, Point3, Vector2, Vector3};
    use approx::assert_relative_eq;

    fn unit_box() -> Aabb {
        Aabb::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn box_contains_itself() {
        let b = unit_box();
        assert_eq!(containment(&b, &b), ContainmentType::Contains);
    }

    #[test]
    fn sphere_intersects_itself() {
        let s = Sphere::new(Point3::new(1.0, 2.0, 3.0), 0.5).unwrap();
        assert!(intersects(&s, &s));
    }

    #[test]
    fn merged_box_never_disjoint_from_inputs() {
        let a = unit_box();
        let b = Aabb::new(Point3::new(4.0, -7.0, 0.5), Point3::new(9.0, -6.0, 2.0));
        let merged = Aabb::merge(&a, &b);
        assert_ne!(containment(&merged, &a), ContainmentType::Disjoint);
        assert_ne!(containment(&merged, &b), ContainmentType::Disjoint);
    }

    #[test]
    fn rectangle_right_edge_is_excluded() {
        let r = Rectangle::new(0, 0, 10, 10);
        assert_eq!(containment(&r, &Point2i::new(10, 5)), ContainmentType::Disjoint);
        assert_eq!(containment(&r, &Point2i::new(9, 5)), ContainmentType::Contains);
    }

    #[test]
    fn ray_hits_box_at_entry_distance() {
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vector3::z());
        assert_relative_eq!(intersects(&ray, &unit_box()).unwrap(), 4.0);
        assert_relative_eq!(intersects(&unit_box(), &ray).unwrap(), 4.0);
    }

    #[test]
    fn touching_rectangles_intersect() {
        let a = RectangleF::new(0.0, 0.0, 2.0, 2.0);
        let b = RectangleF::new(2.0, 0.0, 2.0, 2.0);
        assert!(intersects(&a, &b));
        assert_eq!(containment(&a, &b), ContainmentType::Intersects);
    }

    #[test]
    fn circle_and_rectangle_agree_both_ways() {
        let c = Circle::new(Point2::new(0.0, 0.0), 1.0);
        let near = RectangleF::new(0.5, 0.5, 2.0, 2.0);
        let far = RectangleF::new(5.0, 5.0, 1.0, 1.0);
        assert!(intersects(&c, &near));
        assert!(intersects(&near, &c));
        assert!(!intersects(&c, &far));
        assert!(!intersects(&far, &c));
    }

    #[test]
    fn polygon_bounds_contain_vertices() {
        let poly = Polygon2::create_rectangle(&Point2::new(1.0, 2.0), &Vector2::new(10.0, 5.0));
        let bounds = RectangleF::from_polygon(&poly).unwrap();
        assert_eq!(containment(&bounds, &Point2::new(1.0, 2.0)), ContainmentType::Contains);
        assert_eq!(containment(&bounds, &Point2::new(0.0, 0.0)), ContainmentType::Disjoint);
    }
}
