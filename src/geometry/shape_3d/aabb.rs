use crate::error::{OperationError, Result};
use crate::math::intersect_3d::{
    classify_aabb_plane, closest_point_on_aabb, ray_aabb_intersect, PlaneIntersectionType,
};
use crate::math::{Point3, Vector3};
use crate::operations::query::{ContainmentType, Contains, Intersects};

use super::{Plane, Ray, Sphere};

/// An axis-aligned box spanning `minimum` to `maximum`.
///
/// `minimum <= maximum` component-wise is expected but not checked; an
/// inverted box gives meaningless test results.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub minimum: Point3,
    /// Maximum corner.
    pub maximum: Point3,
}

impl Aabb {
    /// Creates a new box.
    #[must_use]
    pub fn new(minimum: Point3, maximum: Point3) -> Self {
        Self { minimum, maximum }
    }

    /// Returns the smallest box enclosing `sphere`.
    #[must_use]
    pub fn from_sphere(sphere: &Sphere) -> Self {
        let r = Vector3::repeat(sphere.radius());
        Self::new(sphere.center() - r, sphere.center() + r)
    }

    /// Returns the smallest box enclosing both boxes.
    #[must_use]
    pub fn merge(a: &Aabb, b: &Aabb) -> Self {
        Self::new(a.minimum.inf(&b.minimum), a.maximum.sup(&b.maximum))
    }

    /// Returns the smallest box enclosing every point.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::EmptyInput` if the sequence is empty.
    pub fn from_points<'a, I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Point3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next().ok_or(OperationError::EmptyInput("points"))?;
        let mut aabb = Self::new(*first, *first);
        for p in iter {
            aabb.minimum = aabb.minimum.inf(p);
            aabb.maximum = aabb.maximum.sup(p);
        }
        Ok(aabb)
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.minimum, &self.maximum)
    }

    /// Returns `maximum - minimum`.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.maximum - self.minimum
    }

    /// Returns the eight corners.
    ///
    /// Bit 0 of the index selects `x`, bit 1 `y`, bit 2 `z`; a set bit takes
    /// the maximum coordinate.
    #[must_use]
    pub fn corners(&self) -> [Point3; 8] {
        std::array::from_fn(|i| {
            Point3::new(
                if i & 1 == 0 { self.minimum.x } else { self.maximum.x },
                if i & 2 == 0 { self.minimum.y } else { self.maximum.y },
                if i & 4 == 0 { self.minimum.z } else { self.maximum.z },
            )
        })
    }

    /// Returns the point of the box closest to `point`.
    #[must_use]
    pub fn closest_point(&self, point: &Point3) -> Point3 {
        closest_point_on_aabb(point, &self.minimum, &self.maximum)
    }

    fn contains_coords(&self, point: &Point3) -> bool {
        self.minimum.x <= point.x
            && point.x <= self.maximum.x
            && self.minimum.y <= point.y
            && point.y <= self.maximum.y
            && self.minimum.z <= point.z
            && point.z <= self.maximum.z
    }
}

impl Contains<Aabb> for Aabb {
    fn containment(&self, other: &Aabb) -> ContainmentType {
        if !self.intersects(other) {
            return ContainmentType::Disjoint;
        }
        if self.contains_coords(&other.minimum) && self.contains_coords(&other.maximum) {
            ContainmentType::Contains
        } else {
            ContainmentType::Intersects
        }
    }
}

impl Contains<Point3> for Aabb {
    fn containment(&self, other: &Point3) -> ContainmentType {
        if self.contains_coords(other) {
            ContainmentType::Contains
        } else {
            ContainmentType::Disjoint
        }
    }
}

impl Contains<Sphere> for Aabb {
    fn containment(&self, other: &Sphere) -> ContainmentType {
        let c = other.center();
        let r = other.radius();
        let inside = (0..3).all(|i| c[i] - self.minimum[i] >= r && self.maximum[i] - c[i] >= r);
        if inside {
            ContainmentType::Contains
        } else if self.intersects(other) {
            ContainmentType::Intersects
        } else {
            ContainmentType::Disjoint
        }
    }
}

impl Intersects<Aabb> for Aabb {
    type Output = bool;

    fn intersects(&self, other: &Aabb) -> bool {
        (0..3).all(|i| self.maximum[i] >= other.minimum[i] && self.minimum[i] <= other.maximum[i])
    }
}

impl Intersects<Sphere> for Aabb {
    type Output = bool;

    fn intersects(&self, other: &Sphere) -> bool {
        let closest = self.closest_point(other.center());
        nalgebra::distance_squared(&closest, other.center()) <= other.radius() * other.radius()
    }
}

impl Intersects<Plane> for Aabb {
    type Output = PlaneIntersectionType;

    fn intersects(&self, other: &Plane) -> PlaneIntersectionType {
        classify_aabb_plane(&self.minimum, &self.maximum, &other.normal, other.d)
    }
}

impl Intersects<Ray> for Aabb {
    type Output = Option<f64>;

    fn intersects(&self, other: &Ray) -> Option<f64> {
        ray_aabb_intersect(&other.position, &other.direction, &self.minimum, &self.maximum)
    }
}
