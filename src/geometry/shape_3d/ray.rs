use crate::math::intersect_3d::{ray_aabb_intersect, ray_plane_intersect, ray_sphere_intersect};
use crate::math::{Point3, Vector3};
use crate::operations::query::Intersects;

use super::{Aabb, Plane, Sphere};

/// A half-line `position + t * direction` for `t >= 0`.
///
/// The direction is not normalized; hit distances are reported in units of
/// `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub position: Point3,
    pub direction: Vector3,
}

impl Ray {
    #[must_use]
    pub fn new(position: Point3, direction: Vector3) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Returns `position + t * direction`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.position + self.direction * t
    }
}

impl Intersects<Aabb> for Ray {
    type Output = Option<f64>;

    fn intersects(&self, other: &Aabb) -> Option<f64> {
        ray_aabb_intersect(&self.position, &self.direction, &other.minimum, &other.maximum)
    }
}

impl Intersects<Sphere> for Ray {
    type Output = Option<f64>;

    fn intersects(&self, other: &Sphere) -> Option<f64> {
        ray_sphere_intersect(&self.position, &self.direction, other.center(), other.radius())
    }
}

impl Intersects<Plane> for Ray {
    type Output = Option<f64>;

    fn intersects(&self, other: &Plane) -> Option<f64> {
        ray_plane_intersect(&self.position, &self.direction, &other.normal, other.d)
    }
}
