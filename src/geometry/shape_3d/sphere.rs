use crate::error::{GeometryError, OperationError, Result};
use crate::math::intersect_3d::{classify_sphere_plane, ray_sphere_intersect, PlaneIntersectionType};
use crate::math::{Point3, TOLERANCE};
use crate::operations::query::{ContainmentType, Contains, Intersects};

use super::{Aabb, Plane, Ray};

/// A solid sphere in 3D space.
///
/// The radius is validated on construction and never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    /// Creates a new sphere.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NegativeRadius` if `radius < 0`.
    pub fn new(center: Point3, radius: f64) -> Result<Self> {
        if radius < 0.0 || radius.is_nan() {
            return Err(GeometryError::NegativeRadius { radius }.into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the sphere.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the sphere through all eight corners of `aabb`.
    #[must_use]
    pub fn from_box(aabb: &Aabb) -> Self {
        let center = aabb.center();
        Self {
            center,
            radius: nalgebra::distance(&center, &aabb.maximum),
        }
    }

    /// Returns the smallest sphere enclosing both spheres.
    ///
    /// When one sphere already contains the other it is returned unchanged.
    #[must_use]
    pub fn merge(original: &Sphere, additional: &Sphere) -> Self {
        let offset = additional.center - original.center;
        let distance = offset.norm();

        if distance <= original.radius - additional.radius {
            return *original;
        }
        if distance <= additional.radius - original.radius {
            return *additional;
        }

        // Extremes of the union along the line of centres, measured from
        // the original center.
        let near = (-original.radius).min(distance - additional.radius);
        let far = original.radius.max(distance + additional.radius);
        let radius = (far - near) * 0.5;
        let center = original.center + offset * ((far + near) * 0.5 / distance);
        Self { center, radius }
    }

    /// Returns an enclosing sphere for a point set.
    ///
    /// Seeds the sphere from the extreme points of the axis with the
    /// greatest spread, then grows it to cover any point left outside. The
    /// result encloses every point but is not guaranteed minimal.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::EmptyInput` if the sequence is empty.
    pub fn from_points<'a, I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Point3>,
        I::IntoIter: Clone,
    {
        let iter = points.into_iter();
        let first = *iter.clone().next().ok_or(OperationError::EmptyInput("points"))?;

        // Extreme points along each axis.
        let mut min_pts = [first; 3];
        let mut max_pts = [first; 3];
        for p in iter.clone() {
            for axis in 0..3 {
                if p[axis] < min_pts[axis][axis] {
                    min_pts[axis] = *p;
                }
                if p[axis] > max_pts[axis][axis] {
                    max_pts[axis] = *p;
                }
            }
        }

        let axis = (0..3)
            .max_by(|&a, &b| {
                let da = nalgebra::distance_squared(&min_pts[a], &max_pts[a]);
                let db = nalgebra::distance_squared(&min_pts[b], &max_pts[b]);
                da.total_cmp(&db)
            })
            .unwrap_or(0);

        let mut center = nalgebra::center(&min_pts[axis], &max_pts[axis]);
        let mut radius = nalgebra::distance(&max_pts[axis], &center);
        tracing::debug!(axis, radius, "seeded bounding sphere");

        for p in iter {
            let diff = p - center;
            let dist = diff.norm();
            if dist > radius + TOLERANCE {
                // Move the center toward p so the far side stays covered.
                let back = center - diff * (radius / dist);
                center = nalgebra::center(&back, p);
                radius = nalgebra::distance(p, &center);
            }
        }

        Ok(Self { center, radius })
    }
}

impl Contains<Point3> for Sphere {
    fn containment(&self, other: &Point3) -> ContainmentType {
        if nalgebra::distance_squared(&self.center, other) <= self.radius * self.radius {
            ContainmentType::Contains
        } else {
            ContainmentType::Disjoint
        }
    }
}

impl Contains<Sphere> for Sphere {
    fn containment(&self, other: &Sphere) -> ContainmentType {
        let distance = nalgebra::distance(&self.center, &other.center);
        if distance > self.radius + other.radius {
            ContainmentType::Disjoint
        } else if distance <= self.radius - other.radius {
            ContainmentType::Contains
        } else {
            ContainmentType::Intersects
        }
    }
}

impl Contains<Aabb> for Sphere {
    fn containment(&self, other: &Aabb) -> ContainmentType {
        if !self.intersects(other) {
            return ContainmentType::Disjoint;
        }
        let r_sq = self.radius * self.radius;
        let outside = other
            .corners()
            .iter()
            .any(|corner| (corner - self.center).norm_squared() > r_sq);
        if outside {
            ContainmentType::Intersects
        } else {
            ContainmentType::Contains
        }
    }
}

impl Intersects<Sphere> for Sphere {
    type Output = bool;

    fn intersects(&self, other: &Sphere) -> bool {
        let r = self.radius + other.radius;
        nalgebra::distance_squared(&self.center, &other.center) <= r * r
    }
}

impl Intersects<Aabb> for Sphere {
    type Output = bool;

    fn intersects(&self, other: &Aabb) -> bool {
        other.intersects(self)
    }
}

impl Intersects<Plane> for Sphere {
    type Output = PlaneIntersectionType;

    fn intersects(&self, other: &Plane) -> PlaneIntersectionType {
        classify_sphere_plane(&self.center, self.radius, &other.normal, other.d)
    }
}

impl Intersects<Ray> for Sphere {
    type Output = Option<f64>;

    fn intersects(&self, other: &Ray) -> Option<f64> {
        ray_sphere_intersect(&other.position, &other.direction, &self.center, self.radius)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn sphere(x: f64, y: f64, z: f64, r: f64) -> Sphere {
        Sphere::new(p(x, y, z), r).unwrap()
    }

    #[test]
    fn negative_radius_rejected() {
        assert!(Sphere::new(Point3::origin(), -1.0).is_err());
        assert!(Sphere::new(Point3::origin(), 0.0).is_ok());
    }

    #[test]
    fn intersects_itself() {
        for s in [sphere(0.0, 0.0, 0.0, 1.0), sphere(3.0, -2.0, 1.0, 0.0)] {
            assert!(s.intersects(&s));
        }
    }

    #[test]
    fn sphere_sphere_classification() {
        let big = sphere(0.0, 0.0, 0.0, 5.0);
        assert_eq!(big.containment(&sphere(1.0, 0.0, 0.0, 1.0)), ContainmentType::Contains);
        assert_eq!(big.containment(&sphere(5.0, 0.0, 0.0, 1.0)), ContainmentType::Intersects);
        assert_eq!(big.containment(&sphere(6.0, 0.0, 0.0, 1.0)), ContainmentType::Intersects);
        assert_eq!(big.containment(&sphere(6.5, 0.0, 0.0, 1.0)), ContainmentType::Disjoint);
    }

    #[test]
    fn sphere_point_classification() {
        let s = sphere(0.0, 0.0, 0.0, 2.0);
        assert_eq!(s.containment(&p(0.0, 2.0, 0.0)), ContainmentType::Contains);
        assert_eq!(s.containment(&p(0.0, 2.1, 0.0)), ContainmentType::Disjoint);
    }

    #[test]
    fn sphere_box_classification() {
        let s = sphere(0.0, 0.0, 0.0, 2.0);
        let inside = Aabb::new(p(-1.0, -1.0, -1.0), p(1.0, 1.0, 1.0));
        assert_eq!(s.containment(&inside), ContainmentType::Contains);

        // Corners at y = 1.5, z = -1.5 poke outside.
        let lopsided = Aabb::new(p(-1.0, -1.0, -1.5), p(0.5, 1.5, 0.5));
        assert_eq!(s.containment(&lopsided), ContainmentType::Intersects);

        let far = Aabb::new(p(5.0, 5.0, 5.0), p(6.0, 6.0, 6.0));
        assert_eq!(s.containment(&far), ContainmentType::Disjoint);
    }

    #[test]
    fn from_box_reaches_corners() {
        let b = Aabb::new(p(0.0, 0.0, 0.0), p(2.0, 2.0, 2.0));
        let s = Sphere::from_box(&b);
        assert_eq!(*s.center(), p(1.0, 1.0, 1.0));
        assert_relative_eq!(s.radius(), 3.0_f64.sqrt());
        assert_eq!(s.containment(&b), ContainmentType::Contains);
    }

    #[test]
    fn merge_disjoint_spheres() {
        let a = sphere(0.0, 0.0, 0.0, 1.0);
        let b = sphere(4.0, 0.0, 0.0, 1.0);
        let m = Sphere::merge(&a, &b);
        assert_relative_eq!(*m.center(), p(2.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(m.radius(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn merge_unequal_spheres() {
        let a = sphere(0.0, 0.0, 0.0, 2.0);
        let b = sphere(3.0, 0.0, 0.0, 2.0);
        let m = Sphere::merge(&a, &b);
        // Union spans x in [-2, 5].
        assert_relative_eq!(*m.center(), p(1.5, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(m.radius(), 3.5, epsilon = 1e-12);
        assert_eq!(m.containment(&a), ContainmentType::Contains);
        assert_eq!(m.containment(&b), ContainmentType::Contains);
    }

    #[test]
    fn merge_keeps_containing_sphere() {
        let big = sphere(0.0, 0.0, 0.0, 5.0);
        let small = sphere(1.0, 1.0, 0.0, 1.0);
        assert_eq!(Sphere::merge(&big, &small), big);
        assert_eq!(Sphere::merge(&small, &big), big);
    }

    #[test]
    fn from_points_encloses_all() {
        let pts = [
            p(1.0, 0.0, 0.0),
            p(-1.0, 0.0, 0.0),
            p(0.0, 3.0, 0.0),
            p(0.0, -3.0, 0.0),
            p(0.0, 0.0, 2.0),
            p(2.0, 2.0, 2.0),
        ];
        let s = Sphere::from_points(&pts).unwrap();
        for pt in &pts {
            assert!(
                nalgebra::distance(s.center(), pt) <= s.radius() + 1e-9,
                "{pt} outside sphere"
            );
        }
    }

    #[test]
    fn from_single_point() {
        let s = Sphere::from_points(&[p(1.0, 2.0, 3.0)]).unwrap();
        assert_eq!(*s.center(), p(1.0, 2.0, 3.0));
        assert_relative_eq!(s.radius(), 0.0);
    }

    #[test]
    fn from_no_points_fails() {
        let pts: [Point3; 0] = [];
        assert!(Sphere::from_points(&pts).is_err());
    }

    #[test]
    fn sphere_plane_and_ray() {
        let s = sphere(0.0, 0.0, 5.0, 1.0);
        let ground = Plane::from_point_normal(&Point3::origin(), &Vector3::z()).unwrap();
        assert_eq!(s.intersects(&ground), PlaneIntersectionType::Front);
        let ray = Ray::new(Point3::origin(), Vector3::z());
        assert_relative_eq!(s.intersects(&ray).unwrap(), 4.0);
    }

    #[test]
    fn unnormalized_plane_classification() {
        let plane = Plane::new(Vector3::new(0.0, 0.0, 2.0), 0.0);
        let crossing = sphere(0.0, 0.0, 0.8, 1.0);
        assert_eq!(crossing.intersects(&plane), PlaneIntersectionType::Intersecting);
        assert_eq!(
            crossing.intersects(&plane),
            crossing.intersects(&plane.normalized().unwrap())
        );
        assert_eq!(sphere(0.0, 0.0, -3.0, 1.0).intersects(&plane), PlaneIntersectionType::Back);
    }
}
