use crate::error::{GeometryError, Result};
use crate::math::intersect_3d::{plane_dot_coordinate, PlaneIntersectionType};
use crate::math::{Point3, Vector3, TOLERANCE};

/// An infinite plane `normal · p + d = 0`.
///
/// Constructors that take points produce a unit normal; [`Plane::new`]
/// stores the coefficients as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Plane normal; the positive half-space is in front.
    pub normal: Vector3,
    /// Negated distance from the origin along `normal` (for a unit normal).
    pub d: f64,
}

impl Plane {
    /// Creates a plane from its coefficients.
    #[must_use]
    pub fn new(normal: Vector3, d: f64) -> Self {
        Self { normal, d }
    }

    /// Creates the plane through `point` with the given `normal`.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero-length.
    pub fn from_point_normal(point: &Point3, normal: &Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / len;
        Ok(Self::new(normal, -normal.dot(&point.coords)))
    }

    /// Creates the plane through three points, front side facing
    /// `(b - a) x (c - a)`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the points are collinear.
    pub fn from_points(a: &Point3, b: &Point3, c: &Point3) -> Result<Self> {
        let normal = (b - a).cross(&(c - a));
        if normal.norm() < TOLERANCE {
            return Err(GeometryError::Degenerate("plane points are collinear".into()).into());
        }
        Self::from_point_normal(a, &normal)
    }

    /// Returns a copy with a unit normal.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero-length.
    pub fn normalized(&self) -> Result<Self> {
        let len = self.normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self::new(self.normal / len, self.d / len))
    }

    /// Returns `normal · point + d`, the signed distance for a unit normal.
    #[must_use]
    pub fn dot_coordinate(&self, point: &Point3) -> f64 {
        plane_dot_coordinate(&self.normal, self.d, point)
    }

    /// Classifies a point; points on the plane are `Intersecting`.
    #[must_use]
    pub fn classify_point(&self, point: &Point3) -> PlaneIntersectionType {
        let dist = self.dot_coordinate(point);
        if dist > TOLERANCE {
            PlaneIntersectionType::Front
        } else if dist < -TOLERANCE {
            PlaneIntersectionType::Back
        } else {
            PlaneIntersectionType::Intersecting
        }
    }
}
