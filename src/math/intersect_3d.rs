use super::{Point3, Vector3, RAY_EPSILON, TOLERANCE};

/// Classification of a shape relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaneIntersectionType {
    /// Entirely on the positive side (in the direction of the normal).
    Front,
    /// Entirely on the negative side (opposite the normal).
    Back,
    /// Straddles or touches the plane.
    Intersecting,
}

/// Signed distance of `point` to the plane `normal · p + d = 0`, scaled by
/// the length of `normal`.
#[must_use]
pub fn plane_dot_coordinate(normal: &Vector3, d: f64, point: &Point3) -> f64 {
    normal.dot(&point.coords) + d
}

/// Classifies the box `[min, max]` against the plane `normal · p + d = 0`.
///
/// Only the two corners extremal along the normal are tested: the negative
/// vertex decides `Front`, the positive vertex decides `Back`.
#[must_use]
pub fn classify_aabb_plane(
    min: &Point3,
    max: &Point3,
    normal: &Vector3,
    d: f64,
) -> PlaneIntersectionType {
    let mut positive = *min;
    let mut negative = *max;
    for i in 0..3 {
        if normal[i] >= 0.0 {
            positive[i] = max[i];
            negative[i] = min[i];
        }
    }

    if plane_dot_coordinate(normal, d, &negative) > 0.0 {
        PlaneIntersectionType::Front
    } else if plane_dot_coordinate(normal, d, &positive) < 0.0 {
        PlaneIntersectionType::Back
    } else {
        PlaneIntersectionType::Intersecting
    }
}

/// Classifies the sphere at `center` with `radius` against the plane
/// `normal · p + d = 0`.
///
/// The normal need not be unit length; the radius is scaled by its norm to
/// match the scaled distance.
#[must_use]
pub fn classify_sphere_plane(
    center: &Point3,
    radius: f64,
    normal: &Vector3,
    d: f64,
) -> PlaneIntersectionType {
    let dist = plane_dot_coordinate(normal, d, center);
    let reach = radius * normal.norm();
    if dist > reach {
        PlaneIntersectionType::Front
    } else if dist < -reach {
        PlaneIntersectionType::Back
    } else {
        PlaneIntersectionType::Intersecting
    }
}

/// Clamps `point` into the box `[min, max]`, giving the closest point of
/// the box.
#[must_use]
pub fn closest_point_on_aabb(point: &Point3, min: &Point3, max: &Point3) -> Point3 {
    point.sup(min).inf(max)
}

/// Ray/box intersection using the slab method.
///
/// Returns the nearest parametric distance `t` (in units of `direction`)
/// at which `origin + t * direction` enters the box `[min, max]`. An
/// origin inside the box yields `Some(0.0)`.
#[must_use]
pub fn ray_aabb_intersect(
    origin: &Point3,
    direction: &Vector3,
    min: &Point3,
    max: &Point3,
) -> Option<f64> {
    let mut min_value = f64::NEG_INFINITY;
    let mut max_value = f64::INFINITY;

    for i in 0..3 {
        if direction[i].abs() < RAY_EPSILON {
            if origin[i] < min[i] || origin[i] > max[i] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / direction[i];
        let mut t_near = (min[i] - origin[i]) * inv;
        let mut t_far = (max[i] - origin[i]) * inv;
        if t_near > t_far {
            std::mem::swap(&mut t_near, &mut t_far);
        }

        min_value = min_value.max(t_near);
        max_value = max_value.min(t_far);
        if min_value > max_value {
            return None;
        }
    }

    // Box entirely behind the ray.
    if max_value < 0.0 {
        return None;
    }
    Some(min_value.max(0.0))
}

/// Ray/sphere intersection.
///
/// Returns the nearest non-negative `t` (in units of `direction`), or
/// `Some(0.0)` when the origin lies inside the sphere.
#[must_use]
pub fn ray_sphere_intersect(
    origin: &Point3,
    direction: &Vector3,
    center: &Point3,
    radius: f64,
) -> Option<f64> {
    let offset = origin - center;
    let c = offset.norm_squared() - radius * radius;
    if c <= 0.0 {
        return Some(0.0);
    }

    let a = direction.norm_squared();
    if a < TOLERANCE {
        return None;
    }
    let b = offset.dot(direction);
    // Origin outside and pointing away.
    if b > 0.0 {
        return None;
    }
    let discriminant = b * b - a * c;
    if discriminant < 0.0 {
        return None;
    }
    Some((-b - discriminant.sqrt()) / a)
}

/// Ray/plane intersection.
///
/// Returns `None` when the ray is parallel to the plane or the plane lies
/// behind the origin.
#[must_use]
pub fn ray_plane_intersect(
    origin: &Point3,
    direction: &Vector3,
    normal: &Vector3,
    d: f64,
) -> Option<f64> {
    let denom = normal.dot(direction);
    if denom.abs() < RAY_EPSILON {
        return None;
    }
    let t = -plane_dot_coordinate(normal, d, origin) / denom;
    if t < -TOLERANCE {
        return None;
    }
    Some(t.max(0.0))
}
