pub mod distance_2d;
pub mod intersect_2d;
pub mod intersect_3d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D integer point type, used by [`Rectangle`](crate::geometry::Rectangle).
pub type Point2i = nalgebra::Point2<i32>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Direction components below this magnitude are treated as parallel to a slab.
pub const RAY_EPSILON: f64 = 1e-6;

/// Coefficient magnitude below which a [`Line2`](crate::geometry::Line2) is
/// considered axis-aligned.
pub const AXIS_EPSILON: f64 = 1e-6;

/// 2D cross product (z component of the 3D cross product).
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Rotates `point` counter-clockwise by `angle` radians around `pivot`.
#[must_use]
pub fn rotate_about(point: &Point2, pivot: &Point2, angle: f64) -> Point2 {
    let (sin, cos) = angle.sin_cos();
    let d = point - pivot;
    Point2::new(
        pivot.x + d.x * cos - d.y * sin,
        pivot.y + d.x * sin + d.y * cos,
    )
}
