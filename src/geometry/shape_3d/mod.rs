mod aabb;
mod plane;
mod ray;
mod sphere;

pub use aabb::Aabb;
pub use plane::Plane;
pub use ray::Ray;
pub use sphere::Sphere;
