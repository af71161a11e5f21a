pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{AtomError, Result};
pub use geometry::{
    Aabb, Circle, FastLineSegment2, IndexedEdge, IndexedTriangle, Line2, LineSegment2,
    OrientedRectangleF, Plane, Polygon2, Ray, Rectangle, RectangleF, Sphere, Triangle2,
    TriangleType, VertexOrder,
};
pub use math::intersect_3d::PlaneIntersectionType;
pub use operations::query::{containment, intersects, ContainmentType, Contains, Intersects};
