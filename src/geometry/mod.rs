pub mod indexed;
pub mod shape_2d;
pub mod shape_3d;

pub use indexed::{IndexedEdge, IndexedTriangle};
pub use shape_2d::{
    Circle, FastLineSegment2, Line2, LineSegment2, OrientedRectangleF, Polygon2, Rectangle,
    RectangleF, Triangle2, TriangleType, VertexOrder,
};
pub use shape_3d::{Aabb, Plane, Ray, Sphere};
