mod circle;
mod fast_line_segment;
mod line;
mod line_segment;
mod oriented_rectangle;
mod polygon;
mod rectangle;
mod rectangle_f;
mod triangle;

pub use circle::Circle;
pub use fast_line_segment::FastLineSegment2;
pub use line::Line2;
pub use line_segment::LineSegment2;
pub use oriented_rectangle::OrientedRectangleF;
pub use polygon::{Polygon2, VertexOrder};
pub use rectangle::Rectangle;
pub use rectangle_f::RectangleF;
pub use triangle::{Triangle2, TriangleType};
