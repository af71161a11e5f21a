use std::f64::consts::{PI, TAU};

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::IndexedTriangle;
use crate::math::polygon_2d::{
    centroid_2d, is_convex_2d, moment_of_inertia_2d, point_in_polygon_2d, signed_area_2d,
};
use crate::math::{rotate_about, Point2, Vector2, TOLERANCE};
use crate::tessellation::TriangulatePolygon;

use super::LineSegment2;

/// Winding direction of a polygon's vertex sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexOrder {
    /// Negative signed area.
    Clockwise,
    /// Positive signed area.
    AntiClockwise,
    /// Zero signed area (degenerate or fewer than three vertices).
    None,
}

/// A closed polygon given by an ordered vertex sequence.
///
/// Insertion order is the winding order. The last vertex connects back to
/// the first; the closing vertex is not repeated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon2 {
    vertices: Vec<Point2>,
}

impl Polygon2 {
    /// Creates an empty polygon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a polygon from vertices in winding order.
    #[must_use]
    pub fn from_vertices(vertices: impl IntoIterator<Item = Point2>) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
        }
    }

    /// Creates an axis-aligned rectangle with its minimum corner at `offset`,
    /// wound anticlockwise.
    #[must_use]
    pub fn create_rectangle(offset: &Point2, dimensions: &Vector2) -> Self {
        Self::from_vertices([
            *offset,
            Point2::new(offset.x + dimensions.x, offset.y),
            offset + dimensions,
            Point2::new(offset.x, offset.y + dimensions.y),
        ])
    }

    /// Creates a regular `segments`-gon inscribed in a circle of `radius`
    /// around the origin, wound anticlockwise from `(radius, 0)`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `segments < 3`.
    #[allow(clippy::cast_precision_loss)]
    pub fn create_circle(radius: f64, segments: usize) -> Result<Self> {
        if segments < 3 {
            return Err(OperationError::InvalidInput(format!(
                "circle needs at least 3 segments, got {segments}"
            ))
            .into());
        }

        let step = TAU / segments as f64;
        Ok(Self::from_vertices((0..segments).map(|i| {
            let (sin, cos) = (step * i as f64).sin_cos();
            Point2::new(radius * cos, radius * sin)
        })))
    }

    /// Creates a star around the origin alternating between `outer_radius`
    /// tips and `inner_radius` notches, starting with a tip on `+x`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `spikes` is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn create_star(outer_radius: f64, inner_radius: f64, spikes: usize) -> Result<Self> {
        if spikes == 0 {
            return Err(OperationError::InvalidInput("star needs at least 1 spike".into()).into());
        }

        let step = PI / spikes as f64;
        Ok(Self::from_vertices((0..spikes * 2).map(|i| {
            let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
            let (sin, cos) = (step * i as f64).sin_cos();
            Point2::new(radius * cos, radius * sin)
        })))
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertices in winding order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns the vertex at `index`, if any.
    #[must_use]
    pub fn vertex_at(&self, index: usize) -> Option<Point2> {
        self.vertices.get(index).copied()
    }

    /// Replaces the vertex at `index`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::IndexOutOfRange` if `index >= len()`.
    pub fn set_vertex(&mut self, index: usize, vertex: Point2) -> Result<()> {
        let len = self.vertices.len();
        let slot = self
            .vertices
            .get_mut(index)
            .ok_or(OperationError::IndexOutOfRange { index, len })?;
        *slot = vertex;
        Ok(())
    }

    /// Appends a vertex at the end of the winding.
    pub fn push(&mut self, vertex: Point2) {
        self.vertices.push(vertex);
    }

    /// Returns the edges in winding order, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = LineSegment2> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| LineSegment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Signed area by the shoelace formula; positive when anticlockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Returns the area centroid.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the signed area is zero.
    pub fn centroid(&self) -> Result<Point2> {
        centroid_2d(&self.vertices)
    }

    /// Returns the polar moment of inertia per unit mass about the centroid.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the signed area is zero.
    pub fn moment_of_inertia(&self) -> Result<f64> {
        moment_of_inertia_2d(&self.vertices)
    }

    /// Returns the winding direction derived from the signed area.
    #[must_use]
    pub fn vertex_order(&self) -> VertexOrder {
        let area = self.signed_area();
        if area > TOLERANCE {
            VertexOrder::AntiClockwise
        } else if area < -TOLERANCE {
            VertexOrder::Clockwise
        } else {
            VertexOrder::None
        }
    }

    /// Reverses the vertex list when the current winding differs from `order`.
    ///
    /// Requesting [`VertexOrder::None`], or any order on a degenerate
    /// polygon, leaves the vertices untouched.
    pub fn set_vertex_order(&mut self, order: VertexOrder) {
        let current = self.vertex_order();
        if order != VertexOrder::None && current != VertexOrder::None && current != order {
            self.invert_vertex_order();
        }
    }

    /// Reverses the winding.
    pub fn invert_vertex_order(&mut self) {
        self.vertices.reverse();
    }

    /// Moves every vertex by `offset`.
    pub fn translate(&mut self, offset: &Vector2) {
        for v in &mut self.vertices {
            *v += *offset;
        }
    }

    /// Rotates every vertex counter-clockwise by `angle` radians around `pivot`.
    pub fn rotate(&mut self, pivot: &Point2, angle: f64) {
        for v in &mut self.vertices {
            *v = rotate_about(v, pivot, angle);
        }
    }

    /// Scales every vertex component-wise relative to `pivot`.
    pub fn scale(&mut self, pivot: &Point2, factor: &Vector2) {
        for v in &mut self.vertices {
            *v = pivot + (*v - pivot).component_mul(factor);
        }
    }

    /// Splits every edge longer than `max_edge_length` into equal pieces no
    /// longer than it.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if `max_edge_length` is
    /// not positive.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn subdivide_edges(&mut self, max_edge_length: f64) -> Result<()> {
        if max_edge_length <= 0.0 || !max_edge_length.is_finite() {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "max_edge_length",
                value: max_edge_length,
                min: TOLERANCE,
                max: f64::MAX,
            }
            .into());
        }

        let mut result = Vec::with_capacity(self.vertices.len());
        for edge in self.edges() {
            result.push(edge.start);
            let pieces = (edge.length() / max_edge_length).ceil() as usize;
            for k in 1..pieces {
                let t = k as f64 / pieces as f64;
                result.push(edge.start + edge.direction() * t);
            }
        }

        tracing::trace!(
            before = self.vertices.len(),
            after = result.len(),
            "subdivided polygon edges"
        );
        self.vertices = result;
        Ok(())
    }

    /// Even-odd point containment test.
    #[must_use]
    pub fn contains_point(&self, point: &Point2) -> bool {
        point_in_polygon_2d(point, &self.vertices)
    }

    #[must_use]
    pub fn is_convex(&self) -> bool {
        is_convex_2d(&self.vertices)
    }

    /// Triangulates the polygon into vertex-index triangles.
    ///
    /// # Errors
    ///
    /// Returns a tessellation error if the polygon has fewer than three
    /// vertices or the triangulation fails.
    pub fn triangulate(&self) -> Result<Vec<IndexedTriangle>> {
        TriangulatePolygon::new(self).execute()
    }
}
