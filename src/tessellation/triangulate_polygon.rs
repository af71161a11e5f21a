use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::{FixedFaceHandle, FixedVertexHandle, InnerTag};
use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};

use crate::error::{Result, TessellationError};
use crate::geometry::{IndexedTriangle, Polygon2};

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Triangulates a simple polygon into triangles over its own vertex indices.
///
/// The boundary is inserted as a closed constraint loop into a constrained
/// Delaunay triangulation; triangles inside the loop (odd crossing depth)
/// are kept. Output triangles wind counter-clockwise regardless of the
/// polygon's vertex order. Repeated vertices map to their first index.
pub struct TriangulatePolygon<'a> {
    polygon: &'a Polygon2,
}

impl<'a> TriangulatePolygon<'a> {
    /// Creates a new `TriangulatePolygon` operation.
    #[must_use]
    pub fn new(polygon: &'a Polygon2) -> Self {
        Self { polygon }
    }

    /// Executes the triangulation.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::Failed` if the polygon has fewer than
    /// three vertices, has a non-finite coordinate, or its boundary crosses
    /// itself.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<Vec<IndexedTriangle>> {
        let points: Vec<_> = self
            .polygon
            .vertices()
            .iter()
            .map(|p| SpadePoint2::new(p.x, p.y))
            .collect();

        let mut cdt = Cdt::new();
        let handles = insert_constraint_loop(&mut cdt, &points)?;

        let mut index_of: HashMap<FixedVertexHandle, u32> = HashMap::new();
        for (i, h) in handles.iter().enumerate() {
            index_of.entry(*h).or_insert(i as u32);
        }

        let interior = classify_interior_faces(&cdt);
        let mut triangles = Vec::with_capacity(interior.len());
        for face in cdt.inner_faces() {
            if !interior.contains(&face.fix().index()) {
                continue;
            }
            let mut tri = [0u32; 3];
            for (slot, vh) in tri.iter_mut().zip(face.vertices()) {
                *slot = *index_of.get(&vh.fix()).ok_or_else(|| {
                    TessellationError::Failed("triangulation introduced a vertex".into())
                })?;
            }
            triangles.push(IndexedTriangle::from(tri));
        }

        tracing::debug!(
            vertices = points.len(),
            triangles = triangles.len(),
            "triangulated polygon"
        );
        Ok(triangles)
    }
}

/// Inserts `points` as a closed constraint loop and returns the vertex
/// handle of each point in order.
fn insert_constraint_loop(
    cdt: &mut Cdt,
    points: &[SpadePoint2<f64>],
) -> Result<Vec<FixedVertexHandle>> {
    if points.len() < 3 {
        return Err(
            TessellationError::Failed("constraint loop needs at least 3 points".into()).into(),
        );
    }

    let mut handles = Vec::with_capacity(points.len());
    for &pt in points {
        let h = cdt
            .insert(pt)
            .map_err(|e: InsertionError| TessellationError::Failed(format!("CDT insert: {e}")))?;
        handles.push(h);
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from == to {
            continue;
        }
        if !cdt.can_add_constraint(from, to) {
            return Err(TessellationError::Failed(format!(
                "boundary edge {i} crosses another edge"
            ))
            .into());
        }
        cdt.add_constraint(from, to);
    }

    Ok(handles)
}

/// Flood-fills inner faces outward-in, counting constraint crossings.
/// Faces at odd depth lie inside the loop.
fn classify_interior_faces(cdt: &Cdt) -> HashSet<usize> {
    let mut interior = HashSet::new();
    let mut depth_map: HashMap<usize, u32> = HashMap::new();
    let mut queue: VecDeque<(FixedFaceHandle<InnerTag>, u32)> = VecDeque::new();

    let outer_fix = cdt.outer_face().fix();

    for edge in cdt.directed_edges() {
        if edge.face().fix() != outer_fix {
            continue;
        }
        let Some(inner) = edge.rev().face().as_inner() else {
            continue;
        };
        let idx = inner.fix().index();
        if depth_map.contains_key(&idx) {
            continue;
        }
        let depth = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
        depth_map.insert(idx, depth);
        if depth % 2 == 1 {
            interior.insert(idx);
        }
        queue.push_back((inner.fix(), depth));
    }

    while let Some((face_fix, depth)) = queue.pop_front() {
        for edge in cdt.face(face_fix).adjacent_edges() {
            let Some(neighbor) = edge.rev().face().as_inner() else {
                continue;
            };
            let n_idx = neighbor.fix().index();
            if depth_map.contains_key(&n_idx) {
                continue;
            }
            let new_depth = depth + u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            depth_map.insert(n_idx, new_depth);
            if new_depth % 2 == 1 {
                interior.insert(n_idx);
            }
            queue.push_back((neighbor.fix(), new_depth));
        }
    }

    interior
}
