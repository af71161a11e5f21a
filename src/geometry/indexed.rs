use std::hash::{Hash, Hasher};

/// An undirected edge between two vertex indices of a mesh.
///
/// `(a, b)` and `(b, a)` compare equal and hash identically.
#[derive(Debug, Clone, Copy)]
pub struct IndexedEdge {
    pub index_a: u32,
    pub index_b: u32,
}

impl IndexedEdge {
    #[must_use]
    pub const fn new(index_a: u32, index_b: u32) -> Self {
        Self { index_a, index_b }
    }

    /// Returns the endpoints ordered low to high.
    #[must_use]
    pub fn sorted(&self) -> (u32, u32) {
        if self.index_a <= self.index_b {
            (self.index_a, self.index_b)
        } else {
            (self.index_b, self.index_a)
        }
    }

    /// Returns the opposite endpoint of `index`, or `None` if `index` is not
    /// on this edge.
    #[must_use]
    pub fn other(&self, index: u32) -> Option<u32> {
        if index == self.index_a {
            Some(self.index_b)
        } else if index == self.index_b {
            Some(self.index_a)
        } else {
            None
        }
    }
}

impl PartialEq for IndexedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl Eq for IndexedEdge {}

impl Hash for IndexedEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}

/// A triangle of three vertex indices.
///
/// Equality is ordered: rotations and reflections of the same indices are
/// different triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexedTriangle {
    pub index_a: u32,
    pub index_b: u32,
    pub index_c: u32,
}

impl IndexedTriangle {
    #[must_use]
    pub const fn new(index_a: u32, index_b: u32, index_c: u32) -> Self {
        Self {
            index_a,
            index_b,
            index_c,
        }
    }

    /// Returns the three edges `ab`, `bc`, `ca`.
    #[must_use]
    pub fn edges(&self) -> [IndexedEdge; 3] {
        [
            IndexedEdge::new(self.index_a, self.index_b),
            IndexedEdge::new(self.index_b, self.index_c),
            IndexedEdge::new(self.index_c, self.index_a),
        ]
    }

    #[must_use]
    pub fn contains_index(&self, index: u32) -> bool {
        self.index_a == index || self.index_b == index || self.index_c == index
    }
}

impl From<[u32; 3]> for IndexedTriangle {
    fn from([a, b, c]: [u32; 3]) -> Self {
        Self::new(a, b, c)
    }
}
