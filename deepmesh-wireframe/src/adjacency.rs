//! Edge-to-face adjacency for indexed triangle meshes.

use std::collections::HashMap;

/// Canonical undirected edge: the smaller vertex index always comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(u32, u32);

impl EdgeKey {
    /// Canonicalize `(a, b)`. Returns `None` for a self-loop.
    pub fn new(a: u32, b: u32) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(EdgeKey(a, b)),
            std::cmp::Ordering::Greater => Some(EdgeKey(b, a)),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn vertices(&self) -> (u32, u32) {
        (self.0, self.1)
    }
}

/// The three edges of a face in definition order: `(a,b)`, `(b,c)`, `(c,a)`.
pub fn face_edges(face: [u32; 3]) -> [(u32, u32); 3] {
    let [a, b, c] = face;
    [(a, b), (b, c), (c, a)]
}

/// A face is degenerate when it names fewer than three distinct vertices.
pub fn is_degenerate(face: [u32; 3]) -> bool {
    let [a, b, c] = face;
    a == b || b == c || c == a
}

/// Maps each canonical edge to the faces that contain it.
///
/// Edges iterate in the order they were first seen, so walking the
/// adjacency follows face definition order and is reproducible.
#[derive(Debug, Clone, Default)]
pub struct EdgeAdjacency {
    edges: Vec<EdgeKey>,
    faces: Vec<Vec<usize>>,
    lookup: HashMap<EdgeKey, usize>,
}

impl EdgeAdjacency {
    /// Build adjacency for `faces`. Degenerate faces contribute no edges.
    pub fn build(faces: &[[u32; 3]]) -> Self {
        let mut adjacency = Self {
            edges: Vec::with_capacity(faces.len() * 3 / 2),
            faces: Vec::with_capacity(faces.len() * 3 / 2),
            lookup: HashMap::with_capacity(faces.len() * 3 / 2),
        };

        for (face_idx, &face) in faces.iter().enumerate() {
            if is_degenerate(face) {
                continue;
            }
            for (a, b) in face_edges(face) {
                if let Some(key) = EdgeKey::new(a, b) {
                    adjacency.insert(key, face_idx);
                }
            }
        }

        adjacency
    }

    fn insert(&mut self, key: EdgeKey, face_idx: usize) {
        let slot = match self.lookup.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.edges.len();
                self.edges.push(key);
                self.faces.push(Vec::with_capacity(2));
                self.lookup.insert(key, slot);
                slot
            }
        };
        self.faces[slot].push(face_idx);
    }

    /// Number of distinct edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Faces adjacent to the edge `(a, b)` in either orientation.
    pub fn faces_for_edge(&self, a: u32, b: u32) -> Option<&[usize]> {
        let key = EdgeKey::new(a, b)?;
        self.lookup.get(&key).map(|&slot| self.faces[slot].as_slice())
    }

    /// Edges with their adjacent faces, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeKey, &[usize])> + '_ {
        self.edges
            .iter()
            .zip(&self.faces)
            .map(|(&edge, faces)| (edge, faces.as_slice()))
    }

    /// Edges shared by exactly two faces, the only merge candidates.
    pub fn interior_edges(&self) -> impl Iterator<Item = (EdgeKey, usize, usize)> + '_ {
        self.iter().filter_map(|(edge, faces)| match *faces {
            [i, j] => Some((edge, i, j)),
            _ => None,
        })
    }

    /// Count boundary edges (exactly one adjacent face).
    pub fn boundary_edge_count(&self) -> usize {
        self.faces.iter().filter(|faces| faces.len() == 1).count()
    }

    /// Count non-manifold edges (more than two adjacent faces).
    pub fn non_manifold_edge_count(&self) -> usize {
        self.faces.iter().filter(|faces| faces.len() > 2).count()
    }
}
