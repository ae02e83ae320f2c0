//! Wireframe overlay output

use serde::{Deserialize, Serialize};

/// What became of one input face during a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaceRole {
    /// Merged into the quad at this index of [`Wireframe::quads`].
    Quad(usize),
    /// Drawn with its own three edges.
    Triangle,
    /// Degenerate face, contributes no edges.
    Skipped,
}

/// Line segments to draw over a mesh, plus how each face was classified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wireframe {
    /// Undirected vertex-index pairs. Quad edges come first, then triangle edges.
    pub segments: Vec<[u32; 2]>,
    /// Recovered quads with corners in cyclic boundary order.
    pub quads: Vec<[u32; 4]>,
    /// One role per input face.
    pub roles: Vec<FaceRole>,
}

impl Wireframe {
    /// Create an empty wireframe
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn quad_count(&self) -> usize {
        self.quads.len()
    }

    /// Number of faces drawn as triangles
    pub fn triangle_count(&self) -> usize {
        self.roles
            .iter()
            .filter(|role| matches!(role, FaceRole::Triangle))
            .count()
    }

    /// Number of degenerate faces that were skipped
    pub fn skipped_count(&self) -> usize {
        self.roles
            .iter()
            .filter(|role| matches!(role, FaceRole::Skipped))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Flatten the segments into a line-list index buffer.
    pub fn to_line_indices(&self) -> Vec<u32> {
        bytemuck::cast_slice::<[u32; 2], u32>(&self.segments).to_vec()
    }
}
