//! Plain triangle wireframe, every unique edge drawn once

use crate::adjacency::EdgeAdjacency;
use crate::quad_wireframe::classify_degenerate;
use crate::wireframe::{FaceRole, Wireframe};
use crate::WireframeBuilder;
use deepmesh_core::{Result, TriangleMesh};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Builds the unmerged wireframe, including every triangulation diagonal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriangleWireframeBuilder;

impl TriangleWireframeBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl WireframeBuilder for TriangleWireframeBuilder {
    fn build_mesh(&self, mesh: &TriangleMesh) -> Result<Wireframe> {
        let mut roles = vec![FaceRole::Triangle; mesh.faces.len()];
        classify_degenerate(&mesh.faces, &mut roles);

        let adjacency = EdgeAdjacency::build(&mesh.faces);
        let segments: Vec<[u32; 2]> = adjacency
            .iter()
            .map(|(edge, _)| {
                let (a, b) = edge.vertices();
                [a, b]
            })
            .collect();

        debug!(
            faces = mesh.faces.len(),
            edges = segments.len(),
            "built triangle wireframe"
        );
        Ok(Wireframe {
            segments,
            quads: Vec::new(),
            roles,
        })
    }
}
