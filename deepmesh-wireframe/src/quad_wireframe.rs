//! Quad-recovering wireframe
//!
//! Meshes exported from quad-based modelling tools arrive triangulated, and a
//! plain wireframe shows every split diagonal. This builder greedily pairs
//! triangles back into quads and draws only their outer edges:
//!
//! 1. Map every canonical edge to the faces that contain it.
//! 2. Walk the edges in first-seen order. An edge shared by exactly two
//!    unclaimed faces that merge into a valid quad claims both faces.
//! 3. Every face left unclaimed is drawn as a triangle.
//!
//! The matching is first-come, first-served rather than optimal, so the result
//! depends on face order but is fully reproducible.

use crate::adjacency::{face_edges, is_degenerate, EdgeAdjacency};
use crate::quad_merge::{
    accepts_quad_geometry, merge_triangles_to_quad, quad_edges, MergeValidation,
};
use crate::wireframe::{FaceRole, Wireframe};
use crate::WireframeBuilder;
use deepmesh_core::{Result, TriangleMesh};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Builds wireframes that draw recovered quads instead of their triangles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuadWireframeBuilder {
    /// Checks a candidate pair must pass before merging
    pub validation: MergeValidation,
    /// Largest allowed angle in radians between the two halves of a quad
    pub max_dihedral_angle: Option<f32>,
}

impl QuadWireframeBuilder {
    /// Create a builder that merges on topology alone
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with explicit merge checks
    pub fn with_params(validation: MergeValidation, max_dihedral_angle: Option<f32>) -> Self {
        Self {
            validation,
            max_dihedral_angle,
        }
    }

    pub fn with_validation(mut self, validation: MergeValidation) -> Self {
        self.validation = validation;
        self
    }

    pub fn with_max_dihedral_angle(mut self, max_dihedral_angle: f32) -> Self {
        self.max_dihedral_angle = Some(max_dihedral_angle);
        self
    }

    /// Whether merge checks need vertex positions
    fn reads_positions(&self) -> bool {
        self.validation == MergeValidation::Convex || self.max_dihedral_angle.is_some()
    }
}

/// Mark degenerate faces as skipped and return how many there were.
pub(crate) fn classify_degenerate(faces: &[[u32; 3]], roles: &mut [FaceRole]) -> usize {
    let mut skipped = 0;
    for (face_idx, &face) in faces.iter().enumerate() {
        if is_degenerate(face) {
            debug!(face_idx, ?face, "skipping degenerate face");
            roles[face_idx] = FaceRole::Skipped;
            skipped += 1;
        }
    }
    if skipped > 0 {
        warn!(skipped, faces = faces.len(), "wireframe ignores degenerate faces");
    }
    skipped
}

impl WireframeBuilder for QuadWireframeBuilder {
    fn build_mesh(&self, mesh: &TriangleMesh) -> Result<Wireframe> {
        let reads_positions = self.reads_positions();
        if reads_positions {
            mesh.validate_indices()?;
        }

        let faces = &mesh.faces;
        let mut roles = vec![FaceRole::Triangle; faces.len()];
        classify_degenerate(faces, &mut roles);

        let adjacency = EdgeAdjacency::build(faces);
        let mut quads = Vec::new();

        for (_, i, j) in adjacency.interior_edges() {
            if matches!(roles[i], FaceRole::Quad(_)) || matches!(roles[j], FaceRole::Quad(_)) {
                continue;
            }
            let Some(quad) = merge_triangles_to_quad(faces[i], faces[j]) else {
                continue;
            };
            if reads_positions {
                let corners = quad.map(|v| mesh.vertices[v as usize]);
                if !accepts_quad_geometry(&corners, self.validation, self.max_dihedral_angle) {
                    continue;
                }
            }
            roles[i] = FaceRole::Quad(quads.len());
            roles[j] = FaceRole::Quad(quads.len());
            quads.push(quad);
        }

        let mut segments: Vec<[u32; 2]> =
            quads.iter().flat_map(|&quad| quad_edges(quad)).collect();
        for (face, role) in faces.iter().zip(&roles) {
            if *role == FaceRole::Triangle {
                segments.extend(face_edges(*face).map(|(a, b)| [a, b]));
            }
        }

        let wireframe = Wireframe {
            segments,
            quads,
            roles,
        };
        debug!(
            faces = faces.len(),
            edges = adjacency.len(),
            boundary_edges = adjacency.boundary_edge_count(),
            non_manifold_edges = adjacency.non_manifold_edge_count(),
            quads = wireframe.quad_count(),
            triangles = wireframe.triangle_count(),
            "built quad wireframe"
        );
        Ok(wireframe)
    }
}
