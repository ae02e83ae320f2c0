//! Wireframe overlays for triangulated meshes
//!
//! This crate turns an indexed triangle mesh into line segments for a
//! wireframe overlay:
//! - Quad recovery, merging triangle pairs split along a diagonal
//! - Plain triangle wireframes with each edge drawn once
//! - Long-lived overlays that survive failed reloads
//! - Parallel builds across many meshes

pub mod adjacency;
pub mod quad_merge;
pub mod wireframe;
pub mod quad_wireframe;
pub mod triangle_wireframe;
pub mod overlay;
pub mod batch;

pub use adjacency::*;
pub use quad_merge::*;
pub use wireframe::*;
pub use quad_wireframe::*;
pub use triangle_wireframe::*;
pub use overlay::*;
pub use batch::*;

use deepmesh_core::{IndexedGeometry, Result, TriangleMesh};

/// Build a wireframe overlay from triangle data
pub trait WireframeBuilder {
    /// Build the wireframe for an already assembled triangle mesh
    fn build_mesh(&self, mesh: &TriangleMesh) -> Result<Wireframe>;

    /// Build the wireframe for loader output, rejecting geometry without an index buffer
    fn build(&self, geometry: &IndexedGeometry) -> Result<Wireframe> {
        let mesh = TriangleMesh::try_from(geometry)?;
        self.build_mesh(&mesh)
    }
}
