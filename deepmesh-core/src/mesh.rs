//! Mesh data structures and functionality

use crate::error::{Error, Result};
use crate::point::*;
use serde::{Deserialize, Serialize};

/// A triangle mesh with vertices and index triples
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub vertices: Vec<Point3f>,
    pub faces: Vec<[u32; 3]>,
}

/// Vertex positions plus an optional flat index buffer, as handed over by a loader.
///
/// A geometry without an index buffer is a triangle soup: every three
/// consecutive positions form one triangle and no vertex is shared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexedGeometry {
    pub positions: Vec<Point3f>,
    pub index: Option<Vec<u32>>,
}

impl TriangleMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh from vertices and faces
    pub fn from_vertices_and_faces(vertices: Vec<Point3f>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has nothing to draw
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Add a vertex to the mesh, returning its index.
    ///
    /// Faces index vertices with `u32`, so a mesh holds at most `u32::MAX + 1`
    /// vertices; adding past that returns `InvalidData`.
    pub fn add_vertex(&mut self, vertex: Point3f) -> Result<u32> {
        let index = vertex_index(self.vertices.len())?;
        self.vertices.push(vertex);
        Ok(index)
    }

    /// Add a face to the mesh
    pub fn add_face(&mut self, face: [u32; 3]) {
        self.faces.push(face);
    }

    /// Check that every face references an existing vertex.
    pub fn validate_indices(&self) -> Result<()> {
        let vertex_count = self.vertices.len();
        for (face, indices) in self.faces.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(Error::IndexOutOfRange {
                    face,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}

impl IndexedGeometry {
    /// Create an indexed geometry
    pub fn new(positions: Vec<Point3f>, index: Vec<u32>) -> Self {
        Self {
            positions,
            index: Some(index),
        }
    }

    /// Create a geometry that carries positions only
    pub fn non_indexed(positions: Vec<Point3f>) -> Self {
        Self {
            positions,
            index: None,
        }
    }

    /// Build a geometry from flat attribute buffers (`xyz` triples and an optional index list).
    pub fn from_buffers(positions: &[f32], index: Option<&[u32]>) -> Result<Self> {
        let points = points_from_flat(positions).ok_or_else(|| {
            Error::InvalidData(format!(
                "Position buffer length {} is not a multiple of 3",
                positions.len()
            ))
        })?;
        Ok(Self {
            positions: points.to_vec(),
            index: index.map(|index| index.to_vec()),
        })
    }

    /// Whether the geometry carries an index buffer
    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }

    /// Number of complete triangles described by the index buffer
    pub fn triangle_count(&self) -> usize {
        self.index.as_ref().map_or(0, |index| index.len() / 3)
    }
}

impl TryFrom<&IndexedGeometry> for TriangleMesh {
    type Error = Error;

    fn try_from(geometry: &IndexedGeometry) -> Result<Self> {
        let index = match &geometry.index {
            Some(index) => index,
            None if geometry.positions.is_empty() => return Ok(TriangleMesh::new()),
            None => return Err(Error::MissingIndexBuffer),
        };

        if index.len() % 3 != 0 {
            return Err(Error::InvalidData(format!(
                "Index buffer length {} is not a multiple of 3",
                index.len()
            )));
        }

        let faces = index
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
            .collect();

        Ok(TriangleMesh::from_vertices_and_faces(
            geometry.positions.clone(),
            faces,
        ))
    }
}

impl TryFrom<IndexedGeometry> for TriangleMesh {
    type Error = Error;

    fn try_from(geometry: IndexedGeometry) -> Result<Self> {
        TriangleMesh::try_from(&geometry)
    }
}

impl From<&TriangleMesh> for IndexedGeometry {
    fn from(mesh: &TriangleMesh) -> Self {
        IndexedGeometry::new(
            mesh.vertices.clone(),
            mesh.faces.iter().flatten().copied().collect(),
        )
    }
}

/// Index the next vertex would get in a mesh that already holds `len`.
fn vertex_index(len: usize) -> Result<u32> {
    u32::try_from(len)
        .map_err(|_| Error::InvalidData(format!("vertex {len} is beyond the u32 index range")))
}
