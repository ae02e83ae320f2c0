//! Error types for DeepMesh

use thiserror::Error;

/// Main error type for DeepMesh operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Geometry does not have an index buffer")]
    MissingIndexBuffer,

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },
}

/// Result type alias for DeepMesh operations
pub type Result<T> = std::result::Result<T, Error>;
