//! Core data structures for DeepMesh
//!
//! This crate provides the fundamental types shared by the wireframe
//! builders: points, indexed geometries, triangle meshes, and errors.

pub mod point;
pub mod mesh;
pub mod error;

pub use point::*;
pub use mesh::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3};
