//! Point types and related functionality

use nalgebra::{Point3, Vector3};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// Reinterpret a flat `[x, y, z, x, y, z, ...]` buffer as points without copying.
///
/// Returns `None` when the buffer length is not a multiple of three.
pub fn points_from_flat(coords: &[f32]) -> Option<&[Point3f]> {
    bytemuck::try_cast_slice(coords).ok()
}
