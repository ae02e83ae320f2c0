//! Merging a pair of adjacent triangles back into a quad
//!
//! Two faces that share exactly one edge and have distinct opposite vertices
//! form the quad `[p, u, q, v]`: `p` is the first face's opposite vertex,
//! `u -> v` is the shared edge in the first face's winding, and `q` is the
//! second face's opposite vertex. The shared edge `u-v` becomes the interior
//! diagonal and is never part of the quad boundary.

use deepmesh_core::{Point3f, Vector3f};
use serde::{Deserialize, Serialize};

/// Relative tolerance for collinear corners in the convexity test.
const CONVEXITY_EPSILON: f32 = 1e-6;

/// Smallest area, relative to the squared edge length, that still has a normal.
const DEGENERATE_EPSILON: f32 = 1e-6;

/// How strictly a candidate pair of triangles is checked before merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MergeValidation {
    /// Any two faces sharing exactly one edge with distinct opposite vertices.
    #[default]
    Topological,
    /// Additionally require a convex, non-self-intersecting quad in space.
    Convex,
}

/// Merge two faces into a quad in cyclic boundary order.
///
/// Returns `None` unless the faces share exactly two vertices, which covers
/// disjoint faces, faces touching at a single vertex, and duplicated faces.
pub fn merge_triangles_to_quad(first: [u32; 3], second: [u32; 3]) -> Option<[u32; 4]> {
    let mut opposite_first = None;
    for (k, &vertex) in first.iter().enumerate() {
        if !second.contains(&vertex) {
            if opposite_first.is_some() {
                return None;
            }
            opposite_first = Some(k);
        }
    }
    let k = opposite_first?;

    let mut opposite_second = second.iter().filter(|&&v| !first.contains(&v));
    let q = *opposite_second.next()?;
    if opposite_second.next().is_some() {
        return None;
    }

    let p = first[k];
    let u = first[(k + 1) % 3];
    let v = first[(k + 2) % 3];
    Some([p, u, q, v])
}

/// The four boundary edges of a quad, visiting the corners in order.
pub fn quad_edges(quad: [u32; 4]) -> [[u32; 2]; 4] {
    let [a, b, c, d] = quad;
    [[a, b], [b, c], [c, d], [d, a]]
}

/// Unit normal of the triangle spanned by `a` and `b`.
///
/// `None` when the spanned area is negligible relative to the edge lengths,
/// so the test holds at any mesh scale.
fn unit_normal(a: &Vector3f, b: &Vector3f) -> Option<Vector3f> {
    let normal = a.cross(b);
    let norm = normal.norm();
    if norm <= DEGENERATE_EPSILON * a.norm() * b.norm() {
        return None;
    }
    Some(normal / norm)
}

/// Whether the polygon is convex and does not cross itself.
///
/// Every corner must turn the same way around the Newell normal. Coincident
/// corners or a vanishing normal reject the quad. Corners are taken relative
/// to the first one so that world-space offsets do not cost precision.
pub fn is_convex_quad(corners: &[Point3f; 4]) -> bool {
    let relative = corners.map(|c| c - corners[0]);

    let mut max_edge_sq = 0.0f32;
    let mut normal = Vector3f::zeros();
    for k in 0..4 {
        let next = (k + 1) % 4;
        normal += relative[k].cross(&relative[next]);
        max_edge_sq = max_edge_sq.max((relative[next] - relative[k]).norm_squared());
    }
    let area = normal.norm();
    if max_edge_sq == 0.0 || area <= DEGENERATE_EPSILON * max_edge_sq {
        return false;
    }
    let normal = normal / area;

    for k in 0..4 {
        let incoming = relative[(k + 1) % 4] - relative[k];
        let outgoing = relative[(k + 2) % 4] - relative[(k + 1) % 4];
        let scale = incoming.norm() * outgoing.norm();
        if scale == 0.0 {
            return false;
        }
        if incoming.cross(&outgoing).dot(&normal) < -CONVEXITY_EPSILON * scale {
            return false;
        }
    }

    true
}

/// Angle in radians between the two halves `(p, u, v)` and `(u, q, v)` of a quad.
///
/// Both halves are oriented by the quad traversal, so a flat quad gives `0`
/// regardless of how the source faces were wound. `None` if a half has no area.
pub fn dihedral_angle(corners: &[Point3f; 4]) -> Option<f32> {
    let [p, u, q, v] = corners;
    let first = unit_normal(&(u - p), &(v - p))?;
    let second = unit_normal(&(q - u), &(v - u))?;
    Some(first.dot(&second).clamp(-1.0, 1.0).acos())
}

/// Apply the geometric checks selected by `validation` and `max_dihedral_angle`.
pub fn accepts_quad_geometry(
    corners: &[Point3f; 4],
    validation: MergeValidation,
    max_dihedral_angle: Option<f32>,
) -> bool {
    if validation == MergeValidation::Convex && !is_convex_quad(corners) {
        return false;
    }
    match max_dihedral_angle {
        Some(limit) => dihedral_angle(corners).is_some_and(|angle| angle <= limit),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use deepmesh_core::Point3;

    fn square() -> [Point3f; 4] {
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_merge_split_square() {
        // (0,1,2) + (0,2,3): diagonal 0-2, opposite vertices 1 and 3
        let quad = merge_triangles_to_quad([0, 1, 2], [0, 2, 3]).unwrap();
        assert_eq!(quad, [1, 2, 3, 0]);
        assert_eq!(quad_edges(quad), [[1, 2], [2, 3], [3, 0], [0, 1]]);
    }

    #[test]
    fn test_merge_ignores_second_winding() {
        let a = merge_triangles_to_quad([0, 1, 2], [0, 2, 3]).unwrap();
        let b = merge_triangles_to_quad([0, 1, 2], [3, 2, 0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_merge_rejects_unrelated_faces() {
        assert!(merge_triangles_to_quad([0, 1, 2], [3, 4, 5]).is_none());
        assert!(merge_triangles_to_quad([0, 1, 2], [2, 3, 4]).is_none());
    }

    #[test]
    fn test_merge_rejects_duplicate_faces() {
        assert!(merge_triangles_to_quad([0, 1, 2], [0, 1, 2]).is_none());
        assert!(merge_triangles_to_quad([0, 1, 2], [2, 1, 0]).is_none());
    }

    #[test]
    fn test_convex_square() {
        assert!(is_convex_quad(&square()));

        let mut reversed = square();
        reversed.reverse();
        assert!(is_convex_quad(&reversed));
    }

    fn square_at(offset: f32, side: f32) -> [Point3f; 4] {
        square().map(|c| Point3::new(offset + c.x * side, offset + c.y * side, c.z))
    }

    #[test]
    fn test_convex_square_far_from_origin() {
        for offset in [1e3, 1e4, 5e4, 1e5] {
            let corners = square_at(offset, 1.0);
            assert!(is_convex_quad(&corners), "offset {offset}");
            assert_relative_eq!(dihedral_angle(&corners).unwrap(), 0.0, epsilon = 1e-6);
        }
        assert!(is_convex_quad(&square_at(1e3, 0.01)));
    }

    #[test]
    fn test_tiny_square() {
        let corners = square_at(0.0, 1e-4);
        assert!(is_convex_quad(&corners));
        assert_relative_eq!(dihedral_angle(&corners).unwrap(), 0.0, epsilon = 1e-6);
        assert!(accepts_quad_geometry(&corners, MergeValidation::Convex, Some(0.1)));

        let mut dart = corners;
        dart[2] = Point3::new(0.2e-4, 0.2e-4, 0.0);
        assert!(!is_convex_quad(&dart));
    }

    #[test]
    fn test_concave_dart_rejected() {
        let mut corners = square();
        corners[2] = Point3::new(0.2, 0.2, 0.0);
        assert!(!is_convex_quad(&corners));
    }

    #[test]
    fn test_bowtie_rejected() {
        let mut corners = square();
        corners.swap(1, 2);
        assert!(!is_convex_quad(&corners));
    }

    #[test]
    fn test_collinear_corner_tolerated() {
        // Triangle-shaped quad with u on the edge p-q
        let corners = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        assert!(is_convex_quad(&corners));
    }

    #[test]
    fn test_coincident_corners_rejected() {
        let mut corners = square();
        corners[1] = corners[0];
        assert!(!is_convex_quad(&corners));
    }

    #[test]
    fn test_dihedral_angle_flat() {
        assert_relative_eq!(dihedral_angle(&square()).unwrap(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_dihedral_angle_folded() {
        // Lift q so the halves meet at a right angle along the diagonal
        let mut corners = square();
        corners[2] = Point3::new(0.5, 0.5, std::f32::consts::FRAC_1_SQRT_2);
        let angle = dihedral_angle(&corners).unwrap();
        assert_relative_eq!(angle, std::f32::consts::FRAC_PI_2, epsilon = 1e-4);
    }

    #[test]
    fn test_accepts_quad_geometry() {
        let flat = square();
        assert!(accepts_quad_geometry(&flat, MergeValidation::Topological, None));
        assert!(accepts_quad_geometry(&flat, MergeValidation::Convex, Some(0.1)));

        let mut folded = square();
        folded[2] = Point3::new(0.5, 0.5, std::f32::consts::FRAC_1_SQRT_2);
        assert!(!accepts_quad_geometry(&folded, MergeValidation::Topological, Some(0.5)));
        assert!(accepts_quad_geometry(&folded, MergeValidation::Topological, Some(2.0)));
    }
}
