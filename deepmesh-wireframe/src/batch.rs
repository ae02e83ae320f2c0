//! Parallel wireframe builds across independent meshes

use crate::wireframe::Wireframe;
use crate::WireframeBuilder;
use deepmesh_core::{IndexedGeometry, Result};
use rayon::prelude::*;

/// Build one wireframe per geometry on the rayon pool.
///
/// Results line up with the input; a failing geometry does not affect the others.
pub fn build_batch<B>(builder: &B, geometries: &[IndexedGeometry]) -> Vec<Result<Wireframe>>
where
    B: WireframeBuilder + Sync,
{
    geometries
        .par_iter()
        .map(|geometry| builder.build(geometry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuadWireframeBuilder;
    use deepmesh_core::{Error, Point3};

    fn make_strip(quads: u32) -> IndexedGeometry {
        let mut positions = Vec::new();
        for x in 0..=quads {
            positions.push(Point3::new(x as f32, 0.0, 0.0));
            positions.push(Point3::new(x as f32, 1.0, 0.0));
        }
        let mut index = Vec::new();
        for x in 0..quads {
            let (a, b, c, d) = (2 * x, 2 * x + 2, 2 * x + 3, 2 * x + 1);
            index.extend([c, a, b, a, c, d]);
        }
        IndexedGeometry::new(positions, index)
    }

    #[test]
    fn test_batch_matches_sequential() {
        let builder = QuadWireframeBuilder::new();
        let geometries: Vec<_> = (1..=8).map(make_strip).collect();

        let results = build_batch(&builder, &geometries);
        assert_eq!(results.len(), geometries.len());
        for (geometry, result) in geometries.iter().zip(&results) {
            assert_eq!(result, &builder.build(geometry));
        }
        assert_eq!(results[2].as_ref().map(|w| w.quad_count()), Ok(3));
    }

    #[test]
    fn test_batch_isolates_failures() {
        let builder = QuadWireframeBuilder::new();
        let geometries = vec![
            make_strip(2),
            IndexedGeometry::non_indexed(make_strip(1).positions),
            make_strip(1),
        ];

        let results = build_batch(&builder, &geometries);
        assert!(results[0].is_ok());
        assert_eq!(results[1], Err(Error::MissingIndexBuffer));
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_empty_batch() {
        let results = build_batch(&QuadWireframeBuilder::new(), &[]);
        assert!(results.is_empty());
    }
}
