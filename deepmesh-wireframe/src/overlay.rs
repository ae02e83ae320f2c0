//! Long-lived wireframe slot for a viewer
//!
//! A viewer reloads meshes in place. When a reload fails the overlay keeps
//! showing the last wireframe that built successfully instead of going blank.

use crate::wireframe::Wireframe;
use crate::WireframeBuilder;
use deepmesh_core::{IndexedGeometry, Result};
use tracing::warn;

/// A builder paired with the most recent successfully built wireframe
#[derive(Debug, Clone, Default)]
pub struct WireframeOverlay<B> {
    builder: B,
    current: Option<Wireframe>,
}

impl<B: WireframeBuilder> WireframeOverlay<B> {
    /// Create an empty overlay
    pub fn new(builder: B) -> Self {
        Self {
            builder,
            current: None,
        }
    }

    pub fn builder(&self) -> &B {
        &self.builder
    }

    /// The wireframe currently on display, if any
    pub fn current(&self) -> Option<&Wireframe> {
        self.current.as_ref()
    }

    /// Rebuild from new geometry.
    ///
    /// On error the previous wireframe stays in place and the error is returned.
    pub fn reload(&mut self, geometry: &IndexedGeometry) -> Result<&Wireframe> {
        match self.builder.build(geometry) {
            Ok(wireframe) => Ok(self.current.insert(wireframe)),
            Err(e) => {
                warn!(
                    error = %e,
                    kept_previous = self.current.is_some(),
                    "wireframe reload failed"
                );
                Err(e)
            }
        }
    }

    /// Drop the current wireframe
    pub fn clear(&mut self) {
        self.current = None;
    }
}
