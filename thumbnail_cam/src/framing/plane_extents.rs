//! Half-size of the thumbnail plane in world units.
//!
//! The plane lies in its local x-z plane: x is the horizontal axis of
//! the picture, z the vertical one, and y (the plane normal) must be
//! flat for the framing math to mean anything.

use glam::Vec3;
use crate::error::{Error, Result};

/// World-space half extents of the target surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneExtents {
    half_size: Vec3,
}

impl PlaneExtents {
    /// Flat extents from horizontal (x) and vertical (z) half sizes.
    pub fn new(width: f32, depth: f32) -> Self {
        Self {
            half_size: Vec3::new(width, 0.0, depth),
        }
    }

    /// Extents from raw half sizes, height included.
    pub fn from_half_size(half_size: Vec3) -> Self {
        Self { half_size }
    }

    /// Scale mesh bound extents by the plane's scale.
    ///
    /// A mirrored plane (negative scale) covers the same area, so the
    /// sign is dropped.
    pub fn from_mesh_bounds(scale: Vec3, bounds_extents: Vec3) -> Self {
        Self {
            half_size: (scale * bounds_extents).abs(),
        }
    }

    /// Horizontal half size (local x)
    pub fn width(&self) -> f32 {
        self.half_size.x
    }

    /// Vertical half size (local z)
    pub fn depth(&self) -> f32 {
        self.half_size.z
    }

    /// Extent along the plane normal (local y); zero for a flat plane
    pub fn height(&self) -> f32 {
        self.half_size.y
    }

    pub fn half_size(&self) -> Vec3 {
        self.half_size
    }

    /// Whether the extent along the normal is within `epsilon`.
    pub fn is_flat(&self, epsilon: f32) -> bool {
        self.half_size.y.abs() <= epsilon
    }

    /// Check the surface can be framed.
    ///
    /// # Errors
    ///
    /// `InvalidSurfaceGeometry` if the surface is not flat within
    /// `flatness_epsilon`, or if its width or depth is not a positive
    /// finite number.
    pub fn validate(&self, flatness_epsilon: f32) -> Result<()> {
        if !self.half_size.is_finite() {
            return Err(Error::InvalidSurfaceGeometry(format!(
                "extents {:?} are not finite", self.half_size
            )));
        }
        if !self.is_flat(flatness_epsilon) {
            return Err(Error::InvalidSurfaceGeometry(format!(
                "surface is not an x-z plane: height extent {} exceeds {}",
                self.half_size.y, flatness_epsilon
            )));
        }
        if self.half_size.x <= 0.0 || self.half_size.z <= 0.0 {
            return Err(Error::InvalidSurfaceGeometry(format!(
                "surface has no area: width {} depth {}",
                self.half_size.x, self.half_size.z
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "plane_extents_tests.rs"]
mod tests;
