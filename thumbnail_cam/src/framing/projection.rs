//! Capture shape and camera field of view.

use crate::error::{Error, Result};

/// Width / height of the captured image.
///
/// Fixed per use case: it is the shape of the capture sensor, not of
/// the cropped plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetAspectRatio(f32);

impl TargetAspectRatio {
    /// Upload thumbnails are 256x192.
    pub const THUMBNAIL: TargetAspectRatio = TargetAspectRatio(4.0 / 3.0);

    /// # Errors
    ///
    /// `InvalidParameter` unless `width_over_height` is positive and finite.
    pub fn new(width_over_height: f32) -> Result<Self> {
        if !width_over_height.is_finite() || width_over_height <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "aspect ratio must be positive and finite, got {}", width_over_height
            )));
        }
        Ok(Self(width_over_height))
    }

    /// Aspect from pixel dimensions.
    pub fn from_size(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidParameter(format!(
                "capture size {}x{} has no area", width, height
            )));
        }
        Self::new(width as f32 / height as f32)
    }

    pub fn width_over_height(self) -> f32 {
        self.0
    }

    pub fn height_over_width(self) -> f32 {
        1.0 / self.0
    }
}

impl Default for TargetAspectRatio {
    fn default() -> Self {
        Self::THUMBNAIL
    }
}

/// Camera intrinsics the framing depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraIntrinsics {
    vertical_fov_degrees: f32,
}

impl CameraIntrinsics {
    /// # Errors
    ///
    /// `InvalidParameter` unless the FOV lies strictly between 0° and 180°.
    pub fn new(vertical_fov_degrees: f32) -> Result<Self> {
        if !vertical_fov_degrees.is_finite()
            || vertical_fov_degrees <= 0.0
            || vertical_fov_degrees >= 180.0
        {
            return Err(Error::InvalidParameter(format!(
                "vertical field of view must be in (0, 180) degrees, got {}",
                vertical_fov_degrees
            )));
        }
        Ok(Self { vertical_fov_degrees })
    }

    pub fn vertical_fov_degrees(&self) -> f32 {
        self.vertical_fov_degrees
    }

    pub fn vertical_fov(&self) -> f32 {
        self.vertical_fov_degrees.to_radians()
    }

    /// Horizontal FOV (radians) of a sensor with the given aspect.
    ///
    /// `tan(h/2) = tan(v/2) * aspect`
    pub fn horizontal_fov(&self, aspect: TargetAspectRatio) -> f32 {
        2.0 * ((self.vertical_fov() / 2.0).tan() * aspect.width_over_height()).atan()
    }

    pub fn horizontal_fov_degrees(&self, aspect: TargetAspectRatio) -> f32 {
        self.horizontal_fov(aspect).to_degrees()
    }
}

impl Default for CameraIntrinsics {
    /// 60° vertical, the usual default for scene cameras
    fn default() -> Self {
        Self { vertical_fov_degrees: 60.0 }
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
