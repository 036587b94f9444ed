//! FrameFitter: camera placement that frames a crop of the plane.
//!
//! The camera sits on the plane normal at the distance where the crop
//! fills the field of view on the tighter axis; the other axis is then
//! over-covered and its surplus becomes extra shift range.

use glam::{Vec2, Vec3};
use crate::error::{Error, Result};
use super::framing_params::FramingParams;
use super::placement::{CropRegion, PlacementResult, CAMERA_ROTATION_EULER};
use super::plane_extents::PlaneExtents;
use super::projection::{CameraIntrinsics, TargetAspectRatio};

/// Tolerances and clip bracketing for `FrameFitter`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitterConfig {
    /// Largest extent along the plane normal still considered flat
    pub flatness_epsilon: f32,
    /// Smallest crop half size; anything below fails with `DegenerateZoom`
    pub min_visible_size: f32,
    /// Near clip as a fraction of the distance (< 1)
    pub near_clip_factor: f32,
    /// Far clip as a fraction of the distance (> 1)
    pub far_clip_factor: f32,
}

impl Default for FitterConfig {
    fn default() -> Self {
        Self {
            flatness_epsilon: 1e-5,
            min_visible_size: 1e-5,
            near_clip_factor: 0.95,
            far_clip_factor: 1.05,
        }
    }
}

/// Pure framing computation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameFitter {
    config: FitterConfig,
}

impl FrameFitter {
    pub fn new(config: FitterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FitterConfig {
        &self.config
    }

    /// Compute the camera placement for `params` applied to `extents`.
    ///
    /// # Errors
    ///
    /// - `InvalidSurfaceGeometry` if the plane is not flat or has no area
    /// - `DegenerateZoom` if the crop collapses below `min_visible_size`
    /// - `InvalidParameter` if the clip factors do not bracket the plane,
    ///   or if the placement overflows (e.g. a near-zero FOV or huge plane)
    pub fn fit(
        &self,
        extents: PlaneExtents,
        params: FramingParams,
        aspect: TargetAspectRatio,
        intrinsics: CameraIntrinsics,
    ) -> Result<PlacementResult> {
        extents.validate(self.config.flatness_epsilon)?;
        if !(self.config.near_clip_factor < 1.0 && self.config.far_clip_factor > 1.0) {
            return Err(Error::InvalidParameter(format!(
                "clip factors {} / {} do not bracket the plane",
                self.config.near_clip_factor, self.config.far_clip_factor
            )));
        }

        let crop = self.crop(extents, params)?;

        // Field of view from the capture shape, not from the crop shape
        let v_tan = (intrinsics.vertical_fov() / 2.0).tan();
        let h_tan = (intrinsics.horizontal_fov(aspect) / 2.0).tan();

        let (v_dist, h_dist) = Self::candidate_distances(crop, v_tan, h_tan);
        let distance = v_dist.min(h_dist);

        let slack = Self::slack(extents, crop, aspect);

        let translation_offset = Vec3::new(
            slack.x * params.shift_horizontal() / 200.0,
            distance,
            slack.y * params.shift_vertical() / 200.0,
        );

        let near_clip = self.config.near_clip_factor * distance;
        let far_clip = self.config.far_clip_factor * distance;

        // The host must get a finite placement with near < distance < far
        if !(distance.is_finite() && distance > 0.0)
            || !translation_offset.is_finite()
            || !slack.is_finite()
            || !(near_clip < distance && distance < far_clip)
        {
            return Err(Error::InvalidParameter(format!(
                "placement is not representable: distance {}, clip [{}, {}], offset {:?}",
                distance, near_clip, far_clip, translation_offset
            )));
        }

        Ok(PlacementResult {
            translation_offset,
            rotation_offset: CAMERA_ROTATION_EULER,
            near_clip,
            far_clip,
            distance,
            crop,
            slack,
        })
    }

    /// Visible half sizes after removing `zoom_in` percent.
    ///
    /// # Errors
    ///
    /// `DegenerateZoom` if either half size drops below `min_visible_size`.
    pub fn crop(&self, extents: PlaneExtents, params: FramingParams) -> Result<CropRegion> {
        let visible = params.visible_fraction();
        let crop = CropRegion {
            v_size: extents.depth() * visible,
            h_size: extents.width() * visible,
        };

        if crop.v_size < self.config.min_visible_size || crop.h_size < self.config.min_visible_size {
            return Err(Error::DegenerateZoom(format!(
                "zoom {} leaves {}x{} visible, below {}",
                params.zoom_in(), crop.h_size, crop.v_size, self.config.min_visible_size
            )));
        }
        Ok(crop)
    }

    /// Distances at which the crop exactly fills the vertical and the
    /// horizontal field of view (given as tangents of the half angles).
    pub fn candidate_distances(crop: CropRegion, v_half_tan: f32, h_half_tan: f32) -> (f32, f32) {
        (crop.v_size / v_half_tan, crop.h_size / h_half_tan)
    }

    /// Shift range on each axis: `x` horizontal, `y` vertical.
    ///
    /// Base range is what the zoom removed. On top of that, the axis
    /// over-covered because the crop shape differs from the capture
    /// shape gains the surplus between crop and frame:
    ///
    /// - crop taller than the frame (`v/h > 1/aspect`): the width sets the
    ///   distance and vertical slack gains `v - h / aspect`
    /// - otherwise the height sets the distance and horizontal slack gains
    ///   `h - v * aspect`
    ///
    /// The surplus is never negative, so equal shapes (e.g. a 2×1.5 plane
    /// at 4:3) get none, and a square plane at 4:3 gains vertical slack.
    /// A full ±100 shift therefore never moves the frame off the plane.
    pub fn slack(extents: PlaneExtents, crop: CropRegion, aspect: TargetAspectRatio) -> Vec2 {
        let mut h_slack = extents.width() - crop.h_size;
        let mut v_slack = extents.depth() - crop.v_size;

        if crop.image_aspect() > aspect.height_over_width() {
            // Crop taller than the frame: width decides the distance
            v_slack += (crop.v_size - crop.h_size * aspect.height_over_width()).max(0.0);
        } else {
            // Crop wider than (or shaped like) the frame: height decides
            h_slack += (crop.h_size - crop.v_size * aspect.width_over_height()).max(0.0);
        }

        Vec2::new(h_slack, v_slack)
    }
}

#[cfg(test)]
#[path = "frame_fitter_tests.rs"]
mod tests;
