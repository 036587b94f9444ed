//! Operator-facing crop parameters.

use crate::error::{Error, Result};

/// Lowest zoom: the whole plane is framed.
pub const ZOOM_IN_MIN: f32 = 0.0;
/// Highest zoom: 1% of the plane remains visible.
pub const ZOOM_IN_MAX: f32 = 99.0;
/// Full shift down / left.
pub const SHIFT_MIN: f32 = -100.0;
/// Full shift up / right.
pub const SHIFT_MAX: f32 = 100.0;

/// Zoom and shift applied to the plane before framing.
///
/// - `zoom_in` in `[0, 99]`: percentage of the plane removed from each
///   side. 0 shows as much of the picture as possible, 50 half of it.
/// - `shift_vertical` in `[-100, 100]`: up (positive) or down within the
///   remaining slack. 0 is centered.
/// - `shift_horizontal` in `[-100, 100]`: right (positive) or left.
///
/// Values are clamped into range the way a slider would clamp them.
/// Non-finite values are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FramingParams {
    zoom_in: f32,
    shift_vertical: f32,
    shift_horizontal: f32,
}

impl FramingParams {
    /// Build params, clamping each value into its range.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if any value is NaN or infinite.
    pub fn new(zoom_in: f32, shift_vertical: f32, shift_horizontal: f32) -> Result<Self> {
        Ok(Self {
            zoom_in: clamp_finite("zoom_in", zoom_in, ZOOM_IN_MIN, ZOOM_IN_MAX)?,
            shift_vertical: clamp_finite("shift_vertical", shift_vertical, SHIFT_MIN, SHIFT_MAX)?,
            shift_horizontal: clamp_finite("shift_horizontal", shift_horizontal, SHIFT_MIN, SHIFT_MAX)?,
        })
    }

    pub fn zoom_in(&self) -> f32 {
        self.zoom_in
    }

    pub fn shift_vertical(&self) -> f32 {
        self.shift_vertical
    }

    pub fn shift_horizontal(&self) -> f32 {
        self.shift_horizontal
    }

    /// Fraction of each plane axis that stays visible: `(100 - zoom) / 100`.
    pub fn visible_fraction(&self) -> f32 {
        (100.0 - self.zoom_in) / 100.0
    }

    // ===== SETTERS (slider callbacks) =====

    pub fn set_zoom_in(&mut self, value: f32) -> Result<()> {
        self.zoom_in = clamp_finite("zoom_in", value, ZOOM_IN_MIN, ZOOM_IN_MAX)?;
        Ok(())
    }

    pub fn set_shift_vertical(&mut self, value: f32) -> Result<()> {
        self.shift_vertical = clamp_finite("shift_vertical", value, SHIFT_MIN, SHIFT_MAX)?;
        Ok(())
    }

    pub fn set_shift_horizontal(&mut self, value: f32) -> Result<()> {
        self.shift_horizontal = clamp_finite("shift_horizontal", value, SHIFT_MIN, SHIFT_MAX)?;
        Ok(())
    }
}

fn clamp_finite(name: &str, value: f32, min: f32, max: f32) -> Result<f32> {
    if !value.is_finite() {
        return Err(Error::InvalidParameter(format!("{} must be finite, got {}", name, value)));
    }
    Ok(value.clamp(min, max))
}

#[cfg(test)]
#[path = "framing_params_tests.rs"]
mod tests;
