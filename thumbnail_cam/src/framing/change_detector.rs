//! Decide whether the placement must be recomputed this tick.

use bitflags::bitflags;
use super::framing_params::FramingParams;

bitflags! {
    /// What changed since the last applied placement.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ParamChanges: u8 {
        const ZOOM_IN          = 1 << 0;
        const SHIFT_VERTICAL   = 1 << 1;
        const SHIFT_HORIZONTAL = 1 << 2;
        /// Recompute requested regardless of params (camera just acquired)
        const FORCED           = 1 << 3;
    }
}

/// Params of the most recent successful placement.
///
/// Lives as long as the owning session. Only `mark_applied` moves it
/// forward, and only after the host accepted the placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LastAppliedState {
    params: FramingParams,
}

impl LastAppliedState {
    pub fn new(params: FramingParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &FramingParams {
        &self.params
    }

    /// Record `params` as applied. All three fields move together.
    pub fn mark_applied(&mut self, params: FramingParams) {
        self.params = params;
    }
}

/// Exact-equality change detection.
///
/// Values come from discrete slider events or field edits, never from
/// accumulated arithmetic, so no tolerance is applied.
pub struct ChangeDetector;

impl ChangeDetector {
    pub fn changes(current: &FramingParams, last: &LastAppliedState, force: bool) -> ParamChanges {
        let applied = last.params();
        let mut changes = ParamChanges::empty();

        if current.zoom_in() != applied.zoom_in() {
            changes |= ParamChanges::ZOOM_IN;
        }
        if current.shift_vertical() != applied.shift_vertical() {
            changes |= ParamChanges::SHIFT_VERTICAL;
        }
        if current.shift_horizontal() != applied.shift_horizontal() {
            changes |= ParamChanges::SHIFT_HORIZONTAL;
        }
        if force {
            changes |= ParamChanges::FORCED;
        }
        changes
    }

    pub fn should_recompute(current: &FramingParams, last: &LastAppliedState, force: bool) -> bool {
        !Self::changes(current, last, force).is_empty()
    }
}

#[cfg(test)]
#[path = "change_detector_tests.rs"]
mod tests;
