//! AlignSession: per-plane driver of the upload camera.
//!
//! State machine:
//! - `Uninitialized`: no camera yet; every tick looks it up by path.
//! - `Active(camera)`: camera resolved and owned; every tick runs change
//!   detection and, when dirty, the framing.
//! - `Standby(camera)`: camera owned by another session; ticks are
//!   no-ops until the owner lets go.
//!
//! A host-signaled camera teardown drops back to `Uninitialized`.

use std::sync::{Arc, Mutex, MutexGuard};
use crate::error::{Error, Result};
use crate::framing::{
    ChangeDetector, FitterConfig, FrameFitter, FramingParams, LastAppliedState,
    PlacementResult, TargetAspectRatio,
};
use crate::runtime::Runtime;
use crate::{thumbcam_debug, thumbcam_error, thumbcam_info, thumbcam_trace, thumbcam_warn};
use super::scene_host::{CameraHandle, SceneHost, SurfaceHandle};
use super::target_registry::{SessionKey, TargetRegistry};

/// Logical path of the camera created by the upload pipeline.
pub const DEFAULT_CAMERA_PATH: &str = "/VRCCam";

const SOURCE: &str = "thumbcam::AlignSession";

/// Session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Path the camera is looked up by
    pub camera_path: String,
    /// Shape of the captured thumbnail
    pub aspect: TargetAspectRatio,
    pub fitter: FitterConfig,
    /// Params the session starts with
    pub initial_params: FramingParams,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            camera_path: DEFAULT_CAMERA_PATH.to_string(),
            aspect: TargetAspectRatio::THUMBNAIL,
            fitter: FitterConfig::default(),
            initial_params: FramingParams::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Active(CameraHandle),
    Standby(CameraHandle),
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Camera not in the scene yet
    WaitingForCamera,
    /// Another session drives the camera
    Standby,
    /// Params unchanged since the last placement
    Unchanged,
    /// New placement pushed to the host
    Applied(PlacementResult),
}

/// Aligns the upload camera to one plane.
pub struct AlignSession {
    name: String,
    surface: SurfaceHandle,
    config: SessionConfig,
    fitter: FrameFitter,
    params: FramingParams,
    last_applied: LastAppliedState,
    state: SessionState,
    force_next: bool,
    last_failure: Option<Error>,
    registry: Arc<Mutex<TargetRegistry>>,
    key: SessionKey,
}

impl AlignSession {
    /// Create a session for `surface` and register it in `registry`.
    pub fn new(
        name: &str,
        surface: SurfaceHandle,
        config: SessionConfig,
        registry: Arc<Mutex<TargetRegistry>>,
    ) -> Result<Self> {
        let key = lock_registry(&registry)?.register_session(name);
        let params = config.initial_params;

        Ok(Self {
            name: name.to_string(),
            surface,
            fitter: FrameFitter::new(config.fitter),
            config,
            params,
            last_applied: LastAppliedState::new(params),
            state: SessionState::Uninitialized,
            force_next: false,
            last_failure: None,
            registry,
            key,
        })
    }

    /// Create a session registered in the runtime's shared registry.
    pub fn with_runtime_registry(name: &str, surface: SurfaceHandle, config: SessionConfig) -> Result<Self> {
        Self::new(name, surface, config, Runtime::target_registry()?)
    }

    // ===== GETTERS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surface(&self) -> SurfaceHandle {
        self.surface
    }

    pub fn key(&self) -> SessionKey {
        self.key
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn params(&self) -> &FramingParams {
        &self.params
    }

    pub fn last_applied(&self) -> &LastAppliedState {
        &self.last_applied
    }

    // ===== PARAMS (written by the operator UI) =====

    pub fn set_params(&mut self, params: FramingParams) {
        self.params = params;
    }

    pub fn params_mut(&mut self) -> &mut FramingParams {
        &mut self.params
    }

    /// Recompute on the next active tick even if params are unchanged
    /// (e.g. the plane was rescaled).
    pub fn request_refresh(&mut self) {
        self.force_next = true;
    }

    // ===== LIFECYCLE =====

    /// Reset the session at the start of an upload.
    ///
    /// Releases any previous claim, seeds the last-applied cache with the
    /// current params and warns about scene setups that will misbehave:
    /// a camera already present at the upload path, or several sessions
    /// competing for it.
    pub fn start(&mut self, host: &dyn SceneHost) -> Result<()> {
        self.release_claim()?;
        self.state = SessionState::Uninitialized;
        self.force_next = false;
        self.last_failure = None;
        self.last_applied = LastAppliedState::new(self.params);

        if host.find_camera(&self.config.camera_path).is_some() {
            thumbcam_error!(SOURCE,
                "An object called {} already exists before the upload started. \
                 Remove or rename it, else it will conflict with the upload camera",
                self.config.camera_path);
        }

        let sessions = lock_registry(&self.registry)?.session_count();
        if sessions > 1 {
            thumbcam_error!(SOURCE,
                "There are {} align sessions registered. They compete for control of {}",
                sessions, self.config.camera_path);
        }

        Ok(())
    }

    /// Resolve the camera by path.
    ///
    /// # Errors
    ///
    /// `MissingTarget` if the host has no camera at the configured path.
    pub fn resolve_camera(&self, host: &dyn SceneHost) -> Result<CameraHandle> {
        host.find_camera(&self.config.camera_path)
            .ok_or_else(|| Error::MissingTarget(format!("no camera at {}", self.config.camera_path)))
    }

    /// The host destroyed `camera`; forget the handle and release the claim.
    pub fn on_camera_destroyed(&mut self, camera: CameraHandle) -> Result<()> {
        match self.state {
            SessionState::Active(current) | SessionState::Standby(current) if current == camera => {
                lock_registry(&self.registry)?.release(camera, self.key);
                self.state = SessionState::Uninitialized;
                self.last_failure = None;
                thumbcam_info!(SOURCE, "'{}' lost camera {:?}", self.name, camera);
            }
            _ => {}
        }
        Ok(())
    }

    /// Release the camera and return to `Uninitialized`.
    pub fn teardown(&mut self) -> Result<()> {
        self.release_claim()?;
        self.state = SessionState::Uninitialized;
        Ok(())
    }

    fn release_claim(&mut self) -> Result<()> {
        if let SessionState::Active(camera) = self.state {
            lock_registry(&self.registry)?.release(camera, self.key);
        }
        Ok(())
    }

    // ===== PER-TICK UPDATE =====

    /// Advance the session by one host tick.
    ///
    /// # Errors
    ///
    /// Failures leave the last-applied params untouched, so the same
    /// placement is attempted again on the next tick:
    /// - `DuplicateOwnership` when entering standby
    /// - `MissingTarget` if the camera or the plane mesh disappeared
    /// - `InvalidSurfaceGeometry` / `DegenerateZoom` from the framing
    pub fn tick(&mut self, host: &mut dyn SceneHost) -> Result<TickOutcome> {
        let camera = match self.state {
            SessionState::Uninitialized => match self.discover(&*host)? {
                Some(camera) => camera,
                None => return Ok(TickOutcome::WaitingForCamera),
            },
            SessionState::Standby(camera) => {
                if lock_registry(&self.registry)?.owner(camera).is_some() {
                    return Ok(TickOutcome::Standby);
                }
                if host.camera_intrinsics(camera).is_some() {
                    self.claim(camera)?
                } else {
                    // Owner let go because the camera was destroyed
                    self.state = SessionState::Uninitialized;
                    match self.discover(&*host)? {
                        Some(camera) => camera,
                        None => return Ok(TickOutcome::WaitingForCamera),
                    }
                }
            }
            SessionState::Active(camera) => camera,
        };

        let changes = ChangeDetector::changes(&self.params, &self.last_applied, self.force_next);
        if changes.is_empty() {
            return Ok(TickOutcome::Unchanged);
        }
        thumbcam_trace!(SOURCE, "'{}' recomputing: {:?}", self.name, changes);

        match self.apply(host, camera) {
            Ok(placement) => {
                self.last_applied.mark_applied(self.params);
                self.force_next = false;
                self.last_failure = None;
                thumbcam_debug!(SOURCE,
                    "'{}' placed camera at distance {:.4} offset ({:.4}, {:.4})",
                    self.name, placement.distance,
                    placement.translation_offset.x, placement.translation_offset.z);
                Ok(TickOutcome::Applied(placement))
            }
            Err(error) => {
                if self.last_failure.as_ref() != Some(&error) {
                    thumbcam_error!(SOURCE, "'{}' cannot align camera: {}", self.name, error);
                }
                self.last_failure = Some(error.clone());
                Err(error)
            }
        }
    }

    /// Look the camera up by path and claim it.
    fn discover(&mut self, host: &dyn SceneHost) -> Result<Option<CameraHandle>> {
        match host.find_camera(&self.config.camera_path) {
            Some(camera) => self.claim(camera).map(Some),
            None => {
                thumbcam_trace!(SOURCE, "'{}' waiting for {}", self.name, self.config.camera_path);
                Ok(None)
            }
        }
    }

    /// Claim `camera` in the registry and move to `Active` or `Standby`.
    fn claim(&mut self, camera: CameraHandle) -> Result<CameraHandle> {
        let acquired = lock_registry(&self.registry)?.acquire(camera, self.key);
        match acquired {
            Ok(()) => {
                self.state = SessionState::Active(camera);
                self.force_next = true;
                thumbcam_info!(SOURCE, "'{}' took control of {} ({:?})",
                    self.name, self.config.camera_path, camera);
                Ok(camera)
            }
            Err(error) => {
                if self.state != SessionState::Standby(camera) {
                    thumbcam_warn!(SOURCE, "'{}' stays idle, {} is driven by another session",
                        self.name, self.config.camera_path);
                }
                self.state = SessionState::Standby(camera);
                Err(error)
            }
        }
    }

    fn apply(&mut self, host: &mut dyn SceneHost, camera: CameraHandle) -> Result<PlacementResult> {
        let intrinsics = match host.camera_intrinsics(camera) {
            Some(intrinsics) => intrinsics,
            None => {
                self.on_camera_destroyed(camera)?;
                return Err(Error::MissingTarget(format!("camera {:?} no longer exists", camera)));
            }
        };
        let extents = host.surface_extents(self.surface)
            .ok_or_else(|| Error::MissingTarget(format!(
                "surface {:?} has no regular plane mesh", self.surface
            )))?;

        let placement = self.fitter.fit(extents, self.params, self.config.aspect, intrinsics)?;

        // Clip planes only follow once the camera actually moved
        host.apply_constraint(camera, self.surface, &placement.to_constraint())?;
        host.set_clip_planes(camera, placement.near_clip, placement.far_clip)?;

        Ok(placement)
    }
}

impl Drop for AlignSession {
    fn drop(&mut self) {
        if let Ok(mut registry) = self.registry.lock() {
            registry.unregister_session(self.key);
        }
    }
}

fn lock_registry(registry: &Mutex<TargetRegistry>) -> Result<MutexGuard<'_, TargetRegistry>> {
    registry.lock()
        .map_err(|_| Error::LockPoisoned("TargetRegistry".to_string()))
}

#[cfg(test)]
#[path = "align_session_tests.rs"]
mod tests;
