//! In-memory `SceneHost` for tools, demos and tests (no engine required).

use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::framing::{CameraIntrinsics, ParentConstraint, PlaneExtents};
use super::scene_host::{CameraHandle, SceneHost, SurfaceHandle};

/// Camera state as last written by a session.
#[derive(Debug, Clone)]
pub struct MemoryCamera {
    pub path: String,
    pub intrinsics: CameraIntrinsics,
    pub near_clip: Option<f32>,
    pub far_clip: Option<f32>,
    pub constraint: Option<(SurfaceHandle, ParentConstraint)>,
    /// Number of constraint updates received
    pub constraint_updates: u32,
}

/// Scene made of named cameras and flat surfaces.
#[derive(Debug, Default)]
pub struct MemorySceneHost {
    paths: FxHashMap<String, CameraHandle>,
    cameras: FxHashMap<CameraHandle, MemoryCamera>,
    surfaces: FxHashMap<SurfaceHandle, PlaneExtents>,
    next_id: u64,
}

impl MemorySceneHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Spawn a camera at `path`, replacing any camera already there.
    pub fn add_camera(&mut self, path: &str, intrinsics: CameraIntrinsics) -> CameraHandle {
        if let Some(old) = self.paths.remove(path) {
            self.cameras.remove(&old);
        }
        let handle = CameraHandle(self.next_id());
        self.paths.insert(path.to_string(), handle);
        self.cameras.insert(handle, MemoryCamera {
            path: path.to_string(),
            intrinsics,
            near_clip: None,
            far_clip: None,
            constraint: None,
            constraint_updates: 0,
        });
        handle
    }

    /// Destroy a camera. Returns whether it existed.
    pub fn remove_camera(&mut self, camera: CameraHandle) -> bool {
        match self.cameras.remove(&camera) {
            Some(removed) => {
                self.paths.remove(&removed.path);
                true
            }
            None => false,
        }
    }

    pub fn camera(&self, camera: CameraHandle) -> Option<&MemoryCamera> {
        self.cameras.get(&camera)
    }

    pub fn set_camera_fov(&mut self, camera: CameraHandle, intrinsics: CameraIntrinsics) -> bool {
        match self.cameras.get_mut(&camera) {
            Some(entry) => {
                entry.intrinsics = intrinsics;
                true
            }
            None => false,
        }
    }

    pub fn add_surface(&mut self, extents: PlaneExtents) -> SurfaceHandle {
        let handle = SurfaceHandle(self.next_id());
        self.surfaces.insert(handle, extents);
        handle
    }

    /// Replace a surface's extents (rescaled or swapped mesh).
    pub fn set_surface_extents(&mut self, surface: SurfaceHandle, extents: PlaneExtents) {
        self.surfaces.insert(surface, extents);
    }

    /// Drop a surface's mesh; the surface handle stays valid but unusable.
    pub fn clear_surface_mesh(&mut self, surface: SurfaceHandle) {
        self.surfaces.remove(&surface);
    }
}

impl SceneHost for MemorySceneHost {
    fn find_camera(&self, path: &str) -> Option<CameraHandle> {
        self.paths.get(path).copied()
    }

    fn camera_intrinsics(&self, camera: CameraHandle) -> Option<CameraIntrinsics> {
        self.cameras.get(&camera).map(|entry| entry.intrinsics)
    }

    fn surface_extents(&self, surface: SurfaceHandle) -> Option<PlaneExtents> {
        self.surfaces.get(&surface).copied()
    }

    fn set_clip_planes(&mut self, camera: CameraHandle, near: f32, far: f32) -> Result<()> {
        let entry = self.cameras.get_mut(&camera)
            .ok_or_else(|| Error::MissingTarget(format!("camera {:?}", camera)))?;
        entry.near_clip = Some(near);
        entry.far_clip = Some(far);
        Ok(())
    }

    fn apply_constraint(
        &mut self,
        camera: CameraHandle,
        source: SurfaceHandle,
        constraint: &ParentConstraint,
    ) -> Result<()> {
        if !self.surfaces.contains_key(&source) {
            return Err(Error::MissingTarget(format!("surface {:?}", source)));
        }
        let entry = self.cameras.get_mut(&camera)
            .ok_or_else(|| Error::MissingTarget(format!("camera {:?}", camera)))?;
        entry.constraint = Some((source, *constraint));
        entry.constraint_updates += 1;
        Ok(())
    }
}
