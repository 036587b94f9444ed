//! Ownership claims on placement targets.
//!
//! Several planes in one scene may each carry an alignment session, but
//! only one of them may drive the upload camera. The first session to
//! claim a camera owns it until it releases the claim or unregisters.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use crate::error::{Error, Result};
use crate::thumbcam_bail;
use super::scene_host::CameraHandle;

new_key_type! {
    /// Stable identity of a registered session
    pub struct SessionKey;
}

/// Registry of sessions and the targets they own.
pub struct TargetRegistry {
    sessions: SlotMap<SessionKey, String>,
    owners: FxHashMap<CameraHandle, SessionKey>,
}

impl TargetRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            sessions: SlotMap::with_key(),
            owners: FxHashMap::default(),
        }
    }

    /// Register a session under a display name (names need not be unique)
    pub fn register_session(&mut self, name: &str) -> SessionKey {
        self.sessions.insert(name.to_string())
    }

    /// Remove a session and release every target it owns.
    ///
    /// Returns the number of released claims.
    pub fn unregister_session(&mut self, session: SessionKey) -> usize {
        if self.sessions.remove(session).is_none() {
            return 0;
        }
        self.release_all(session)
    }

    /// Claim `target` for `session`.
    ///
    /// Claiming a target the session already owns succeeds.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if the session is not registered
    /// - `DuplicateOwnership` if another session owns the target
    pub fn acquire(&mut self, target: CameraHandle, session: SessionKey) -> Result<()> {
        if !self.sessions.contains_key(session) {
            thumbcam_bail!("thumbcam::TargetRegistry", Error::InvalidParameter,
                "Session {:?} is not registered", session);
        }

        match self.owners.get(&target) {
            Some(&owner) if owner == session => Ok(()),
            Some(&owner) => {
                let owner_name = self.session_name(owner).unwrap_or("<unknown>");
                let claimant_name = self.session_name(session).unwrap_or("<unknown>");
                thumbcam_bail!("thumbcam::TargetRegistry", Error::DuplicateOwnership,
                    "Camera {:?} is already driven by '{}'; '{}' will stay idle",
                    target, owner_name, claimant_name);
            }
            None => {
                self.owners.insert(target, session);
                Ok(())
            }
        }
    }

    /// Release `target` if `session` owns it.
    pub fn release(&mut self, target: CameraHandle, session: SessionKey) -> bool {
        if self.owners.get(&target) == Some(&session) {
            self.owners.remove(&target);
            true
        } else {
            false
        }
    }

    /// Release every target owned by `session`.
    pub fn release_all(&mut self, session: SessionKey) -> usize {
        let before = self.owners.len();
        self.owners.retain(|_, owner| *owner != session);
        before - self.owners.len()
    }

    /// Current owner of `target`
    pub fn owner(&self, target: CameraHandle) -> Option<SessionKey> {
        self.owners.get(&target).copied()
    }

    pub fn session_name(&self, session: SessionKey) -> Option<&str> {
        self.sessions.get(session).map(|name| name.as_str())
    }

    /// Number of registered sessions
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Number of owned targets
    pub fn claim_count(&self) -> usize {
        self.owners.len()
    }

    /// Drop every session and claim
    pub fn clear(&mut self) {
        self.sessions.clear();
        self.owners.clear();
    }
}

impl Default for TargetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "target_registry_tests.rs"]
mod tests;
