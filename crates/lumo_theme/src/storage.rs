//! Preference persistence
//!
//! One storage key maps to one file whose entire contents are the literal
//! preference string (`light`, `dark`, or `system`). Persistence is
//! best-effort: a host without usable storage degrades to in-memory
//! operation without surfacing errors.

use crate::preference::ThemePreference;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed binding of a single preference key
///
/// The bound file is owned exclusively by this binding; nothing else in
/// the workspace reads or writes it.
#[derive(Clone, Debug)]
pub struct PreferenceStore {
    path: Option<PathBuf>,
}

impl PreferenceStore {
    /// Bind `<dir>/<key>` as the persistence location
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: Some(dir.as_ref().join(key)),
        }
    }

    /// A binding that never touches the filesystem
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Whether this binding points at a file
    pub fn is_enabled(&self) -> bool {
        self.path.is_some()
    }

    /// The bound file path, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read the persisted preference
    ///
    /// A missing file, an unreadable file, and unrecognized contents all
    /// read as `None`; the caller falls back to its default.
    pub fn load(&self) -> Option<ThemePreference> {
        let path = self.path.as_ref()?;
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::debug!(
                    "PreferenceStore::load - cannot read {}: {}",
                    path.display(),
                    err
                );
                return None;
            }
        };
        match raw.trim().parse::<ThemePreference>() {
            Ok(pref) => Some(pref),
            Err(err) => {
                tracing::debug!(
                    "PreferenceStore::load - ignoring stored value in {}: {}",
                    path.display(),
                    err
                );
                None
            }
        }
    }

    /// Write the literal preference string, best-effort
    ///
    /// Creates the parent directory if needed. Failures are logged and
    /// swallowed; the in-memory preference stays authoritative.
    pub fn save(&self, preference: ThemePreference) {
        let Some(path) = self.path.as_ref() else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::debug!(
                    "PreferenceStore::save - cannot create {}: {}",
                    parent.display(),
                    err
                );
                return;
            }
        }
        if let Err(err) = fs::write(path, preference.as_str()) {
            tracing::debug!(
                "PreferenceStore::save - cannot write {}: {}",
                path.display(),
                err
            );
        }
    }
}
