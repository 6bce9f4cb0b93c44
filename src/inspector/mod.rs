//! Filesystem inspection
//!
//! Read-only predicates over a path. The predicates are total: an
//! inaccessible or malformed path simply answers `false`, it never
//! raises. Write operations are out of scope for this crate.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The four permission predicates evaluated for a single path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionState {
    pub exists: bool,
    pub is_directory: bool,
    pub is_readable: bool,
    pub is_writable: bool,
}

impl PermissionState {
    /// A directory that exists, is readable and is writable
    pub fn is_valid_writable(&self) -> bool {
        self.exists && self.is_directory && self.is_readable && self.is_writable
    }

    /// A directory that exists and is readable but not writable
    pub fn is_valid_non_writable(&self) -> bool {
        self.exists && self.is_directory && self.is_readable && !self.is_writable
    }
}

/// Read-only filesystem predicates over a path
pub trait DirectoryInspector {
    fn is_exist(&self, path: &Path) -> bool;
    fn is_directory(&self, path: &Path) -> bool;
    fn is_readable(&self, path: &Path) -> bool;
    fn is_writable(&self, path: &Path) -> bool;

    /// Evaluate all four predicates for one path, short-circuiting the
    /// access checks when the path is missing or not a directory
    fn inspect(&self, path: &Path) -> PermissionState {
        if !self.is_exist(path) {
            return PermissionState::default();
        }
        if !self.is_directory(path) {
            return PermissionState {
                exists: true,
                ..PermissionState::default()
            };
        }
        PermissionState {
            exists: true,
            is_directory: true,
            is_readable: self.is_readable(path),
            is_writable: self.is_writable(path),
        }
    }
}

/// Inspector backed by the real filesystem
///
/// Existence and directory-ness come from `std::fs::metadata` (following
/// symlinks); readability and writability ask the kernel via `access(2)`,
/// which honors the effective uid/gid and ACLs.
#[derive(Debug, Clone, Default)]
pub struct FsInspector;

impl FsInspector {
    pub fn new() -> Self {
        Self
    }

    fn access(path: &Path, mode: libc::c_int) -> bool {
        use std::os::unix::ffi::OsStrExt;

        let Ok(cpath) = std::ffi::CString::new(path.as_os_str().as_bytes()) else {
            // Embedded NUL: no such path can exist
            return false;
        };
        // SAFETY: cpath is a valid NUL-terminated string for the duration
        // of the call
        unsafe { libc::access(cpath.as_ptr(), mode) == 0 }
    }
}

impl DirectoryInspector for FsInspector {
    fn is_exist(&self, path: &Path) -> bool {
        std::fs::metadata(path).is_ok()
    }

    fn is_directory(&self, path: &Path) -> bool {
        std::fs::metadata(path)
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }

    fn is_readable(&self, path: &Path) -> bool {
        Self::access(path, libc::R_OK)
    }

    fn is_writable(&self, path: &Path) -> bool {
        Self::access(path, libc::W_OK)
    }
}

/// Inspector backed by a function table keyed by path
///
/// Paths without an entry behave as non-existent. Keeps tests free of
/// call-order coupling: each path maps to one [`PermissionState`].
#[derive(Debug, Clone, Default)]
pub struct TableInspector {
    entries: HashMap<PathBuf, PermissionState>,
}

impl TableInspector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, path: impl Into<PathBuf>, state: PermissionState) -> Self {
        self.entries.insert(path.into(), state);
        self
    }

    fn state(&self, path: &Path) -> PermissionState {
        self.entries.get(path).copied().unwrap_or_default()
    }
}

impl DirectoryInspector for TableInspector {
    fn is_exist(&self, path: &Path) -> bool {
        self.state(path).exists
    }

    fn is_directory(&self, path: &Path) -> bool {
        self.state(path).is_directory
    }

    fn is_readable(&self, path: &Path) -> bool {
        self.state(path).is_readable
    }

    fn is_writable(&self, path: &Path) -> bool {
        self.state(path).is_writable
    }
}
