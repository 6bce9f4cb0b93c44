//! Permission checker
//!
//! Classifies the installation-critical directories by their current
//! read/write state. Stateless apart from two cached resolved-path
//! lists; every query re-reads the filesystem through the inspector.

use crate::error::Result;
use crate::inspector::DirectoryInspector;
use crate::resolver::PathResolver;
use crate::roles::{application_roles, installation_roles, DirectoryRole};
use std::path::PathBuf;

/// Audits directory permissions for installation and for the running
/// application
pub struct PermissionChecker<R, I> {
    resolver: R,
    inspector: I,
    installation_paths: Option<Vec<PathBuf>>,
    application_paths: Option<Vec<PathBuf>>,
}

impl<R: PathResolver, I: DirectoryInspector> PermissionChecker<R, I> {
    pub fn new(resolver: R, inspector: I) -> Self {
        Self {
            resolver,
            inspector,
            installation_paths: None,
            application_paths: None,
        }
    }

    pub fn inspector(&self) -> &I {
        &self.inspector
    }

    fn resolve_all(&self, roles: &[DirectoryRole]) -> Result<Vec<PathBuf>> {
        roles.iter().map(|&role| self.resolver.resolve(role)).collect()
    }

    /// Directories that must be writable during installation, resolved in
    /// fixed role order. Pure path resolution, no filesystem inspection.
    pub fn installation_writable_directories(&mut self) -> Result<Vec<PathBuf>> {
        if self.installation_paths.is_none() {
            self.installation_paths = Some(self.resolve_all(&installation_roles())?);
        }
        Ok(self.installation_paths.clone().unwrap_or_default())
    }

    /// Directories that need not stay writable once the application is
    /// installed and running (everything except Config must eventually be
    /// locked down; this resolves the Config list the application checks)
    pub fn application_non_writable_directories(&mut self) -> Result<Vec<PathBuf>> {
        if self.application_paths.is_none() {
            self.application_paths = Some(self.resolve_all(&application_roles())?);
        }
        Ok(self.application_paths.clone().unwrap_or_default())
    }

    /// Subset of the installation directories that currently pass the
    /// writable predicate: exists, is a directory, readable and writable.
    /// Preserves the fixed installation order.
    pub fn installation_current_writable_directories(&mut self) -> Result<Vec<PathBuf>> {
        let candidates = self.installation_writable_directories()?;
        Ok(self.filter_writable(candidates))
    }

    /// Subset of the application directories that exist as readable
    /// directories but are currently not writable. Missing paths and
    /// non-directories are not applicable and excluded.
    pub fn application_current_non_writable_directories(&mut self) -> Result<Vec<PathBuf>> {
        let candidates = self.application_non_writable_directories()?;
        Ok(candidates
            .into_iter()
            .filter(|path| self.inspector.inspect(path).is_valid_non_writable())
            .collect())
    }

    /// Installation directories that are NOT currently writable: the
    /// required set minus the currently-writable subset, in installation
    /// order
    pub fn missing_writable_directories_for_installation(&mut self) -> Result<Vec<PathBuf>> {
        let required = self.installation_writable_directories()?;
        let writable = self.installation_current_writable_directories()?;
        Ok(required
            .into_iter()
            .filter(|path| !writable.contains(path))
            .collect())
    }

    /// Application directories whose writable permission serves no
    /// purpose: everything in the application set that is not a valid
    /// readable directory at all (a missing or broken Config directory
    /// never needed the permission in the first place). A directory
    /// that exists and is readable stays out of this report whether it
    /// is currently writable or not.
    pub fn unnecessary_writable_directories_for_application(&mut self) -> Result<Vec<PathBuf>> {
        let required = self.application_non_writable_directories()?;
        Ok(required
            .into_iter()
            .filter(|path| {
                let state = self.inspector.inspect(path);
                !state.is_valid_writable() && !state.is_valid_non_writable()
            })
            .collect())
    }

    fn filter_writable(&self, candidates: Vec<PathBuf>) -> Vec<PathBuf> {
        candidates
            .into_iter()
            .filter(|path| self.inspector.inspect(path).is_valid_writable())
            .collect()
    }
}
