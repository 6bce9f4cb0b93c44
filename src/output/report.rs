//! Report types built from checker results
//!
//! A report snapshots one audit run: the resolved directories with their
//! per-path permission state, plus the derived lists the operator acts on.

use crate::checker::PermissionChecker;
use crate::error::Result;
use crate::inspector::{DirectoryInspector, PermissionState};
use crate::resolver::PathResolver;
use crate::roles::{application_roles, installation_roles, DirectoryRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Permission state of one resolved directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryStatus {
    pub role: DirectoryRole,
    pub path: PathBuf,
    #[serde(flatten)]
    pub state: PermissionState,
}

/// Installation readiness report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallationReport {
    pub checked_at: DateTime<Utc>,
    pub directories: Vec<DirectoryStatus>,
    pub writable: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
}

impl InstallationReport {
    pub fn build<R: PathResolver, I: DirectoryInspector>(
        checker: &mut PermissionChecker<R, I>,
    ) -> Result<Self> {
        let required = checker.installation_writable_directories()?;
        let writable = checker.installation_current_writable_directories()?;
        let missing = checker.missing_writable_directories_for_installation()?;

        let directories = installation_roles()
            .iter()
            .zip(required)
            .map(|(&role, path)| DirectoryStatus {
                role,
                state: checker.inspector().inspect(&path),
                path,
            })
            .collect();

        Ok(Self {
            checked_at: Utc::now(),
            directories,
            writable,
            missing,
        })
    }

    /// True when every required directory is currently writable
    pub fn is_ready(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Post-install permission report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationReport {
    pub checked_at: DateTime<Utc>,
    pub directories: Vec<DirectoryStatus>,
    pub non_writable: Vec<PathBuf>,
    pub unnecessary_writable: Vec<PathBuf>,
}

impl ApplicationReport {
    pub fn build<R: PathResolver, I: DirectoryInspector>(
        checker: &mut PermissionChecker<R, I>,
    ) -> Result<Self> {
        let required = checker.application_non_writable_directories()?;
        let non_writable = checker.application_current_non_writable_directories()?;
        let unnecessary_writable = checker.unnecessary_writable_directories_for_application()?;

        let directories = application_roles()
            .iter()
            .zip(required)
            .map(|(&role, path)| DirectoryStatus {
                role,
                state: checker.inspector().inspect(&path),
                path,
            })
            .collect();

        Ok(Self {
            checked_at: Utc::now(),
            directories,
            non_writable,
            unnecessary_writable,
        })
    }
}

/// Either report, for format dispatch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CheckReport {
    Installation(InstallationReport),
    Application(ApplicationReport),
}
