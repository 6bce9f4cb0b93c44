//! setupcheck - Audit directory permissions for product installation
//!
//! Resolves the installation-critical directory roles (config, var,
//! media, static view) under a base path and classifies each one with
//! four read-only filesystem predicates: exists, is-directory,
//! is-readable, is-writable.
//!
//! # Example
//!
//! ```no_run
//! use setupcheck::{BasePathResolver, FsInspector, PermissionChecker};
//!
//! let resolver = BasePathResolver::new("/opt/shop");
//! let mut checker = PermissionChecker::new(resolver, FsInspector::new());
//! let missing = checker.missing_writable_directories_for_installation().unwrap();
//! for path in missing {
//!     eprintln!("not writable: {}", path.display());
//! }
//! ```

pub mod checker;
pub mod cli;
pub mod error;
pub mod inspector;
pub mod output;
pub mod resolver;
pub mod roles;

pub use checker::PermissionChecker;
pub use error::{Result, SetupCheckError};
pub use inspector::{DirectoryInspector, FsInspector, PermissionState, TableInspector};
pub use output::{format_report, CheckReport, OutputFormat};
pub use resolver::{BasePathResolver, PathResolver};
pub use roles::DirectoryRole;
