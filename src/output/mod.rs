//! Output formatting module

pub mod formatter;
pub mod human;
pub mod json;
pub mod report;

pub use formatter::{format_report, OutputFormat};
pub use report::{ApplicationReport, CheckReport, DirectoryStatus, InstallationReport};
