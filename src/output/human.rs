//! Human-readable output formatting

use crate::output::report::{ApplicationReport, CheckReport, DirectoryStatus, InstallationReport};

pub fn format_human(report: &CheckReport) -> String {
    match report {
        CheckReport::Installation(r) => format_installation(r),
        CheckReport::Application(r) => format_application(r),
    }
}

fn format_installation(report: &InstallationReport) -> String {
    let mut output = String::from("Installation Directory Permissions\n");
    output.push_str("----------------------------------\n");
    for dir in &report.directories {
        output.push_str(&format_status_line(dir));
    }

    if report.is_ready() {
        output.push_str("\nAll required directories are writable.\n");
    } else {
        output.push_str("\nMissing write permissions:\n");
        for path in &report.missing {
            output.push_str(&format!("  {}\n", path.display()));
        }
    }
    output
}

fn format_application(report: &ApplicationReport) -> String {
    let mut output = String::from("Application Directory Permissions\n");
    output.push_str("---------------------------------\n");
    for dir in &report.directories {
        output.push_str(&format_status_line(dir));
    }

    if !report.non_writable.is_empty() {
        output.push_str("\nCurrently not writable:\n");
        for path in &report.non_writable {
            output.push_str(&format!("  {}\n", path.display()));
        }
    }
    if !report.unnecessary_writable.is_empty() {
        output.push_str("\nWritable permission not needed (directory missing or invalid):\n");
        for path in &report.unnecessary_writable {
            output.push_str(&format!("  {}\n", path.display()));
        }
    }
    if report.non_writable.is_empty() && report.unnecessary_writable.is_empty() {
        output.push_str("\nNothing to report.\n");
    }
    output
}

fn format_status_line(dir: &DirectoryStatus) -> String {
    let summary = if !dir.state.exists {
        "missing".to_string()
    } else if !dir.state.is_directory {
        "not a directory".to_string()
    } else {
        format!(
            "readable: {} | writable: {}",
            yes_no(dir.state.is_readable),
            yes_no(dir.state.is_writable)
        )
    };
    format!("{:<12} {} ({})\n", dir.role.to_string(), dir.path.display(), summary)
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
