//! JSON output formatting

use crate::output::report::CheckReport;
use serde_json::json;

pub fn format_json(report: &CheckReport) -> String {
    let value = match report {
        CheckReport::Installation(r) => serde_json::to_value(r).unwrap_or(json!(null)),
        CheckReport::Application(r) => serde_json::to_value(r).unwrap_or(json!(null)),
    };

    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
}
