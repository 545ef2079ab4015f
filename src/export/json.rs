use chrono::Utc;
use serde_json::json;
use std::path::Path;

use super::TraceReport;
use crate::consts::EXPORT_FORMAT;
use crate::error::CoreError;

/// Pretty-printed JSON envelope around a traced run.
pub fn report_to_json(report: &TraceReport) -> Result<String, CoreError> {
    let export = json!({
        "export_format": EXPORT_FORMAT,
        "exported_at": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        "exporter_version": env!("CARGO_PKG_VERSION"),
        "total_steps": report.steps.len(),
        "report": report,
    });
    Ok(serde_json::to_string_pretty(&export)?)
}

/// Writes [`report_to_json`] output to `path`.
pub fn write_json<P: AsRef<Path>>(path: P, report: &TraceReport) -> Result<(), CoreError> {
    std::fs::write(path, report_to_json(report)?)?;
    Ok(())
}
