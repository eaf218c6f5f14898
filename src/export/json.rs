use std::path::Path;

use chrono::Utc;
use serde_json::json;
use tracing::info;

use crate::consts::REPORT_FORMAT;
use crate::error::MigrateError;
use crate::migrate::MigrationReport;

/// Write a migration report as pretty-printed JSON.
///
/// The old-id → new-id mapping in here is the only record of which legacy
/// account became which identity, so keep it alongside the migration logs.
pub fn export_report_json<P: AsRef<Path>>(
    report: &MigrationReport,
    path: P,
) -> Result<(), MigrateError> {
    let export = json!({
        "report_format": REPORT_FORMAT,
        "generated_at": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        "migrator_version": env!("CARGO_PKG_VERSION"),
        "total_users": report.total(),
        "imported": report.imported(),
        "failed": report.failed(),
        "records": report.records,
    });

    std::fs::write(path.as_ref(), serde_json::to_string_pretty(&export)?)?;
    info!(
        "exported report for {} user(s) → {}",
        report.total(),
        path.as_ref().display()
    );

    Ok(())
}
