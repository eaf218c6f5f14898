// src/bin/migrate_identities.rs
//! Import every legacy user into the identity service, re-encoding
//! password hashes on the way

use anyhow::{bail, Context, Result};
use identity_migrator::config::{self, access_token_from_env};
use identity_migrator::db::{load_users, open_user_db};
use identity_migrator::export::export_report_json;
use identity_migrator::identity::KratosAdminClient;
use identity_migrator::migrate::{MigrateOptions, Migrator};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::load().context("failed to load configuration")?;

    let conn = open_user_db(&config.source.user_db).with_context(|| {
        format!("failed to open user database {}", config.source.user_db)
    })?;
    let users = load_users(&conn).context("failed to read AspNetUsers")?;
    info!("loaded {} user(s) from {}", users.len(), config.source.user_db);

    let token = access_token_from_env();
    if token.is_none() {
        warn!("KRATOS_ACCESS_TOKEN not set, calling the admin API unauthenticated");
    }
    let client = KratosAdminClient::new(&config.target.admin_url, token)
        .context("failed to build HTTP client")?;
    info!("importing into {}", client.endpoint());

    let migrator = Migrator::new(client, MigrateOptions::from(&config));
    let report = migrator.run(users)?;

    if let Some(path) = &config.migration.report_path {
        export_report_json(&report, path).context("failed to write migration report")?;
    }

    info!(
        "migration complete: {} imported, {} failed",
        report.imported(),
        report.failed()
    );
    if report.failed() > 0 {
        bail!("{} user(s) were not migrated", report.failed());
    }

    Ok(())
}
