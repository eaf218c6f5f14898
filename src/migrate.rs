// src/migrate.rs
//! The migration loop: legacy user → identity payload → identity service
//!
//! Records are processed one at a time in the order given. A failing record
//! is logged and reported, then skipped, unless `fail_fast` is set.

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::core::reencode_password_hash;
use crate::db::UserRecord;
use crate::error::{MigrateError, RecordError};
use crate::identity::{CreatedIdentity, IdentityBody, IdentitySink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateOptions {
    pub schema_id: String,
    pub fail_fast: bool,
}

impl From<&Config> for MigrateOptions {
    fn from(config: &Config) -> Self {
        MigrateOptions {
            schema_id: config.target.schema_id.clone(),
            fail_fast: config.migration.fail_fast,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RecordOutcome {
    Imported { new_id: String },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordReport {
    pub old_id: String,
    pub email: Option<String>,
    pub had_password: bool,
    #[serde(flatten)]
    pub outcome: RecordOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    pub records: Vec<RecordReport>,
}

impl MigrationReport {
    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn imported(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, RecordOutcome::Imported { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.imported()
    }
}

pub struct Migrator<S> {
    sink: S,
    options: MigrateOptions,
}

impl<S: IdentitySink> Migrator<S> {
    pub fn new(sink: S, options: MigrateOptions) -> Self {
        Self { sink, options }
    }

    /// Build the payload for one user, including the re-encoded password
    /// when the user has one
    pub fn build_body(&self, user: &UserRecord) -> Result<IdentityBody, RecordError> {
        let body = IdentityBody::from_record(user, &self.options.schema_id);
        match &user.password_hash {
            Some(stored) => Ok(body.with_hashed_password(reencode_password_hash(stored)?)),
            None => {
                debug!(old_id = %user.id, "user has no password hash, importing without credentials");
                Ok(body)
            }
        }
    }

    fn migrate_one(&self, user: &UserRecord) -> Result<CreatedIdentity, RecordError> {
        let body = self.build_body(user)?;
        Ok(self.sink.create_identity(&body)?)
    }

    pub fn run<I>(&self, users: I) -> Result<MigrationReport, MigrateError>
    where
        I: IntoIterator<Item = UserRecord>,
    {
        let mut report = MigrationReport::default();

        for user in users {
            let email = user.email.as_deref().unwrap_or_default();
            info!(email, old_id = %user.id, "trying to import identity");

            let outcome = match self.migrate_one(&user) {
                Ok(created) => {
                    info!(new_id = %created.id, email, "imported identity");
                    RecordOutcome::Imported { new_id: created.id }
                }
                Err(err) => {
                    if self.options.fail_fast {
                        error!(email, old_id = %user.id, "failed to import identity: {err}, aborting");
                        return Err(MigrateError::Aborted {
                            id: user.id,
                            reason: err.to_string(),
                        });
                    }
                    error!(email, old_id = %user.id, "failed to import identity: {err}, skipping");
                    RecordOutcome::Failed {
                        reason: err.to_string(),
                    }
                }
            };

            report.records.push(RecordReport {
                had_password: user.password_hash.is_some(),
                old_id: user.id,
                email: user.email,
                outcome,
            });
        }

        if report.failed() > 0 {
            warn!(
                "{} of {} identities failed to import",
                report.failed(),
                report.total()
            );
        }
        Ok(report)
    }
}
