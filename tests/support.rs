// tests/support.rs
//! Test utilities — blob builders, throwaway user databases, fake sinks

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use identity_migrator::db::ensure_schema;
use identity_migrator::error::SinkError;
use identity_migrator::identity::{CreatedIdentity, IdentityBody, IdentitySink};
use rusqlite::{params, Connection};
use tempfile::TempDir;

/// `0x00 | salt[16] | subkey`
#[allow(dead_code)]
pub fn v2_blob(salt: &[u8; 16], subkey: &[u8]) -> Vec<u8> {
    let mut blob = vec![0x00];
    blob.extend_from_slice(salt);
    blob.extend_from_slice(subkey);
    blob
}

/// `0x01 | prf | iter | salt_len | salt | subkey`, all integers big-endian
#[allow(dead_code)]
pub fn v3_blob(prf_code: u32, iterations: u32, salt: &[u8], subkey: &[u8]) -> Vec<u8> {
    let mut blob = vec![0x01];
    blob.extend_from_slice(&prf_code.to_be_bytes());
    blob.extend_from_slice(&iterations.to_be_bytes());
    blob.extend_from_slice(&(salt.len() as u32).to_be_bytes());
    blob.extend_from_slice(salt);
    blob.extend_from_slice(subkey);
    blob
}

/// A fresh SQLite user store in its own temp dir
#[allow(dead_code)]
pub struct TestUserDb {
    _dir: TempDir,
    path: PathBuf,
    pub conn: Connection,
}

#[allow(dead_code)]
impl TestUserDb {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("identity.db");
        let conn = Connection::open(&path).expect("open user db");
        ensure_schema(&conn).expect("create AspNetUsers");
        Self {
            _dir: dir,
            path,
            conn,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn insert_user(
        &self,
        id: &str,
        email: Option<&str>,
        email_confirmed: bool,
        password_hash: Option<&str>,
    ) {
        self.conn
            .execute(
                "INSERT INTO AspNetUsers (Id, UserName, Email, EmailConfirmed, PasswordHash)
                 VALUES (?1, ?2, ?2, ?3, ?4)",
                params![id, email, email_confirmed, password_hash],
            )
            .expect("insert user");
    }
}

/// Sink that records every payload and fails for selected e-mails
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingSink {
    pub bodies: RefCell<Vec<IdentityBody>>,
    pub reject_emails: Vec<String>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn rejecting(emails: &[&str]) -> Self {
        Self {
            bodies: RefCell::new(Vec::new()),
            reject_emails: emails.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl IdentitySink for RecordingSink {
    fn create_identity(&self, body: &IdentityBody) -> Result<CreatedIdentity, SinkError> {
        if self.reject_emails.contains(&body.traits.email) {
            return Err(SinkError::Status {
                status: 409,
                body: "identity already exists".into(),
            });
        }
        let mut bodies = self.bodies.borrow_mut();
        bodies.push(body.clone());
        Ok(CreatedIdentity {
            id: format!("new-{}", bodies.len()),
        })
    }
}
