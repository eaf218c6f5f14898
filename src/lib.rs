// src/lib.rs
//! identity-migrator — move ASP.NET Core Identity users into Ory Kratos
//!
//! Features:
//! - Byte-exact decoding of v2/v3 legacy password hashes
//! - Re-encoding as `$pbkdf2-…` crypt strings Kratos can import
//! - SQLite user source, Kratos admin API sink, JSON migration report

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod db;
pub mod enums;
pub mod error;
pub mod export;
pub mod identity;
pub mod migrate;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use crate::core::{decode, encode, reencode_password_hash, HashDescriptor};
pub use enums::Prf;
pub use error::{DecodeError, MigrateError, ReencodeError};
pub use export::export_report_json;
pub use migrate::{MigrationReport, Migrator};
