// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

/// Why a legacy hash blob could not be turned into a descriptor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unsupported format marker 0x{0:02x}")]
    UnsupportedFormatMarker(u8),

    #[error("unsupported PRF code {0}")]
    UnsupportedPrf(u32),

    #[error("truncated input: needed {needed} bytes, only {available} available")]
    TruncatedInput { needed: usize, available: usize },

    #[error("salt is empty")]
    EmptySalt,

    #[error("subkey is empty")]
    EmptySubkey,

    #[error("iteration count must be at least 1")]
    InvalidIterationCount,
}

/// Failure of the base64 envelope + decode + encode pipeline
#[derive(Error, Debug)]
pub enum ReencodeError {
    #[error("password hash is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// The remote identity service rejected or never received a payload
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("identity service returned {status}: {body}")]
    Status { status: u16, body: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("missing required setting: {0}")]
    Missing(&'static str),
}

#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("aborted at user {id}: {reason}")]
    Aborted { id: String, reason: String },
}

/// Why a single user could not be migrated
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("cannot re-encode password hash: {0}")]
    Hash(#[from] ReencodeError),

    #[error("identity service rejected the user: {0}")]
    Sink(#[from] SinkError),
}
