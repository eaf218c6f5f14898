// src/consts.rs
//! Shared constants — legacy hash layouts and migration defaults

/// Format marker of the legacy v2 layout (HMAC-SHA1, fixed salt)
pub const FORMAT_MARKER_V2: u8 = 0x00;

/// Format marker of the v3 layout (self-describing header)
pub const FORMAT_MARKER_V3: u8 = 0x01;

/// v2 salt is always 16 bytes, right after the marker
pub const V2_SALT_LEN: usize = 16;

/// v2 hashes carry no iteration count on the wire
pub const V2_ITERATION_COUNT: u32 = 1000;

/// Identity schema used when the config does not name one
pub const DEFAULT_SCHEMA_ID: &str = "preset://email";

/// Verifiable address channel for imported e-mails
pub const EMAIL_VIA: &str = "email";

/// Kratos admin endpoint for identity creation (relative to the admin URL)
pub const CREATE_IDENTITY_PATH: &str = "admin/identities";

/// Tag written into exported migration reports
pub const REPORT_FORMAT: &str = "identity-migrator-report-v1";
