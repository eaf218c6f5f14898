// src/core/mod.rs
//! Legacy password hash → PBKDF2 crypt string
//!
//! Pure functions only: no logging, no I/O. Callers decide what to do with
//! a record that fails to decode.

pub mod decode;
pub mod descriptor;
pub mod encode;
pub mod util;

pub use decode::decode;
pub use descriptor::HashDescriptor;
pub use encode::encode;
pub use util::{base64_no_pad, decode_envelope};

use crate::error::ReencodeError;

pub type Result<T> = std::result::Result<T, ReencodeError>;

/// Convert a stored (base64-wrapped) legacy hash straight into the crypt
/// string accepted by the identity service.
pub fn reencode_password_hash(stored: &str) -> Result<String> {
    let blob = decode_envelope(stored)?;
    let descriptor = decode(&blob)?;
    Ok(encode(&descriptor))
}
