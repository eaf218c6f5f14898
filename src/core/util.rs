//! Small base64 helpers used across the core module
//!
//! Legacy hashes arrive wrapped in padded standard base64; crypt strings
//! want the same alphabet with the padding stripped.

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use base64::Engine;

/// Standard-alphabet base64 with trailing `=` removed
pub fn base64_no_pad(data: &[u8]) -> String {
    STANDARD_NO_PAD.encode(data)
}

/// Strip the at-rest base64 envelope off a stored password hash
pub fn decode_envelope(stored: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(stored.trim())
}
