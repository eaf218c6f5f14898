// src/enums.rs
//! Public enum types used throughout the crate

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Pseudo-random function used inside PBKDF2.
///
/// The set is closed: the legacy format only ever emits these three, and an
/// unknown code must fail rather than be mapped to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prf {
    Sha1,
    Sha256,
    Sha512,
}

impl Prf {
    /// Map a v3 header PRF code (`0`, `1`, `2`) to its variant
    pub fn from_code(code: u32) -> Result<Self, DecodeError> {
        match code {
            0 => Ok(Prf::Sha1),
            1 => Ok(Prf::Sha256),
            2 => Ok(Prf::Sha512),
            other => Err(DecodeError::UnsupportedPrf(other)),
        }
    }

    /// Lowercase name as it appears in `$pbkdf2-<name>$`
    pub const fn name(self) -> &'static str {
        match self {
            Prf::Sha1 => "sha1",
            Prf::Sha256 => "sha256",
            Prf::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for Prf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which binary layout a legacy blob uses, selected by its first byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyFormat {
    V2,
    V3,
}

impl LegacyFormat {
    pub fn from_marker(marker: u8) -> Result<Self, DecodeError> {
        match marker {
            crate::consts::FORMAT_MARKER_V2 => Ok(LegacyFormat::V2),
            crate::consts::FORMAT_MARKER_V3 => Ok(LegacyFormat::V3),
            other => Err(DecodeError::UnsupportedFormatMarker(other)),
        }
    }
}
