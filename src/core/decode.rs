// src/core/decode.rs
//! Parser for the two legacy binary hash layouts
//!
//! ```text
//! v2: 0x00 | salt[16] | subkey[..]
//! v3: 0x01 | prf u32be | iter u32be | salt_len u32be | salt[salt_len] | subkey[..]
//! ```
//!
//! Every read goes through `ByteReader`, which checks the bounds before
//! slicing and reports how many bytes the layout required.

use crate::consts::{V2_ITERATION_COUNT, V2_SALT_LEN};
use crate::core::descriptor::HashDescriptor;
use crate::enums::{LegacyFormat, Prf};
use crate::error::DecodeError;

/// Decode a raw legacy hash blob (already stripped of its base64 envelope)
pub fn decode(blob: &[u8]) -> Result<HashDescriptor, DecodeError> {
    let mut reader = ByteReader::new(blob);
    let marker = reader.take(1)?[0];

    match LegacyFormat::from_marker(marker)? {
        LegacyFormat::V2 => decode_v2(reader),
        LegacyFormat::V3 => decode_v3(reader),
    }
}

fn decode_v2(mut reader: ByteReader<'_>) -> Result<HashDescriptor, DecodeError> {
    let salt = reader.take(V2_SALT_LEN)?.to_vec();
    let subkey = reader.remainder()?.to_vec();
    HashDescriptor::new(salt, subkey, Prf::Sha1, V2_ITERATION_COUNT)
}

fn decode_v3(mut reader: ByteReader<'_>) -> Result<HashDescriptor, DecodeError> {
    let prf = Prf::from_code(reader.read_u32_be()?)?;
    let iteration_count = reader.read_u32_be()?;
    let salt_len = reader.read_u32_be()?;

    // saturate on 16-bit targets so the bounds check reports truncation
    let salt_len = usize::try_from(salt_len).unwrap_or(usize::MAX);
    if salt_len == 0 {
        return Err(DecodeError::EmptySalt);
    }

    let salt = reader.take(salt_len)?.to_vec();
    let subkey = reader.remainder()?.to_vec();
    HashDescriptor::new(salt, subkey, prf, iteration_count)
}

/// Forward-only cursor over a byte slice
struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn truncated(&self, want: usize) -> DecodeError {
        DecodeError::TruncatedInput {
            needed: self.pos.saturating_add(want),
            available: self.buf.len(),
        }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.buf.len())
            .ok_or_else(|| self.truncated(n))?;
        let out = &self.buf[self.pos..end];
        self.pos = end;
        Ok(out)
    }

    fn read_u32_be(&mut self) -> Result<u32, DecodeError> {
        let bytes = self.take(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// All remaining bytes; at least one must be left
    fn remainder(&mut self) -> Result<&'a [u8], DecodeError> {
        if self.pos >= self.buf.len() {
            return Err(self.truncated(1));
        }
        let out = &self.buf[self.pos..];
        self.pos = self.buf.len();
        Ok(out)
    }
}
