// src/core/descriptor.rs
//! The decoded, algorithm-tagged view of one legacy password hash

use crate::enums::Prf;
use crate::error::DecodeError;

/// Everything needed to describe a PBKDF2 hash: salt, derived key, PRF and
/// iteration count.
///
/// Only constructed through [`HashDescriptor::new`], which rejects empty
/// byte fields and a zero iteration count, so a value of this type is always
/// safe to hand to [`crate::core::encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashDescriptor {
    salt: Vec<u8>,
    subkey: Vec<u8>,
    prf: Prf,
    iteration_count: u32,
}

impl HashDescriptor {
    pub fn new(
        salt: Vec<u8>,
        subkey: Vec<u8>,
        prf: Prf,
        iteration_count: u32,
    ) -> Result<Self, DecodeError> {
        if salt.is_empty() {
            return Err(DecodeError::EmptySalt);
        }
        if subkey.is_empty() {
            return Err(DecodeError::EmptySubkey);
        }
        if iteration_count == 0 {
            return Err(DecodeError::InvalidIterationCount);
        }
        Ok(Self {
            salt,
            subkey,
            prf,
            iteration_count,
        })
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    pub fn subkey(&self) -> &[u8] {
        &self.subkey
    }

    pub fn prf(&self) -> Prf {
        self.prf
    }

    pub fn iteration_count(&self) -> u32 {
        self.iteration_count
    }
}
