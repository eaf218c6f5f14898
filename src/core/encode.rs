// src/core/encode.rs
use crate::core::descriptor::HashDescriptor;
use crate::core::util::base64_no_pad;

/// Render a descriptor as a PBKDF2 crypt string:
///
/// ```text
/// $pbkdf2-<prf>$i=<iterations>,l=<subkey bytes>$<salt b64>$<subkey b64>
/// ```
///
/// Base64 fields use the standard alphabet without `=` padding.
pub fn encode(descriptor: &HashDescriptor) -> String {
    format!(
        "$pbkdf2-{prf}$i={iter},l={len}${salt}${subkey}",
        prf = descriptor.prf().name(),
        iter = descriptor.iteration_count(),
        len = descriptor.subkey().len(),
        salt = base64_no_pad(descriptor.salt()),
        subkey = base64_no_pad(descriptor.subkey()),
    )
}
