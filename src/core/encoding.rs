//! Base64 text utilities shared by key, ciphertext and signature handling.
//!
//! All textual forms use the standard Base64 alphabet with padding, which is
//! what OpenSSL and the JCA emit for DER key bodies and signatures.

use base64::prelude::*;

/// Encodes bytes as standard, padded Base64.
#[must_use]
pub fn encode_base64(bytes: &[u8]) -> String {
    BASE64_STANDARD.encode(bytes)
}

/// Decodes standard, padded Base64.
///
/// ASCII whitespace (including the line breaks found in PEM bodies) is
/// ignored.
///
/// # Errors
///
/// Returns the underlying `base64::DecodeError` if the text is not valid
/// Base64 once whitespace has been removed.
pub fn decode_base64(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    if text.bytes().any(|b| b.is_ascii_whitespace()) {
        let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        BASE64_STANDARD.decode(compact)
    } else {
        BASE64_STANDARD.decode(text)
    }
}
