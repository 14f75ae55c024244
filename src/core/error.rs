//! Error types for rsa-kit operations.
//!
//! This module provides a unified error type for all operations.
//! Error messages are intentionally vague for cipher and signature failures
//! to avoid leaking padding details that could aid an oracle attack.

use thiserror::Error;

/// Errors that can occur when generating, encoding or using RSA keys.
#[derive(Debug, Error)]
pub enum RsaKitError {
    /// The requested key size is not supported.
    #[error("Unsupported RSA key size: {bits} bits")]
    KeyGeneration {
        /// The rejected modulus bit length.
        bits: usize,
    },

    /// The key text is not valid Base64, not a valid DER structure,
    /// or encodes a key of the other role.
    #[error("Invalid key encoding")]
    KeyDecoding,

    /// The key could not be serialized to its DER encoding.
    #[error("Key encoding failed")]
    KeyEncoding,

    /// A block could not be encrypted or decrypted (wrong key, corrupted
    /// block, size mismatch). Intentionally vague for security.
    #[error("Cipher transform failed")]
    CipherTransform,

    /// Signature creation failed.
    #[error("Signing failed")]
    Signing,

    /// The key or signature text handed to verification is malformed.
    /// A signature that simply does not match is not an error.
    #[error("Malformed verification input")]
    Verification,

    /// Decrypted plaintext is not valid UTF-8.
    #[error("Decrypted plaintext is not valid UTF-8")]
    PlaintextEncoding,

    /// The signature digest name is not recognized.
    #[error("Unsupported signature digest: {0}")]
    UnsupportedDigest(String),
}

/// Result type alias for rsa-kit operations.
pub type RsaKitResult<T> = Result<T, RsaKitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RsaKitError::KeyGeneration { bits: 100 };
        assert_eq!(err.to_string(), "Unsupported RSA key size: 100 bits");

        let err = RsaKitError::KeyDecoding;
        assert_eq!(err.to_string(), "Invalid key encoding");

        let err = RsaKitError::KeyEncoding;
        assert_eq!(err.to_string(), "Key encoding failed");

        let err = RsaKitError::CipherTransform;
        assert_eq!(err.to_string(), "Cipher transform failed");

        let err = RsaKitError::Signing;
        assert_eq!(err.to_string(), "Signing failed");

        let err = RsaKitError::Verification;
        assert_eq!(err.to_string(), "Malformed verification input");

        let err = RsaKitError::PlaintextEncoding;
        assert_eq!(err.to_string(), "Decrypted plaintext is not valid UTF-8");

        let err = RsaKitError::UnsupportedDigest("MD5withRSA".to_string());
        assert_eq!(err.to_string(), "Unsupported signature digest: MD5withRSA");
    }

    #[test]
    fn test_error_debug() {
        let err = RsaKitError::CipherTransform;
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("CipherTransform"));
    }
}
