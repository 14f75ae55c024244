//! Builder patterns for key generation and signing.
//!
//! # Key Size Profiles
//!
//! | Profile | Modulus | Use Case |
//! |---------|---------|----------|
//! | `legacy()` | 1024 bits | Interoperability only (deprecated) |
//! | `standard()` | 2048 bits | Recommended default |
//! | `strong()` | 4096 bits | Long-lived keys |
//!
//! # Example
//!
//! ```rust,no_run
//! use rsa_kit::prelude::*;
//!
//! // Use a preset profile
//! let pair = KeyPairBuilder::standard()
//!     .try_generate()
//!     .expect("key generation should succeed");
//!
//! // Or pick the size explicitly
//! let pair = KeyPairBuilder::new()
//!     .bits(3072)
//!     .try_generate()
//!     .expect("key generation should succeed");
//! ```

use rand_core::CryptoRngCore;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::core::error::RsaKitResult;
use crate::core::operations::keygen::{
    init_key, init_key_with_rng, LEGACY_KEY_BITS, RECOMMENDED_KEY_BITS,
};
use crate::core::operations::signature::{sign, sign_with_key, verify, verify_with_key};
use crate::core::types::{KeyPair, SignatureDigest};

/// Strong profile modulus size.
const STRONG_KEY_BITS: usize = 4096;

/// Builder for RSA key pair generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPairBuilder {
    bits: usize,
}

impl Default for KeyPairBuilder {
    fn default() -> Self {
        Self::standard()
    }
}

impl KeyPairBuilder {
    /// Creates a new builder with the standard (2048-bit) profile.
    ///
    /// Equivalent to calling `KeyPairBuilder::standard()`.
    #[must_use]
    pub const fn new() -> Self {
        Self::standard()
    }

    /// Legacy profile: 1024-bit modulus.
    ///
    /// Matches the historical default of many RSA helpers. Use only to talk
    /// to peers that cannot handle larger keys.
    #[deprecated(
        since = "0.1.0",
        note = "1024-bit RSA is below current recommendations. Use KeyPairBuilder::standard() instead."
    )]
    #[must_use]
    pub const fn legacy() -> Self {
        Self {
            bits: LEGACY_KEY_BITS,
        }
    }

    /// Standard profile: 2048-bit modulus.
    ///
    /// This is the recommended default for most applications.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            bits: RECOMMENDED_KEY_BITS,
        }
    }

    /// Strong profile: 4096-bit modulus.
    ///
    /// Generation is noticeably slower; use for long-lived keys.
    #[must_use]
    pub const fn strong() -> Self {
        Self {
            bits: STRONG_KEY_BITS,
        }
    }

    /// Sets the modulus size in bits.
    #[must_use]
    pub const fn bits(mut self, bits: usize) -> Self {
        self.bits = bits;
        self
    }

    /// Returns the configured modulus size in bits.
    #[must_use]
    pub const fn get_bits(&self) -> usize {
        self.bits
    }

    /// Generates a key pair using the operating system RNG.
    ///
    /// # Errors
    ///
    /// Returns `RsaKitError::KeyGeneration` if the size is unsupported.
    pub fn try_generate(self) -> RsaKitResult<KeyPair> {
        init_key(self.bits)
    }

    /// Generates a key pair using a caller-supplied RNG.
    ///
    /// # Errors
    ///
    /// Returns `RsaKitError::KeyGeneration` if the size is unsupported.
    pub fn try_generate_with_rng<R: CryptoRngCore + ?Sized>(
        self,
        rng: &mut R,
    ) -> RsaKitResult<KeyPair> {
        init_key_with_rng(rng, self.bits)
    }
}

/// Builder for PKCS#1 v1.5 signing and verification.
///
/// # Example
///
/// ```rust,no_run
/// use rsa_kit::prelude::*;
///
/// let pair = KeyPairBuilder::standard().try_generate()?;
/// let signer = SignerBuilder::new().digest(SignatureDigest::Sha384);
///
/// let signature = signer.try_sign_with_key(b"payload", pair.private_key())?;
/// assert!(signer.try_verify_with_key(b"payload", pair.public_key(), &signature)?);
/// # Ok::<(), RsaKitError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SignerBuilder {
    digest: SignatureDigest,
}

impl SignerBuilder {
    /// Creates a new builder using SHA-256.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the digest.
    #[must_use]
    pub const fn digest(mut self, digest: SignatureDigest) -> Self {
        self.digest = digest;
        self
    }

    /// Returns the configured digest.
    #[must_use]
    pub const fn get_digest(&self) -> SignatureDigest {
        self.digest
    }

    /// Signs `data` with a Base64 PKCS#8 private key.
    ///
    /// # Errors
    ///
    /// Returns `RsaKitError::Signing` on malformed key text.
    pub fn try_sign(&self, data: &[u8], private_key: &str) -> RsaKitResult<String> {
        sign(data, private_key, self.digest)
    }

    /// Signs `data` with a decoded private key.
    ///
    /// # Errors
    ///
    /// Returns `RsaKitError::Signing` if the key is too small for the digest.
    pub fn try_sign_with_key(&self, data: &[u8], key: &RsaPrivateKey) -> RsaKitResult<String> {
        sign_with_key(data, key, self.digest)
    }

    /// Verifies a Base64 signature with a Base64 X.509 public key.
    ///
    /// # Errors
    ///
    /// Returns `RsaKitError::Verification` on malformed key or signature text.
    pub fn try_verify(&self, data: &[u8], public_key: &str, signature: &str) -> RsaKitResult<bool> {
        verify(data, public_key, signature, self.digest)
    }

    /// Verifies a Base64 signature with a decoded public key.
    ///
    /// # Errors
    ///
    /// Returns `RsaKitError::Verification` on malformed signature text.
    pub fn try_verify_with_key(
        &self,
        data: &[u8],
        key: &RsaPublicKey,
        signature: &str,
    ) -> RsaKitResult<bool> {
        verify_with_key(data, key, signature, self.digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::RsaKitError;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_key_pair_builder_profiles() {
        assert_eq!(KeyPairBuilder::standard().get_bits(), 2048);
        assert_eq!(KeyPairBuilder::strong().get_bits(), 4096);
        assert_eq!(KeyPairBuilder::default(), KeyPairBuilder::standard());
        assert_eq!(KeyPairBuilder::new(), KeyPairBuilder::standard());
    }

    #[test]
    #[allow(deprecated)]
    fn test_legacy_profile() {
        assert_eq!(KeyPairBuilder::legacy().get_bits(), 1024);
    }

    #[test]
    fn test_key_pair_builder_custom_bits() -> RsaKitResult<()> {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let pair = KeyPairBuilder::new()
            .bits(768)
            .try_generate_with_rng(&mut rng)?;
        assert_eq!(pair.modulus_bits(), 768);
        Ok(())
    }

    #[test]
    fn test_key_pair_builder_rejects_bad_size() {
        let result = KeyPairBuilder::new().bits(1001).try_generate();
        assert!(matches!(result, Err(RsaKitError::KeyGeneration { bits: 1001 })));

        let result = KeyPairBuilder::new().bits(8192).try_generate();
        assert!(matches!(result, Err(RsaKitError::KeyGeneration { bits: 8192 })));
    }

    #[test]
    fn test_signer_builder_defaults() {
        assert_eq!(SignerBuilder::new().get_digest(), SignatureDigest::Sha256);
        assert_eq!(
            SignerBuilder::new()
                .digest(SignatureDigest::Sha512)
                .get_digest(),
            SignatureDigest::Sha512
        );
    }

    #[test]
    fn test_signer_builder_roundtrip() -> RsaKitResult<()> {
        let mut rng = ChaCha8Rng::seed_from_u64(43);
        let pair = KeyPairBuilder::new()
            .bits(1024)
            .try_generate_with_rng(&mut rng)?;
        let public_key = pair.encoded_public_key()?.to_string();
        let private_key = pair.encoded_private_key()?.to_string();

        let signer = SignerBuilder::new().digest(SignatureDigest::Sha384);
        let signature = signer.try_sign(b"payload", &private_key)?;
        assert!(signer.try_verify(b"payload", &public_key, &signature)?);
        assert!(signer.try_verify_with_key(b"payload", pair.public_key(), &signature)?);

        let signature = signer.try_sign_with_key(b"payload", pair.private_key())?;
        assert!(signer.try_verify(b"payload", &public_key, &signature)?);

        // Same signature, different digest
        let sha256 = SignerBuilder::new();
        assert!(!sha256.try_verify(b"payload", &public_key, &signature)?);
        Ok(())
    }
}
