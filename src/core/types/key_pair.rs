//! `KeyPair` - a generated RSA public/private key pair.

use core::fmt::{self, Debug};

use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::core::error::RsaKitResult;
use crate::core::role::{Private, Public};
use crate::core::types::EncodedKey;

/// An RSA key pair.
///
/// Both halves are immutable once generated and can be shared read-only
/// across threads.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    public_key: RsaPublicKey,
    private_key: RsaPrivateKey,
}

impl KeyPair {
    /// Builds a pair from a private key, deriving the public half.
    #[must_use]
    pub fn from_private_key(private_key: RsaPrivateKey) -> Self {
        Self {
            public_key: private_key.to_public_key(),
            private_key,
        }
    }

    /// Returns the public key.
    #[must_use]
    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public_key
    }

    /// Returns the private key.
    #[must_use]
    pub fn private_key(&self) -> &RsaPrivateKey {
        &self.private_key
    }

    /// Returns the modulus length in bits.
    #[must_use]
    pub fn modulus_bits(&self) -> usize {
        self.public_key.n().bits()
    }

    /// Returns the public key as Base64 X.509 `SubjectPublicKeyInfo`.
    ///
    /// # Errors
    ///
    /// Returns `RsaKitError::KeyEncoding` if serialization fails.
    pub fn encoded_public_key(&self) -> RsaKitResult<EncodedKey<Public>> {
        EncodedKey::from_key(&self.public_key)
    }

    /// Returns the private key as Base64 PKCS#8.
    ///
    /// # Errors
    ///
    /// Returns `RsaKitError::KeyEncoding` if serialization fails.
    pub fn encoded_private_key(&self) -> RsaKitResult<EncodedKey<Private>> {
        EncodedKey::from_key(&self.private_key)
    }

    /// Splits the pair into its public and private keys.
    #[must_use]
    pub fn into_parts(self) -> (RsaPublicKey, RsaPrivateKey) {
        (self.public_key, self.private_key)
    }
}

impl From<RsaPrivateKey> for KeyPair {
    fn from(private_key: RsaPrivateKey) -> Self {
        Self::from_private_key(private_key)
    }
}

impl Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("modulus_bits", &self.modulus_bits())
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_private_key() -> RsaPrivateKey {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        RsaPrivateKey::new(&mut rng, 512).expect("512-bit key generation")
    }

    #[test]
    fn test_from_private_key_derives_public() {
        let private_key = test_private_key();
        let pair = KeyPair::from(private_key.clone());
        assert_eq!(*pair.public_key(), private_key.to_public_key());
        assert_eq!(*pair.private_key(), private_key);
        assert_eq!(pair.modulus_bits(), 512);
    }

    #[test]
    fn test_encoded_keys_decode_to_same_pair() -> RsaKitResult<()> {
        let pair = KeyPair::from_private_key(test_private_key());
        assert_eq!(pair.encoded_public_key()?.decode()?, *pair.public_key());
        assert_eq!(pair.encoded_private_key()?.decode()?, *pair.private_key());
        Ok(())
    }

    #[test]
    fn test_into_parts() {
        let pair = KeyPair::from_private_key(test_private_key());
        let expected = pair.clone();
        let (public_key, private_key) = pair.into_parts();
        assert_eq!(public_key, *expected.public_key());
        assert_eq!(private_key, *expected.private_key());
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let pair = KeyPair::from_private_key(test_private_key());
        let debug_str = format!("{pair:?}");
        assert!(debug_str.contains("modulus_bits: 512"));
        assert!(debug_str.contains("[REDACTED]"));
    }
}
