//! Key role markers and traits.
//!
//! This module provides zero-sized type markers for the two halves of an RSA
//! key pair and the trait that ties each role to its standard DER encoding:
//!
//! - [`Public`]: X.509 `SubjectPublicKeyInfo`
//! - [`Private`]: PKCS#8 `PrivateKeyInfo`

use core::fmt::{self, Display};

use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::core::error::{RsaKitError, RsaKitResult};

mod private {
    pub trait Sealed {}
}

/// Trait for key role markers.
///
/// This trait is sealed and cannot be implemented outside of this crate.
/// Each role marker binds a key type from the `rsa` crate to the DER
/// structure it is exchanged in.
pub trait KeyRole: private::Sealed + Default + Clone + Copy + Send + Sync + 'static {
    /// Short role name ("public" or "private").
    const NAME: &'static str;

    /// Name of the binary encoding used for this role.
    const ENCODING: &'static str;

    /// Whether the encoded form is secret material.
    ///
    /// Sensitive encodings are redacted in `Debug` output.
    const SENSITIVE: bool;

    /// The in-memory key type.
    type Key: PublicKeyParts + Clone + Send + Sync;

    /// Parses the role's DER encoding.
    ///
    /// # Errors
    ///
    /// Returns `RsaKitError::KeyDecoding` if the bytes are not a valid
    /// encoding for this role.
    fn from_der(der: &[u8]) -> RsaKitResult<Self::Key>;

    /// Serializes a key into the role's DER encoding.
    ///
    /// # Errors
    ///
    /// Returns `RsaKitError::KeyEncoding` if serialization fails.
    fn to_der(key: &Self::Key) -> RsaKitResult<Vec<u8>>;
}

/// Public key role marker (X.509 `SubjectPublicKeyInfo`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Public;

impl private::Sealed for Public {}

impl KeyRole for Public {
    const NAME: &'static str = "public";
    const ENCODING: &'static str = "X.509 SubjectPublicKeyInfo";
    const SENSITIVE: bool = false;

    type Key = RsaPublicKey;

    fn from_der(der: &[u8]) -> RsaKitResult<RsaPublicKey> {
        RsaPublicKey::from_public_key_der(der).map_err(|_| RsaKitError::KeyDecoding)
    }

    fn to_der(key: &RsaPublicKey) -> RsaKitResult<Vec<u8>> {
        key.to_public_key_der()
            .map(|doc| doc.as_bytes().to_vec())
            .map_err(|_| RsaKitError::KeyEncoding)
    }
}

impl Display for Public {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::NAME)
    }
}

/// Private key role marker (PKCS#8 `PrivateKeyInfo`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Private;

impl private::Sealed for Private {}

impl KeyRole for Private {
    const NAME: &'static str = "private";
    const ENCODING: &'static str = "PKCS#8";
    const SENSITIVE: bool = true;

    type Key = RsaPrivateKey;

    fn from_der(der: &[u8]) -> RsaKitResult<RsaPrivateKey> {
        RsaPrivateKey::from_pkcs8_der(der).map_err(|_| RsaKitError::KeyDecoding)
    }

    fn to_der(key: &RsaPrivateKey) -> RsaKitResult<Vec<u8>> {
        // SecretDocument zeroizes its own buffer on drop
        key.to_pkcs8_der()
            .map(|doc| doc.as_bytes().to_vec())
            .map_err(|_| RsaKitError::KeyEncoding)
    }
}

impl Display for Private {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::NAME)
    }
}
