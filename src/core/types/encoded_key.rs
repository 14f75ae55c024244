//! `EncodedKey` - Base64 key serialization.
//!
//! This module provides the `EncodedKey` type for exchanging RSA keys as
//! text: the Base64 form of the key's standard DER encoding.
//!
//! Format: `base64(der)` where `der` is
//! - X.509 `SubjectPublicKeyInfo` for [`Public`] keys
//! - PKCS#8 `PrivateKeyInfo` for [`Private`] keys
//!
//! [`Public`]: crate::core::role::Public
//! [`Private`]: crate::core::role::Private

use core::fmt::{self, Debug, Display};
use core::marker::PhantomData;

use zeroize::{Zeroize, Zeroizing};

use crate::core::encoding::{decode_base64, encode_base64};
use crate::core::error::{RsaKitError, RsaKitResult};
use crate::core::role::KeyRole;

/// An RSA key serialized as Base64 text.
///
/// Parsing validates both layers: the text must be Base64 and the decoded
/// bytes must be a DER structure for role `R`. Decoding a public key
/// encoding as a private key (or vice versa) therefore fails.
///
/// # Security
///
/// - The DER bytes are zeroized on drop
/// - Debug output redacts private key material
/// - Equality comparison is constant-time
///
/// # Example
///
/// ```rust,no_run
/// use rsa_kit::core::operations::keygen::init_key;
/// use rsa_kit::core::role::Public;
/// use rsa_kit::core::types::EncodedKey;
///
/// let pair = init_key(2048)?;
/// let text = pair.encoded_public_key()?.to_string();
///
/// let parsed = EncodedKey::<Public>::try_from(text.as_str())?;
/// assert_eq!(parsed.decode()?, *pair.public_key());
/// # Ok::<(), rsa_kit::RsaKitError>(())
/// ```
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct EncodedKey<R: KeyRole> {
    /// The DER encoding of the key.
    der: Vec<u8>,
    #[zeroize(skip)]
    _role: PhantomData<R>,
}

impl<R: KeyRole> EncodedKey<R> {
    /// Encodes a key object.
    ///
    /// # Errors
    ///
    /// Returns `RsaKitError::KeyEncoding` if the key cannot be serialized.
    pub fn from_key(key: &R::Key) -> RsaKitResult<Self> {
        R::to_der(key).map(Self::from_der_unchecked)
    }

    /// Decodes the DER bytes back into a key object.
    ///
    /// # Errors
    ///
    /// Returns `RsaKitError::KeyDecoding` if the bytes are not a valid key
    /// for role `R`. Values obtained through `TryFrom` or `from_key` always
    /// decode.
    pub fn decode(&self) -> RsaKitResult<R::Key> {
        R::from_der(&self.der)
    }

    /// Returns a reference to the DER bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.der
    }

    /// Consumes the `EncodedKey` and returns the DER bytes.
    ///
    /// Note: This clones the key material before the original is zeroized.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.der.clone()
    }

    /// Wraps DER bytes without validating them.
    fn from_der_unchecked(der: Vec<u8>) -> Self {
        Self {
            der,
            _role: PhantomData,
        }
    }
}

/// Encodes a key object as Base64 text.
///
/// # Errors
///
/// Returns `RsaKitError::KeyEncoding` if the key cannot be serialized.
pub fn encode_key<R: KeyRole>(key: &R::Key) -> RsaKitResult<EncodedKey<R>> {
    EncodedKey::from_key(key)
}

/// Decodes Base64 key text of role `R` into a key object.
///
/// # Errors
///
/// Returns `RsaKitError::KeyDecoding` on malformed Base64, malformed ASN.1,
/// or when the text encodes a key of the other role.
pub fn decode_key<R: KeyRole>(text: &str) -> RsaKitResult<R::Key> {
    let der = Zeroizing::new(decode_base64(text).map_err(|_| RsaKitError::KeyDecoding)?);
    R::from_der(&der)
}

// =============================================================================
// AsRef implementations
// =============================================================================

impl<R: KeyRole> AsRef<[u8]> for EncodedKey<R> {
    fn as_ref(&self) -> &[u8] {
        &self.der
    }
}

// =============================================================================
// Display (serialization to Base64 text)
// =============================================================================

impl<R: KeyRole> Display for EncodedKey<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_base64(&self.der))
    }
}

// =============================================================================
// Debug (security: don't expose private key material)
// =============================================================================

impl<R: KeyRole> Debug for EncodedKey<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("EncodedKey");
        out.field("role", &R::NAME).field("encoding", &R::ENCODING);
        if R::SENSITIVE {
            out.field("der", &"[REDACTED]");
        } else {
            out.field("der_len", &self.der.len());
        }
        out.finish()
    }
}

// =============================================================================
// TryFrom (parsing from Base64 text)
// =============================================================================

impl<R: KeyRole> TryFrom<&str> for EncodedKey<R> {
    type Error = RsaKitError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let der = decode_base64(text).map_err(|_| RsaKitError::KeyDecoding)?;
        let encoded = Self::from_der_unchecked(der);

        // The structure must parse for this role
        encoded.decode()?;

        Ok(encoded)
    }
}

impl<R: KeyRole> TryFrom<String> for EncodedKey<R> {
    type Error = RsaKitError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::try_from(text.as_str())
    }
}

// =============================================================================
// PartialEq (constant-time comparison)
// =============================================================================

impl<R: KeyRole> PartialEq for EncodedKey<R> {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        // Handle different lengths
        if self.der.len() != other.der.len() {
            return false;
        }
        self.der.ct_eq(&other.der).into()
    }
}

impl<R: KeyRole> Eq for EncodedKey<R> {}
