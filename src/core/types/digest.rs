//! `SignatureDigest` - hash algorithm selection for PKCS#1 v1.5 signatures.

use core::fmt::{self, Display};
use core::str::FromStr;

use crate::core::error::RsaKitError;

/// Digest used to compute a PKCS#1 v1.5 signature.
///
/// Names follow the `<DIGEST>withRSA` convention used by Java and most
/// interoperating tooling, so a peer's algorithm string can be parsed
/// directly.
///
/// # Security Warning
///
/// `Sha1` exists only to interoperate with `SHA1withRSA` peers and requires
/// the `legacy-sha1` feature. SHA-1 is not collision resistant; new
/// signatures should use [`SignatureDigest::Sha256`] (the default) or
/// stronger.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureDigest {
    /// SHA-1 (legacy).
    #[cfg(feature = "legacy-sha1")]
    Sha1,
    /// SHA-256.
    #[default]
    Sha256,
    /// SHA-384.
    Sha384,
    /// SHA-512.
    Sha512,
}

impl SignatureDigest {
    /// Returns the JCA-style algorithm name (e.g. "SHA256withRSA").
    #[must_use]
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            #[cfg(feature = "legacy-sha1")]
            Self::Sha1 => "SHA1withRSA",
            Self::Sha256 => "SHA256withRSA",
            Self::Sha384 => "SHA384withRSA",
            Self::Sha512 => "SHA512withRSA",
        }
    }

    /// Returns the digest output size in bytes.
    #[must_use]
    pub const fn output_size(self) -> usize {
        match self {
            #[cfg(feature = "legacy-sha1")]
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Returns `true` for digests kept only for backward compatibility.
    #[must_use]
    pub const fn is_legacy(self) -> bool {
        match self {
            #[cfg(feature = "legacy-sha1")]
            Self::Sha1 => true,
            _ => false,
        }
    }
}

impl Display for SignatureDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.algorithm_name())
    }
}

impl FromStr for SignatureDigest {
    type Err = RsaKitError;

    /// Parses "SHA256withRSA", "SHA-256", "sha256" and similar spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        let digest = normalized
            .strip_suffix("withrsa")
            .unwrap_or(normalized.as_str());

        match digest {
            #[cfg(feature = "legacy-sha1")]
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            _ => Err(RsaKitError::UnsupportedDigest(s.to_string())),
        }
    }
}
