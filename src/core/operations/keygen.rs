//! RSA key pair generation.
//!
//! Keys use the public exponent 65537. Supported modulus sizes are whole
//! bytes between [`MIN_KEY_BITS`] and [`MAX_KEY_BITS`]; the upper bound is
//! the largest public key the `rsa` crate will load back from its encoding.

use rand_core::{CryptoRngCore, OsRng};
use rsa::RsaPrivateKey;
use tracing::{debug, warn};

use crate::core::error::{RsaKitError, RsaKitResult};
use crate::core::types::KeyPair;

/// Recommended modulus size for new keys.
pub const RECOMMENDED_KEY_BITS: usize = 2048;

/// Historical default modulus size.
///
/// # Security Warning
///
/// 1024-bit RSA no longer meets common security recommendations. It is kept
/// for interoperability with systems that still generate such keys.
pub const LEGACY_KEY_BITS: usize = 1024;

/// Smallest accepted modulus size.
pub const MIN_KEY_BITS: usize = 512;

/// Largest accepted modulus size.
pub const MAX_KEY_BITS: usize = 4096;

/// Generates a fresh key pair using the operating system RNG.
///
/// # Errors
///
/// Returns `RsaKitError::KeyGeneration` if `bits` is outside
/// `MIN_KEY_BITS..=MAX_KEY_BITS` or not a multiple of 8.
///
/// # Example
///
/// ```rust,no_run
/// use rsa_kit::core::operations::keygen::{init_key, RECOMMENDED_KEY_BITS};
///
/// let pair = init_key(RECOMMENDED_KEY_BITS)?;
/// assert_eq!(pair.modulus_bits(), 2048);
/// # Ok::<(), rsa_kit::RsaKitError>(())
/// ```
pub fn init_key(bits: usize) -> RsaKitResult<KeyPair> {
    init_key_with_rng(&mut OsRng, bits)
}

/// Generates a key pair with the historical 1024-bit default.
///
/// # Errors
///
/// Returns `RsaKitError::KeyGeneration` if the provider fails.
#[deprecated(
    since = "0.1.0",
    note = "1024-bit RSA is below current recommendations. Use init_key(RECOMMENDED_KEY_BITS) instead."
)]
pub fn init_key_default() -> RsaKitResult<KeyPair> {
    init_key(LEGACY_KEY_BITS)
}

/// Generates a key pair from a caller-supplied RNG.
///
/// # Errors
///
/// Returns `RsaKitError::KeyGeneration` if `bits` is unsupported or the
/// provider fails.
pub fn init_key_with_rng<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bits: usize,
) -> RsaKitResult<KeyPair> {
    validate_key_bits(bits)?;
    if bits < RECOMMENDED_KEY_BITS {
        warn!(bits, "generating RSA key below the recommended size");
    }

    debug!(bits, "generating RSA key pair");
    let private_key =
        RsaPrivateKey::new(rng, bits).map_err(|_| RsaKitError::KeyGeneration { bits })?;

    Ok(KeyPair::from_private_key(private_key))
}

/// Checks that a modulus size can be generated and exchanged.
///
/// # Errors
///
/// Returns `RsaKitError::KeyGeneration` for unsupported sizes.
pub fn validate_key_bits(bits: usize) -> RsaKitResult<()> {
    if !(MIN_KEY_BITS..=MAX_KEY_BITS).contains(&bits) || bits % 8 != 0 {
        return Err(RsaKitError::KeyGeneration { bits });
    }
    Ok(())
}
