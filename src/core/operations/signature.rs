//! PKCS#1 v1.5 signatures over arbitrary data.
//!
//! Signatures are exchanged as standard Base64 text. The digest is chosen
//! per call through [`SignatureDigest`]; signing and verification must agree
//! on it.
//!
//! A signature that does not match (wrong key, tampered data, wrong length)
//! verifies as `false`. Errors are reserved for inputs that cannot be
//! parsed at all.

use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::{Sha256, Sha384, Sha512};
use tracing::{debug, warn};

use crate::core::encoding::{decode_base64, encode_base64};
use crate::core::error::{RsaKitError, RsaKitResult};
use crate::core::operations::block::PKCS1_PADDING_OVERHEAD;
use crate::core::role::{Private, Public};
use crate::core::types::{decode_key, SignatureDigest};

/// Signs `data` with a Base64 PKCS#8 private key.
///
/// Returns the signature as Base64 text.
///
/// # Errors
///
/// Returns `RsaKitError::Signing` if the key text cannot be decoded or the
/// key is too small for the digest.
///
/// # Example
///
/// ```rust,no_run
/// use rsa_kit::core::operations::keygen::init_key;
/// use rsa_kit::core::operations::signature::{sign, verify};
/// use rsa_kit::SignatureDigest;
///
/// let pair = init_key(2048)?;
/// let public_key = pair.encoded_public_key()?.to_string();
/// let private_key = pair.encoded_private_key()?.to_string();
///
/// let signature = sign(b"hello rsa!", &private_key, SignatureDigest::Sha256)?;
/// assert!(verify(b"hello rsa!", &public_key, &signature, SignatureDigest::Sha256)?);
/// # Ok::<(), rsa_kit::RsaKitError>(())
/// ```
pub fn sign(data: &[u8], private_key: &str, digest: SignatureDigest) -> RsaKitResult<String> {
    let key = decode_key::<Private>(private_key).map_err(|_| RsaKitError::Signing)?;
    sign_with_key(data, &key, digest)
}

/// Signs `data` with a decoded private key.
///
/// # Errors
///
/// Returns `RsaKitError::Signing` if the key is too small for the digest.
pub fn sign_with_key(
    data: &[u8],
    key: &RsaPrivateKey,
    digest: SignatureDigest,
) -> RsaKitResult<String> {
    if digest.is_legacy() {
        warn!(%digest, "signing with a legacy digest");
    }
    debug!(%digest, data_len = data.len(), "signing");

    if key.size() < digest.output_size() + PKCS1_PADDING_OVERHEAD {
        debug!(%digest, modulus_bytes = key.size(), "key too small for digest");
        return Err(RsaKitError::Signing);
    }

    let key = key.clone();
    let signature = match digest {
        #[cfg(feature = "legacy-sha1")]
        SignatureDigest::Sha1 => SigningKey::<sha1::Sha1>::new(key)
            .try_sign(data)
            .map(|sig| sig.to_vec()),
        SignatureDigest::Sha256 => SigningKey::<Sha256>::new(key)
            .try_sign(data)
            .map(|sig| sig.to_vec()),
        SignatureDigest::Sha384 => SigningKey::<Sha384>::new(key)
            .try_sign(data)
            .map(|sig| sig.to_vec()),
        SignatureDigest::Sha512 => SigningKey::<Sha512>::new(key)
            .try_sign(data)
            .map(|sig| sig.to_vec()),
    }
    .map_err(|_| RsaKitError::Signing)?;

    Ok(encode_base64(&signature))
}

/// Verifies a Base64 signature over `data` with a Base64 X.509 public key.
///
/// # Errors
///
/// Returns `RsaKitError::Verification` only if the key text or the signature
/// text is malformed. A well-formed signature that does not match returns
/// `Ok(false)`.
pub fn verify(
    data: &[u8],
    public_key: &str,
    signature: &str,
    digest: SignatureDigest,
) -> RsaKitResult<bool> {
    let key = decode_key::<Public>(public_key).map_err(|_| RsaKitError::Verification)?;
    verify_with_key(data, &key, signature, digest)
}

/// Verifies a Base64 signature over `data` with a decoded public key.
///
/// # Errors
///
/// Returns `RsaKitError::Verification` if the signature text is not Base64.
pub fn verify_with_key(
    data: &[u8],
    key: &RsaPublicKey,
    signature: &str,
    digest: SignatureDigest,
) -> RsaKitResult<bool> {
    let signature_bytes = decode_base64(signature).map_err(|_| RsaKitError::Verification)?;
    let Ok(signature) = Signature::try_from(signature_bytes.as_slice()) else {
        return Ok(false);
    };

    let key = key.clone();
    let valid = match digest {
        #[cfg(feature = "legacy-sha1")]
        SignatureDigest::Sha1 => VerifyingKey::<sha1::Sha1>::new(key)
            .verify(data, &signature)
            .is_ok(),
        SignatureDigest::Sha256 => VerifyingKey::<Sha256>::new(key)
            .verify(data, &signature)
            .is_ok(),
        SignatureDigest::Sha384 => VerifyingKey::<Sha384>::new(key)
            .verify(data, &signature)
            .is_ok(),
        SignatureDigest::Sha512 => VerifyingKey::<Sha512>::new(key)
            .verify(data, &signature)
            .is_ok(),
    };

    debug!(%digest, valid, "verified signature");
    Ok(valid)
}

/// Signs with `SHA1withRSA`.
///
/// # Errors
///
/// Same as [`sign`].
#[cfg(feature = "legacy-sha1")]
#[deprecated(
    since = "0.1.0",
    note = "SHA-1 is not collision resistant. Use sign() with SignatureDigest::Sha256 instead."
)]
pub fn sign_legacy(data: &[u8], private_key: &str) -> RsaKitResult<String> {
    sign(data, private_key, SignatureDigest::Sha1)
}

/// Verifies a `SHA1withRSA` signature.
///
/// # Errors
///
/// Same as [`verify`].
#[cfg(feature = "legacy-sha1")]
#[deprecated(
    since = "0.1.0",
    note = "SHA-1 is not collision resistant. Use verify() with SignatureDigest::Sha256 instead."
)]
pub fn verify_legacy(data: &[u8], public_key: &str, signature: &str) -> RsaKitResult<bool> {
    verify(data, public_key, signature, SignatureDigest::Sha1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::operations::keygen::init_key_with_rng;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn text_keys(seed: u64, bits: usize) -> RsaKitResult<(String, String)> {
        let pair = init_key_with_rng(&mut ChaCha8Rng::seed_from_u64(seed), bits)?;
        Ok((
            pair.encoded_public_key()?.to_string(),
            pair.encoded_private_key()?.to_string(),
        ))
    }

    #[test]
    fn test_sign_verify_roundtrip() -> RsaKitResult<()> {
        let (public_key, private_key) = text_keys(1, 1024)?;
        for digest in [
            SignatureDigest::Sha256,
            SignatureDigest::Sha384,
            SignatureDigest::Sha512,
        ] {
            let signature = sign(b"hello rsa!", &private_key, digest)?;
            assert!(verify(b"hello rsa!", &public_key, &signature, digest)?);
        }
        Ok(())
    }

    #[test]
    fn test_signature_is_deterministic_and_block_sized() -> RsaKitResult<()> {
        let (_, private_key) = text_keys(1, 1024)?;
        let a = sign(b"data", &private_key, SignatureDigest::Sha256)?;
        let b = sign(b"data", &private_key, SignatureDigest::Sha256)?;
        assert_eq!(a, b);

        let raw = decode_base64(&a).map_err(|_| RsaKitError::Verification)?;
        assert_eq!(raw.len(), 128);
        Ok(())
    }

    #[test]
    fn test_empty_data() -> RsaKitResult<()> {
        let (public_key, private_key) = text_keys(2, 512)?;
        let signature = sign(&[], &private_key, SignatureDigest::Sha256)?;
        assert!(verify(&[], &public_key, &signature, SignatureDigest::Sha256)?);
        Ok(())
    }

    #[test]
    fn test_tampered_data_is_false() -> RsaKitResult<()> {
        let (public_key, private_key) = text_keys(3, 512)?;
        let signature = sign(b"original", &private_key, SignatureDigest::Sha256)?;
        assert!(!verify(b"tampered", &public_key, &signature, SignatureDigest::Sha256)?);
        Ok(())
    }

    #[test]
    fn test_mismatched_key_is_false() -> RsaKitResult<()> {
        let (_, private_key) = text_keys(4, 512)?;
        let (other_public_key, _) = text_keys(5, 512)?;
        let signature = sign(b"data", &private_key, SignatureDigest::Sha256)?;
        assert!(!verify(b"data", &other_public_key, &signature, SignatureDigest::Sha256)?);
        Ok(())
    }

    #[test]
    fn test_mismatched_digest_is_false() -> RsaKitResult<()> {
        let (public_key, private_key) = text_keys(6, 1024)?;
        let signature = sign(b"data", &private_key, SignatureDigest::Sha256)?;
        assert!(!verify(b"data", &public_key, &signature, SignatureDigest::Sha512)?);
        Ok(())
    }

    #[test]
    fn test_wrong_length_signature_is_false() -> RsaKitResult<()> {
        let (public_key, _) = text_keys(7, 512)?;
        assert!(!verify(b"data", &public_key, "AAAA", SignatureDigest::Sha256)?);
        assert!(!verify(b"data", &public_key, "", SignatureDigest::Sha256)?);
        Ok(())
    }

    #[test]
    fn test_malformed_signature_text() -> RsaKitResult<()> {
        let (public_key, _) = text_keys(8, 512)?;
        let result = verify(b"data", &public_key, "not base64!", SignatureDigest::Sha256);
        assert!(matches!(result, Err(RsaKitError::Verification)));
        Ok(())
    }

    #[test]
    fn test_malformed_key_text() {
        let result = sign(b"data", "garbage", SignatureDigest::Sha256);
        assert!(matches!(result, Err(RsaKitError::Signing)));

        let result = verify(b"data", "garbage", "AAAA", SignatureDigest::Sha256);
        assert!(matches!(result, Err(RsaKitError::Verification)));
    }

    #[test]
    fn test_digest_larger_than_modulus_rejected_up_front() -> RsaKitResult<()> {
        // 64-byte SHA-512 output plus padding overhead cannot fit 64 bytes
        let pair = init_key_with_rng(&mut ChaCha8Rng::seed_from_u64(11), 512)?;
        assert!(pair.private_key().size() < SignatureDigest::Sha512.output_size() + 11);
        let result = sign_with_key(b"data", pair.private_key(), SignatureDigest::Sha512);
        assert!(matches!(result, Err(RsaKitError::Signing)));

        // SHA-256 fits the same key
        assert!(sign_with_key(b"data", pair.private_key(), SignatureDigest::Sha256).is_ok());
        Ok(())
    }

    #[test]
    fn test_key_too_small_for_digest() -> RsaKitResult<()> {
        // SHA-512 DigestInfo (83 bytes) + 11 bytes overhead exceeds a 512-bit modulus
        let (_, private_key) = text_keys(9, 512)?;
        let result = sign(b"data", &private_key, SignatureDigest::Sha512);
        assert!(matches!(result, Err(RsaKitError::Signing)));
        Ok(())
    }

    #[test]
    #[cfg(feature = "legacy-sha1")]
    #[allow(deprecated)]
    fn test_legacy_sha1_roundtrip() -> RsaKitResult<()> {
        let (public_key, private_key) = text_keys(10, 1024)?;
        let signature = sign_legacy(b"hello rsa!", &private_key)?;
        assert!(verify_legacy(b"hello rsa!", &public_key, &signature)?);
        assert!(!verify(b"hello rsa!", &public_key, &signature, SignatureDigest::Sha256)?);
        Ok(())
    }
}
