//! Chunked PKCS#1 v1.5 encryption and decryption with either key.
//!
//! Four directions are supported:
//!
//! - public key encrypt / private key decrypt: PKCS#1 v1.5 block type 2
//!   (randomized padding), the usual confidentiality direction
//! - private key encrypt / public key decrypt: PKCS#1 v1.5 block type 1
//!   (`0xFF` padding, deterministic), compatible with OpenSSL
//!   `RSA_private_encrypt` and JCA `Cipher` initialized with a private key
//!
//! Block sizes are always derived from the key handed to the call.
//!
//! # Example
//!
//! ```rust,no_run
//! use rsa_kit::core::operations::cipher::{decrypt_with_private_key, encrypt_with_public_key};
//! use rsa_kit::core::operations::keygen::init_key;
//!
//! let pair = init_key(2048)?;
//! let public_key = pair.encoded_public_key()?.to_string();
//! let private_key = pair.encoded_private_key()?.to_string();
//!
//! let ciphertext = encrypt_with_public_key(&[0x42u8; 1000], &public_key)?;
//! assert_eq!(ciphertext.len(), 5 * 256);
//!
//! let plaintext = decrypt_with_private_key(&ciphertext, &private_key)?;
//! assert_eq!(plaintext, vec![0x42u8; 1000]);
//! # Ok::<(), rsa_kit::RsaKitError>(())
//! ```

use rand_core::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, Pkcs1v15Encrypt, Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroize;

use crate::core::encoding::{decode_base64, encode_base64};
use crate::core::error::{RsaKitError, RsaKitResult};
use crate::core::operations::block::{
    decrypt_block_size, encrypt_block_capacity, process_blocks, BlockTransform,
    PKCS1_PADDING_OVERHEAD,
};
use crate::core::role::{Private, Public};
use crate::core::types::decode_key;

/// Minimum length of the `0xFF` padding string in a type 1 block.
const MIN_TYPE1_PADDING: usize = PKCS1_PADDING_OVERHEAD - 3;

/// Plaintext bytes per encrypted block, from the whole bytes of the modulus.
///
/// For a modulus that is not a multiple of 8 bits this is one byte less than
/// `size() - 11`, so chunking matches tools that size blocks as
/// `floor(bits / 8) - 11`.
fn encrypt_capacity<K: PublicKeyParts>(key: &K) -> usize {
    encrypt_block_capacity(key.n().bits() / 8).unwrap_or(0)
}

// =============================================================================
// Block transformers
// =============================================================================

/// Public key encryption (block type 2).
pub struct PublicEncryptor<'a> {
    key: &'a RsaPublicKey,
}

impl<'a> PublicEncryptor<'a> {
    /// Creates an encryptor for `key`.
    #[must_use]
    pub fn new(key: &'a RsaPublicKey) -> Self {
        Self { key }
    }
}

impl BlockTransform for PublicEncryptor<'_> {
    fn input_block_len(&self) -> usize {
        encrypt_capacity(self.key)
    }

    fn requires_full_blocks(&self) -> bool {
        false
    }

    fn transform_block(&self, block: &[u8]) -> RsaKitResult<Vec<u8>> {
        self.key
            .encrypt(&mut OsRng, Pkcs1v15Encrypt, block)
            .map_err(|_| RsaKitError::CipherTransform)
    }
}

/// Private key decryption (block type 2).
pub struct PrivateDecryptor<'a> {
    key: &'a RsaPrivateKey,
}

impl<'a> PrivateDecryptor<'a> {
    /// Creates a decryptor for `key`.
    #[must_use]
    pub fn new(key: &'a RsaPrivateKey) -> Self {
        Self { key }
    }
}

impl BlockTransform for PrivateDecryptor<'_> {
    fn input_block_len(&self) -> usize {
        decrypt_block_size(self.key.size())
    }

    fn requires_full_blocks(&self) -> bool {
        true
    }

    fn transform_block(&self, block: &[u8]) -> RsaKitResult<Vec<u8>> {
        self.key
            .decrypt(Pkcs1v15Encrypt, block)
            .map_err(|_| RsaKitError::CipherTransform)
    }
}

/// Private key encryption (block type 1).
pub struct PrivateEncryptor<'a> {
    key: &'a RsaPrivateKey,
}

impl<'a> PrivateEncryptor<'a> {
    /// Creates an encryptor for `key`.
    #[must_use]
    pub fn new(key: &'a RsaPrivateKey) -> Self {
        Self { key }
    }
}

impl BlockTransform for PrivateEncryptor<'_> {
    fn input_block_len(&self) -> usize {
        encrypt_capacity(self.key)
    }

    fn requires_full_blocks(&self) -> bool {
        false
    }

    fn transform_block(&self, block: &[u8]) -> RsaKitResult<Vec<u8>> {
        // An unprefixed PKCS#1 v1.5 signature is exactly a type 1 block
        // over the raw chunk followed by the private key operation.
        self.key
            .sign(Pkcs1v15Sign::new_unprefixed(), block)
            .map_err(|_| RsaKitError::CipherTransform)
    }
}

/// Public key decryption (block type 1).
pub struct PublicDecryptor<'a> {
    key: &'a RsaPublicKey,
}

impl<'a> PublicDecryptor<'a> {
    /// Creates a decryptor for `key`.
    #[must_use]
    pub fn new(key: &'a RsaPublicKey) -> Self {
        Self { key }
    }
}

impl BlockTransform for PublicDecryptor<'_> {
    fn input_block_len(&self) -> usize {
        decrypt_block_size(self.key.size())
    }

    fn requires_full_blocks(&self) -> bool {
        true
    }

    fn transform_block(&self, block: &[u8]) -> RsaKitResult<Vec<u8>> {
        let k = self.key.size();
        if block.len() != k {
            return Err(RsaKitError::CipherTransform);
        }

        let n = self.key.n();
        let c = BigUint::from_bytes_be(block);
        if &c >= n {
            return Err(RsaKitError::CipherTransform);
        }

        // RSA public operation: m = c^e (mod n)
        let m = c.modpow(self.key.e(), n);
        let m_bytes = m.to_bytes_be();

        // Left-pad to the modulus length
        let mut em = vec![0u8; k];
        let start = k.saturating_sub(m_bytes.len());
        em[start..].copy_from_slice(&m_bytes);

        let data = unpad_type1(&em)?.to_vec();
        Ok(data)
    }
}

/// Strips PKCS#1 v1.5 block type 1 padding: `00 01 FF..FF 00 || data`.
fn unpad_type1(em: &[u8]) -> RsaKitResult<&[u8]> {
    if em.len() < PKCS1_PADDING_OVERHEAD || em[0] != 0x00 || em[1] != 0x01 {
        return Err(RsaKitError::CipherTransform);
    }

    let padding = &em[2..];
    let separator = padding
        .iter()
        .position(|&b| b != 0xFF)
        .ok_or(RsaKitError::CipherTransform)?;

    if padding[separator] != 0x00 || separator < MIN_TYPE1_PADDING {
        return Err(RsaKitError::CipherTransform);
    }

    Ok(&padding[separator + 1..])
}

// =============================================================================
// Text-keyed entry points
// =============================================================================

/// Encrypts `plaintext` with a Base64 X.509 public key.
///
/// The plaintext is split into chunks of `k - 11` bytes; each chunk becomes
/// one `k`-byte block of the result.
///
/// # Errors
///
/// Returns `RsaKitError::KeyDecoding` if the key text is invalid, or
/// `RsaKitError::CipherTransform` if a block fails.
pub fn encrypt_with_public_key(plaintext: &[u8], public_key: &str) -> RsaKitResult<Vec<u8>> {
    let key = decode_key::<Public>(public_key)?;
    process_blocks(&PublicEncryptor::new(&key), plaintext)
}

/// Encrypts `plaintext` with a Base64 PKCS#8 private key.
///
/// Output is deterministic for a given key and plaintext.
///
/// # Errors
///
/// Returns `RsaKitError::KeyDecoding` if the key text is invalid, or
/// `RsaKitError::CipherTransform` if a block fails.
pub fn encrypt_with_private_key(plaintext: &[u8], private_key: &str) -> RsaKitResult<Vec<u8>> {
    let key = decode_key::<Private>(private_key)?;
    process_blocks(&PrivateEncryptor::new(&key), plaintext)
}

/// Decrypts `ciphertext` produced by [`encrypt_with_public_key`].
///
/// # Errors
///
/// Returns `RsaKitError::KeyDecoding` if the key text is invalid, or
/// `RsaKitError::CipherTransform` if the ciphertext is not a whole number
/// of blocks or any block fails to decrypt. No partial plaintext is
/// returned.
pub fn decrypt_with_private_key(ciphertext: &[u8], private_key: &str) -> RsaKitResult<Vec<u8>> {
    let key = decode_key::<Private>(private_key)?;
    process_blocks(&PrivateDecryptor::new(&key), ciphertext)
}

/// Decrypts `ciphertext` produced by [`encrypt_with_private_key`].
///
/// # Errors
///
/// Returns `RsaKitError::KeyDecoding` if the key text is invalid, or
/// `RsaKitError::CipherTransform` if the ciphertext is not a whole number
/// of blocks or any block has invalid padding.
pub fn decrypt_with_public_key(ciphertext: &[u8], public_key: &str) -> RsaKitResult<Vec<u8>> {
    let key = decode_key::<Public>(public_key)?;
    process_blocks(&PublicDecryptor::new(&key), ciphertext)
}

/// Encrypts `plaintext` with a public key and returns Base64 ciphertext.
///
/// # Errors
///
/// Same as [`encrypt_with_public_key`].
pub fn encrypt_with_public_key_to_base64(
    plaintext: &[u8],
    public_key: &str,
) -> RsaKitResult<String> {
    encrypt_with_public_key(plaintext, public_key).map(|ciphertext| encode_base64(&ciphertext))
}

/// Decrypts Base64 ciphertext with a private key into a UTF-8 string.
///
/// # Errors
///
/// Returns `RsaKitError::CipherTransform` if the ciphertext text is not
/// Base64 or fails to decrypt, `RsaKitError::KeyDecoding` if the key text
/// is invalid, and `RsaKitError::PlaintextEncoding` if the plaintext is not
/// UTF-8.
pub fn decrypt_base64_with_private_key_to_string(
    ciphertext: &str,
    private_key: &str,
) -> RsaKitResult<String> {
    let ciphertext = decode_base64(ciphertext).map_err(|_| RsaKitError::CipherTransform)?;
    let plaintext = decrypt_with_private_key(&ciphertext, private_key)?;
    String::from_utf8(plaintext).map_err(|err| {
        let mut bytes = err.into_bytes();
        bytes.zeroize();
        RsaKitError::PlaintextEncoding
    })
}
