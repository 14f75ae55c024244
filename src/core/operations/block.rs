//! Block-wise processing of messages larger than one RSA block.
//!
//! RSA with PKCS#1 v1.5 padding transforms at most one modulus-sized block
//! per operation. Longer inputs are split into consecutive chunks which are
//! transformed independently and concatenated in order:
//!
//! | Direction | Input chunk | Output block |
//! |-----------|-------------|--------------|
//! | encrypt   | up to `k - 11` bytes | exactly `k` bytes |
//! | decrypt   | exactly `k` bytes    | up to `k - 11` bytes |
//!
//! where `k` is the modulus length in bytes of the key used for the call.
//! Encryption capacity counts only whole bytes of the modulus
//! (`floor(bits / 8)`), while ciphertext blocks are the full rounded-up
//! length. The two agree for moduli that are a multiple of 8 bits.
//!
//! # Security
//!
//! Chunks are processed like ECB: nothing binds one block to the next, so
//! blocks can be reordered, dropped or replayed without detection. Callers
//! that need integrity across a message must add it themselves (for example
//! by signing the plaintext).

use tracing::debug;
use zeroize::Zeroize;

use crate::core::error::{RsaKitError, RsaKitResult};

/// Bytes of PKCS#1 v1.5 padding overhead in every encrypted block.
pub const PKCS1_PADDING_OVERHEAD: usize = 11;

/// Maximum plaintext bytes per block for a modulus of `modulus_bytes`.
///
/// Returns `None` if the modulus is too small to carry any data.
#[must_use]
pub const fn encrypt_block_capacity(modulus_bytes: usize) -> Option<usize> {
    match modulus_bytes.checked_sub(PKCS1_PADDING_OVERHEAD) {
        Some(0) | None => None,
        Some(capacity) => Some(capacity),
    }
}

/// Ciphertext bytes per block for a modulus of `modulus_bytes`.
#[must_use]
pub const fn decrypt_block_size(modulus_bytes: usize) -> usize {
    modulus_bytes
}

/// Length of the ciphertext produced for `plaintext_len` bytes.
#[must_use]
pub fn ciphertext_len(plaintext_len: usize, modulus_bytes: usize) -> Option<usize> {
    let capacity = encrypt_block_capacity(modulus_bytes)?;
    plaintext_len
        .div_ceil(capacity)
        .checked_mul(decrypt_block_size(modulus_bytes))
}

/// A single-block RSA operation.
///
/// Implementors transform exactly one chunk; [`process_blocks`] handles
/// partitioning and reassembly.
pub trait BlockTransform {
    /// Maximum number of input bytes accepted per block.
    fn input_block_len(&self) -> usize;

    /// Whether every input block must be exactly `input_block_len` bytes.
    ///
    /// True for decryption, where the input is a sequence of whole blocks.
    fn requires_full_blocks(&self) -> bool;

    /// Transforms one chunk.
    ///
    /// # Errors
    ///
    /// Returns `RsaKitError::CipherTransform` if the chunk cannot be
    /// transformed.
    fn transform_block(&self, block: &[u8]) -> RsaKitResult<Vec<u8>>;
}

/// Splits `input` into blocks, transforms each, and concatenates the results.
///
/// Empty input yields empty output. If any block fails the whole call fails
/// and the partially assembled output is zeroized before being dropped.
///
/// # Errors
///
/// Returns `RsaKitError::CipherTransform` if the input length is not a whole
/// number of blocks where that is required, or if any block fails.
pub fn process_blocks<T: BlockTransform + ?Sized>(
    transform: &T,
    input: &[u8],
) -> RsaKitResult<Vec<u8>> {
    let block_len = transform.input_block_len();
    if block_len == 0 {
        return Err(RsaKitError::CipherTransform);
    }
    if transform.requires_full_blocks() && input.len() % block_len != 0 {
        return Err(RsaKitError::CipherTransform);
    }

    let block_count = input.len().div_ceil(block_len);
    debug!(input_len = input.len(), block_len, block_count, "processing RSA blocks");

    let mut output = Vec::with_capacity(input.len());
    for chunk in input.chunks(block_len) {
        match transform.transform_block(chunk) {
            Ok(mut block) => {
                output.extend_from_slice(&block);
                block.zeroize();
            }
            Err(err) => {
                output.zeroize();
                return Err(err);
            }
        }
    }

    Ok(output)
}
