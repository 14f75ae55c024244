//! RSA key helper with chunked PKCS#1 v1.5 encryption.
//!
//! This crate wraps the RustCrypto [`rsa`] crate with the operations most
//! applications reach for when exchanging RSA keys as text:
//!
//! - key pair generation
//! - Base64 key encoding (X.509 `SubjectPublicKeyInfo` / PKCS#8)
//! - encryption and decryption of messages of any length, in both key
//!   directions, by splitting them into PKCS#1 v1.5 blocks
//! - PKCS#1 v1.5 signatures with a selectable digest
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rsa_kit::core::operations::cipher::{decrypt_with_private_key, encrypt_with_public_key};
//! use rsa_kit::core::operations::keygen::{init_key, RECOMMENDED_KEY_BITS};
//! use rsa_kit::core::operations::signature::{sign, verify};
//! use rsa_kit::SignatureDigest;
//!
//! let pair = init_key(RECOMMENDED_KEY_BITS)?;
//! let public_key = pair.encoded_public_key()?.to_string();
//! let private_key = pair.encoded_private_key()?.to_string();
//!
//! // Messages longer than one block are chunked transparently
//! let message = vec![0x42u8; 600];
//! let ciphertext = encrypt_with_public_key(&message, &public_key)?;
//! assert_eq!(decrypt_with_private_key(&ciphertext, &private_key)?, message);
//!
//! let signature = sign(&message, &private_key, SignatureDigest::Sha256)?;
//! assert!(verify(&message, &public_key, &signature, SignatureDigest::Sha256)?);
//! # Ok::<(), rsa_kit::RsaKitError>(())
//! ```
//!
//! # Block Sizes
//!
//! For a modulus of `k` bytes, each encrypted block carries at most
//! `k - 11` bytes of plaintext and every ciphertext block is exactly `k`
//! bytes:
//!
//! | Modulus | Plaintext per block | Ciphertext per block |
//! |---------|---------------------|----------------------|
//! | 1024    | 117                 | 128                  |
//! | 2048    | 245                 | 256                  |
//! | 4096    | 501                 | 512                  |
//!
//! # Features
//!
//! ```toml
//! [dependencies]
//! rsa-kit = "0.1"  # prelude builders (default)
//! rsa-kit = { version = "0.1", features = ["legacy-sha1"] }  # SHA1withRSA
//! ```
//!
//! # Security
//!
//! - Blocks are independent (ECB-like); nothing detects reordered or
//!   dropped blocks. Sign the plaintext if integrity matters.
//! - The 1024-bit default key size and SHA-1 are kept only for
//!   compatibility and are deprecated.
//! - The `rsa` crate is affected by [RUSTSEC-2023-0071] (Marvin Attack), a
//!   timing side channel in private key operations.
//! - Private key material is zeroized on drop and redacted from `Debug`.
//! - No unsafe code
//!
//! [RUSTSEC-2023-0071]: https://rustsec.org/advisories/RUSTSEC-2023-0071
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Builders and convenient imports (requires `prelude` feature)

#![forbid(unsafe_code)]

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use core::error::{RsaKitError, RsaKitResult};
pub use core::role::{KeyRole, Private, Public};
pub use core::types::{decode_key, encode_key, EncodedKey, KeyPair, SignatureDigest};

pub use core::operations::cipher::{
    decrypt_base64_with_private_key_to_string, decrypt_with_private_key, decrypt_with_public_key,
    encrypt_with_private_key, encrypt_with_public_key, encrypt_with_public_key_to_base64,
};
#[allow(deprecated)]
pub use core::operations::keygen::{
    init_key, init_key_default, init_key_with_rng, LEGACY_KEY_BITS, RECOMMENDED_KEY_BITS,
};
pub use core::operations::signature::{sign, verify};

#[cfg(feature = "legacy-sha1")]
#[allow(deprecated)]
pub use core::operations::signature::{sign_legacy, verify_legacy};
