//! Ergonomic layer for rsa-kit.
//!
//! The prelude module re-exports the core types and operations together
//! with builder presets for key generation and signing.
//!
//! # Usage
//!
//! ```rust
//! use rsa_kit::prelude::*;
//! ```

mod builders;

pub use builders::{KeyPairBuilder, SignerBuilder};

// Re-export core types for convenience
pub use crate::core::error::{RsaKitError, RsaKitResult};
pub use crate::core::operations::cipher::{
    decrypt_with_private_key, decrypt_with_public_key, encrypt_with_private_key,
    encrypt_with_public_key,
};
pub use crate::core::operations::signature::{sign, verify};
pub use crate::core::role::{KeyRole, Private, Public};
pub use crate::core::types::{EncodedKey, KeyPair, SignatureDigest};
