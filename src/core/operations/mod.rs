//! RSA operations.
//!
//! - [`keygen`] - Key pair generation
//! - [`block`] - Block-size arithmetic and the chunked transform loop
//! - [`cipher`] - Chunked encryption and decryption with either key
//! - [`signature`] - PKCS#1 v1.5 signing and verification

pub mod block;
pub mod cipher;
pub mod keygen;
pub mod signature;
