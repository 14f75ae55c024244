//! Key and algorithm types.
//!
//! - [`EncodedKey`] - Base64 text of a key's DER encoding, typed by role
//! - [`KeyPair`] - Generated public/private key pair
//! - [`SignatureDigest`] - Digest selection for PKCS#1 v1.5 signatures

mod digest;
mod encoded_key;
mod key_pair;

pub use digest::SignatureDigest;
pub use encoded_key::{decode_key, encode_key, EncodedKey};
pub use key_pair::KeyPair;
