//! Test vector types for OpenSSL interoperability tests.
//!
//! The vectors in `rsa1024.json` were produced with the OpenSSL 3 command
//! line tools from a fixed 1024-bit key pair:
//!
//! - `private-encrypt`: `openssl rsautl -sign` applied to each 117-byte chunk
//! - `public-encrypt`: `openssl pkeyutl -encrypt` applied to each chunk
//! - `signatures`: `openssl dgst -<digest> -sign`

// Many fields are required for deserialization but not directly used in tests
#![allow(dead_code)]

use serde::Deserialize;

/// The top-level JSON structure.
#[derive(Debug, Deserialize)]
pub struct VectorFile {
    pub name: String,
    /// Base64 X.509 `SubjectPublicKeyInfo`
    #[serde(rename = "public-key")]
    pub public_key: String,
    /// Base64 PKCS#8 `PrivateKeyInfo`
    #[serde(rename = "private-key")]
    pub private_key: String,
    /// Public key of an unrelated pair of the same size
    #[serde(rename = "other-public-key")]
    pub other_public_key: String,
    #[serde(rename = "modulus-bits")]
    pub modulus_bits: usize,
    #[serde(rename = "private-encrypt")]
    pub private_encrypt: Vec<CipherVector>,
    #[serde(rename = "public-encrypt")]
    pub public_encrypt: Vec<CipherVector>,
    pub signatures: Vec<SignatureVector>,
}

/// A chunked ciphertext and the plaintext it decrypts to.
#[derive(Debug, Deserialize)]
pub struct CipherVector {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    /// Hex-encoded plaintext
    pub plaintext: String,
    /// Hex-encoded concatenation of ciphertext blocks
    pub ciphertext: String,
}

/// A PKCS#1 v1.5 signature over `data`.
#[derive(Debug, Deserialize)]
pub struct SignatureVector {
    pub name: String,
    /// JCA-style algorithm name, e.g. "SHA256withRSA"
    pub digest: String,
    /// Hex-encoded signed data
    pub data: String,
    /// Base64 signature
    pub signature: String,
}

/// Decode a hex string to bytes.
pub fn hex_decode(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap_or_else(|e| panic!("invalid hex in test vector: {e}"))
}

/// Load the vector file from `tests/vectors`.
pub fn load_vectors(file_name: &str) -> VectorFile {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/vectors")
        .join(file_name);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {}: {e}", path.display()))
}
