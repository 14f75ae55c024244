//! Core rsa-kit types and operations.
//!
//! This module provides the fundamental building blocks:
//!
//! - [`role`] - Key role markers (`Public`, `Private`) and their DER encodings
//! - [`error`] - Error types
//! - [`encoding`] - Base64 text utilities
//! - [`types`] - Encoded keys, key pairs and digest selection
//! - [`operations`] - Key generation, chunked encryption and signatures

pub mod encoding;
pub mod error;
pub mod operations;
pub mod role;
pub mod types;

// Re-export commonly used items
pub use error::{RsaKitError, RsaKitResult};
pub use role::{KeyRole, Private, Public};
