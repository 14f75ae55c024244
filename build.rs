//! Build script for rsa-kit.
//!
//! This emits compile-time warnings for security-sensitive feature flags.

fn main() {
    // Emit a compile-time warning when legacy-sha1 feature is enabled
    #[cfg(feature = "legacy-sha1")]
    {
        // Note: Using single-colon syntax for MSRV 1.75.0 compatibility
        println!("cargo:warning=SECURITY WARNING: The 'legacy-sha1' feature is enabled.");
        println!("cargo:warning=SHA-1 is not collision resistant and must not be used for new signatures.");
        println!("cargo:warning=Use SignatureDigest::Sha256 or stronger unless a SHA1withRSA peer requires it.");
    }
}
