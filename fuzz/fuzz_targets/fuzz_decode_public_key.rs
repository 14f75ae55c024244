#![no_main]

use libfuzzer_sys::fuzz_target;
use rsa_kit::core::types::EncodedKey;
use rsa_kit::{decode_key, Public};

fuzz_target!(|data: &str| {
    // Arbitrary text must never panic
    let _ = EncodedKey::<Public>::try_from(data);
    let _ = decode_key::<Public>(data);
});
