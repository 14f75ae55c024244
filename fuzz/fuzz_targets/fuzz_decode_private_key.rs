#![no_main]

use libfuzzer_sys::fuzz_target;
use rsa_kit::core::types::EncodedKey;
use rsa_kit::{decode_key, Private};

fuzz_target!(|data: &str| {
    // Arbitrary text must never panic
    let _ = EncodedKey::<Private>::try_from(data);
    let _ = decode_key::<Private>(data);
});
