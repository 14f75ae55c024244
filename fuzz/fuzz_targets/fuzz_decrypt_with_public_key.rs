#![no_main]

use libfuzzer_sys::fuzz_target;
use rsa_kit::decrypt_with_public_key;

// 1024-bit X.509 public key from tests/vectors/rsa1024.json
const PUBLIC_KEY: &str = "MIGfMA0GCSqGSIb3DQEBAQUAA4GNADCBiQKBgQC3MjsP83HtRca+q3zMWqi0QCq6oQ+X8CsptBCYt4ctTH40/HjkeFumhISAaJ2vPFXKszaR3DAgqJPGvhuuu44/7Cea+hzodsiKa4fu4JJhzzf1KtM/oe/sMLb0pesT5yDlNq0qzBYH93x2nRvediTrvnr5stJ8N5V+yBXLGi44iQIDAQAB";

fuzz_target!(|data: &[u8]| {
    // Malformed ciphertext and padding must be rejected without panicking
    let _ = decrypt_with_public_key(data, PUBLIC_KEY);
});
