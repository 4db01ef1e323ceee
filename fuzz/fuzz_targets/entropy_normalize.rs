#![no_main]

use libfuzzer_sys::fuzz_target;
use seedscope_core::{normalize_input, normalize_manual, Entropy, EntropyInput, EntropyWidth};

fuzz_target!(|data: &[u8]| {
    // Arbitrary text must classify or fail cleanly, and any accepted value
    // must have exactly 128 or 256 bits.
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(EntropyInput::Supplied(entropy)) = normalize_input(s) {
            let bits = entropy.to_binary().len();
            assert!(bits == 128 || bits == 256);
            assert_eq!(entropy.as_bytes().len() * 8, bits);
        }
        if let Ok(entropy) = Entropy::from_hex(s) {
            assert_eq!(entropy.to_hex(), s.trim().to_lowercase());
        }
        let _ = normalize_manual(s, EntropyWidth::Bits128);
    }
});
