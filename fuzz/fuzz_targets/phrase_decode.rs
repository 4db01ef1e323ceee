#![no_main]

use libfuzzer_sys::fuzz_target;
use seedscope_core::{decode_phrase, Wordlist};
use std::sync::OnceLock;

static WORDLIST: OnceLock<Wordlist> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    // decode_phrase must never panic, it should always return Ok or Err.
    let wordlist = WORDLIST.get_or_init(Wordlist::english);
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = decode_phrase(s, wordlist);
    }
});
