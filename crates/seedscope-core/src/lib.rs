//! Seedscope Core
//!
//! Turns 128 or 256 bits of entropy into a BIP-39 seed phrase and keeps
//! every intermediate value around for inspection.
//!
//! # Pipeline
//!
//! ```text
//! raw text ─► entropy::normalize_input ─► Entropy ─► checksum::compute_checksum
//!                                           │                 │
//!                                           └──► encoder::encode_phrase ◄┘
//!                                                        │
//!                                              report::SeedReport
//! ```
//!
//! Nothing here touches stdin/stdout. The wordlist and the random bit source
//! are passed in, so tests can substitute their own.
//!
//! # Example
//!
//! ```
//! use seedscope_core::{checksum, encoder, entropy::Entropy, wordlist::Wordlist};
//!
//! let wordlist = Wordlist::english();
//! let entropy = Entropy::from_hex("00000000000000000000000000000000").unwrap();
//!
//! let checksum = checksum::compute_checksum(&entropy);
//! assert_eq!(checksum.bits(), "0011");
//!
//! let phrase = encoder::encode_phrase(&entropy, &checksum, &wordlist).unwrap();
//! assert_eq!(phrase.words().len(), 12);
//! assert_eq!(phrase.last_word(), Some(("about", 4)));
//! ```

pub mod checksum;
pub mod encoder;
pub mod entropy;
pub mod report;
pub mod source;
pub mod wordlist;

pub use checksum::{compute_checksum, Checksum};
pub use encoder::{decode_phrase, encode_phrase, DecodedPhrase, SeedPhrase};
pub use entropy::{
    normalize_input, normalize_manual, Entropy, EntropyInput, EntropyOrigin, EntropyWidth,
};
pub use report::{sample_passphrase, SeedReport};
pub use source::{generate_entropy, parse_width_selector, BitSource, DiceRoller};
pub use wordlist::{Wordlist, WORDLIST_LEN};

use rand::Rng;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedscopeError {
    #[error("Wordlist not found at {path}: {source}")]
    WordlistMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed wordlist: {0}")]
    WordlistMalformed(String),
    #[error("Not enough entropy: need at least {required} bits, got {actual}")]
    InsufficientEntropy { required: usize, actual: usize },
    #[error("Hex must be 32 chars (128-bit) or 64 chars (256-bit), got {0}")]
    InvalidHexLength(usize),
    #[error("Input must be binary (0s and 1s) or hex (0-9, a-f, A-F)")]
    InvalidInputFormat,
    #[error("Width selector must be 0 (128 bits) or 1 (256 bits), got {0:?}")]
    InvalidWidthSelector(String),
    #[error("Word index {index} out of range for a wordlist of {len} entries")]
    WordlistCorrupt { index: usize, len: usize },
    #[error("Phrase must have 12 or 24 words, got {0}")]
    InvalidWordCount(usize),
    #[error("Unknown word: {0}")]
    UnknownWord(String),
    #[error("Checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: String, found: String },
}

pub type Result<T> = std::result::Result<T, SeedscopeError>;

/// Run checksum, encoding and report assembly for one entropy value.
///
/// `rng` is only used to draw the example passphrase.
pub fn generate_report<R: Rng + ?Sized>(
    entropy: &Entropy,
    wordlist: &Wordlist,
    rng: &mut R,
) -> Result<SeedReport> {
    let checksum = compute_checksum(entropy);
    let phrase = encode_phrase(entropy, &checksum, wordlist)?;
    let passphrase = sample_passphrase(wordlist, rng);
    Ok(SeedReport::assemble(entropy, &checksum, &phrase, passphrase))
}
