//! Seed report
//!
//! Collects every intermediate value of one run into a flat, serializable
//! record for display. Assembly does no computation of its own beyond
//! formatting what the checksum and encoder already produced.

use crate::checksum::Checksum;
use crate::encoder::SeedPhrase;
use crate::entropy::{Entropy, EntropyOrigin};
use crate::wordlist::Wordlist;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Words in the example passphrase
pub const PASSPHRASE_WORDS: usize = 6;

/// Everything derived from one entropy value
#[derive(Clone, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct SeedReport {
    #[zeroize(skip)]
    pub origin: EntropyOrigin,
    /// 128 or 256
    pub entropy_bits: usize,
    pub entropy_binary: String,
    pub entropy_hex: String,
    pub entropy_decimal: String,
    /// SHA-256 of the entropy bytes, hex
    pub sha256: String,
    /// 4 or 8
    pub checksum_bits: usize,
    pub checksum_binary: String,
    pub checksum_hex: String,
    /// Final, checksum-bearing word
    pub last_word: String,
    /// 1-based position of `last_word` in the wordlist
    pub last_word_number: u16,
    /// Entropy followed by checksum, 132 or 264 bits
    pub full_binary: String,
    /// 1-based wordlist positions, in phrase order
    pub word_numbers: Vec<u16>,
    pub words: Vec<String>,
    /// Six random words concatenated, shown as a passphrase idea
    pub passphrase_example: String,
}

impl SeedReport {
    pub fn assemble(
        entropy: &Entropy,
        checksum: &Checksum,
        phrase: &SeedPhrase,
        passphrase_example: String,
    ) -> Self {
        let (last_word, last_word_number) = phrase
            .last_word()
            .map(|(word, number)| (word.to_string(), number))
            .unwrap_or_default();

        Self {
            origin: entropy.origin(),
            entropy_bits: entropy.width().bits(),
            entropy_binary: entropy.to_binary(),
            entropy_hex: entropy.to_hex(),
            entropy_decimal: entropy.to_decimal(),
            sha256: checksum.digest_hex(),
            checksum_bits: checksum.bit_len(),
            checksum_binary: checksum.bits(),
            checksum_hex: checksum.hex(),
            last_word,
            last_word_number,
            full_binary: phrase.full_bits().to_string(),
            word_numbers: phrase.word_numbers(),
            words: phrase.words().to_vec(),
            passphrase_example,
        }
    }

    /// The seed phrase, space separated
    pub fn phrase(&self) -> String {
        self.words.join(" ")
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Length of `full_binary` in bits
    pub fn total_bits(&self) -> usize {
        self.entropy_bits + self.checksum_bits
    }
}

impl std::fmt::Debug for SeedReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedReport")
            .field("origin", &self.origin)
            .field("entropy_bits", &self.entropy_bits)
            .field("word_count", &self.words.len())
            .finish_non_exhaustive()
    }
}

/// Draw six distinct words without replacement.
pub fn sample_passphrase_words<'a, R: Rng + ?Sized>(
    wordlist: &'a Wordlist,
    rng: &mut R,
) -> Vec<&'a str> {
    wordlist
        .words()
        .choose_multiple(rng, PASSPHRASE_WORDS)
        .map(String::as_str)
        .collect()
}

/// Six distinct random words concatenated with no separator.
pub fn sample_passphrase<R: Rng + ?Sized>(wordlist: &Wordlist, rng: &mut R) -> String {
    sample_passphrase_words(wordlist, rng).concat()
}
