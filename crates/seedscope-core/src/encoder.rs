//! Mnemonic encoding and decoding
//!
//! Entropy bits followed by checksum bits form a 132- or 264-bit stream.
//! The stream is cut into 11-bit groups, most significant first, and each
//! group indexes one word of the 2048-word list.
//!
//! ```text
//! 128-bit:  [ entropy 128 ][cs 4]  = 132 bits = 12 × 11
//! 256-bit:  [ entropy 256 ][cs 8]  = 264 bits = 24 × 11
//! ```
//!
//! The last word always carries the checksum bits.

use crate::checksum::{compute_checksum, Checksum};
use crate::entropy::{Entropy, EntropyOrigin, EntropyWidth};
use crate::wordlist::Wordlist;
use crate::{Result, SeedscopeError};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Bits encoded by one word (2^11 = 2048)
pub const BITS_PER_WORD: usize = 11;

/// An encoded seed phrase with the bitstream and indices it came from
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SeedPhrase {
    full_bits: String,
    indices: Vec<u16>,
    words: Vec<String>,
}

impl SeedPhrase {
    /// Entropy bits followed by checksum bits
    pub fn full_bits(&self) -> &str {
        &self.full_bits
    }

    /// 0-based wordlist positions, in phrase order
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// 1-based word numbers (1..=2048), as printed on BIP-39 word cards
    pub fn word_numbers(&self) -> Vec<u16> {
        self.indices.iter().map(|i| i + 1).collect()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Words joined by single spaces
    pub fn phrase(&self) -> String {
        self.words.join(" ")
    }

    /// The checksum-bearing final word and its 1-based number.
    ///
    /// Uses the index computed during encoding rather than searching the
    /// wordlist for the word.
    pub fn last_word(&self) -> Option<(&str, u16)> {
        let word = self.words.last()?;
        let index = self.indices.last()?;
        Some((word.as_str(), index + 1))
    }
}

impl std::fmt::Debug for SeedPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedPhrase")
            .field("word_count", &self.words.len())
            .finish_non_exhaustive()
    }
}

/// Encode entropy plus its checksum as words.
///
/// Fails with `WordlistCorrupt` if a group's value has no word, which can
/// only happen with a defective wordlist.
pub fn encode_phrase(
    entropy: &Entropy,
    checksum: &Checksum,
    wordlist: &Wordlist,
) -> Result<SeedPhrase> {
    let mut full_bits = entropy.to_binary();
    full_bits.push_str(&checksum.bits());
    debug_assert_eq!(full_bits.len(), entropy.width().total_bits());

    let indices = split_groups(&full_bits)?;
    let words = indices
        .iter()
        .map(|&index| {
            wordlist
                .word(index as usize)
                .map(str::to_string)
                .ok_or(SeedscopeError::WordlistCorrupt {
                    index: index as usize,
                    len: wordlist.len(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "Encoded {} bits as {} words",
        full_bits.len(),
        words.len()
    );

    Ok(SeedPhrase {
        full_bits,
        indices,
        words,
    })
}

/// Cut a `0`/`1` string into 11-bit values, most significant first.
///
/// A trailing group shorter than 11 bits is dropped. Any character other
/// than `0` or `1` yields `InvalidInputFormat`.
pub fn split_groups(bits: &str) -> Result<Vec<u16>> {
    bits.as_bytes()
        .chunks_exact(BITS_PER_WORD)
        .map(|chunk| {
            chunk.iter().try_fold(0u16, |acc, &b| match b {
                b'0' => Ok(acc << 1),
                b'1' => Ok((acc << 1) | 1),
                _ => Err(SeedscopeError::InvalidInputFormat),
            })
        })
        .collect()
}

/// A phrase turned back into entropy, with its checksum verified
#[derive(Debug, Clone)]
pub struct DecodedPhrase {
    entropy: Entropy,
    checksum: Checksum,
    indices: Vec<u16>,
}

impl DecodedPhrase {
    pub fn entropy(&self) -> &Entropy {
        &self.entropy
    }

    pub fn checksum(&self) -> &Checksum {
        &self.checksum
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Rebuilt entropy + checksum bitstream
    pub fn full_bits(&self) -> String {
        let mut bits = self.entropy.to_binary();
        bits.push_str(&self.checksum.bits());
        bits
    }
}

/// Decode a 12- or 24-word phrase back to entropy.
///
/// Words are matched case-insensitively. The checksum bits carried by the
/// phrase must match the checksum recomputed from the recovered entropy.
pub fn decode_phrase(phrase: &str, wordlist: &Wordlist) -> Result<DecodedPhrase> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    let width = EntropyWidth::from_word_count(words.len())
        .ok_or(SeedscopeError::InvalidWordCount(words.len()))?;

    let indices = words
        .iter()
        .map(|word| {
            wordlist
                .index_of(&word.to_lowercase())
                .ok_or_else(|| SeedscopeError::UnknownWord(word.to_string()))
        })
        .collect::<Result<Vec<u16>>>()?;

    let mut bits = Zeroizing::new(String::with_capacity(width.total_bits()));
    for index in &indices {
        bits.push_str(&format!("{:011b}", index));
    }

    let (entropy_bits, checksum_bits) = bits.split_at(width.bits());
    let entropy = Entropy::from_bit_str(entropy_bits, width, EntropyOrigin::Phrase);
    let checksum = compute_checksum(&entropy);

    if checksum.bits() != checksum_bits {
        return Err(SeedscopeError::ChecksumMismatch {
            expected: checksum.bits(),
            found: checksum_bits.to_string(),
        });
    }

    Ok(DecodedPhrase {
        entropy,
        checksum,
        indices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_12: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn encode_hex(hex: &str, wordlist: &Wordlist) -> SeedPhrase {
        let entropy = Entropy::from_hex(hex).unwrap();
        let checksum = compute_checksum(&entropy);
        encode_phrase(&entropy, &checksum, wordlist).unwrap()
    }

    #[test]
    fn test_zero_entropy_phrase() {
        let phrase = encode_hex(&"0".repeat(32), &Wordlist::english());
        assert_eq!(phrase.phrase(), ZERO_12);
        assert_eq!(phrase.indices(), &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3]);
        assert_eq!(phrase.word_numbers(), vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 4]);
        assert_eq!(phrase.last_word(), Some(("about", 4)));
        assert_eq!(phrase.full_bits().len(), 132);
        assert!(phrase.full_bits().ends_with("0011"));
    }

    #[test]
    fn test_word_counts() {
        let wordlist = Wordlist::english();
        assert_eq!(encode_hex(&"ab".repeat(16), &wordlist).words().len(), 12);
        assert_eq!(encode_hex(&"ab".repeat(32), &wordlist).words().len(), 24);
    }

    #[test]
    fn test_last_word_carries_checksum() {
        // 0xff * 16: last group is 1111111 + checksum 0101
        let phrase = encode_hex(&"f".repeat(32), &Wordlist::english());
        assert_eq!(phrase.last_word(), Some(("wrong", 2038)));
        assert_eq!(phrase.indices()[..11], [2047; 11]);
    }

    #[test]
    fn test_split_groups_drops_short_tail() {
        let bits = format!("{}{}", "00000000001", "11111");
        assert_eq!(split_groups(&bits).unwrap(), vec![1]);
        assert_eq!(split_groups("11111111111").unwrap(), vec![2047]);
        assert!(split_groups("1010").unwrap().is_empty());
    }

    #[test]
    fn test_split_groups_rejects_non_binary() {
        for bad in ["0000000000 ", "2222222222a", "0000000000100000000 00"] {
            assert!(
                matches!(split_groups(bad), Err(SeedscopeError::InvalidInputFormat)),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_encode_with_substitute_wordlist() {
        let words: Vec<String> = (0..2048).map(|i| format!("w{:04}", i)).collect();
        let wordlist = Wordlist::from_words(words).unwrap();
        let phrase = encode_hex(&"0".repeat(32), &wordlist);
        assert_eq!(phrase.words()[0], "w0000");
        assert_eq!(phrase.words()[11], "w0003");
    }

    #[test]
    fn test_encode_rejects_short_wordlist() {
        let wordlist = Wordlist::english().truncated(100);
        let entropy = Entropy::from_hex(&"f".repeat(32)).unwrap();
        let checksum = compute_checksum(&entropy);

        let err = encode_phrase(&entropy, &checksum, &wordlist).unwrap_err();
        assert!(matches!(
            err,
            SeedscopeError::WordlistCorrupt { index: 2047, len: 100 }
        ));
    }

    #[test]
    fn test_decode_roundtrip() {
        let wordlist = Wordlist::english();
        let wide = "c4".repeat(32);
        for hex in ["9e885d952ad362caeb4efe34a8e91bd2", wide.as_str()] {
            let phrase = encode_hex(hex, &wordlist);
            let decoded = decode_phrase(&phrase.phrase(), &wordlist).unwrap();
            assert_eq!(decoded.entropy().to_hex(), hex);
            assert_eq!(decoded.entropy().origin(), EntropyOrigin::Phrase);
            assert_eq!(decoded.indices(), phrase.indices());
            assert_eq!(decoded.full_bits(), phrase.full_bits());
        }
    }

    #[test]
    fn test_decode_is_case_and_space_tolerant() {
        let wordlist = Wordlist::english();
        let messy = format!("  {}  ", ZERO_12.to_uppercase().replace(' ', "\t"));
        let decoded = decode_phrase(&messy, &wordlist).unwrap();
        assert_eq!(decoded.entropy().as_bytes(), &[0u8; 16]);
    }

    #[test]
    fn test_decode_rejects_bad_checksum() {
        let wordlist = Wordlist::english();
        let tampered = ZERO_12.replace("about", "abandon");
        let err = decode_phrase(&tampered, &wordlist).unwrap_err();
        match err {
            SeedscopeError::ChecksumMismatch { expected, found } => {
                assert_eq!(expected, "0011");
                assert_eq!(found, "0000");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_rejects_unknown_word_and_count() {
        let wordlist = Wordlist::english();
        let err = decode_phrase(&ZERO_12.replace("about", "bitcoin"), &wordlist).unwrap_err();
        assert!(matches!(err, SeedscopeError::UnknownWord(ref w) if w == "bitcoin"));

        let err = decode_phrase("abandon abandon about", &wordlist).unwrap_err();
        assert!(matches!(err, SeedscopeError::InvalidWordCount(3)));
    }
}
