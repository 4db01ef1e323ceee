//! End-to-end tests for the seedscope pipeline.
//!
//! Exercises:
//!
//! 1. Agreement with the independent `bip39` crate on random entropy
//! 2. Encode/decode round-trips for both widths
//! 3. Loading the wordlist from a file
//! 4. A substitute wordlist and a scripted bit source giving exact output
//! 5. Rejection of malformed input
//!
//! Run with: cargo test -p seedscope-e2e

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use seedscope_core::{
    compute_checksum, decode_phrase, encode_phrase, generate_entropy, generate_report,
    normalize_input, normalize_manual, BitSource, DiceRoller, Entropy, EntropyOrigin,
    EntropyWidth, SeedscopeError, Wordlist,
};
use std::io::Write;

fn supplied(text: &str) -> Entropy {
    normalize_input(text).unwrap().into_entropy().unwrap()
}

// ============================================================================
// 1. Agreement with the bip39 crate
// ============================================================================

#[test]
fn test_matches_bip39_crate_on_random_entropy() {
    let wordlist = Wordlist::english();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for len in [16usize, 32] {
        for _ in 0..100 {
            let mut bytes = vec![0u8; len];
            rng.fill_bytes(&mut bytes);

            let entropy = Entropy::from_hex(&hex::encode(&bytes)).unwrap();
            let checksum = compute_checksum(&entropy);
            let phrase = encode_phrase(&entropy, &checksum, &wordlist).unwrap();

            let reference = bip39::Mnemonic::from_entropy(&bytes).unwrap();
            assert_eq!(phrase.phrase(), reference.to_string());
        }
    }
}

#[test]
fn test_dice_entropy_is_valid_bip39() {
    let wordlist = Wordlist::english();

    for width in [EntropyWidth::Bits128, EntropyWidth::Bits256] {
        let mut dice = DiceRoller::from_os_entropy();
        let entropy = generate_entropy(&mut dice, width);
        let report = generate_report(&entropy, &wordlist, &mut StdRng::from_entropy()).unwrap();

        let parsed = bip39::Mnemonic::parse_in(bip39::Language::English, report.phrase())
            .expect("dice phrase should be a valid BIP-39 mnemonic");
        assert_eq!(hex::encode(parsed.to_entropy()), report.entropy_hex);
        assert_eq!(report.word_count(), width.word_count());
    }
}

// ============================================================================
// 2. Round-trips
// ============================================================================

#[test]
fn test_phrase_roundtrip_reproduces_bitstream() {
    let wordlist = Wordlist::english();
    let mut rng = StdRng::seed_from_u64(77);

    for width in [EntropyWidth::Bits128, EntropyWidth::Bits256] {
        for _ in 0..50 {
            let entropy = generate_entropy(&mut DiceRoller::new(&mut rng), width);
            let checksum = compute_checksum(&entropy);
            let phrase = encode_phrase(&entropy, &checksum, &wordlist).unwrap();

            let decoded = decode_phrase(&phrase.phrase(), &wordlist).unwrap();
            assert_eq!(decoded.entropy(), &entropy);
            assert_eq!(decoded.full_bits(), phrase.full_bits());
            assert_eq!(decoded.checksum().bits(), checksum.bits());
        }
    }
}

#[test]
fn test_hex_roundtrip() {
    let mut rng = StdRng::seed_from_u64(3);
    for len in [16usize, 32] {
        let mut bytes = vec![0u8; len];
        rng.fill_bytes(&mut bytes);
        let hex = hex::encode(&bytes);

        let entropy = Entropy::from_hex(&hex.to_uppercase()).unwrap();
        assert_eq!(entropy.to_hex(), hex);
        assert_eq!(entropy.to_binary().len(), len * 8);

        let rebinned = supplied(&entropy.to_binary());
        assert_eq!(rebinned.to_hex(), hex);
    }
}

// ============================================================================
// 3. Wordlist file
// ============================================================================

#[test]
fn test_pipeline_with_wordlist_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for word in Wordlist::english().words() {
        writeln!(file, "{}", word).unwrap();
    }
    let wordlist = Wordlist::from_file(file.path()).unwrap();

    let entropy = supplied("9e885d952ad362caeb4efe34a8e91bd2");
    let report = generate_report(&entropy, &wordlist, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(
        report.phrase(),
        "ozone drill grab fiber curtain grace pudding thank cruise elder eight picnic"
    );
    assert_eq!(report.last_word, "picnic");
}

// ============================================================================
// 4. Substitute collaborators
// ============================================================================

/// Plays back a fixed bit pattern forever
struct Pattern(Vec<bool>, usize);

impl BitSource for Pattern {
    fn next_bit(&mut self) -> bool {
        let bit = self.0[self.1 % self.0.len()];
        self.1 += 1;
        bit
    }
}

#[test]
fn test_scripted_source_with_mock_wordlist() {
    let words: Vec<String> = (0..2048).map(|i| format!("word{}", i)).collect();
    let wordlist = Wordlist::from_words(words).unwrap();

    // 128 alternating bits: 0xaa * 16
    let mut source = Pattern(vec![true, false], 0);
    let entropy = generate_entropy(&mut source, EntropyWidth::Bits128);
    assert_eq!(entropy.to_hex(), "aa".repeat(16));

    let report = generate_report(&entropy, &wordlist, &mut StdRng::seed_from_u64(8)).unwrap();
    // First 11 bits 10101010101 = 1365, second 01010101010 = 682
    assert_eq!(report.words[0], "word1365");
    assert_eq!(report.words[1], "word682");
    assert_eq!(report.word_numbers[0], 1366);
    assert_eq!(report.origin, EntropyOrigin::Dice);

    // Passphrase drawn from the mock list
    assert!(report.passphrase_example.starts_with("word"));
}

#[test]
fn test_report_is_deterministic_apart_from_passphrase() {
    let wordlist = Wordlist::english();
    let entropy = supplied(&"c0ffee00".repeat(8));

    let a = generate_report(&entropy, &wordlist, &mut StdRng::seed_from_u64(1)).unwrap();
    let b = generate_report(&entropy, &wordlist, &mut StdRng::seed_from_u64(2)).unwrap();

    let mut a_json = serde_json::to_value(&a).unwrap();
    let mut b_json = serde_json::to_value(&b).unwrap();
    a_json.as_object_mut().unwrap().remove("passphrase_example");
    b_json.as_object_mut().unwrap().remove("passphrase_example");
    assert_eq!(a_json, b_json);
}

// ============================================================================
// 5. Rejections
// ============================================================================

#[test]
fn test_rejections() {
    assert!(matches!(
        normalize_input(&"a".repeat(30)),
        Err(SeedscopeError::InvalidHexLength(30))
    ));
    assert!(matches!(
        normalize_input("seed phrase please"),
        Err(SeedscopeError::InvalidInputFormat)
    ));
    assert!(matches!(
        normalize_input(&"1".repeat(100)),
        Err(SeedscopeError::InsufficientEntropy { actual: 100, .. })
    ));
    assert!(matches!(
        normalize_manual(&"0".repeat(255), EntropyWidth::Bits256),
        Err(SeedscopeError::InsufficientEntropy { required: 256, actual: 255 })
    ));
}

#[test]
fn test_asymmetric_truncation() {
    let input: String = "1".repeat(255);
    let entropy = supplied(&input);
    assert_eq!(entropy.width(), EntropyWidth::Bits128);
    assert_eq!(entropy.as_bytes(), &[0xff; 16]);
}
