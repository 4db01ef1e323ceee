//! Entropy and input normalization
//!
//! Classifies user text as binary or hex and canonicalizes it to exactly
//! 128 or 256 bits. The big-endian byte form is the single source of truth;
//! the binary, hex and decimal renderings are all derived from it, so they
//! can never disagree.
//!
//! # Binary input rules
//!
//! | length      | result                         |
//! |-------------|--------------------------------|
//! | < 128       | `InsufficientEntropy`          |
//! | 128..=255   | first 128 bits, `Bits128`      |
//! | >= 256      | first 256 bits, `Bits256`      |
//!
//! Input between 129 and 255 bits is truncated down to 128, never rounded
//! up to 256.

use crate::{Result, SeedscopeError};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Supported entropy sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntropyWidth {
    /// 128 bits, 12 words
    Bits128,
    /// 256 bits, 24 words
    Bits256,
}

impl EntropyWidth {
    pub fn bits(self) -> usize {
        match self {
            Self::Bits128 => 128,
            Self::Bits256 => 256,
        }
    }

    pub fn byte_len(self) -> usize {
        self.bits() / 8
    }

    /// Checksum length in bits (entropy bits / 32)
    pub fn checksum_bits(self) -> usize {
        self.bits() / 32
    }

    /// Entropy plus checksum, always a multiple of 11
    pub fn total_bits(self) -> usize {
        self.bits() + self.checksum_bits()
    }

    pub fn word_count(self) -> usize {
        self.total_bits() / 11
    }

    pub fn from_byte_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(Self::Bits128),
            32 => Some(Self::Bits256),
            _ => None,
        }
    }

    pub fn from_word_count(count: usize) -> Option<Self> {
        match count {
            12 => Some(Self::Bits128),
            24 => Some(Self::Bits256),
            _ => None,
        }
    }
}

impl fmt::Display for EntropyWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Parses a bit count: `"128"` or `"256"`.
impl std::str::FromStr for EntropyWidth {
    type Err = SeedscopeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "128" => Ok(Self::Bits128),
            "256" => Ok(Self::Bits256),
            other => Err(SeedscopeError::InvalidWidthSelector(other.to_string())),
        }
    }
}

/// Where an entropy value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntropyOrigin {
    /// Binary string typed at the first prompt
    Binary,
    /// 32 or 64 hex characters
    Hex,
    /// Binary string typed after choosing a width
    Manual,
    /// Simulated dice rolls
    Dice,
    /// Recovered from an existing seed phrase
    Phrase,
}

/// Exactly 128 or 256 bits of entropy, wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Entropy {
    bytes: Vec<u8>,
    #[zeroize(skip)]
    width: EntropyWidth,
    #[zeroize(skip)]
    origin: EntropyOrigin,
}

impl Entropy {
    /// Wrap 16 or 32 big-endian bytes. Any other length returns `None`.
    pub fn from_bytes(bytes: &[u8], origin: EntropyOrigin) -> Option<Self> {
        let width = EntropyWidth::from_byte_len(bytes.len())?;
        Some(Self {
            bytes: bytes.to_vec(),
            width,
            origin,
        })
    }

    /// Pack a validated `0`/`1` string whose length matches `width`.
    pub(crate) fn from_bit_str(bits: &str, width: EntropyWidth, origin: EntropyOrigin) -> Self {
        debug_assert_eq!(bits.len(), width.bits());
        Self {
            bytes: bit_str_to_bytes(bits),
            width,
            origin,
        }
    }

    pub fn width(&self) -> EntropyWidth {
        self.width
    }

    pub fn origin(&self) -> EntropyOrigin {
        self.origin
    }

    /// Big-endian bytes (16 or 32), the input to the checksum hash
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Zero-padded binary string of exactly `width.bits()` characters
    pub fn to_binary(&self) -> String {
        bytes_to_bit_str(&self.bytes)
    }

    /// Lowercase hex, 32 or 64 characters
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// The entropy read as one big-endian unsigned integer, in base 10
    pub fn to_decimal(&self) -> String {
        let digits = Zeroizing::new(BigUint::from_bytes_be(&self.bytes).to_str_radix(10));
        digits.as_str().to_owned()
    }

    /// Parse exactly 32 or 64 hex characters, case-insensitive.
    ///
    /// Unlike [`normalize_input`] this never tries binary first, so an
    /// all-zero hex string is read as hex.
    pub fn from_hex(raw: &str) -> Result<Self> {
        let input = raw.trim();
        if input.is_empty() || !input.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SeedscopeError::InvalidInputFormat);
        }
        normalize_hex(input)
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entropy")
            .field("width", &self.width)
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Entropy {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Entropy {}

/// Result of classifying the first prompt's input
#[derive(Debug)]
pub enum EntropyInput {
    /// Empty input: generate entropy on the random path
    Random,
    /// Input parsed to a complete entropy value
    Supplied(Entropy),
}

impl EntropyInput {
    pub fn into_entropy(self) -> Option<Entropy> {
        match self {
            Self::Random => None,
            Self::Supplied(entropy) => Some(entropy),
        }
    }
}

/// Classify and canonicalize raw user text.
///
/// Empty (or all-whitespace) text selects the random path. Pure `0`/`1`
/// text is binary and takes precedence over hex, so a 32-character string
/// of zeros and ones is treated as 32 bits of binary.
pub fn normalize_input(raw: &str) -> Result<EntropyInput> {
    let input = raw.trim();
    if input.is_empty() {
        log::debug!("No entropy supplied, deferring to random source");
        return Ok(EntropyInput::Random);
    }

    if is_binary(input) {
        return normalize_binary(input).map(EntropyInput::Supplied);
    }

    if input.chars().all(|c| c.is_ascii_hexdigit()) {
        return normalize_hex(input).map(EntropyInput::Supplied);
    }

    Err(SeedscopeError::InvalidInputFormat)
}

/// Validate binary entropy typed after a width was chosen.
///
/// At least `width.bits()` binary digits are required and the first
/// `width.bits()` are kept.
pub fn normalize_manual(raw: &str, width: EntropyWidth) -> Result<Entropy> {
    let input = raw.trim();
    if !is_binary(input) {
        return Err(SeedscopeError::InvalidInputFormat);
    }

    let required = width.bits();
    if input.len() < required {
        return Err(SeedscopeError::InsufficientEntropy {
            required,
            actual: input.len(),
        });
    }
    if input.len() > required {
        log::warn!(
            "Manual entropy has {} bits, keeping the first {}",
            input.len(),
            required
        );
    }

    Ok(Entropy::from_bit_str(
        &input[..required],
        width,
        EntropyOrigin::Manual,
    ))
}

fn normalize_binary(input: &str) -> Result<Entropy> {
    let len = input.len();
    let width = match len {
        0..=127 => {
            return Err(SeedscopeError::InsufficientEntropy {
                required: EntropyWidth::Bits128.bits(),
                actual: len,
            })
        }
        128..=255 => EntropyWidth::Bits128,
        _ => EntropyWidth::Bits256,
    };

    if len > width.bits() {
        log::warn!(
            "Binary input has {} bits, truncating to the first {}",
            len,
            width.bits()
        );
    }
    log::debug!("Classified input as {} binary entropy", width);

    Ok(Entropy::from_bit_str(
        &input[..width.bits()],
        width,
        EntropyOrigin::Binary,
    ))
}

fn normalize_hex(input: &str) -> Result<Entropy> {
    let width = match input.len() {
        32 => EntropyWidth::Bits128,
        64 => EntropyWidth::Bits256,
        other => return Err(SeedscopeError::InvalidHexLength(other)),
    };

    let bytes =
        Zeroizing::new(hex::decode(input).map_err(|_| SeedscopeError::InvalidInputFormat)?);
    log::debug!("Classified input as {} hex entropy", width);

    Entropy::from_bytes(&bytes, EntropyOrigin::Hex)
        .ok_or(SeedscopeError::InvalidHexLength(input.len()))
}

fn is_binary(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b == b'0' || b == b'1')
}

/// Pack a `0`/`1` string (length a multiple of 8) into bytes, MSB first
pub(crate) fn bit_str_to_bytes(bits: &str) -> Vec<u8> {
    bits.as_bytes()
        .chunks(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &b| (acc << 1) | (b - b'0')))
        .collect()
}

/// Render bytes as a zero-padded `0`/`1` string, MSB first
pub(crate) fn bytes_to_bit_str(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:08b}", b)).collect()
}
