//! BIP-39 checksum
//!
//! The checksum is the leading `ENT / 32` bits of SHA-256 over the entropy
//! bytes: one hex nibble for 128-bit entropy, one full byte for 256-bit.

use crate::entropy::{Entropy, EntropyWidth};
use sha2::{Digest, Sha256};

/// Digest plus the checksum bits taken from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksum {
    digest: [u8; 32],
    width: EntropyWidth,
}

impl Checksum {
    /// Full SHA-256 digest of the entropy bytes
    pub fn digest(&self) -> &[u8; 32] {
        &self.digest
    }

    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    /// Number of checksum bits (4 or 8)
    pub fn bit_len(&self) -> usize {
        self.width.checksum_bits()
    }

    /// Checksum as an integer: the top 4 or 8 bits of the digest
    pub fn value(&self) -> u8 {
        self.digest[0] >> (8 - self.bit_len())
    }

    /// Checksum as a zero-padded binary string of `bit_len()` characters
    pub fn bits(&self) -> String {
        format!("{:0width$b}", self.value(), width = self.bit_len())
    }

    /// Leading hex characters of the digest covered by the checksum
    pub fn hex(&self) -> String {
        let chars = self.bit_len() / 4;
        self.digest_hex()[..chars].to_string()
    }
}

/// Hash the entropy bytes and extract the checksum prefix.
pub fn compute_checksum(entropy: &Entropy) -> Checksum {
    let digest: [u8; 32] = Sha256::digest(entropy.as_bytes()).into();
    let checksum = Checksum {
        digest,
        width: entropy.width(),
    };
    log::debug!("Computed {}-bit checksum", checksum.bit_len());
    checksum
}
