//! Random entropy source
//!
//! Entropy on the random path is built one bit at a time from a
//! [`BitSource`]. The stock source is a simulated fair die: even rolls give
//! `0`, odd rolls give `1`.
//!
//! [`DiceRoller::from_os_entropy`] seeds its generator from the operating
//! system, never from a fixed value or the clock.

use crate::entropy::{Entropy, EntropyOrigin, EntropyWidth};
use crate::{Result, SeedscopeError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zeroize::Zeroizing;

/// Produces independent, uniformly distributed bits
pub trait BitSource {
    fn next_bit(&mut self) -> bool;
}

/// Simulated six-sided die mapped to bits by parity
#[derive(Debug)]
pub struct DiceRoller<R> {
    rng: R,
    rolls: usize,
}

impl DiceRoller<StdRng> {
    /// A die backed by a generator seeded from the OS entropy source.
    pub fn from_os_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> DiceRoller<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, rolls: 0 }
    }

    /// Roll once, returning a face in 1..=6
    pub fn roll(&mut self) -> u8 {
        self.rolls += 1;
        self.rng.gen_range(1..=6)
    }

    /// Number of rolls made so far
    pub fn rolls(&self) -> usize {
        self.rolls
    }
}

impl<R: Rng> BitSource for DiceRoller<R> {
    fn next_bit(&mut self) -> bool {
        // Even = 0, odd = 1
        self.roll() % 2 == 1
    }
}

/// Draw `width.bits()` bits from `source`, first draw most significant.
pub fn generate_entropy<S: BitSource + ?Sized>(source: &mut S, width: EntropyWidth) -> Entropy {
    let mut bits = Zeroizing::new(String::with_capacity(width.bits()));
    for _ in 0..width.bits() {
        bits.push(if source.next_bit() { '1' } else { '0' });
    }
    log::debug!("Generated {} entropy from random source", width);
    Entropy::from_bit_str(&bits, width, EntropyOrigin::Dice)
}

/// Parse the random-path width prompt: `0` for 128 bits, `1` for 256 bits.
pub fn parse_width_selector(raw: &str) -> Result<EntropyWidth> {
    match raw.trim() {
        "0" => Ok(EntropyWidth::Bits128),
        "1" => Ok(EntropyWidth::Bits256),
        other => Err(SeedscopeError::InvalidWidthSelector(other.to_string())),
    }
}
