//! Interactive entropy collection
//!
//! Three prompts at most:
//!
//! 1. binary or hex entropy, or Enter for the random path
//! 2. width selector, `0` for 128 bits or `1` for 256 bits
//! 3. manual binary for that width, or Enter for dice rolls

use anyhow::{Context, Result};
use seedscope_core::{
    generate_entropy, normalize_input, normalize_manual, parse_width_selector, BitSource, Entropy,
    EntropyInput, EntropyWidth,
};
use std::io::{self, BufRead, Write};
use zeroize::Zeroizing;

pub const ENTROPY_PROMPT: &str = "Enter binary (over 128 bits for 12 words, over 256 bits for 24 words) \
or hex (32-char for 12 words, 64-char for 24 words), or Enter for random: ";

pub const WIDTH_PROMPT: &str = "Generate random entropy with dice rolls: key in 0 for 128 dice rolls \
(12 words) or 1 for 256 dice rolls (24 words): ";

fn manual_prompt(width: EntropyWidth) -> String {
    format!(
        "Enter your own {}-bit binary entropy (or Enter for random dice rolls): ",
        width.bits()
    )
}

/// Line-oriented question/answer over any reader and writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question`, then read one line and return it trimmed.
    ///
    /// Closed input is an error rather than an empty answer, so a script
    /// that runs out of lines never silently falls through to dice rolls.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            ));
        }
        let answer = line.trim().to_string();
        zeroize::Zeroize::zeroize(&mut line);
        Ok(answer)
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Run the prompt sequence and return the resulting entropy.
///
/// `dice` is only consulted when the user asks for random entropy.
pub fn collect_entropy<R, W, S>(prompter: &mut Prompter<R, W>, dice: &mut S) -> Result<Entropy>
where
    R: BufRead,
    W: Write,
    S: BitSource + ?Sized,
{
    let first = Zeroizing::new(prompter.ask(ENTROPY_PROMPT).context("Failed to read entropy")?);
    if let EntropyInput::Supplied(entropy) = normalize_input(&first)? {
        return Ok(entropy);
    }

    let selector = prompter
        .ask(WIDTH_PROMPT)
        .context("Failed to read width selection")?;
    let width = parse_width_selector(&selector)?;

    let manual = Zeroizing::new(
        prompter
            .ask(&manual_prompt(width))
            .context("Failed to read manual entropy")?,
    );
    if !manual.is_empty() {
        return Ok(normalize_manual(&manual, width)?);
    }

    let entropy = generate_entropy(dice, width);
    log::info!("Rolled {} dice for {} entropy", width.bits(), width);
    Ok(entropy)
}
