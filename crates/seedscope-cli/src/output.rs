//! Console rendering of a [`SeedReport`]

use crate::config::{OutputFormat, OutputSection};
use anyhow::Result;
use seedscope_core::{EntropyOrigin, SeedReport};
use std::io::Write;

/// Write the report in the configured format.
pub fn render<W: Write>(report: &SeedReport, options: &OutputSection, out: &mut W) -> Result<()> {
    match options.format {
        OutputFormat::Text => write_text(report, options.notes, out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Human-readable dump of every intermediate value.
pub fn write_text<W: Write>(report: &SeedReport, notes: bool, out: &mut W) -> std::io::Result<()> {
    if report.origin == EntropyOrigin::Dice {
        writeln!(
            out,
            "Entropy generated using {} simulated dice rolls (even = 0, odd = 1).",
            report.entropy_bits
        )?;
    }

    let hex_chars = report.checksum_hex.len();
    let numbers: Vec<String> = report.word_numbers.iter().map(u16::to_string).collect();

    writeln!(out, "Entropy (binary, {} bits): {}", report.entropy_bits, report.entropy_binary)?;
    writeln!(out, "Entropy (hex, {} chars): {}", report.entropy_hex.len(), report.entropy_hex)?;
    writeln!(out, "Entropy (decimal): {}", report.entropy_decimal)?;
    writeln!(out, "SHA-256 (Hex Bytes): {}", report.sha256)?;
    writeln!(out, "Checksum (binary, {} bits): {}", report.checksum_bits, report.checksum_binary)?;
    writeln!(
        out,
        "Checksum (hex, {} char{}): {}",
        hex_chars,
        if hex_chars > 1 { "s" } else { "" },
        report.checksum_hex
    )?;
    writeln!(out, "Last Checksum Word: {} ({})", report.last_word, report.last_word_number)?;
    writeln!(
        out,
        "Full Entropy+Checksum (binary, {} bits): {}",
        report.total_bits(),
        report.full_binary
    )?;
    writeln!(out, "Word Numbers (indices 1-2048): {}", numbers.join(" "))?;
    writeln!(out, "Seed Phrase ({} words): {}", report.word_count(), report.phrase())?;

    if notes {
        write_notes(&report.passphrase_example, out)?;
    }
    Ok(())
}

fn write_notes<W: Write>(passphrase_example: &str, out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== IMPORTANT NOTES ===")?;
    writeln!(
        out,
        "1. LEARNING EXERCISE: This script is for educational purposes only. Do not use these \
         seed phrases for real cryptocurrency wallets unless you fully understand the risks."
    )?;
    writeln!(
        out,
        "2. SECURITY WARNING: Only generate seed phrases on a secure, offline computer \
         (e.g., running Tails OS) to prevent exposure to malware or network attacks."
    )?;
    writeln!(
        out,
        "3. DATA SENSITIVITY: Seed phrases and entropy are highly sensitive. Never store them \
         on an online device or share them. Wipe this data after use."
    )?;
    writeln!(
        out,
        "4. VERIFICATION: Always verify seed phrases with trusted tools before use in a real \
         wallet."
    )?;
    writeln!(
        out,
        "5. EXTRA SECURITY: For added protection, consider a passphrase. Use 6 random words \
         from the BIP-39 wordlist, all lowercase, no spaces (e.g., '{}'). This makes your \
         wallet harder to crack while keeping it memorable.",
        passphrase_example
    )?;
    writeln!(
        out,
        "6. SECURE SETUP: For real-world use, consider a computer running Linux Ubuntu or Mint \
         (Cinnamon is a great choice) for security and running Sparrow wallet. Alternatively, \
         download the iancoleman.io webpage and run it offline to generate xPubs, zPubs, \
         Bitcoin addresses, 12-24 word seed phrases, and passphrases."
    )?;
    Ok(())
}
