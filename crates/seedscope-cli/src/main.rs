//! Seedscope: see how BIP-39 entropy becomes a seed phrase
//!
//! Prints the entropy in binary, hex and decimal, its SHA-256, the checksum
//! bits, every word number and the final phrase.
//!
//! # Usage
//!
//! ```bash
//! seedscope                                   # interactive prompts
//! seedscope --entropy 7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f
//! seedscope --hex 00000000000000000000000000000000
//! seedscope --random 256 --json
//! seedscope --config seedscope.toml --wordlist english.txt
//! ```

mod config;
mod output;
mod prompt;

use anyhow::{Context, Result};
use config::{CliConfig, OutputFormat};
use rand::rngs::StdRng;
use rand::SeedableRng;
use seedscope_core::{
    generate_entropy, generate_report, normalize_input, DiceRoller, Entropy, EntropyInput,
    EntropyWidth,
};
use std::path::PathBuf;
use zeroize::Zeroizing;

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    config_path: Option<PathBuf>,
    wordlist: Option<PathBuf>,
    entropy: Option<Zeroizing<String>>,
    hex: Option<Zeroizing<String>>,
    random: Option<EntropyWidth>,
    json: bool,
    no_notes: bool,
    log_level: Option<String>,
}

#[derive(Debug)]
enum Command {
    Run(Args),
    Help,
    Version,
}

impl Args {
    /// Flags take priority over the config file.
    fn apply_to(&self, config: &mut CliConfig) {
        if let Some(ref path) = self.wordlist {
            config.wordlist.path = Some(path.clone());
        }
        if self.json {
            config.output.format = OutputFormat::Json;
        }
        if self.no_notes {
            config.output.notes = false;
        }
        if let Some(ref level) = self.log_level {
            config.log_level = level.clone();
        }
    }
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut parsed = Args::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                parsed.config_path = Some(PathBuf::from(value_for(args, &mut i, "--config")?));
            }
            "--wordlist" | "-w" => {
                parsed.wordlist = Some(PathBuf::from(value_for(args, &mut i, "--wordlist")?));
            }
            "--entropy" | "-e" => {
                parsed.entropy = Some(Zeroizing::new(
                    value_for(args, &mut i, "--entropy")?.to_string(),
                ));
            }
            "--hex" | "-x" => {
                parsed.hex = Some(Zeroizing::new(value_for(args, &mut i, "--hex")?.to_string()));
            }
            "--random" | "-r" => {
                let width = value_for(args, &mut i, "--random")?;
                parsed.random = Some(
                    width
                        .parse()
                        .with_context(|| format!("--random expects 128 or 256, got {}", width))?,
                );
            }
            "--json" => parsed.json = true,
            "--no-notes" => parsed.no_notes = true,
            "--log-level" => {
                parsed.log_level = Some(value_for(args, &mut i, "--log-level")?.to_string());
            }
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            other => anyhow::bail!("Unknown argument: {}", other),
        }
        i += 1;
    }

    let sources = [
        parsed.entropy.is_some(),
        parsed.hex.is_some(),
        parsed.random.is_some(),
    ];
    anyhow::ensure!(
        sources.iter().filter(|&&given| given).count() <= 1,
        "--entropy, --hex and --random cannot be used together"
    );

    Ok(Command::Run(parsed))
}

/// Consume the value following the flag at `args[*i]`.
fn value_for<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .with_context(|| format!("{} requires a value", flag))
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&args)? {
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Version => {
            println!("seedscope {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Command::Run(args) => args,
    };

    // Load config
    let mut config = match args.config_path {
        Some(ref path) => CliConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => CliConfig::default(),
    };
    args.apply_to(&mut config);
    config
        .validate()
        .context("Configuration validation failed")?;

    // Init logger
    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .init();

    // The wordlist must be valid before any entropy is handled
    let wordlist = config.load_wordlist()?;

    let entropy = obtain_entropy(&args, prompts_use_stderr(&config))?;
    let report = generate_report(&entropy, &wordlist, &mut StdRng::from_entropy())?;

    let stdout = std::io::stdout();
    output::render(&report, &config.output, &mut stdout.lock())?;
    Ok(())
}

/// JSON output owns stdout, so prompts move to stderr.
fn prompts_use_stderr(config: &CliConfig) -> bool {
    config.output.format == OutputFormat::Json
}

/// Entropy from flags when given, otherwise from the interactive prompts.
fn obtain_entropy(args: &Args, prompts_to_stderr: bool) -> Result<Entropy> {
    if let Some(ref text) = args.entropy {
        return match normalize_input(text)? {
            EntropyInput::Supplied(entropy) => Ok(entropy),
            EntropyInput::Random => anyhow::bail!("--entropy must not be empty"),
        };
    }
    if let Some(ref text) = args.hex {
        return Ok(Entropy::from_hex(text)?);
    }

    let mut dice = DiceRoller::from_os_entropy();

    if let Some(width) = args.random {
        log::info!("Rolling {} dice for {} entropy", width.bits(), width);
        return Ok(generate_entropy(&mut dice, width));
    }

    let stdin = std::io::stdin();
    if prompts_to_stderr {
        let mut prompter = prompt::Prompter::new(stdin.lock(), std::io::stderr().lock());
        prompt::collect_entropy(&mut prompter, &mut dice)
    } else {
        let mut prompter = prompt::Prompter::new(stdin.lock(), std::io::stdout().lock());
        prompt::collect_entropy(&mut prompter, &mut dice)
    }
}

fn print_help() {
    println!(
        r#"Seedscope: inspect how entropy becomes a BIP-39 seed phrase

USAGE:
    seedscope [OPTIONS]

With no --entropy or --random, seedscope asks for input interactively.

OPTIONS:
    -e, --entropy <TEXT>    Binary (128+ bits) or hex (32/64 chars) entropy;
                            text of only 0s and 1s is read as binary
    -x, --hex <HEX>         Hex entropy (32/64 chars), never read as binary
    -r, --random <BITS>     Generate 128 or 256 bits with simulated dice rolls
    -w, --wordlist <PATH>   Wordlist file, one word per line (default: built-in English)
    -c, --config <PATH>     TOML config file
        --json              Print the report as JSON (prompts go to stderr)
        --no-notes          Omit the educational notes
        --log-level <LEVEL> off/error/warn/info/debug/trace (default: warn)
    -h, --help              Show this help message
    -V, --version           Show version

BINARY INPUT:
    128 to 255 bits keeps the first 128 bits (12 words).
    256 bits or more keeps the first 256 bits (24 words).

EXAMPLES:
    # 12 words from hex
    seedscope --hex 00000000000000000000000000000000

    # 24 words from dice rolls, as JSON
    seedscope --random 256 --json
"#
    );
}
