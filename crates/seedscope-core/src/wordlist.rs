//! BIP-39 wordlist
//!
//! An ordered, read-only list of exactly 2048 distinct words. Index `i` maps
//! to the word for the 11-bit value `i`.
//!
//! Loaded once at startup, either from a plain-text file (one word per line)
//! or from the English list bundled with the `bip39` crate.

use crate::{Result, SeedscopeError};
use std::collections::HashMap;
use std::path::Path;

/// Number of words in a BIP-39 wordlist (2^11)
pub const WORDLIST_LEN: usize = 2048;

#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Vec<String>,
    /// Reverse index, only used when decoding a phrase
    positions: HashMap<String, u16>,
}

impl Wordlist {
    /// The English BIP-39 wordlist.
    pub fn english() -> Self {
        let words = bip39::Language::English
            .word_list()
            .iter()
            .map(|w| w.to_string())
            .collect();
        // The bundled list is known-good, skip validation
        Self::index(words)
    }

    /// Build a wordlist from words in index order.
    ///
    /// Fails with `WordlistMalformed` unless there are exactly 2048 non-empty,
    /// distinct entries.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        if words.len() != WORDLIST_LEN {
            return Err(SeedscopeError::WordlistMalformed(format!(
                "expected {} words, found {}",
                WORDLIST_LEN,
                words.len()
            )));
        }
        if let Some(pos) = words.iter().position(|w| w.is_empty()) {
            return Err(SeedscopeError::WordlistMalformed(format!(
                "empty entry at line {}",
                pos + 1
            )));
        }

        let list = Self::index(words);
        if list.positions.len() != WORDLIST_LEN {
            return Err(SeedscopeError::WordlistMalformed(
                "wordlist contains duplicate words".into(),
            ));
        }
        Ok(list)
    }

    /// Parse a wordlist from file contents: one word per line, surrounding
    /// whitespace on each line and trailing blank lines ignored.
    pub fn parse(contents: &str) -> Result<Self> {
        Self::from_words(contents.trim_end().lines().map(str::trim))
    }

    /// Load a wordlist file.
    ///
    /// A file that cannot be read yields `WordlistMissing`; one that reads
    /// but does not hold 2048 distinct words yields `WordlistMalformed`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| SeedscopeError::WordlistMissing {
                path: path.to_path_buf(),
                source,
            })?;
        let list = Self::parse(&contents)?;
        log::debug!("Loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    fn index(words: Vec<String>) -> Self {
        let positions = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i as u16))
            .collect();
        Self { words, positions }
    }

    /// Word at `index`, if in range.
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Position of `word` in the list.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.positions.get(word).copied()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// A deliberately broken list holding only the first `len` words
    #[cfg(test)]
    pub(crate) fn truncated(&self, len: usize) -> Self {
        Self::index(self.words[..len].to_vec())
    }
}
