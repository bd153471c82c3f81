//! Word list management module
//!
//! Handles loading the candidate-word file used for passphrase generation.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Word list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read word list file: {0}")]
    ReadError(#[from] std::io::Error),
}

/// An immutable, ordered list of candidate words.
///
/// Duplicates are permitted and weight selection accordingly. The list is
/// never mutated after load; share it freely between callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

/// Returns the word list file path.
///
/// Priority:
/// 1. Environment variable `PWD_WORDLIST_PATH`
/// 2. Default path `./assets/wordlist.txt`
pub fn default_wordlist_path() -> PathBuf {
    std::env::var("PWD_WORDLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/wordlist.txt"))
}

impl WordList {
    /// Loads a word list from a line-delimited UTF-8 file.
    ///
    /// Each line is trimmed of surrounding whitespace and kept as a candidate
    /// word. Interior blank lines become empty words; no other filtering is
    /// applied, so short words, punctuation, and mixed case all survive.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordlistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Word list load FAILED: FileNotFound {}", path.display());
            return Err(WordlistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        let words: Vec<String> = content.lines().map(|l| l.trim().to_string()).collect();

        #[cfg(feature = "tracing")]
        tracing::info!("Word list loaded: {} words from {:?}", words.len(), path);

        Ok(Self { words })
    }

    /// Builds a word list from words already in memory (mostly for tests).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}
