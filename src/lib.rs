//! Memorable passphrase generation with breach checking
//!
//! This library generates multi-word passphrases from a word list, verifies
//! them against the HaveIBeenPwned breach corpus via a k-anonymity range
//! query, and scores password strength against configurable heuristic rules.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_WORDLIST_PATH`: Custom path to the word list file
//!   (default: `./assets/wordlist.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_passphrase::{
//!     BreachChecker, ScoreOptions, WordList, create_passphrase, default_wordlist_path,
//!     score_password, DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_COUNT,
//! };
//! use secrecy::ExposeSecret;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let words = WordList::load(default_wordlist_path())?;
//! let checker = BreachChecker::new();
//!
//! let passphrase = create_passphrase(&words, &checker, DEFAULT_WORD_COUNT, DEFAULT_MAX_ATTEMPTS)?;
//! println!("{}", passphrase.expose_secret());
//!
//! let result = score_password(&passphrase, &ScoreOptions::default());
//! println!("Score: {} (passing: {})", result.score, result.passing);
//! # Ok(())
//! # }
//! ```

// Internal modules
mod breach;
mod generator;
mod pipeline;
mod scorer;
mod wordlist;

// Public API
pub use breach::{BreachCheck, BreachChecker, BreachServiceUnavailable, DEFAULT_TIMEOUT};
pub use generator::{DEFAULT_WORD_COUNT, GenerateError, generate};
pub use pipeline::{CreateError, DEFAULT_MAX_ATTEMPTS, create_passphrase};
pub use scorer::{DEFAULT_SPECIAL_CHARACTERS, ScoreOptions, ScoreResult, score_password};
pub use wordlist::{WordList, WordlistError, default_wordlist_path};
