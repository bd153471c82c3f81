//! Passphrase creation pipeline - generate, then verify against the breach
//! corpus, retrying with a fresh passphrase up to a bounded attempt count.

use secrecy::SecretString;
use thiserror::Error;

use crate::breach::{BreachCheck, BreachServiceUnavailable};
use crate::generator::{GenerateError, generate};
use crate::wordlist::WordList;

/// Default number of generate-and-check attempts.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

#[derive(Error, Debug)]
pub enum CreateError {
    #[error(transparent)]
    Generate(#[from] GenerateError),
    /// The breach service failed; no verdict was obtained. Propagated without
    /// consuming further attempts, never masked as exhaustion.
    #[error(transparent)]
    Breach(#[from] BreachServiceUnavailable),
    #[error("Unable to generate a safe passphrase after {attempts} attempts")]
    Exhausted { attempts: usize },
}

/// Creates a passphrase confirmed absent from the breach corpus.
///
/// Up to `max_attempts` times: draw `word_count` words from `words` and ask
/// `checker` for a verdict. The first safe passphrase is returned
/// immediately. Unsafe passphrases are discarded and regenerated; a checker
/// error aborts the loop at once.
///
/// # Errors
///
/// - `CreateError::Generate` if the word list is empty.
/// - `CreateError::Breach` if the breach service is unavailable.
/// - `CreateError::Exhausted` if every attempt produced a breached passphrase.
pub fn create_passphrase(
    words: &WordList,
    checker: &dyn BreachCheck,
    word_count: usize,
    max_attempts: usize,
) -> Result<SecretString, CreateError> {
    for _attempt in 1..=max_attempts {
        let candidate = generate(words, word_count)?;

        if checker.is_safe(&candidate)? {
            #[cfg(feature = "tracing")]
            tracing::info!("Safe passphrase found on attempt {}", _attempt);
            return Ok(candidate);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Attempt {} produced a breached passphrase, retrying", _attempt);
    }

    Err(CreateError::Exhausted {
        attempts: max_attempts,
    })
}
