//! Passphrase generator - random word selection and joining.

use rand::Rng;
use secrecy::SecretString;
use thiserror::Error;

use crate::wordlist::WordList;

/// Default number of words per passphrase. Caller policy, not an invariant.
pub const DEFAULT_WORD_COUNT: usize = 6;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Cannot generate a passphrase from an empty word list")]
    EmptyWordList,
}

/// Generates a passphrase of `count` words drawn from `words`.
///
/// Words are selected independently and uniformly at random *with
/// replacement*, so repeats are possible and duplicates in the list weight
/// the draw. Selection uses `rand::rng()`, a cryptographically secure
/// generator, and the chosen words are joined by single spaces in selection
/// order.
///
/// # Errors
///
/// Returns `GenerateError::EmptyWordList` if `words` is empty.
pub fn generate(words: &WordList, count: usize) -> Result<SecretString, GenerateError> {
    if words.is_empty() {
        return Err(GenerateError::EmptyWordList);
    }

    let mut rng = rand::rng();
    let candidates = words.as_slice();

    let passphrase = (0..count)
        .map(|_| candidates[rng.random_range(0..candidates.len())].as_str())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(SecretString::from(passphrase))
}
