//! Heuristic strength scorer - rule-based scoring logic.
//!
//! Scoring avoids composition rules that fight password managers: there is no
//! "must contain" requirement, only a length gate plus an additive score that
//! rewards length, character variety, and special characters.

use secrecy::{ExposeSecret, SecretString};

/// Special characters counted by the default scoring rules.
pub const DEFAULT_SPECIAL_CHARACTERS: &str = " !@#$%^&*()-=_+.,<>[]{}/?\\|";

/// Scoring rule configuration.
///
/// All thresholds and point values are heuristic defaults, deliberately kept
/// configurable rather than hardcoded policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreOptions {
    /// Passwords must be strictly longer than this to pass.
    pub minimum_length: usize,
    /// Scores must be strictly greater than this to pass.
    pub minimum_score: u32,
    /// One-time bonus for any ASCII lowercase letter.
    pub points_for_lower: u32,
    /// One-time bonus for any ASCII uppercase letter.
    pub points_for_upper: u32,
    /// One-time bonus for any ASCII digit.
    pub points_for_numbers: u32,
    /// Bonus per special-character occurrence (repeats count).
    pub points_per_special: u32,
    /// The set of characters treated as special.
    pub special_characters: String,
    /// Bonus per character of length.
    pub points_per_character: u32,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            minimum_length: 8,
            minimum_score: 20,
            points_for_lower: 2,
            points_for_upper: 2,
            points_for_numbers: 2,
            points_per_special: 2,
            special_characters: DEFAULT_SPECIAL_CHARACTERS.to_string(),
            points_per_character: 1,
        }
    }
}

/// Outcome of a scoring run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub passing: bool,
    pub score: u32,
}

/// Scores a password against the configured rules.
///
/// Pure and deterministic: no I/O, and every input (the empty string
/// included) produces a valid result. The passing verdict requires both the
/// length gate (`length > minimum_length`) and a final score strictly above
/// `minimum_score`; a short password fails regardless of its score.
pub fn score_password(password: &SecretString, options: &ScoreOptions) -> ScoreResult {
    let pwd = password.expose_secret();
    let length = pwd.chars().count();

    let mut score = 0u32;
    let length_ok = length > options.minimum_length;

    if pwd.chars().any(|c| c.is_ascii_lowercase()) {
        score += options.points_for_lower;
    }
    if pwd.chars().any(|c| c.is_ascii_uppercase()) {
        score += options.points_for_upper;
    }
    if pwd.chars().any(|c| c.is_ascii_digit()) {
        score += options.points_for_numbers;
    }

    let special_count = pwd
        .chars()
        .filter(|c| options.special_characters.contains(*c))
        .count() as u32;
    score += special_count * options.points_per_special;

    score += length as u32 * options.points_per_character;

    let passing = length_ok && score > options.minimum_score;

    ScoreResult { passing, score }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_score_worked_example() {
        // 14 chars > 8; lower+upper+digit bonuses = 6; three '!' specials
        // at 2 points each = 6; length bonus 14; total 26 > 20.
        let result = score_password(&secret("aB3!aB3!aB3!xy"), &ScoreOptions::default());
        assert_eq!(result.score, 26);
        assert!(result.passing);
    }

    #[test]
    fn test_score_deterministic() {
        let options = ScoreOptions::default();
        let first = score_password(&secret("Tr0ub4dor&3"), &options);
        let second = score_password(&secret("Tr0ub4dor&3"), &options);
        assert_eq!(first, second);
    }

    #[test]
    fn test_short_password_fails_regardless_of_score() {
        let options = ScoreOptions {
            minimum_score: 0,
            ..ScoreOptions::default()
        };
        let result = score_password(&secret("aB3!x"), &options);
        assert!(!result.passing);
        assert!(result.score > options.minimum_score);
    }

    #[test]
    fn test_length_gate_is_strict() {
        // Exactly minimum_length chars fails the strictly-greater gate.
        let result = score_password(&secret("aaaaaaaa"), &ScoreOptions::default());
        assert!(!result.passing);

        let result = score_password(&secret("aaaaaaaaaaaaaaaaaaa"), &ScoreOptions::default());
        assert!(result.passing);
    }

    #[test]
    fn test_minimum_score_is_strict() {
        // 9 lowercase chars: score = 2 + 9 = 11. Raise per-character points
        // until the score crosses the threshold.
        let low = score_password(&secret("abcdefghi"), &ScoreOptions::default());
        assert_eq!(low.score, 11);
        assert!(!low.passing);

        let options = ScoreOptions {
            points_per_character: 2,
            ..ScoreOptions::default()
        };
        let high = score_password(&secret("abcdefghi"), &options);
        assert_eq!(high.score, 20);
        assert!(!high.passing, "score == minimum_score must not pass");

        let options = ScoreOptions {
            points_per_character: 3,
            ..ScoreOptions::default()
        };
        let highest = score_password(&secret("abcdefghi"), &options);
        assert_eq!(highest.score, 29);
        assert!(highest.passing);
    }

    #[test]
    fn test_empty_password() {
        let result = score_password(&secret(""), &ScoreOptions::default());
        assert_eq!(result.score, 0);
        assert!(!result.passing);
    }

    #[test]
    fn test_repeated_specials_accumulate() {
        let none = score_password(&secret("abcdefghij"), &ScoreOptions::default());
        let one = score_password(&secret("abcdefghi!"), &ScoreOptions::default());
        let three = score_password(&secret("abcdefg!!!"), &ScoreOptions::default());

        assert_eq!(one.score, none.score + 2);
        assert_eq!(three.score, none.score + 6);
    }

    #[test]
    fn test_case_and_digit_bonuses_are_one_time() {
        let one_digit = score_password(&secret("abcdefghi1"), &ScoreOptions::default());
        let many_digits = score_password(&secret("abcde12345"), &ScoreOptions::default());
        // Same length, same bonuses: digits add once no matter how many.
        assert_eq!(one_digit.score, many_digits.score);
    }

    #[test]
    fn test_spaces_count_as_special() {
        let phrase = score_password(
            &secret("correct horse battery staple"),
            &ScoreOptions::default(),
        );
        // lower bonus 2 + 3 spaces * 2 + 28 chars = 36.
        assert_eq!(phrase.score, 36);
        assert!(phrase.passing);
    }
}
