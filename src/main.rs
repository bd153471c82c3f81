//! Command-line entry point: print one generated, breach-checked passphrase.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use secrecy::ExposeSecret;

use pwd_passphrase::{
    BreachChecker, DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_COUNT, ScoreOptions, WordList,
    create_passphrase, default_wordlist_path, score_password,
};

#[derive(Parser, Debug)]
#[command(name = "pwd-passphrase", version, about = "Generate a memorable passphrase verified against the HaveIBeenPwned breach corpus")]
struct Cli {
    /// Path to the word list file (overrides PWD_WORDLIST_PATH)
    #[arg(long, value_name = "FILE")]
    words: Option<PathBuf>,

    /// Number of words per passphrase
    #[arg(long, default_value_t = DEFAULT_WORD_COUNT)]
    count: usize,

    /// Maximum generate-and-check attempts
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Breach service timeout in milliseconds
    #[arg(long, default_value_t = 500)]
    timeout_ms: u64,

    /// Also print the heuristic strength score
    #[arg(long)]
    score: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = cli.words.unwrap_or_else(default_wordlist_path);
    let words = WordList::load(&path)
        .with_context(|| format!("loading word list from {}", path.display()))?;

    let checker = BreachChecker::new().with_timeout(Duration::from_millis(cli.timeout_ms));

    let passphrase = create_passphrase(&words, &checker, cli.count, cli.attempts)?;
    println!("{}", passphrase.expose_secret());

    if cli.score {
        let result = score_password(&passphrase, &ScoreOptions::default());
        println!(
            "score: {} ({})",
            result.score,
            if result.passing { "passing" } else { "not passing" }
        );
    }

    Ok(())
}
