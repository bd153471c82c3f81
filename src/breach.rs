//! Breach corpus checking via the HaveIBeenPwned range API.
//!
//! The check is a k-anonymity range query: only the first 5 hex characters of
//! the passphrase's SHA-1 digest are sent to the service, which answers with
//! every known breached-hash suffix in that bucket. The remaining 35
//! characters are compared locally, so the service never sees the full hash.
//!
//! API reference: <https://haveibeenpwned.com/API/v2>

use std::time::Duration;

use reqwest::blocking::Client;
use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use thiserror::Error;

/// Default HaveIBeenPwned API base URL.
const DEFAULT_API_BASE: &str = "https://api.pwnedpasswords.com";

/// Default client-side timeout for the range query.
///
/// Kept short so a slow service never blocks passphrase creation for long;
/// callers with tolerant latency budgets can override via
/// [`BreachChecker::with_timeout`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(500);

/// Length of the digest prefix sent to the service.
const PREFIX_LEN: usize = 5;

/// The breach service could not produce a verdict.
///
/// Covers network failure, timeout, non-success status, and an empty response
/// body. This is distinct from an unsafe-passphrase result: an unreachable
/// service must never be mistaken for "not breached".
#[derive(Error, Debug)]
#[error("Breach service unavailable: {reason}")]
pub struct BreachServiceUnavailable {
    reason: String,
    #[source]
    source: Option<reqwest::Error>,
}

impl BreachServiceUnavailable {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            source: None,
        }
    }

    fn transport(err: reqwest::Error) -> Self {
        Self {
            reason: err.to_string(),
            source: Some(err),
        }
    }
}

/// Verdict source for the passphrase pipeline.
///
/// [`BreachChecker`] is the production implementation; tests substitute
/// stubs to drive the pipeline deterministically.
pub trait BreachCheck {
    /// Returns `Ok(true)` if the passphrase is absent from the breach corpus,
    /// `Ok(false)` if it is present, and an error when no verdict could be
    /// obtained.
    fn is_safe(&self, passphrase: &SecretString) -> Result<bool, BreachServiceUnavailable>;
}

/// Breach checker backed by the HaveIBeenPwned range API.
#[derive(Debug, Clone)]
pub struct BreachChecker {
    client: Client,
    api_base: String,
    timeout: Duration,
}

impl BreachChecker {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the client-side timeout for the range query.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the API base URL (e.g. for a mock server in tests).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

impl Default for BreachChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl BreachCheck for BreachChecker {
    fn is_safe(&self, passphrase: &SecretString) -> Result<bool, BreachServiceUnavailable> {
        let digest = Sha1::digest(passphrase.expose_secret().as_bytes());
        let hash = hex::encode_upper(digest);
        let (prefix, suffix) = hash.split_at(PREFIX_LEN);

        let url = format!("{}/range/{}", self.api_base, prefix);
        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .map_err(|e| {
                #[cfg(feature = "tracing")]
                tracing::error!("Breach range query FAILED: {}", e);
                BreachServiceUnavailable::transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            #[cfg(feature = "tracing")]
            tracing::error!("Breach range query returned status {}", status);
            return Err(BreachServiceUnavailable::new(format!(
                "unexpected status {status}"
            )));
        }

        let body = response.text().map_err(BreachServiceUnavailable::transport)?;
        if body.trim().is_empty() {
            return Err(BreachServiceUnavailable::new("empty response body"));
        }

        // Body is CRLF-separated `SUFFIX:COUNT` lines for the whole bucket.
        let breached = body
            .lines()
            .filter_map(|line| line.split(':').next())
            .any(|candidate| candidate.trim() == suffix);

        Ok(!breached)
    }
}
