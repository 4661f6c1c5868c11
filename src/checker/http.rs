// src/checker/http.rs
// =============================================================================
// This module checks whether redirect destinations are alive.
//
// Key functionality:
// - One GET request per destination, redirects NOT followed (a 301 is
//   reported as 301: we only look one hop ahead)
// - Per-request timeout that cancels only that request
// - Bounded concurrency: never more than N requests in flight
// - Destinations that aren't absolute http(s) URLs are classified as
//   "invalid-url" without touching the network
//
// Every pair gets exactly one result, in the same order as the input,
// no matter which request finishes first.
//
// Rust concepts:
// - async/await: For concurrent network I/O
// - Streams: buffer_unordered() runs a bounded number of futures at once
// - tokio::time::timeout: Wraps a future and gives up after a deadline
// =============================================================================

use futures::stream::{self, StreamExt}; // StreamExt gives us .buffer_unordered()
use reqwest::Client;
use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::analysis::NormalizedPair;
use crate::error::AuditError;

/// What happened when we checked a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOutcome {
    /// The server answered with this HTTP status code
    Code(u16),
    /// Connection or transport failure (DNS, refused, TLS, reset...)
    Error,
    /// No answer within the per-request timeout
    Timeout,
    /// Not an absolute http(s) URL, so no request was made
    InvalidUrl,
}

impl StatusOutcome {
    /// Only a plain 200 counts as healthy
    pub fn is_ok(&self) -> bool {
        matches!(self, StatusOutcome::Code(200))
    }
}

impl fmt::Display for StatusOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusOutcome::Code(code) => write!(f, "{}", code),
            StatusOutcome::Error => f.write_str("error"),
            StatusOutcome::Timeout => f.write_str("timeout"),
            StatusOutcome::InvalidUrl => f.write_str("invalid-url"),
        }
    }
}

// Codes serialize as JSON numbers, everything else as its label
impl Serialize for StatusOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StatusOutcome::Code(code) => serializer.serialize_u16(*code),
            other => serializer.collect_str(other),
        }
    }
}

/// The result of checking a single pair's destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub source_url: String,
    pub destination_url: String,
    pub status: StatusOutcome,
}

impl ValidationResult {
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}

/// Knobs for the validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Maximum number of requests in flight at once
    pub concurrency: usize,
    /// Deadline for each individual request
    pub timeout: Duration,
    /// Pause each worker takes before sending its request (0 = none)
    pub request_delay: Duration,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            concurrency: 5,
            timeout: Duration::from_millis(5000),
            request_delay: Duration::ZERO,
        }
    }
}

/// Checks destinations with a shared HTTP client
#[derive(Debug, Clone)]
pub struct LinkValidator {
    client: Client,
    options: ValidatorOptions,
}

impl LinkValidator {
    /// Builds the HTTP client. This is the only step that can fail;
    /// `validate` itself always produces results.
    pub fn new(options: ValidatorOptions) -> Result<Self, AuditError> {
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::none()) // report 3xx, don't follow
            .user_agent(concat!("redirect-audit/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, options })
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Checks the destination of every pair.
    ///
    /// Returns exactly one result per pair, in input order.
    pub async fn validate(&self, pairs: &[NormalizedPair]) -> Vec<ValidationResult> {
        // Every slot starts as InvalidUrl; eligible slots are overwritten
        // with the real outcome once their check completes.
        let mut outcomes = vec![StatusOutcome::InvalidUrl; pairs.len()];

        let targets: Vec<(usize, Url)> = pairs
            .iter()
            .enumerate()
            .filter_map(|(index, pair)| match parse_destination(&pair.record.destination) {
                Some(url) => Some((index, url)),
                None => {
                    debug!(destination = %pair.record.destination, "skipping invalid URL");
                    None
                }
            })
            .collect();

        debug!(
            eligible = targets.len(),
            total = pairs.len(),
            concurrency = self.options.concurrency,
            "validating destinations"
        );

        let client = &self.client;
        let timeout = self.options.timeout;
        let delay = self.options.request_delay;

        let checks = targets.into_iter().map(move |(index, url)| async move {
            (index, check_single_link(client, url, timeout, delay).await)
        });

        // Results arrive in completion order; the index puts them back in place
        let mut completed = stream::iter(checks).buffer_unordered(self.options.concurrency.max(1));
        while let Some((index, outcome)) = completed.next().await {
            outcomes[index] = outcome;
        }

        pairs
            .iter()
            .zip(outcomes)
            .map(|(pair, status)| {
                if status.is_ok() {
                    debug!("{} → {}", pair.record.destination, status);
                } else {
                    info!("{} → {}", pair.record.destination, status);
                }
                ValidationResult {
                    source_url: pair.record.source.clone(),
                    destination_url: pair.record.destination.clone(),
                    status,
                }
            })
            .collect()
    }
}

// Sends one GET request and classifies what happened.
//
// Dropping the request future on timeout aborts the in-flight request;
// sibling checks are separate futures and keep running.
async fn check_single_link(client: &Client, url: Url, timeout: Duration, delay: Duration) -> StatusOutcome {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    match tokio::time::timeout(timeout, client.get(url.clone()).send()).await {
        Err(_elapsed) => StatusOutcome::Timeout,
        Ok(Ok(response)) => StatusOutcome::Code(response.status().as_u16()),
        Ok(Err(error)) => categorize_error(&url, &error),
    }
}

// reqwest can report its own timeouts (e.g. while connecting); everything
// else is a transport failure.
fn categorize_error(url: &Url, error: &reqwest::Error) -> StatusOutcome {
    if error.is_timeout() {
        return StatusOutcome::Timeout;
    }

    let kind = if error.is_connect() {
        "connect"
    } else if error.is_request() {
        "request"
    } else {
        "other"
    };
    debug!(%url, kind, error = %error, "request failed");

    StatusOutcome::Error
}

// Returns the destination as a URL if it's worth a network request:
// it must start with http:// or https:// and have a host.
fn parse_destination(raw: &str) -> Option<Url> {
    let trimmed = raw.trim();
    if !is_http_link(trimmed) {
        return None;
    }

    Url::parse(trimmed)
        .ok()
        .filter(|url| url.host_str().is_some_and(|host| !host.is_empty()))
}

fn is_http_link(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
