use std::thread;
use std::time::Duration;

use thiserror::Error;

use crate::html;
use crate::params;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = "bref_scrape/0.1";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    #[error("no element matched selector {0:?}")]
    MissingSelector(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Transport(err)
        }
    }
}

/// One attempt at retrieving a full document. The seam is a trait so
/// tests can script responses or fail every call.
pub trait PageSource {
    fn fetch_document(&mut self, url: &str) -> Result<String, FetchError>;
}

/// Fetches over HTTP with a client built fresh for every attempt, so no
/// connection or cookie state survives a failed try.
pub struct HttpSource;

impl PageSource for HttpSource {
    fn fetch_document(&mut self, url: &str) -> Result<String, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        let body = client.get(url).send()?.error_for_status()?.text()?;
        Ok(body)
        // client dropped here; the session does not outlive the attempt
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub sleep: Duration,
    pub retries: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            sleep: Duration::from_secs(params::FETCH_SLEEP_SECS),
            retries: params::FETCH_RETRIES,
        }
    }
}

/// Fetch `url` and return the inner HTML of the first element matching
/// `selector`. Sleeps `sleep * attempt` before each try, including the
/// first. Attempt failures are logged and retried, never propagated;
/// exhaustion yields `None` so callers treat it as "no content".
pub fn fetch_fragment<S: PageSource>(
    source: &mut S,
    url: &str,
    selector: &str,
    policy: RetryPolicy,
) -> Option<String> {
    for attempt in 1..=policy.retries {
        thread::sleep(policy.sleep * attempt);
        match fetch_attempt(source, url, selector) {
            Ok(fragment) => return Some(fragment),
            Err(FetchError::Timeout) => {
                tracing::warn!(url, attempt, "timeout, retrying");
            }
            Err(err) => {
                tracing::warn!(url, attempt, %err, "fetch attempt failed");
            }
        }
    }
    tracing::warn!(url, retries = policy.retries, "giving up");
    None
}

fn fetch_attempt<S: PageSource>(
    source: &mut S,
    url: &str,
    selector: &str,
) -> Result<String, FetchError> {
    let document = source.fetch_document(url)?;
    if let Some(title) = html::page_title(&document) {
        tracing::info!(url, %title, "retrieved");
    }
    html::select_fragment(&document, selector)
        .ok_or_else(|| FetchError::MissingSelector(selector.to_string()))
}
