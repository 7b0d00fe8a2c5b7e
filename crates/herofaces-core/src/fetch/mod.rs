//! Blocking HTTP GET of whole response bodies.
//!
//! Uses the curl crate (libcurl). Bodies are small (portraits, JSON dumps,
//! scripts) so they are buffered in memory. No retry: a failed fetch is
//! reported to the caller and picked up again on the next run.

mod error;

pub use error::FetchError;

use std::time::Duration;

use crate::config::HttpConfig;

/// Anything that can GET a URL into memory. The worker and the upstream sync
/// depend on this so tests can count or fake requests.
pub trait Fetcher {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        (**self).get(url)
    }
}

/// libcurl-backed fetcher with a fixed User-Agent and total timeout.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    user_agent: String,
    timeout: Duration,
}

impl CurlFetcher {
    pub fn new(user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            user_agent: user_agent.into(),
            timeout,
        }
    }

    pub fn from_config(cfg: &HttpConfig) -> Self {
        Self::new(cfg.user_agent.clone(), Duration::from_secs(cfg.timeout_secs))
    }
}

impl Fetcher for CurlFetcher {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.useragent(&self.user_agent)?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }
        Ok(body)
    }
}
