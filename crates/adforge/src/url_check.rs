//! Reachability check for primary-term landing pages.

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use reqwest::blocking::Client;
use reqwest::redirect::Policy;

use crate::config::UrlValidation;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);
const MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Answered 2xx/3xx; `final_url` is where redirects ended.
    Reachable { final_url: String },
    Broken,
}

pub trait UrlProbe: Send + Sync {
    fn probe(&self, url: &str) -> ProbeOutcome;
}

/// Sends a HEAD request and follows redirects.
pub struct HttpUrlProbe {
    client: Client,
}

impl HttpUrlProbe {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(PROBE_TIMEOUT)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self { client })
    }
}

impl UrlProbe for HttpUrlProbe {
    fn probe(&self, url: &str) -> ProbeOutcome {
        match self.client.head(url).send() {
            Ok(response) => {
                let status = response.status();
                if status.is_success() || status.is_redirection() {
                    ProbeOutcome::Reachable {
                        final_url: response.url().to_string(),
                    }
                } else {
                    ProbeOutcome::Broken
                }
            }
            Err(e) => {
                warn!("HEAD {} failed: {}", url, e);
                ProbeOutcome::Broken
            }
        }
    }
}

/// Rewrites unreachable URLs according to the configured policy.
pub struct UrlChecker {
    probe: Arc<dyn UrlProbe>,
    mode: UrlValidation,
    default_url: String,
}

impl UrlChecker {
    pub fn new(probe: Arc<dyn UrlProbe>, mode: UrlValidation, default_url: Option<String>) -> Self {
        Self {
            probe,
            mode,
            default_url: default_url.unwrap_or_default(),
        }
    }

    /// Reachable URLs become their post-redirect form; the rest become
    /// empty or the default URL.
    pub fn check_all(&self, urls: Vec<String>) -> Vec<String> {
        let total = urls.len();
        let mut replaced = 0;

        let checked = urls
            .into_iter()
            .map(|url| {
                let outcome = if url.trim().is_empty() {
                    ProbeOutcome::Broken
                } else {
                    self.probe.probe(url.trim())
                };
                match outcome {
                    ProbeOutcome::Reachable { final_url } => final_url,
                    ProbeOutcome::Broken => {
                        replaced += 1;
                        match self.mode {
                            UrlValidation::RemoveBrokenUrls => String::new(),
                            UrlValidation::UseDefaultUrl => self.default_url.clone(),
                        }
                    }
                }
            })
            .collect();

        info!("Checked {} URLs, replaced {}", total, replaced);
        checked
    }
}
