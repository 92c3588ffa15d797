//! Redirect-chain resolution.
//!
//! Steps the redirect chain one request at a time so every hop is recorded,
//! loop-checked, and bounded. HEAD is preferred; GET (body discarded) is the
//! fallback for servers that reject HEAD. Redirect following is never
//! delegated to libcurl: the `Location` of each 3xx is resolved against the
//! current hop's URL here, which is what makes loop detection and the hop
//! cap enforceable.

mod parse;
mod request;

use std::collections::HashSet;
use std::time::Duration;

use url::Url;

use crate::config::DelinkConfig;
use crate::error::ResolveError;

/// One step of the chain: the URL requested, the status received, and the
/// `Location` header value if the server sent one.
#[derive(Debug, Clone)]
pub struct RedirectHop {
    pub url: Url,
    pub status: u32,
    pub location: Option<String>,
}

/// Outcome of a resolution: the ordered hop records, first = input request,
/// last = terminal response. Any non-3xx status is terminal, including
/// 4xx/5xx; a dead or blocked link is information, not a failure.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub hops: Vec<RedirectHop>,
}

impl Resolution {
    /// URL of the terminal response.
    pub fn terminal_url(&self) -> &Url {
        &self.hops[self.hops.len() - 1].url
    }

    /// HTTP status of the terminal response.
    pub fn terminal_status(&self) -> u32 {
        self.hops[self.hops.len() - 1].status
    }

    /// Number of redirects followed (hop records minus the terminal one).
    pub fn redirects_followed(&self) -> usize {
        self.hops.len() - 1
    }
}

/// Bounds applied to every resolution.
#[derive(Debug, Clone, Copy)]
pub struct ResolverOptions {
    /// Maximum number of redirects followed before aborting.
    pub max_hops: u32,
    /// Per-request connect timeout.
    pub connect_timeout: Duration,
    /// Per-request total timeout (connect + response headers).
    pub request_timeout: Duration,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self::from(&DelinkConfig::default())
    }
}

impl From<&DelinkConfig> for ResolverOptions {
    fn from(cfg: &DelinkConfig) -> Self {
        Self {
            max_hops: cfg.max_hops,
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            request_timeout: Duration::from_secs(cfg.request_timeout_secs),
        }
    }
}

/// Follow the redirect chain from `input` to a terminal response.
///
/// Each hop sends only the chosen user agent and nothing else, minimizing
/// what every intermediate server learns. Blocking: each request depends on
/// the previous response, so there is nothing to parallelize; run under
/// `spawn_blocking` from async code. No retries are performed on failed
/// hops; a network failure surfaces immediately.
pub fn resolve(
    input: &Url,
    user_agent: &str,
    opts: &ResolverOptions,
) -> Result<Resolution, ResolveError> {
    let mut hops: Vec<RedirectHop> = Vec::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut current = input.clone();

    loop {
        // Exact string match on the parsed (normalized) form.
        if !visited.insert(current.as_str().to_string()) {
            return Err(ResolveError::RedirectLoop {
                url: current.to_string(),
                hop: hops.len(),
            });
        }

        let response = request::fetch(current.as_str(), user_agent, opts).map_err(|source| {
            ResolveError::Network {
                url: current.to_string(),
                hop: hops.len(),
                source,
            }
        })?;

        tracing::debug!(
            hop = hops.len(),
            status = response.status,
            url = %current,
            location = response.location.as_deref().unwrap_or("-"),
            "hop"
        );

        hops.push(RedirectHop {
            url: current.clone(),
            status: response.status,
            location: response.location.clone(),
        });

        let next = match response.location {
            Some(loc) if is_redirect(response.status) => loc,
            // Terminal: non-3xx, or a 3xx with nowhere to go.
            _ => return Ok(Resolution { hops }),
        };

        if hops.len() as u32 > opts.max_hops {
            return Err(ResolveError::TooManyRedirects {
                url: current.to_string(),
                limit: opts.max_hops,
            });
        }

        // `Location` may be relative; resolve it against the current hop.
        current = match current.join(&next) {
            Ok(next_url) => next_url,
            Err(source) => {
                return Err(ResolveError::BadLocation {
                    url: current.to_string(),
                    hop: hops.len() - 1,
                    location: next,
                    source,
                })
            }
        };
    }
}

fn is_redirect(status: u32) -> bool {
    (300..400).contains(&status)
}
