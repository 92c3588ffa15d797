//! Randomized user-agent selection.
//!
//! A small pool of realistic desktop browser strings; one is drawn uniformly
//! at random per resolution so repeated invocations do not present a single
//! fixed fingerprint. Desktop only: some platforms rewrite the final URL
//! (mobile subdomains, app interstitials) when they see a mobile agent.

use rand::Rng;

const USER_AGENTS: &[&str] = &[
    // Chrome
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36",
    // Firefox
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:127.0) Gecko/20100101 Firefox/127.0",
    "Mozilla/5.0 (X11; Linux x86_64; rv:127.0) Gecko/20100101 Firefox/127.0",
    // Safari
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Safari/605.1.15",
    // Edge
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36 Edg/126.0.0.0",
];

/// Draw one user agent uniformly at random.
///
/// The pool is non-empty by construction, so this never fails. Each
/// resolution binds its own selection; nothing is shared or retained
/// between calls.
pub fn select() -> &'static str {
    let index = rand::thread_rng().gen_range(0..USER_AGENTS.len());
    USER_AGENTS[index]
}
