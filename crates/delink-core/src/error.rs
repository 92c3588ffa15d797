//! Error taxonomy for share-link resolution.
//!
//! Each variant carries enough context to act on: the failing URL, the hop
//! index where applicable, and the underlying cause where one exists. A
//! resolution either produces a terminal hop or one of these errors; no
//! partially resolved URL is ever surfaced as if it were canonical.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// The input string did not parse as an absolute URL.
    #[error("invalid input URL {url:?}")]
    InputParse {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The input URL uses a scheme other than http/https.
    #[error("unsupported URL scheme {scheme:?} (expected http or https)")]
    UnsupportedScheme { scheme: String },

    /// Validation is enabled and the URL matched no known share-link shape.
    #[error("unrecognized share link for host {host:?}; pass --no-validate to resolve it anyway")]
    Validation { url: String, host: String },

    /// The redirect chain revisited a URL it had already requested.
    #[error("redirect loop: {url} revisited at hop {hop}")]
    RedirectLoop { url: String, hop: usize },

    /// The chain kept redirecting past the configured hop limit.
    #[error("too many redirects: limit of {limit} reached at {url}")]
    TooManyRedirects { url: String, limit: u32 },

    /// A server sent a `Location` value that cannot be resolved into a URL.
    #[error("bad Location {location:?} at hop {hop} ({url})")]
    BadLocation {
        url: String,
        hop: usize,
        location: String,
        #[source]
        source: url::ParseError,
    },

    /// Network-level failure (timeout, DNS, connection, TLS) at a hop.
    #[error("network failure at hop {hop} ({url})")]
    Network {
        url: String,
        hop: usize,
        #[source]
        source: curl::Error,
    },
}
