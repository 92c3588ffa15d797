//! Platform classification for share links.
//!
//! A closed set of `PlatformKind` variants, each carrying its own host
//! matcher, accepted path shapes, and tracking-parameter set. Adding a
//! platform is a data addition here, not a new branch in the resolver.

use url::Url;

use crate::error::ResolveError;

/// Platforms whose share links we know how to validate and canonicalize.
///
/// `Unvalidated` is the explicit escape hatch: classification is skipped and
/// only the generic tracking rules apply downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    Reddit,
    Facebook,
    Instagram,
    Unvalidated,
}

impl PlatformKind {
    const KNOWN: [PlatformKind; 3] = [
        PlatformKind::Reddit,
        PlatformKind::Facebook,
        PlatformKind::Instagram,
    ];

    /// Tracking query parameters specific to this platform. Applied in
    /// addition to the generic set, never instead of it.
    pub(crate) fn tracking_params(self) -> &'static [&'static str] {
        match self {
            PlatformKind::Reddit => &["share_id", "context", "rdt", "chainedPosts"],
            PlatformKind::Facebook => &["rdid", "share_url", "mibextid", "sfnsn", "wtsid"],
            PlatformKind::Instagram => &["igsh", "igshid", "ig_mid", "img_index"],
            PlatformKind::Unvalidated => &[],
        }
    }

    fn matches_host(self, host: &str) -> bool {
        match self {
            PlatformKind::Reddit => {
                host_in_domain(host, "reddit.com") || host_in_domain(host, "redd.it")
            }
            PlatformKind::Facebook => {
                host_in_domain(host, "facebook.com")
                    || host_in_domain(host, "fb.com")
                    || host_in_domain(host, "fb.watch")
                    || host_in_domain(host, "fb.me")
            }
            PlatformKind::Instagram => host_in_domain(host, "instagram.com"),
            PlatformKind::Unvalidated => true,
        }
    }

    fn matches_path(self, host: &str, segments: &[&str]) -> bool {
        match self {
            PlatformKind::Reddit => {
                if host_in_domain(host, "redd.it") {
                    // Short link: https://redd.it/<post id>
                    return matches!(segments, [_]);
                }
                matches!(
                    segments,
                    // https://reddit.com/r/<sub>/s/<token> (and profile share links)
                    ["r" | "u" | "user", _, "s", _]
                    // Post and comment permalinks resolve trivially; accept them
                    // so an already-canonical link round-trips.
                    | ["r", _, "comments", _, ..]
                )
            }
            PlatformKind::Facebook => {
                if host_in_domain(host, "fb.watch") || host_in_domain(host, "fb.me") {
                    return matches!(segments, [_]);
                }
                matches!(
                    segments,
                    // https://www.facebook.com/share/{p,r,v}/<token>
                    ["share", "p" | "r" | "v", _]
                    | ["share", _]
                    | [_, "posts", _]
                    | ["groups", _, "permalink", _]
                    | ["reel", _]
                    | ["watch"]
                    | ["permalink.php"]
                    | ["photo.php"]
                )
            }
            PlatformKind::Instagram => {
                matches!(
                    segments,
                    ["p" | "reel" | "reels" | "tv", _]
                        | ["share", ..]
                        | ["stories", _, _]
                )
            }
            PlatformKind::Unvalidated => true,
        }
    }
}

/// Classify an input URL against the known share-link shapes.
///
/// Pure; no network access. With validation disabled the URL is accepted
/// as-is and classified `Unvalidated`.
pub fn classify(url: &Url, validation_enabled: bool) -> Result<PlatformKind, ResolveError> {
    if !validation_enabled {
        return Ok(PlatformKind::Unvalidated);
    }

    let host = url.host_str().unwrap_or_default();
    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|p| !p.is_empty()).collect())
        .unwrap_or_default();

    for kind in PlatformKind::KNOWN {
        if kind.matches_host(host) && kind.matches_path(host, &segments) {
            return Ok(kind);
        }
    }

    Err(ResolveError::Validation {
        url: url.to_string(),
        host: host.to_string(),
    })
}

/// True when `host` is `domain` itself or a subdomain of it.
fn host_in_domain(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_str(url: &str, enabled: bool) -> Result<PlatformKind, ResolveError> {
        classify(&Url::parse(url).unwrap(), enabled)
    }

    #[test]
    fn reddit_share_link() {
        assert_eq!(
            classify_str("https://reddit.com/r/privacy/s/ZNNlWWQprj", true).unwrap(),
            PlatformKind::Reddit
        );
        assert_eq!(
            classify_str("https://www.reddit.com/r/AskTheWorld/s/mONZu40JNk", true).unwrap(),
            PlatformKind::Reddit
        );
    }

    #[test]
    fn reddit_permalinks_accepted() {
        assert_eq!(
            classify_str(
                "https://www.reddit.com/r/AskTheWorld/comments/1q2rw7m/comment/nxfc5ci",
                true
            )
            .unwrap(),
            PlatformKind::Reddit
        );
        assert_eq!(
            classify_str("https://old.reddit.com/r/rust/comments/abc123/", true).unwrap(),
            PlatformKind::Reddit
        );
    }

    #[test]
    fn reddit_short_link() {
        assert_eq!(
            classify_str("https://redd.it/1q2rw7m", true).unwrap(),
            PlatformKind::Reddit
        );
    }

    #[test]
    fn reddit_other_paths_rejected() {
        assert!(classify_str("https://reddit.com/", true).is_err());
        assert!(classify_str("https://reddit.com/u/spez", true).is_err());
    }

    #[test]
    fn facebook_share_links() {
        assert_eq!(
            classify_str("https://www.facebook.com/share/p/1AZhvx3n72/", true).unwrap(),
            PlatformKind::Facebook
        );
        assert_eq!(
            classify_str("https://www.facebook.com/share/r/1AZhvx3n72/", true).unwrap(),
            PlatformKind::Facebook
        );
        assert_eq!(
            classify_str("https://fb.watch/abCDe12fgh/", true).unwrap(),
            PlatformKind::Facebook
        );
    }

    #[test]
    fn facebook_permalinks_accepted() {
        assert_eq!(
            classify_str(
                "https://www.facebook.com/groups/vicdeals/permalink/25654608820855518",
                true
            )
            .unwrap(),
            PlatformKind::Facebook
        );
        assert_eq!(
            classify_str(
                "https://www.facebook.com/permalink.php?story_fbid=pfbid0abc&id=100088004222911",
                true
            )
            .unwrap(),
            PlatformKind::Facebook
        );
    }

    #[test]
    fn instagram_share_links() {
        assert_eq!(
            classify_str("https://www.instagram.com/reel/C8xYz12abcd/?igsh=MWkz", true).unwrap(),
            PlatformKind::Instagram
        );
        assert_eq!(
            classify_str("https://www.instagram.com/p/C8xYz12abcd/", true).unwrap(),
            PlatformKind::Instagram
        );
        assert_eq!(
            classify_str("https://www.instagram.com/share/reel/BAJStuvwx", true).unwrap(),
            PlatformKind::Instagram
        );
    }

    #[test]
    fn unknown_host_rejected_when_validating() {
        let err = classify_str("https://example.com/some/path", true).unwrap_err();
        assert!(matches!(err, ResolveError::Validation { .. }));
    }

    #[test]
    fn lookalike_host_rejected() {
        // Suffix matching must not accept hosts that merely end in the
        // platform domain's characters.
        assert!(classify_str("https://notreddit.com/r/privacy/s/abc", true).is_err());
        assert!(classify_str("https://evilfacebook.com/share/p/abc", true).is_err());
    }

    #[test]
    fn validation_disabled_accepts_anything() {
        assert_eq!(
            classify_str("https://example.com/some/path?x=1", false).unwrap(),
            PlatformKind::Unvalidated
        );
        assert_eq!(
            classify_str("https://reddit.com/r/privacy/s/abc", false).unwrap(),
            PlatformKind::Unvalidated
        );
    }

    #[test]
    fn host_in_domain_suffix_rules() {
        assert!(host_in_domain("reddit.com", "reddit.com"));
        assert!(host_in_domain("www.reddit.com", "reddit.com"));
        assert!(host_in_domain("old.reddit.com", "reddit.com"));
        assert!(!host_in_domain("notreddit.com", "reddit.com"));
        assert!(!host_in_domain("reddit.com.evil.net", "reddit.com"));
    }
}
