//! Terminal-URL canonicalization.
//!
//! Strictly a query-parameter filter plus re-serialization. Scheme, host,
//! path, and fragment are never altered, so canonicalization cannot change
//! the semantic target of the link.

mod rules;

use url::Url;

use crate::platform::PlatformKind;

/// Strip tracking parameters from a terminal URL.
///
/// The generic rule set always applies; `platform`'s own set is unioned in
/// (`Unvalidated` contributes nothing). Surviving pairs keep their original
/// relative order, and a fully emptied query serializes with no `?` at all.
/// Pure; no network or I/O access.
pub fn canonicalize(terminal: &Url, platform: PlatformKind) -> String {
    let platform_params = platform.tracking_params();

    let kept: Vec<(String, String)> = terminal
        .query_pairs()
        .filter(|(name, _)| !rules::is_tracking(name, platform_params))
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();

    let mut out = terminal.clone();
    out.set_query(None);
    if !kept.is_empty() {
        let mut serializer = out.query_pairs_mut();
        for (name, value) in &kept {
            serializer.append_pair(name, value);
        }
        drop(serializer);
    }
    out.to_string()
}
