//! Tracking-parameter rule tables.
//!
//! The generic set applies to every resolution; a platform's own set (held
//! on its `PlatformKind` variant) is unioned in when the input was
//! validated. This is a small, explicit rule set, not a comprehensive
//! blocklist.

/// Parameters that carry tracking data regardless of platform.
pub(crate) const GENERIC: &[&str] = &[
    // Google / analytics
    "gclid",
    "gclsrc",
    "dclid",
    // Facebook click IDs show up on links to arbitrary sites
    "fbclid",
    // Microsoft / Twitter / TikTok
    "msclkid",
    "twclid",
    "ttclid",
    // Mailchimp / HubSpot
    "mc_eid",
    "mc_cid",
    "_hsenc",
    "_hsmi",
];

/// True when `name` is a tracking parameter: generic (including the whole
/// `utm_*` family) or in the platform-specific set.
pub(crate) fn is_tracking(name: &str, platform_params: &[&str]) -> bool {
    name.starts_with("utm_") || GENERIC.contains(&name) || platform_params.contains(&name)
}
