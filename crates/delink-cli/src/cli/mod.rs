//! CLI for the delink share-link resolver.

mod commands;

use clap::Parser;
use delink_core::config::{self, DelinkConfig};
use delink_core::error::ResolveError;

/// Resolve a share link to its canonical, tracking-free form.
#[derive(Debug, Parser)]
#[command(name = "delink")]
#[command(about = "Resolve a share link to its canonical, tracking-free form", long_about = None)]
pub struct Cli {
    /// Share URL to resolve.
    #[arg(value_name = "URL")]
    pub url: String,

    /// Skip platform validation; only generic tracking parameters are stripped.
    #[arg(long)]
    pub no_validate: bool,

    /// Redirect hop limit (overrides the config value).
    #[arg(long, value_name = "N")]
    pub max_hops: Option<u32>,

    /// Do not copy the result to the clipboard.
    #[arg(long)]
    pub no_clipboard: bool,
}

/// Exit code for a resolution error (stable CLI contract): 2 input,
/// 3 validation, 4 redirect loop, 5 hop cap, 6 network/protocol.
///
/// Clipboard failure has no code here: the URL was resolved and printed, so
/// the run still exits 0 with a warning on stderr.
pub fn exit_code(err: &ResolveError) -> u8 {
    match err {
        ResolveError::InputParse { .. } | ResolveError::UnsupportedScheme { .. } => 2,
        ResolveError::Validation { .. } => 3,
        ResolveError::RedirectLoop { .. } => 4,
        ResolveError::TooManyRedirects { .. } => 5,
        ResolveError::BadLocation { .. } | ResolveError::Network { .. } => 6,
    }
}

pub async fn run_from_args() -> Result<(), ResolveError> {
    let cli = Cli::parse();

    // Config trouble must not take down the resolver; defaults are fine.
    let cfg = match config::load_or_init() {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!("config unavailable ({err:#}), using defaults");
            DelinkConfig::default()
        }
    };
    tracing::debug!("loaded config: {:?}", cfg);

    commands::run_resolve(cli, cfg).await
}
