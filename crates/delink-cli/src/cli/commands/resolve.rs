//! `delink <url>` – resolve a share link and deliver the canonical form.

use delink_core::canonical;
use delink_core::config::DelinkConfig;
use delink_core::error::ResolveError;
use delink_core::platform;
use delink_core::resolver::{self, ResolverOptions};
use delink_core::user_agent;
use url::Url;

use crate::cli::Cli;
use crate::clipboard;

pub async fn run_resolve(cli: Cli, cfg: DelinkConfig) -> Result<(), ResolveError> {
    let input = parse_input(&cli.url)?;
    let kind = platform::classify(&input, !cli.no_validate)?;
    tracing::debug!(?kind, url = %input, "classified input");

    let agent = user_agent::select();
    let mut opts = ResolverOptions::from(&cfg);
    if let Some(max_hops) = cli.max_hops {
        opts.max_hops = max_hops;
    }

    // libcurl transfers are blocking; run the hop loop off the runtime and
    // race Ctrl-C so an interrupt aborts the whole resolution.
    let resolve_input = input.clone();
    let task = tokio::task::spawn_blocking(move || resolver::resolve(&resolve_input, agent, &opts));
    let resolution = tokio::select! {
        res = task => res.expect("resolver thread panicked")?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupted, aborting resolution");
            std::process::exit(130);
        }
    };

    tracing::info!(
        hops = resolution.hops.len(),
        status = resolution.terminal_status(),
        terminal = %resolution.terminal_url(),
        "resolved"
    );

    let canonical = canonical::canonicalize(resolution.terminal_url(), kind);

    // The canonical URL is the program's single line of stdout.
    println!("{}", canonical);

    if cfg.copy_to_clipboard && !cli.no_clipboard {
        if let Err(err) = clipboard::copy(&canonical) {
            // Delivery is decoupled from resolution: report and move on.
            eprintln!("warning: could not copy to clipboard: {}", err);
        }
    }

    Ok(())
}

/// Parse and vet the input: absolute URL, http or https only. Runs before
/// any network activity.
fn parse_input(raw: &str) -> Result<Url, ResolveError> {
    let url = Url::parse(raw).map_err(|source| ResolveError::InputParse {
        url: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ResolveError::UnsupportedScheme {
                scheme: other.to_string(),
            })
        }
    }
    Ok(url)
}
