//! Single-hop HTTP request via libcurl.
//!
//! Issues exactly one request and reports the status plus any `Location`
//! header. `follow_location` stays off; hop stepping happens in the
//! resolver, not inside libcurl.

use std::str;

use super::parse;
use super::ResolverOptions;

/// Raw response of one hop.
#[derive(Debug, Clone)]
pub(crate) struct HopResponse {
    pub status: u32,
    pub location: Option<String>,
}

#[derive(Clone, Copy)]
enum Method {
    Head,
    Get,
}

/// Perform one HEAD request, falling back to GET for servers that reject
/// HEAD outright (405/501). The GET body is aborted after the headers are
/// in: the goal is the final destination, not content.
///
/// Only the user agent is sent: no cookies, no referrer. Blocking; callers
/// run it under `spawn_blocking` from async code.
pub(crate) fn fetch(
    url: &str,
    user_agent: &str,
    opts: &ResolverOptions,
) -> Result<HopResponse, curl::Error> {
    let response = perform(url, user_agent, opts, Method::Head)?;
    if response.status == 405 || response.status == 501 {
        tracing::debug!(url, status = response.status, "HEAD rejected, retrying with GET");
        return perform(url, user_agent, opts, Method::Get);
    }
    Ok(response)
}

fn perform(
    url: &str,
    user_agent: &str,
    opts: &ResolverOptions,
    method: Method,
) -> Result<HopResponse, curl::Error> {
    let mut header_lines: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    match method {
        Method::Head => easy.nobody(true)?,
        Method::Get => easy.get(true)?,
    }
    easy.useragent(user_agent)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.request_timeout)?;

    let result = {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                header_lines.push(s.trim_end().to_string());
            }
            true
        })?;
        // Returning 0 aborts the transfer at the first body byte; headers
        // are already complete at that point.
        transfer.write_function(|_| Ok(0))?;
        transfer.perform()
    };

    match result {
        Ok(()) => {}
        // The deliberate body abort above surfaces as a write error.
        Err(e) if e.is_write_error() => {}
        Err(e) => return Err(e),
    }

    let status = easy.response_code()?;
    Ok(HopResponse {
        status,
        location: parse::location(&header_lines),
    })
}
