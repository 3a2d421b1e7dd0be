//! HTTP GET via the curl crate.
//!
//! Performs exactly one blocking GET per call, buffering the whole body in
//! memory and capturing response headers for the filename hint.

mod parse;

use crate::error::FetchError;
use std::str;
use std::time::Duration;

/// User-Agent sent with every request.
const USER_AGENT: &str = concat!("imgfetch/", env!("CARGO_PKG_VERSION"));

/// A fully received HTTP response.
#[derive(Debug)]
pub struct FetchResponse {
    /// Final status code after redirects (always 2xx here).
    pub status: u32,
    /// Raw response body, exactly as received.
    pub body: Vec<u8>,
    /// `Content-Disposition` value from the final response, if present.
    pub content_disposition: Option<String>,
}

/// Fetches `url` with a single GET and returns the buffered response.
///
/// Follows redirects. Any non-2xx final status is an error; no body is
/// surfaced in that case.
pub fn get(url: &str) -> Result<FetchResponse, FetchError> {
    let mut body: Vec<u8> = Vec::new();
    let mut header_lines: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.useragent(USER_AGENT)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(30))?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                header_lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    if !(200..300).contains(&status) {
        return Err(FetchError::HttpStatus(status));
    }

    // Header lines span the whole redirect chain; the parser keeps the last
    // occurrence, i.e. the final response's value.
    let content_disposition = parse::content_disposition(&header_lines);

    tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());

    Ok(FetchResponse {
        status,
        body,
        content_disposition,
    })
}
