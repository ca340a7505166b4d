//! HTTP GET via the curl crate (libcurl easy API).
//!
//! One deliberate omission: no transfer timeout is set on image fetches. A
//! batch runs its items strictly in sequence, so a hung transfer stalls the
//! remaining items rather than failing the batch.

use thiserror::Error;
use std::time::Duration;

/// The single recognized failure kind for a fetched item: the transport
/// failed, or the server answered with a non-2xx status.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Curl(#[from] curl::Error),
    #[error("HTTP {0}")]
    Http(u32),
}

/// Downloads `url` into memory with a single GET. Follows redirects.
pub fn fetch_bytes(url: &str, user_agent: Option<&str>) -> Result<Vec<u8>, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    if let Some(ua) = user_agent {
        easy.useragent(ua)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }
    Ok(body)
}

/// Fetches an HTML page as text. Unlike image fetches, page fetches carry a
/// connect timeout so an unreachable host fails promptly instead of hanging
/// before any batch starts.
pub fn fetch_page(url: &str, user_agent: Option<&str>) -> Result<String, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(30))?;
    if let Some(ua) = user_agent {
        easy.useragent(ua)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }
    Ok(String::from_utf8_lossy(&body).into_owned())
}
