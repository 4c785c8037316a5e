// SPDX-License-Identifier: MPL-2.0
//! Remote GIF fetch through an optional relay.
//!
//! The target URL is passed to the relay as its `url` query parameter. With
//! the relay disabled the target is requested directly. A single GET is made,
//! bounded as a whole (headers and body) by the configured timeout. Nothing is
//! retried.

use super::{is_gif_media_type, SourceBuffer, SourceOrigin};
use crate::error::{NetworkError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use std::time::Duration;

pub const DEFAULT_RELAY_URL: &str = "https://corsproxy.io/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const REMOTE_FILE_NAME: &str = "remote.gif";

const RELAY_QUERY_PARAM: &str = "url";
const USER_AGENT: &str = concat!("gif_extractor/", env!("CARGO_PKG_VERSION"));

/// How remote requests are made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
    /// `None` means direct requests.
    pub relay: Option<Url>,
    pub timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            relay: Url::parse(DEFAULT_RELAY_URL).ok(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FetchSettings {
    /// Builds settings from the configured relay, with the fixed timeout.
    ///
    /// An empty relay string disables the relay. An unparsable one falls back
    /// to the default relay.
    #[must_use]
    pub fn from_relay(relay_url: Option<&str>) -> Self {
        let defaults = Self::default();
        let relay = match relay_url.map(str::trim) {
            None => defaults.relay,
            Some("") => None,
            Some(raw) => match Url::parse(raw) {
                Ok(url) => Some(url),
                Err(err) => {
                    tracing::warn!(relay = raw, error = %err, "invalid relay URL, using default");
                    defaults.relay
                }
            },
        };
        Self {
            relay,
            timeout: defaults.timeout,
        }
    }

    #[must_use]
    pub fn direct(timeout: Duration) -> Self {
        Self {
            relay: None,
            timeout,
        }
    }
}

/// Parses user input into an absolute http(s) URL.
pub fn parse_target(input: &str) -> std::result::Result<Url, NetworkError> {
    let url = Url::parse(input.trim()).map_err(|_| NetworkError::InvalidUrl)?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url),
        _ => Err(NetworkError::InvalidUrl),
    }
}

/// URL actually requested for `target`.
#[must_use]
pub fn relay_url(relay: Option<&Url>, target: &Url) -> Url {
    match relay {
        Some(relay) => {
            let mut url = relay.clone();
            url.query_pairs_mut()
                .append_pair(RELAY_QUERY_PARAM, target.as_str());
            url
        }
        None => target.clone(),
    }
}

/// Last non-empty path segment when it names a `.gif`, else [`REMOTE_FILE_NAME`].
#[must_use]
pub fn file_name_for(target: &Url) -> String {
    target
        .path_segments()
        .and_then(|segments| segments.filter(|segment| !segment.is_empty()).last())
        .filter(|segment| segment.to_ascii_lowercase().ends_with(".gif"))
        .map_or_else(|| REMOTE_FILE_NAME.to_string(), str::to_string)
}

/// Fetches `input` and returns its body as a GIF source.
///
/// # Errors
///
/// Every failure is a [`NetworkError`]; no partial body is ever returned.
pub async fn fetch_gif(settings: &FetchSettings, input: &str) -> Result<SourceBuffer> {
    let target = parse_target(input)?;
    let request_url = relay_url(settings.relay.as_ref(), &target);
    tracing::info!(target = %target, via = %request_url, "fetching remote GIF");

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| NetworkError::Request(e.to_string()))?;

    let body = tokio::time::timeout(settings.timeout, download(&client, request_url))
        .await
        .map_err(|_| {
            tracing::warn!(target = %target, "remote fetch timed out");
            NetworkError::Timeout {
                secs: settings.timeout.as_secs(),
            }
        })??;

    let name = file_name_for(&target);
    tracing::debug!(name = %name, size = body.len(), "remote GIF received");
    Ok(SourceBuffer::new(
        name,
        body,
        SourceOrigin::Remote(target.to_string()),
    ))
}

async fn download(client: &reqwest::Client, url: Url) -> std::result::Result<Vec<u8>, NetworkError> {
    use futures_util::StreamExt;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| NetworkError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(NetworkError::Status {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if !is_gif_media_type(content_type) {
        return Err(NetworkError::NotGif);
    }

    let mut body = Vec::with_capacity(
        usize::try_from(response.content_length().unwrap_or(0)).unwrap_or(0),
    );
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| NetworkError::Request(e.to_string()))?;
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}
