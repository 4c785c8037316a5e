// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input was not declared as `image/gif`. Carries the user-facing reason.
    InvalidMediaType(String),
    /// The GIF container could not be parsed or a frame failed to decompress.
    Decode(String),
    Network(NetworkError),
    Export(String),
    Io(String),
    Config(String),
}

/// Failure causes on the remote URL path. Each one maps to a distinct
/// user-facing message.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// The input is not a well-formed http(s) URL.
    InvalidUrl,
    /// Transport-level failure (DNS, connection refused, TLS, body read).
    Request(String),
    /// No complete response within the configured bound.
    Timeout { secs: u64 },
    /// Non-2xx status.
    Status { code: u16, reason: String },
    /// Response content type does not contain `image/gif`.
    NotGif,
}

impl NetworkError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            NetworkError::InvalidUrl => "error-fetch-invalid-url",
            NetworkError::Request(_) => "error-fetch-network",
            NetworkError::Timeout { .. } => "error-fetch-timeout",
            NetworkError::Status { .. } => "error-fetch-status",
            NetworkError::NotGif => "error-fetch-not-gif",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::InvalidUrl => write!(f, "Please enter a valid URL."),
            NetworkError::Request(msg) => write!(f, "Network error while fetching GIF: {}", msg),
            NetworkError::Timeout { secs } => {
                write!(f, "Request timed out after {} seconds.", secs)
            }
            NetworkError::Status { code, reason } => {
                if reason.is_empty() {
                    write!(f, "Failed to fetch GIF: {}", code)
                } else {
                    write!(f, "Failed to fetch GIF: {} {}", code, reason)
                }
            }
            NetworkError::NotGif => write!(f, "The URL does not point to a valid GIF file."),
        }
    }
}

impl Error {
    /// Returns the i18n message key used for the notification of this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::InvalidMediaType(_) => "error-invalid-media-type",
            Error::Decode(_) => "error-decode",
            Error::Network(err) => err.i18n_key(),
            Error::Export(_) => "error-export",
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
        }
    }

    /// Free-form detail passed to the translated message as `$detail`.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Error::InvalidMediaType(msg)
            | Error::Decode(msg)
            | Error::Export(msg)
            | Error::Io(msg)
            | Error::Config(msg) => msg.clone(),
            Error::Network(NetworkError::Request(msg)) => msg.clone(),
            Error::Network(NetworkError::Timeout { secs }) => secs.to_string(),
            Error::Network(NetworkError::Status { code, reason }) => {
                format!("{code} {reason}").trim_end().to_string()
            }
            Error::Network(NetworkError::InvalidUrl | NetworkError::NotGif) => String::new(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidMediaType(msg) => write!(f, "{}", msg),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Network(e) => write!(f, "{}", e),
            Error::Export(e) => write!(f, "Export Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<NetworkError> for Error {
    fn from(err: NetworkError) -> Self {
        Error::Network(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<gif::DecodingError> for Error {
    fn from(err: gif::DecodingError) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Export(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
