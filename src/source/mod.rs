// SPDX-License-Identifier: MPL-2.0
//! Source acquisition: turns a picked, dropped, pasted or fetched resource
//! into an in-memory [`SourceBuffer`].
//!
//! Only content declared as `image/gif` is accepted. For local files the
//! declared type comes from the file extension, the same way a browser fills
//! `File.type`; for remote resources it comes from the `Content-Type` header.
//! A rejection never touches the currently loaded GIF.

pub mod clipboard;
pub mod remote;

use crate::error::{Error, Result};
use image_rs::ImageFormat;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The only media type accepted anywhere in the application.
pub const GIF_MEDIA_TYPE: &str = "image/gif";

/// Extensions offered by the open dialog.
pub const GIF_EXTENSIONS: &[&str] = &["gif"];

/// Where a source came from. Drives rejection messages and fallback names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOrigin {
    FilePicker,
    DragDrop,
    Clipboard,
    /// Fetched from the given (user-entered) URL.
    Remote(String),
    /// Path passed on the command line.
    CommandLine,
}

impl SourceOrigin {
    /// Message shown when this origin yields something that is not a GIF.
    #[must_use]
    pub fn rejection_message(&self) -> &'static str {
        match self {
            SourceOrigin::FilePicker | SourceOrigin::CommandLine => "Please select a GIF file.",
            SourceOrigin::DragDrop => "Please drop a GIF file.",
            SourceOrigin::Clipboard => "Please paste a GIF image.",
            SourceOrigin::Remote(_) => "The URL does not point to a valid GIF file.",
        }
    }

    /// Name used when the resource carries no usable file name.
    #[must_use]
    pub fn fallback_file_name(&self) -> &'static str {
        match self {
            SourceOrigin::Clipboard => clipboard::PASTED_FILE_NAME,
            SourceOrigin::Remote(_) => remote::REMOTE_FILE_NAME,
            _ => "untitled.gif",
        }
    }
}

/// Raw GIF bytes tagged with a file name. Immutable once created.
#[derive(Debug, Clone)]
pub struct SourceBuffer {
    name: String,
    bytes: Arc<[u8]>,
    origin: SourceOrigin,
}

impl SourceBuffer {
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>, origin: SourceOrigin) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
            origin,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Shared handle to the bytes for moving into worker tasks.
    #[must_use]
    pub fn shared_bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }

    #[must_use]
    pub fn origin(&self) -> &SourceOrigin {
        &self.origin
    }
}

/// Declared media type of a local file, derived from its extension.
#[must_use]
pub fn declared_media_type(path: &Path) -> Option<&'static str> {
    ImageFormat::from_path(path)
        .ok()
        .map(|format| format.to_mime_type())
}

/// Whether a declared type (or `Content-Type` header value) names GIF.
#[must_use]
pub fn is_gif_media_type(media_type: &str) -> bool {
    media_type.to_ascii_lowercase().contains(GIF_MEDIA_TYPE)
}

#[must_use]
pub fn is_gif_path(path: &Path) -> bool {
    declared_media_type(path).is_some_and(is_gif_media_type)
}

/// Reads a local GIF in full.
///
/// The declared type is checked before any I/O, so a rejected file is never
/// read.
pub async fn load_local(path: PathBuf, origin: SourceOrigin) -> Result<SourceBuffer> {
    if !is_gif_path(&path) {
        tracing::info!(path = %path.display(), "rejected non-GIF source");
        return Err(Error::InvalidMediaType(
            origin.rejection_message().to_string(),
        ));
    }

    let bytes = tokio::fs::read(&path).await?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| origin.fallback_file_name().to_string());

    tracing::debug!(name = %name, size = bytes.len(), "read local source");
    Ok(SourceBuffer::new(name, bytes, origin))
}
