// SPDX-License-Identifier: MPL-2.0
//! Clipboard paste support.
//!
//! Desktop clipboards rarely carry typed GIF bytes. A copied GIF usually shows
//! up as a file list (file managers), as text holding a path or `file://` URI,
//! or as an untyped RGBA bitmap (browsers, image editors). Only the first two
//! still declare the GIF type through the file extension; bitmaps lost it and
//! are rejected. Text holding an http(s) URL to a GIF is handed over to the
//! remote fetch path.

use super::{is_gif_path, remote, SourceOrigin};
use crate::error::{Error, Result};
use reqwest::Url;
use std::path::PathBuf;

/// File name given to pasted content that carries none.
pub const PASTED_FILE_NAME: &str = "pasted-image.gif";

const EMPTY_CLIPBOARD_MESSAGE: &str = "Clipboard does not contain an image.";

/// What the system clipboard currently offers, in decreasing priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardContent {
    Files(Vec<PathBuf>),
    Text(String),
    /// Raw pixels without a media type.
    Bitmap { width: usize, height: usize },
    Empty,
}

/// An accepted paste: either a local GIF to read or a URL to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardAcceptance {
    Path(PathBuf),
    Url(String),
}

/// Reads the system clipboard. Blocking; call it off the UI thread.
pub fn read_clipboard() -> Result<ClipboardContent> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| Error::Io(format!("clipboard unavailable: {e}")))?;

    if let Ok(files) = clipboard.get().file_list() {
        if !files.is_empty() {
            return Ok(ClipboardContent::Files(files));
        }
    }

    if let Ok(text) = clipboard.get_text() {
        if !text.trim().is_empty() {
            return Ok(ClipboardContent::Text(text));
        }
    }

    if let Ok(image) = clipboard.get_image() {
        return Ok(ClipboardContent::Bitmap {
            width: image.width,
            height: image.height,
        });
    }

    Ok(ClipboardContent::Empty)
}

/// Picks the first GIF-typed item out of the clipboard content.
pub fn accept_clipboard(content: ClipboardContent) -> Result<ClipboardAcceptance> {
    match content {
        ClipboardContent::Files(paths) => paths
            .into_iter()
            .find(|path| is_gif_path(path))
            .map(ClipboardAcceptance::Path)
            .ok_or_else(not_gif),
        ClipboardContent::Text(text) => accept_text(&text),
        ClipboardContent::Bitmap { width, height } => {
            tracing::debug!(width, height, "clipboard holds an untyped bitmap");
            Err(not_gif())
        }
        ClipboardContent::Empty => Err(Error::InvalidMediaType(
            EMPTY_CLIPBOARD_MESSAGE.to_string(),
        )),
    }
}

/// Reads and filters the clipboard on a blocking worker.
pub async fn paste() -> Result<ClipboardAcceptance> {
    tokio::task::spawn_blocking(|| read_clipboard().and_then(accept_clipboard))
        .await
        .map_err(|e| Error::Io(format!("clipboard worker failed: {e}")))?
}

fn accept_text(text: &str) -> Result<ClipboardAcceptance> {
    let mut saw_non_gif_file = false;

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if remote::parse_target(line).is_ok() {
            return Ok(ClipboardAcceptance::Url(line.to_string()));
        }

        let Some(path) = local_path(line) else {
            continue;
        };
        if path.is_file() {
            if is_gif_path(&path) {
                return Ok(ClipboardAcceptance::Path(path));
            }
            saw_non_gif_file = true;
        }
    }

    if saw_non_gif_file {
        Err(not_gif())
    } else {
        Err(Error::InvalidMediaType(
            EMPTY_CLIPBOARD_MESSAGE.to_string(),
        ))
    }
}

/// A `file://` URI (percent-decoded) or a plain path. `None` for file URIs
/// that name no local path.
fn local_path(line: &str) -> Option<PathBuf> {
    match Url::parse(line) {
        Ok(url) if url.scheme() == "file" => url.to_file_path().ok(),
        _ => Some(PathBuf::from(line)),
    }
}

fn not_gif() -> Error {
    Error::InvalidMediaType(SourceOrigin::Clipboard.rejection_message().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn first_gif_in_file_list_wins() {
        let content = ClipboardContent::Files(vec![
            PathBuf::from("/tmp/a.png"),
            PathBuf::from("/tmp/b.gif"),
            PathBuf::from("/tmp/c.gif"),
        ]);
        assert_eq!(
            accept_clipboard(content).unwrap(),
            ClipboardAcceptance::Path(PathBuf::from("/tmp/b.gif"))
        );
    }

    #[test]
    fn file_list_without_gif_is_rejected() {
        let content = ClipboardContent::Files(vec![PathBuf::from("/tmp/a.jpg")]);
        assert_eq!(
            accept_clipboard(content).unwrap_err(),
            Error::InvalidMediaType("Please paste a GIF image.".into())
        );
    }

    #[test]
    fn bitmap_is_rejected_as_untyped() {
        let content = ClipboardContent::Bitmap {
            width: 10,
            height: 10,
        };
        assert!(matches!(
            accept_clipboard(content),
            Err(Error::InvalidMediaType(_))
        ));
    }

    #[test]
    fn empty_clipboard_has_distinct_message() {
        assert_eq!(
            accept_clipboard(ClipboardContent::Empty).unwrap_err(),
            Error::InvalidMediaType("Clipboard does not contain an image.".into())
        );
    }

    #[test]
    fn text_url_is_forwarded_to_fetch() {
        let content = ClipboardContent::Text("  https://example.com/cat.gif \n".into());
        assert_eq!(
            accept_clipboard(content).unwrap(),
            ClipboardAcceptance::Url("https://example.com/cat.gif".into())
        );
    }

    #[test]
    fn text_file_uri_to_existing_gif_is_accepted() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("copied.gif");
        fs::write(&path, b"GIF89a").expect("failed to write file");

        let content = ClipboardContent::Text(format!("file://{}", path.display()));
        assert_eq!(
            accept_clipboard(content).unwrap(),
            ClipboardAcceptance::Path(path)
        );
    }

    #[test]
    fn percent_encoded_file_uri_is_decoded() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("my anim.gif");
        fs::write(&path, b"GIF89a").expect("failed to write file");

        let uri = Url::from_file_path(&path).expect("absolute path");
        assert!(uri.as_str().ends_with("/my%20anim.gif"));

        let content = ClipboardContent::Text(uri.to_string());
        assert_eq!(
            accept_clipboard(content).unwrap(),
            ClipboardAcceptance::Path(path)
        );
    }

    #[test]
    fn text_path_to_existing_non_gif_is_rejected_as_not_gif() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("copied.png");
        fs::write(&path, b"png").expect("failed to write file");

        let content = ClipboardContent::Text(path.display().to_string());
        assert_eq!(
            accept_clipboard(content).unwrap_err(),
            Error::InvalidMediaType("Please paste a GIF image.".into())
        );
    }

    #[test]
    fn plain_text_is_not_an_image() {
        let content = ClipboardContent::Text("hello world".into());
        assert_eq!(
            accept_clipboard(content).unwrap_err(),
            Error::InvalidMediaType("Clipboard does not contain an image.".into())
        );
    }
}
