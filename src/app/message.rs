// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::frame_store::{Frame, Generation};
use crate::media::ExportScope;
use crate::source::clipboard::ClipboardAcceptance;
use crate::source::SourceBuffer;
use crate::ui::gallery;
use crate::ui::notifications;
use crate::ui::shortcuts::Shortcut;
use crate::ui::upload;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Upload(upload::Message),
    Notification(notifications::NotificationMessage),
    /// A key press no widget captured.
    Shortcut(Shortcut),
    ToggleTheme,
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Clipboard content was read. `paste` identifies the paste action;
    /// `request` is the acquisition token that was current when it started.
    ClipboardRead {
        paste: Generation,
        request: Generation,
        result: Result<ClipboardAcceptance, Error>,
    },
    /// A source finished loading (local read or remote fetch).
    SourceLoaded {
        request: Generation,
        result: Result<SourceBuffer, Error>,
    },
    FramesExtracted {
        generation: Generation,
        result: Result<Vec<Frame>, Error>,
    },
    /// Result from the save dialog. Frames are captured when the export is
    /// requested so a reload in between cannot change what gets written.
    ExportDestinationChosen {
        scope: ExportScope,
        frames: Vec<Frame>,
        path: Option<PathBuf>,
    },
    ExportFinished(Result<PathBuf, Error>),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// GIF path or http(s) URL to load on startup.
    pub source: Option<String>,
}
