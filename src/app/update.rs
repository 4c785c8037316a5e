// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every acquisition (dialog, drop, paste, URL, command line) takes a fresh
//! request token. Results carrying an older token are dropped, and decode
//! results are additionally checked against the frame store's generation, so
//! only the most recently accepted GIF is ever published.

use super::config::{self, Config};
use super::Message;
use crate::error::Error;
use crate::frame_store::{Frame, FrameStore, Generation, Rejection};
use crate::media::{self, frame_export, ExportScope};
use crate::source::clipboard::{self, ClipboardAcceptance};
use crate::source::{self, remote, SourceBuffer, SourceOrigin, GIF_EXTENSIONS};
use crate::ui::gallery;
use crate::ui::notifications::{self, Notification};
use crate::ui::shortcuts::Shortcut;
use crate::ui::theming::ThemeMode;
use crate::ui::upload;
use iced::Task;
use std::path::PathBuf;

/// Mutable view over the application state handed to every handler.
pub struct UpdateContext<'a> {
    pub config: &'a mut Config,
    pub store: &'a mut FrameStore,
    pub gallery: &'a mut gallery::State,
    pub upload: &'a mut upload::State,
    pub notifications: &'a mut notifications::Manager,
    pub theme_mode: &'a mut ThemeMode,
    /// Token of the latest acquisition request.
    pub acquisition: &'a mut Generation,
    /// Token of the latest paste action. Pasting does not take an acquisition
    /// token until the clipboard content is accepted.
    pub paste: &'a mut Generation,
}

impl UpdateContext<'_> {
    /// Takes a new request token. A newer request supersedes any fetch still
    /// running, so the busy flag is reset here.
    fn next_request(&mut self) -> Generation {
        *self.acquisition = self.acquisition.next();
        self.upload.set_fetching(false);
        *self.acquisition
    }

    fn is_current(&self, request: Generation) -> bool {
        request == *self.acquisition
    }

    fn notify_error(&mut self, err: &Error) {
        tracing::warn!(error = %err, "operation failed");
        self.notifications.push(Notification::from_error(err));
    }
}

pub fn handle_gallery_message(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    match ctx.gallery.handle_message(ctx.store, message) {
        gallery::Effect::None => Task::none(),
        gallery::Effect::Export(scope) => handle_export(ctx, scope),
    }
}

pub fn handle_upload_message(ctx: &mut UpdateContext<'_>, message: upload::Message) -> Task<Message> {
    match ctx.upload.handle_message(message) {
        upload::Effect::None => Task::none(),
        upload::Effect::OpenFileDialog => handle_open_file_dialog(),
        upload::Effect::Paste => handle_paste(ctx),
        upload::Effect::Fetch(url) => handle_fetch(ctx, url),
        upload::Effect::ChangeFile => handle_change_file(ctx),
    }
}

pub fn handle_shortcut(ctx: &mut UpdateContext<'_>, shortcut: Shortcut) -> Task<Message> {
    match shortcut {
        Shortcut::OpenFile => handle_open_file_dialog(),
        Shortcut::Paste => handle_paste(ctx),
        _ => match ctx.gallery.message_for_shortcut(ctx.store, shortcut) {
            Some(message) => handle_gallery_message(ctx, message),
            None => Task::none(),
        },
    }
}

pub fn handle_open_file_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("GIF", GIF_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

pub fn handle_open_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };
    load_path(ctx, path, SourceOrigin::FilePicker)
}

pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    load_path(ctx, path, SourceOrigin::DragDrop)
}

/// Loads a local file. Non-GIF paths are rejected here, before a request
/// token is taken, so a rejection never disturbs a load already in flight.
pub fn load_path(ctx: &mut UpdateContext<'_>, path: PathBuf, origin: SourceOrigin) -> Task<Message> {
    if !source::is_gif_path(&path) {
        tracing::info!(path = %path.display(), "rejected non-GIF source");
        ctx.notify_error(&Error::InvalidMediaType(
            origin.rejection_message().to_string(),
        ));
        return Task::none();
    }

    let request = ctx.next_request();
    tracing::info!(path = %path.display(), request = request.value(), "loading local GIF");
    read_local(request, path, origin)
}

fn read_local(request: Generation, path: PathBuf, origin: SourceOrigin) -> Task<Message> {
    Task::perform(source::load_local(path, origin), move |result| {
        Message::SourceLoaded { request, result }
    })
}

pub fn handle_paste(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.paste = ctx.paste.next();
    let paste = *ctx.paste;
    let request = *ctx.acquisition;
    Task::perform(clipboard::paste(), move |result| Message::ClipboardRead {
        paste,
        request,
        result,
    })
}

/// Handles the clipboard content of a paste.
///
/// The read is dropped when a newer paste was made or another acquisition
/// started meanwhile. A rejected paste only notifies; it takes no request
/// token, so a load already in flight is left alone.
pub fn handle_clipboard_read(
    ctx: &mut UpdateContext<'_>,
    paste: Generation,
    request: Generation,
    result: Result<ClipboardAcceptance, Error>,
) -> Task<Message> {
    if paste != *ctx.paste || !ctx.is_current(request) {
        tracing::debug!(paste = paste.value(), "dropping stale clipboard read");
        return Task::none();
    }

    match result {
        Ok(ClipboardAcceptance::Path(path)) => {
            let request = ctx.next_request();
            read_local(request, path, SourceOrigin::Clipboard)
        }
        Ok(ClipboardAcceptance::Url(url)) => {
            let request = ctx.next_request();
            fetch(ctx, request, url)
        }
        Err(err) => {
            ctx.notify_error(&err);
            Task::none()
        }
    }
}

pub fn handle_fetch(ctx: &mut UpdateContext<'_>, url: String) -> Task<Message> {
    if let Err(err) = remote::parse_target(&url) {
        ctx.upload.set_fetching(false);
        ctx.notify_error(&Error::from(err));
        return Task::none();
    }

    let request = ctx.next_request();
    fetch(ctx, request, url)
}

fn fetch(ctx: &mut UpdateContext<'_>, request: Generation, url: String) -> Task<Message> {
    ctx.upload.set_fetching(true);
    let settings = ctx.config.network.fetch_settings();
    tracing::info!(url = %url, request = request.value(), "fetching remote GIF");
    Task::perform(
        async move { remote::fetch_gif(&settings, &url).await },
        move |result| Message::SourceLoaded { request, result },
    )
}

pub fn handle_source_loaded(
    ctx: &mut UpdateContext<'_>,
    request: Generation,
    result: Result<SourceBuffer, Error>,
) -> Task<Message> {
    if !ctx.is_current(request) {
        tracing::debug!(request = request.value(), "dropping stale source");
        return Task::none();
    }
    ctx.upload.set_fetching(false);

    let buffer = match result {
        Ok(buffer) => buffer,
        Err(err) => {
            ctx.notify_error(&err);
            return Task::none();
        }
    };

    ctx.gallery.reset();
    ctx.notifications.clear_matching("error-");
    let generation = ctx.store.begin_load(buffer.name());
    tracing::info!(
        name = buffer.name(),
        size = buffer.bytes().len(),
        generation = generation.value(),
        "extracting frames"
    );

    Task::perform(
        async move { media::extract_frames(&buffer).await },
        move |result| Message::FramesExtracted { generation, result },
    )
}

pub fn handle_frames_extracted(
    ctx: &mut UpdateContext<'_>,
    generation: Generation,
    result: Result<Vec<Frame>, Error>,
) -> Task<Message> {
    match result {
        Ok(frames) => {
            let count = frames.len();
            match ctx.store.publish(generation, frames) {
                Ok(()) => tracing::info!(frames = count, "published frames"),
                Err(Rejection::Stale) => {
                    tracing::debug!(generation = generation.value(), "dropping stale frames");
                }
                Err(Rejection::Discontiguous) => {
                    ctx.store.fail(generation);
                    ctx.notify_error(&Error::Decode(
                        "frame indices are not contiguous".to_string(),
                    ));
                }
            }
        }
        Err(err) => {
            if ctx.store.fail(generation) {
                ctx.notify_error(&err);
            } else {
                tracing::debug!(generation = generation.value(), "dropping stale decode error");
            }
        }
    }
    Task::none()
}

pub fn handle_change_file(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    // Invalidates any load still in flight.
    ctx.next_request();
    ctx.gallery.reset();
    ctx.store.clear();
    Task::none()
}

/// Starts an export. Frames are captured now; the destination is either the
/// configured download directory or a save dialog.
pub fn handle_export(ctx: &mut UpdateContext<'_>, scope: ExportScope) -> Task<Message> {
    let frames = ctx.store.frames_for(scope);
    if frames.is_empty() {
        tracing::debug!(?scope, "nothing to export");
        return Task::none();
    }

    if let Some(dir) = ctx.config.export.download_dir.clone() {
        let path = frame_export::destination_in(&dir, scope);
        return save(scope, frames, path);
    }

    let file_name = scope.file_name();
    let (filter_name, extension) = if scope.is_archive() {
        ("ZIP", "zip")
    } else {
        ("PNG", "png")
    };

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_file_name(&file_name)
                .add_filter(filter_name, &[extension])
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        move |path| Message::ExportDestinationChosen {
            scope,
            frames,
            path,
        },
    )
}

pub fn handle_export_destination(
    scope: ExportScope,
    frames: Vec<Frame>,
    path: Option<PathBuf>,
) -> Task<Message> {
    match path {
        Some(path) => save(scope, frames, path),
        None => Task::none(),
    }
}

fn save(scope: ExportScope, frames: Vec<Frame>, path: PathBuf) -> Task<Message> {
    tracing::info!(?scope, frames = frames.len(), path = %path.display(), "exporting");
    Task::perform(
        frame_export::save_scope(scope, frames, path),
        Message::ExportFinished,
    )
}

pub fn handle_export_finished(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, Error>,
) -> Task<Message> {
    match result {
        Ok(path) => {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            ctx.notifications.push(
                Notification::success("notification-export-success").with_arg("file", file_name),
            );
        }
        Err(err) => ctx.notify_error(&err),
    }
    Task::none()
}

pub fn handle_toggle_theme(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.theme_mode = ctx.theme_mode.toggled();
    ctx.config.general.theme_mode = *ctx.theme_mode;

    if let Err(err) = config::save(ctx.config) {
        tracing::warn!(error = %err, "failed to save settings");
        ctx.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
    Task::none()
}

/// Startup source from the command line: a URL is fetched, anything else is
/// read as a local path.
pub fn load_startup_source(ctx: &mut UpdateContext<'_>, input: String) -> Task<Message> {
    if remote::parse_target(&input).is_ok() {
        let request = ctx.next_request();
        return fetch(ctx, request, input);
    }
    load_path(ctx, PathBuf::from(input), SourceOrigin::CommandLine)
}
