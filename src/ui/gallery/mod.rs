// SPDX-License-Identifier: MPL-2.0
//! Frame gallery: the current frame, the thumbnail strip with selection
//! badges, the selection toolbar and the frame-info/fullscreen overlays.
//!
//! The component owns only overlay state. Frames, selection and the cursor
//! live in [`FrameStore`], which the application passes in on every update.

mod overlays;
mod view;

pub use overlays::{format_file_size, view as overlay_view};
pub use view::{view, ViewContext};

use crate::frame_store::FrameStore;
use crate::media::ExportScope;
use crate::ui::shortcuts::Shortcut;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    /// Move the cursor to a thumbnail.
    Show(usize),
    ToggleSelection(usize),
    SelectAll,
    ClearSelection,
    ShowInfo(usize),
    CloseInfo,
    OpenFullscreen,
    CloseFullscreen,
    DownloadFrame(usize),
    DownloadSelected,
    DownloadAll,
}

/// What the application has to do after a gallery update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Export(ExportScope),
}

/// Overlay state. Both overlays can be open at once; fullscreen draws on top.
#[derive(Debug, Clone, Default)]
pub struct State {
    info: Option<usize>,
    fullscreen: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Frame whose details are shown, if the info overlay is open.
    #[must_use]
    pub fn info_frame(&self) -> Option<usize> {
        self.info
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Closes every overlay, used when the loaded GIF changes.
    pub fn reset(&mut self) {
        self.info = None;
        self.fullscreen = false;
    }

    pub fn handle_message(&mut self, store: &mut FrameStore, message: Message) -> Effect {
        match message {
            Message::Previous => {
                store.retreat();
                Effect::None
            }
            Message::Next => {
                store.advance();
                Effect::None
            }
            Message::Show(index) => {
                store.move_to(index);
                Effect::None
            }
            Message::ToggleSelection(index) => {
                store.toggle_selection(index);
                Effect::None
            }
            Message::SelectAll => {
                store.select_all();
                Effect::None
            }
            Message::ClearSelection => {
                store.clear_selection();
                Effect::None
            }
            Message::ShowInfo(index) => {
                if store.frame(index).is_some() {
                    self.info = Some(index);
                }
                Effect::None
            }
            Message::CloseInfo => {
                self.info = None;
                Effect::None
            }
            Message::OpenFullscreen => {
                self.fullscreen = store.current().is_some();
                Effect::None
            }
            Message::CloseFullscreen => {
                self.fullscreen = false;
                Effect::None
            }
            Message::DownloadFrame(index) => Effect::Export(ExportScope::Single(index)),
            Message::DownloadSelected => {
                if store.selection().is_empty() {
                    Effect::None
                } else {
                    Effect::Export(ExportScope::Selected)
                }
            }
            Message::DownloadAll => Effect::Export(ExportScope::All),
        }
    }

    /// Maps a keyboard shortcut onto a gallery message, if it concerns frames.
    #[must_use]
    pub fn message_for_shortcut(&self, store: &FrameStore, shortcut: Shortcut) -> Option<Message> {
        if store.is_empty() {
            return None;
        }
        match shortcut {
            Shortcut::Previous => Some(Message::Previous),
            Shortcut::Next => Some(Message::Next),
            Shortcut::CloseOverlay if self.fullscreen => Some(Message::CloseFullscreen),
            Shortcut::CloseOverlay if self.info.is_some() => Some(Message::CloseInfo),
            Shortcut::ShowInfo => Some(Message::ShowInfo(store.cursor().index())),
            Shortcut::CloseOverlay | Shortcut::OpenFile | Shortcut::Paste => None,
        }
    }
}
