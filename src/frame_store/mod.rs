// SPDX-License-Identifier: MPL-2.0
//! Ordered frame sequence, selection and navigation cursor.
//!
//! The store is the single owner of per-GIF state. It is mutated only from
//! `App::update`, and every operation completes within one `&mut self` call,
//! so a pending task never observes a half-updated sequence or selection.
//!
//! # Generations
//!
//! Each accepted source bumps the store [`Generation`]. Decode results carry
//! the generation they were started with; [`FrameStore::publish`] refuses
//! anything that is not the current one, so a slow decode of an older GIF can
//! never overwrite the frames of a newer one.

mod cursor;
mod selection;

pub use cursor::NavigationCursor;
pub use selection::SelectionSet;

use crate::media::frame_export::ExportScope;
use iced::widget::image::Handle;
use std::sync::Arc;

/// A standalone encoded image for one frame, plus the handle the UI draws.
#[derive(Debug, Clone)]
pub struct Raster {
    png: Arc<[u8]>,
    handle: Handle,
}

impl Raster {
    /// Wraps already-encoded PNG bytes. `rgba` feeds the display handle so the
    /// UI does not have to decode the PNG again.
    #[must_use]
    pub fn new(png: Vec<u8>, width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            png: png.into(),
            handle: Handle::from_rgba(width, height, rgba),
        }
    }

    #[must_use]
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    #[must_use]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}

/// One decoded GIF frame. Never mutated after creation.
#[derive(Debug, Clone)]
pub struct Frame {
    /// 0-based position in the original GIF.
    pub index: usize,
    pub raster: Raster,
    /// Inter-frame delay as declared by the GIF.
    pub delay_ms: u32,
    pub width: u32,
    pub height: u32,
    /// Size of the exported PNG.
    pub byte_size: usize,
}

impl Frame {
    #[must_use]
    pub fn new(index: usize, raster: Raster, delay_ms: u32, width: u32, height: u32) -> Self {
        let byte_size = raster.png_bytes().len();
        Self {
            index,
            raster,
            delay_ms,
            width,
            height,
            byte_size,
        }
    }
}

/// Monotonic token identifying one acquisition/decode request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// No source loaded.
    #[default]
    Empty,
    /// A source was accepted and its frames are being extracted.
    Decoding,
    Ready,
    /// The last accepted source failed to decode.
    Failed,
}

/// Why a decode result was not published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A newer source was accepted after this decode started.
    Stale,
    /// Frame indices were not exactly `0..len`.
    Discontiguous,
}

#[derive(Debug, Default)]
pub struct FrameStore {
    frames: Vec<Frame>,
    selection: SelectionSet,
    cursor: NavigationCursor,
    generation: Generation,
    status: LoadStatus,
    source_name: Option<String>,
}

impl FrameStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new load for `source_name`, clearing frames, selection and
    /// cursor, and returns the generation its result must be published with.
    pub fn begin_load(&mut self, source_name: impl Into<String>) -> Generation {
        self.generation = self.generation.next();
        self.frames.clear();
        self.selection.clear();
        self.cursor.reset();
        self.status = LoadStatus::Decoding;
        self.source_name = Some(source_name.into());
        self.generation
    }

    /// Publishes a complete frame sequence for `generation`.
    pub fn publish(&mut self, generation: Generation, frames: Vec<Frame>) -> Result<(), Rejection> {
        if generation != self.generation {
            return Err(Rejection::Stale);
        }
        if frames.iter().enumerate().any(|(i, frame)| frame.index != i) {
            return Err(Rejection::Discontiguous);
        }
        self.frames = frames;
        self.selection.retain_valid(self.frames.len());
        self.cursor.move_to(0, self.frames.len());
        self.status = LoadStatus::Ready;
        Ok(())
    }

    /// Records a failed decode. The store stays empty. Returns `false` when
    /// the failure belongs to a superseded generation and was ignored.
    pub fn fail(&mut self, generation: Generation) -> bool {
        if generation != self.generation {
            return false;
        }
        self.frames.clear();
        self.selection.clear();
        self.cursor.reset();
        self.status = LoadStatus::Failed;
        true
    }

    /// Unloads the current source. Any in-flight decode becomes stale.
    pub fn clear(&mut self) {
        self.generation = self.generation.next();
        self.frames.clear();
        self.selection.clear();
        self.cursor.reset();
        self.status = LoadStatus::Empty;
        self.source_name = None;
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    #[must_use]
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[must_use]
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    #[must_use]
    pub fn current(&self) -> Option<&Frame> {
        self.frames.get(self.cursor.index())
    }

    #[must_use]
    pub fn cursor(&self) -> NavigationCursor {
        self.cursor
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn toggle_selection(&mut self, index: usize) {
        self.selection.toggle(index, self.frames.len());
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(self.frames.len());
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn move_to(&mut self, index: usize) {
        self.cursor.move_to(index, self.frames.len());
    }

    pub fn advance(&mut self) -> bool {
        self.cursor.advance(self.frames.len())
    }

    pub fn retreat(&mut self) -> bool {
        self.cursor.retreat()
    }

    /// Frames covered by `scope`, in ascending index order.
    #[must_use]
    pub fn frames_for(&self, scope: ExportScope) -> Vec<Frame> {
        match scope {
            ExportScope::Single(index) => self.frames.get(index).cloned().into_iter().collect(),
            ExportScope::Selected => self
                .selection
                .iter()
                .filter_map(|index| self.frames.get(index).cloned())
                .collect(),
            ExportScope::All => self.frames.clone(),
        }
    }
}
