// SPDX-License-Identifier: MPL-2.0
//! `gif_extractor` splits animated GIFs into their individual frames.
//!
//! A GIF is loaded from a file, a drop, the clipboard or a URL, decoded into
//! standalone PNG frames, and shown in a gallery where frames can be browsed,
//! selected and saved one by one or as a ZIP archive.

pub mod app;
pub mod error;
pub mod frame_store;
pub mod media;
pub mod source;
pub mod ui;
