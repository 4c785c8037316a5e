// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`upload`] - Upload panel (file picker, paste, URL fetch)
//! - [`gallery`] - Frame view, thumbnails, selection and overlays
//! - [`shortcuts`] - Keyboard shortcut mapping
//! - [`notifications`] - Toast notifications
//! - [`styles`] - Shared widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod gallery;
pub mod notifications;
pub mod shortcuts;
pub mod styles;
pub mod theming;
pub mod upload;
