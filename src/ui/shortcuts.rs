// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts.
//!
//! Only key presses that no widget captured reach this mapping, so typing in
//! the URL field never navigates frames.

use iced::keyboard::{self, key::Named, Key, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// ArrowLeft
    Previous,
    /// ArrowRight
    Next,
    /// Escape: fullscreen first, then frame info.
    CloseOverlay,
    /// `i` / `I`: frame info for the cursor frame.
    ShowInfo,
    /// Ctrl+O (Cmd+O on macOS)
    OpenFile,
    /// Ctrl+V (Cmd+V on macOS)
    Paste,
}

#[must_use]
pub fn resolve(key: &Key, modifiers: Modifiers) -> Option<Shortcut> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(Shortcut::Previous),
        Key::Named(Named::ArrowRight) => Some(Shortcut::Next),
        Key::Named(Named::Escape) => Some(Shortcut::CloseOverlay),
        Key::Character(c) if modifiers.command() => match c.as_str() {
            "o" | "O" => Some(Shortcut::OpenFile),
            "v" | "V" => Some(Shortcut::Paste),
            _ => None,
        },
        Key::Character(c) if !modifiers.alt() && matches!(c.as_str(), "i" | "I") => {
            Some(Shortcut::ShowInfo)
        }
        _ => None,
    }
}

/// Extracts a shortcut from a raw keyboard event.
#[must_use]
pub fn from_event(event: &keyboard::Event) -> Option<Shortcut> {
    match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => resolve(key, *modifiers),
        _ => None,
    }
}
