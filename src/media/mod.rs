// SPDX-License-Identifier: MPL-2.0
//! GIF frame extraction and export.

pub mod decoder;
pub mod frame_export;

pub use decoder::{extract_frames, DecodedFrame};
pub use frame_export::{ExportScope, ARCHIVE_FILE_NAME};
