// SPDX-License-Identifier: MPL-2.0
//! Export of extracted frames as PNG files or a ZIP archive.
//!
//! File names are deterministic: single frames are `frame-{index}.png` and
//! archives are `gif-frames.zip` with every PNG under a `gif-frames/` folder.
//! Files are first written next to their destination with a `.part` suffix
//! and renamed once complete, so a destination path never holds a partial
//! file.

use crate::error::{Error, Result};
use crate::frame_store::Frame;
use std::ffi::OsString;
use std::io::{Cursor, Seek, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const ARCHIVE_FILE_NAME: &str = "gif-frames.zip";
pub const ARCHIVE_FOLDER: &str = "gif-frames";

const PART_SUFFIX: &str = ".part";

/// Which frames an export covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    /// One frame, saved as a bare PNG.
    Single(usize),
    /// The current selection, zipped.
    Selected,
    /// Every frame, zipped.
    All,
}

impl ExportScope {
    #[must_use]
    pub fn is_archive(self) -> bool {
        !matches!(self, ExportScope::Single(_))
    }

    /// File name offered for this export.
    #[must_use]
    pub fn file_name(self) -> String {
        match self {
            ExportScope::Single(index) => frame_file_name(index),
            ExportScope::Selected | ExportScope::All => ARCHIVE_FILE_NAME.to_string(),
        }
    }
}

#[must_use]
pub fn frame_file_name(index: usize) -> String {
    format!("frame-{index}.png")
}

/// Path of a frame inside the archive.
#[must_use]
pub fn archive_entry_name(index: usize) -> String {
    format!("{ARCHIVE_FOLDER}/{}", frame_file_name(index))
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}

/// Writes `frames` as a deflated ZIP into `writer` and returns it.
///
/// # Errors
///
/// Returns [`Error::Export`] if the archive cannot be assembled.
pub fn write_archive<W: Write + Seek>(frames: &[Frame], writer: W) -> Result<W> {
    let mut zip = ZipWriter::new(writer);

    for frame in frames {
        zip.start_file(archive_entry_name(frame.index), entry_options())?;
        zip.write_all(frame.raster.png_bytes())
            .map_err(|e| Error::Export(format!("failed to add frame {}: {e}", frame.index)))?;
    }

    Ok(zip.finish()?)
}

/// Builds the archive for `frames` in memory.
pub fn archive_bytes(frames: &[Frame]) -> Result<Vec<u8>> {
    Ok(write_archive(frames, Cursor::new(Vec::new()))?.into_inner())
}

/// Destination for `scope` inside a download directory.
#[must_use]
pub fn destination_in(dir: &Path, scope: ExportScope) -> PathBuf {
    dir.join(scope.file_name())
}

/// Saves one frame's PNG to `path`. Returns the written path.
pub async fn save_frame(frame: Frame, path: PathBuf) -> Result<PathBuf> {
    run_blocking(move || {
        write_atomically(&path, frame.raster.png_bytes())?;
        tracing::info!(index = frame.index, path = %path.display(), "saved frame");
        Ok(path)
    })
    .await
}

/// Zips `frames` and saves the archive to `path`. Returns the written path.
///
/// The archive is fully built in memory before anything touches the disk.
pub async fn save_archive(frames: Vec<Frame>, path: PathBuf) -> Result<PathBuf> {
    run_blocking(move || {
        let bytes = archive_bytes(&frames)?;
        write_atomically(&path, &bytes)?;
        tracing::info!(
            frames = frames.len(),
            size = bytes.len(),
            path = %path.display(),
            "saved frame archive"
        );
        Ok(path)
    })
    .await
}

/// Saves `frames` for `scope`: a bare PNG for a single frame, an archive
/// otherwise.
pub async fn save_scope(scope: ExportScope, frames: Vec<Frame>, path: PathBuf) -> Result<PathBuf> {
    if scope.is_archive() {
        return save_archive(frames, path).await;
    }

    let frame = frames
        .into_iter()
        .next()
        .ok_or_else(|| Error::Export("no frame to export".to_string()))?;
    save_frame(frame, path).await
}

async fn run_blocking<T, F>(job: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| Error::Export(format!("export worker failed: {e}")))?
}

fn part_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(PART_SUFFIX);
    PathBuf::from(name)
}

fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let part = part_path(path);

    if let Err(err) = std::fs::write(&part, bytes) {
        let _ = std::fs::remove_file(&part);
        return Err(Error::Export(format!(
            "failed to write {}: {err}",
            part.display()
        )));
    }

    std::fs::rename(&part, path).map_err(|err| {
        let _ = std::fs::remove_file(&part);
        Error::Export(format!("failed to move into {}: {err}", path.display()))
    })
}
