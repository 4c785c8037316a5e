// SPDX-License-Identifier: MPL-2.0
mod common;

use common::{gif_with_delays, gif_with_frames};
use gif_extractor::app::config::{self, Config};
use gif_extractor::app::i18n::fluent::I18n;
use gif_extractor::error::Error;
use gif_extractor::frame_store::{FrameStore, LoadStatus};
use gif_extractor::media::frame_export::{self, ExportScope};
use gif_extractor::media::{decoder, extract_frames};
use gif_extractor::source::{load_local, SourceBuffer, SourceOrigin};
use std::io::Cursor;
use tempfile::tempdir;
use zip::ZipArchive;

async fn load_into_store(store: &mut FrameStore, source: &SourceBuffer) {
    let generation = store.begin_load(source.name());
    let frames = extract_frames(source).await.expect("extraction failed");
    store.publish(generation, frames).expect("publish failed");
}

fn sorted_entry_names(bytes: Vec<u8>) -> Vec<String> {
    let archive = ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    names
}

#[tokio::test(flavor = "multi_thread")]
async fn three_frame_gif_keeps_delays_in_order() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("three.gif");
    std::fs::write(&path, gif_with_delays(8, 6, &[100, 150, 200])).expect("write gif");

    let source = load_local(path, SourceOrigin::FilePicker)
        .await
        .expect("load failed");
    assert_eq!(source.name(), "three.gif");

    let mut store = FrameStore::new();
    load_into_store(&mut store, &source).await;

    assert_eq!(store.status(), LoadStatus::Ready);
    assert_eq!(store.len(), 3);
    let delays: Vec<u32> = store.frames().iter().map(|frame| frame.delay_ms).collect();
    assert_eq!(delays, vec![100, 150, 200]);
    let indices: Vec<usize> = store.frames().iter().map(|frame| frame.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert_eq!(store.cursor().index(), 0);
}

#[test]
fn decoding_is_deterministic() {
    let bytes = gif_with_delays(5, 5, &[30, 60, 90, 120]);
    let first = decoder::extract_frames_blocking(&bytes).expect("first decode");
    let second = decoder::extract_frames_blocking(&bytes).expect("second decode");

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.index, b.index);
        assert_eq!(a.delay_ms, b.delay_ms);
        assert_eq!((a.width, a.height), (b.width, b.height));
    }
}

#[tokio::test]
async fn non_gif_file_is_rejected_without_reading() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("photo.png");

    let err = load_local(path, SourceOrigin::DragDrop).await.unwrap_err();
    assert_eq!(err, Error::InvalidMediaType("Please drop a GIF file.".into()));
}

#[test]
fn malformed_gif_leaves_store_failed_and_empty() {
    let mut store = FrameStore::new();
    let generation = store.begin_load("broken.gif");

    let result = decoder::extract_frames_blocking(b"GIF89a but not really");
    assert!(matches!(result, Err(Error::Decode(_))));
    assert!(store.fail(generation));

    assert_eq!(store.status(), LoadStatus::Failed);
    assert!(store.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn exporting_all_frames_names_every_entry() {
    let source = SourceBuffer::new("four.gif", gif_with_frames(4), SourceOrigin::FilePicker);
    let mut store = FrameStore::new();
    load_into_store(&mut store, &source).await;

    let frames = store.frames_for(ExportScope::All);
    let names = sorted_entry_names(frame_export::archive_bytes(&frames).expect("archive"));

    assert_eq!(
        names,
        vec![
            "gif-frames/frame-0.png",
            "gif-frames/frame-1.png",
            "gif-frames/frame-2.png",
            "gif-frames/frame-3.png",
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn exporting_selected_frames_writes_only_those() {
    let dir = tempdir().expect("failed to create temp dir");
    let source = SourceBuffer::new("five.gif", gif_with_frames(5), SourceOrigin::Clipboard);
    let mut store = FrameStore::new();
    load_into_store(&mut store, &source).await;

    store.toggle_selection(1);
    store.toggle_selection(2);

    let path = frame_export::destination_in(dir.path(), ExportScope::Selected);
    let frames = store.frames_for(ExportScope::Selected);
    let written = frame_export::save_scope(ExportScope::Selected, frames, path.clone())
        .await
        .expect("export failed");

    assert_eq!(written.file_name().unwrap(), "gif-frames.zip");
    let names = sorted_entry_names(std::fs::read(&path).expect("read archive"));
    assert_eq!(names, vec!["gif-frames/frame-1.png", "gif-frames/frame-2.png"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_selection_has_nothing_to_export() {
    let source = SourceBuffer::new("two.gif", gif_with_frames(2), SourceOrigin::FilePicker);
    let mut store = FrameStore::new();
    load_into_store(&mut store, &source).await;

    assert!(store.frames_for(ExportScope::Selected).is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn single_frame_export_is_the_raw_png() {
    let dir = tempdir().expect("failed to create temp dir");
    let source = SourceBuffer::new("three.gif", gif_with_frames(3), SourceOrigin::FilePicker);
    let mut store = FrameStore::new();
    load_into_store(&mut store, &source).await;

    let scope = ExportScope::Single(2);
    let path = frame_export::destination_in(dir.path(), scope);
    frame_export::save_scope(scope, store.frames_for(scope), path.clone())
        .await
        .expect("export failed");

    assert_eq!(path.file_name().unwrap(), "frame-2.png");
    let png = image_rs::load_from_memory(&std::fs::read(&path).expect("read png")).expect("png");
    assert_eq!((png.width(), png.height()), (6, 4));
}

#[tokio::test(flavor = "multi_thread")]
async fn reload_drops_selection_of_previous_gif() {
    let mut store = FrameStore::new();
    let first = SourceBuffer::new("five.gif", gif_with_frames(5), SourceOrigin::FilePicker);
    load_into_store(&mut store, &first).await;
    store.toggle_selection(4);
    store.move_to(4);

    let second = SourceBuffer::new("two.gif", gif_with_frames(2), SourceOrigin::FilePicker);
    load_into_store(&mut store, &second).await;

    assert!(store.selection().is_empty());
    assert_eq!(store.cursor().index(), 0);
    assert_eq!(store.source_name(), Some("two.gif"));
}

#[tokio::test(flavor = "multi_thread")]
async fn superseded_decode_is_not_published() {
    let mut store = FrameStore::new();
    let old_source = SourceBuffer::new("old.gif", gif_with_frames(4), SourceOrigin::FilePicker);
    let old_generation = store.begin_load(old_source.name());
    let new_generation = store.begin_load("new.gif");

    let old_frames = extract_frames(&old_source).await.expect("old decode");
    assert!(store.publish(old_generation, old_frames).is_err());
    assert!(store.is_empty());

    let new_source = SourceBuffer::new("new.gif", gif_with_frames(2), SourceOrigin::FilePicker);
    let new_frames = extract_frames(&new_source).await.expect("new decode");
    store.publish(new_generation, new_frames).expect("publish new");
    assert_eq!(store.len(), 2);
}

#[test]
fn language_follows_saved_config() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("save config");

    let loaded = config::load_from_path(&path).expect("load config");
    assert_eq!(loaded, french);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(
        i18n.tr_with_args("gallery-frame-position", &[("current", "1"), ("total", "3")]),
        "Image 1 sur 3"
    );
}
