// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the upload panel, the
//! frame gallery and the background acquisition/decode/export tasks.
//!
//! `App` owns all state: the frame store, component states, configuration and
//! localization. Handlers live in `update`, rendering in `view`.

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::frame_store::{FrameStore, Generation};
use crate::ui::gallery;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::upload;
use config::Config;
use i18n::fluent::I18n;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    store: FrameStore,
    gallery: gallery::State,
    upload: upload::State,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    /// Token of the latest acquisition request.
    acquisition: Generation,
    /// Token of the latest paste action.
    paste: Generation,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("source", &self.store.source_name())
            .field("status", &self.store.status())
            .field("frames", &self.store.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 640;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced calls boot through `Fn`; the flags are only needed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            store: FrameStore::new(),
            gallery: gallery::State::new(),
            upload: upload::State::new(),
            notifications: notifications::Manager::new(),
            theme_mode: ThemeMode::System,
            acquisition: Generation::default(),
            paste: Generation::default(),
        }
    }
}

impl App {
    /// Loads configuration and translations, then starts loading the
    /// command-line source if one was given.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            config,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let task = match flags.source {
            Some(source) => update::load_startup_source(&mut app.update_context(), source),
            None => Task::none(),
        };

        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            config: &mut self.config,
            store: &mut self.store,
            gallery: &mut self.gallery,
            upload: &mut self.upload,
            notifications: &mut self.notifications,
            theme_mode: &mut self.theme_mode,
            acquisition: &mut self.acquisition,
            paste: &mut self.paste,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.store.source_name() {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Gallery(message) => update::handle_gallery_message(&mut ctx, message),
            Message::Upload(message) => update::handle_upload_message(&mut ctx, message),
            Message::Notification(message) => {
                ctx.notifications.handle_message(&message);
                Task::none()
            }
            Message::Shortcut(shortcut) => update::handle_shortcut(&mut ctx, shortcut),
            Message::ToggleTheme => update::handle_toggle_theme(&mut ctx),
            Message::OpenFileDialogResult(path) => {
                update::handle_open_file_dialog_result(&mut ctx, path)
            }
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::ClipboardRead {
                paste,
                request,
                result,
            } => update::handle_clipboard_read(&mut ctx, paste, request, result),
            Message::SourceLoaded { request, result } => {
                update::handle_source_loaded(&mut ctx, request, result)
            }
            Message::FramesExtracted { generation, result } => {
                update::handle_frames_extracted(&mut ctx, generation, result)
            }
            Message::ExportDestinationChosen {
                scope,
                frames,
                path,
            } => update::handle_export_destination(scope, frames, path),
            Message::ExportFinished(result) => update::handle_export_finished(&mut ctx, result),
            Message::Tick(_) => {
                ctx.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            store: &self.store,
            gallery: &self.gallery,
            upload: &self.upload,
            notifications: &self.notifications,
            theme_mode: self.theme_mode,
        })
    }
}
