// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The main column (header, upload panel, gallery) sits at the bottom of a
//! stack; gallery overlays and toasts are layered above it.

use super::i18n::fluent::I18n;
use super::Message;
use crate::frame_store::{FrameStore, LoadStatus};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::gallery;
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::upload;
use iced::widget::{button, Column, Container, Row, Scrollable, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a FrameStore,
    pub gallery: &'a gallery::State,
    pub upload: &'a upload::State,
    pub notifications: &'a notifications::Manager,
    pub theme_mode: ThemeMode,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let upload_panel = upload::view(upload::ViewContext {
        i18n: ctx.i18n,
        state: ctx.upload,
        source_name: ctx.store.source_name(),
    })
    .map(Message::Upload);

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(header(ctx.i18n, ctx.theme_mode))
        .push(upload_panel)
        .push(body(&ctx));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Scrollable::new(content).height(Length::Fill));

    let overlay = gallery::overlay_view(
        gallery::ViewContext {
            i18n: ctx.i18n,
            store: ctx.store,
        },
        ctx.gallery,
    );
    if let Some(overlay) = overlay {
        layers = layers.push(overlay.map(Message::Gallery));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

fn header(i18n: &I18n, theme_mode: ThemeMode) -> Element<'_, Message> {
    let theme_label = if theme_mode.is_dark() {
        i18n.tr("theme-switch-light")
    } else {
        i18n.tr("theme-switch-dark")
    };

    Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr("window-title")).size(typography::TITLE_LG))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(theme_label).size(typography::BODY))
                .on_press(Message::ToggleTheme)
                .style(styles::button::secondary),
        )
        .into()
}

fn body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.store.status() {
        LoadStatus::Ready => gallery::view(gallery::ViewContext {
            i18n: ctx.i18n,
            store: ctx.store,
        })
        .map(Message::Gallery),
        LoadStatus::Decoding => placeholder(ctx.i18n.tr("gallery-loading")),
        LoadStatus::Failed => placeholder(ctx.i18n.tr("gallery-failed")),
        LoadStatus::Empty => Space::new().into(),
    }
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::TITLE_SM))
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .into()
}
