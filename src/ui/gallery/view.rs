// SPDX-License-Identifier: MPL-2.0
//! Gallery layout: frame view, thumbnail strip and selection toolbar.

use super::Message;
use crate::app::i18n::fluent::I18n;
use crate::frame_store::{Frame, FrameStore};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, Column, Container, Row, Scrollable, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a FrameStore,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let Some(current) = ctx.store.current() else {
        return Space::new().into();
    };

    Column::new()
        .spacing(spacing::MD)
        .push(frame_view(&ctx, current))
        .push(frame_details(&ctx, current))
        .push(thumbnail_strip(&ctx))
        .push(selection_toolbar(&ctx))
        .into()
}

fn frame_view<'a>(ctx: &ViewContext<'a>, current: &'a Frame) -> Element<'a, Message> {
    let cursor = ctx.store.cursor();
    let len = ctx.store.len();

    let previous = button(Text::new("‹").size(typography::TITLE_LG))
        .on_press_maybe((!cursor.is_first()).then_some(Message::Previous))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::overlay);
    let next = button(Text::new("›").size(typography::TITLE_LG))
        .on_press_maybe((!cursor.is_last(len)).then_some(Message::Next))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::overlay);

    let image = Image::new(current.raster.handle().clone())
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::FRAME_VIEW_HEIGHT));

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(previous)
        .push(
            Container::new(image)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .push(next)
        .into()
}

fn frame_details<'a>(ctx: &ViewContext<'a>, current: &'a Frame) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let position = i18n.tr_with_args(
        "gallery-frame-position",
        &[
            ("current", &(current.index + 1).to_string()),
            ("total", &ctx.store.len().to_string()),
        ],
    );
    let delay = i18n.tr_with_args(
        "gallery-frame-delay",
        &[("delay", &current.delay_ms.to_string())],
    );

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(position).size(typography::TITLE_SM))
        .push(Text::new(delay).size(typography::CAPTION))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("gallery-info-button")))
                .on_press(Message::ShowInfo(current.index))
                .style(styles::button::secondary),
        )
        .push(
            button(Text::new(i18n.tr("gallery-fullscreen-button")))
                .on_press(Message::OpenFullscreen)
                .style(styles::button::secondary),
        )
        .push(
            button(Text::new(i18n.tr("gallery-download-frame")))
                .on_press(Message::DownloadFrame(current.index))
                .style(styles::button::primary),
        )
        .into()
}

fn thumbnail_strip<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cursor = ctx.store.cursor().index();
    let selection = ctx.store.selection();

    let thumbnails = ctx.store.frames().iter().fold(
        Row::new().spacing(spacing::SM).padding(spacing::XS),
        |row, frame| {
            row.push(thumbnail(
                frame,
                frame.index == cursor,
                selection.contains(frame.index),
            ))
        },
    );

    Container::new(
        Scrollable::new(thumbnails).direction(Direction::Horizontal(Scrollbar::default())),
    )
    .height(Length::Fixed(sizing::THUMBNAIL_STRIP))
    .width(Length::Fill)
    .style(styles::container::panel)
    .into()
}

fn thumbnail(frame: &Frame, is_current: bool, is_selected: bool) -> Element<'_, Message> {
    let picture = button(
        Image::new(frame.raster.handle().clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fixed(sizing::THUMBNAIL))
            .height(Length::Fixed(sizing::THUMBNAIL)),
    )
    .on_press(Message::Show(frame.index))
    .padding(spacing::XXS)
    .style(styles::button::thumbnail);

    let badge_label = if is_selected { "✓" } else { "" };
    let badge = button(
        Container::new(Text::new(badge_label).size(typography::CAPTION))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .on_press(Message::ToggleSelection(frame.index))
    .width(Length::Fixed(sizing::SELECTION_BADGE))
    .height(Length::Fixed(sizing::SELECTION_BADGE))
    .padding(0)
    .style(styles::button::selection_badge(is_selected));

    let layered = Stack::new()
        .push(Container::new(picture).style(styles::container::thumbnail(is_current)))
        .push(
            Container::new(badge)
                .width(Length::Fill)
                .align_x(Horizontal::Right)
                .padding(spacing::XXS),
        );

    Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(layered)
        .push(Text::new(format!("#{}", frame.index + 1)).size(typography::CAPTION))
        .into()
}

fn selection_toolbar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let selected = ctx.store.selection().len();
    let total = ctx.store.len();

    let count = i18n.tr_with_args(
        "gallery-selection-count",
        &[
            ("selected", &selected.to_string()),
            ("total", &total.to_string()),
        ],
    );
    let download_selected = i18n.tr_with_args(
        "gallery-download-selected",
        &[("count", &selected.to_string())],
    );

    let toolbar = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(count).size(typography::BODY))
        .push(
            button(Text::new(i18n.tr("gallery-select-all")))
                .on_press_maybe((selected < total).then_some(Message::SelectAll))
                .style(styles::button::secondary),
        )
        .push(
            button(Text::new(i18n.tr("gallery-clear-selection")))
                .on_press_maybe((selected > 0).then_some(Message::ClearSelection))
                .style(styles::button::secondary),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(download_selected))
                .on_press_maybe((selected > 0).then_some(Message::DownloadSelected))
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(i18n.tr("gallery-download-all")))
                .on_press(Message::DownloadAll)
                .style(styles::button::primary),
        );

    Container::new(toolbar)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}
