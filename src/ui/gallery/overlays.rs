// SPDX-License-Identifier: MPL-2.0
//! Frame-info card and fullscreen view, drawn above the main layout.

use super::{Message, State, ViewContext};
use crate::frame_store::Frame;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::{button, opaque, Column, Container, Row, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};

/// Human-readable byte count.
#[must_use]
pub fn format_file_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// Overlays for the current state, or `None` when nothing is open.
pub fn view<'a>(ctx: ViewContext<'a>, state: &State) -> Option<Element<'a, Message>> {
    let info = state
        .info_frame()
        .and_then(|index| ctx.store.frame(index))
        .map(|frame| info_card(&ctx, frame));
    let fullscreen = state
        .is_fullscreen()
        .then(|| ctx.store.current())
        .flatten()
        .map(|frame| fullscreen_view(&ctx, frame));

    match (info, fullscreen) {
        (None, None) => None,
        (Some(layer), None) | (None, Some(layer)) => Some(layer),
        (Some(info), Some(fullscreen)) => Some(Stack::new().push(info).push(fullscreen).into()),
    }
}

fn detail_row<'a>(label: String, value: String) -> Row<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(
            Text::new(label)
                .size(typography::BODY)
                .width(Length::FillPortion(1)),
        )
        .push(
            Text::new(value)
                .size(typography::BODY)
                .width(Length::FillPortion(1)),
        )
}

fn info_card<'a>(ctx: &ViewContext<'a>, frame: &Frame) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let index = (frame.index + 1).to_string();
    let total = ctx.store.len().to_string();

    let card = Column::new()
        .spacing(spacing::SM)
        .push(
            Text::new(i18n.tr_with_args("info-title", &[("index", &index)]))
                .size(typography::TITLE_SM),
        )
        .push(detail_row(
            i18n.tr("info-position"),
            i18n.tr_with_args(
                "gallery-frame-position",
                &[("current", &index), ("total", &total)],
            ),
        ))
        .push(detail_row(
            i18n.tr("info-dimensions"),
            format!("{} × {}", frame.width, frame.height),
        ))
        .push(detail_row(
            i18n.tr("info-delay"),
            i18n.tr_with_args("info-delay-value", &[("delay", &frame.delay_ms.to_string())]),
        ))
        .push(detail_row(
            i18n.tr("info-size"),
            format_file_size(frame.byte_size),
        ))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(Space::new().width(Length::Fill))
                .push(
                    button(Text::new(i18n.tr("gallery-download-frame")))
                        .on_press(Message::DownloadFrame(frame.index))
                        .style(styles::button::primary),
                )
                .push(
                    button(Text::new(i18n.tr("overlay-close")))
                        .on_press(Message::CloseInfo)
                        .style(styles::button::secondary),
                ),
        );

    let centered = Container::new(
        Container::new(card)
            .width(Length::Fixed(sizing::MODAL_WIDTH))
            .padding(spacing::MD)
            .style(styles::container::modal_card),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center);

    opaque(centered)
}

fn fullscreen_view<'a>(ctx: &ViewContext<'a>, frame: &Frame) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let position = i18n.tr_with_args(
        "gallery-frame-position",
        &[
            ("current", &(frame.index + 1).to_string()),
            ("total", &ctx.store.len().to_string()),
        ],
    );

    let image = Image::new(frame.raster.handle().clone())
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill);

    let controls = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(position).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("gallery-download-frame")))
                .on_press(Message::DownloadFrame(frame.index))
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(i18n.tr("overlay-close")))
                .on_press(Message::CloseFullscreen)
                .style(styles::button::overlay),
        );

    let layout = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(image)
        .push(controls);

    opaque(
        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_sizes_use_binary_units() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
    }
}
