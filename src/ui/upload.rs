// SPDX-License-Identifier: MPL-2.0
//! Upload panel: drop hint, file picker, paste and URL fetch while nothing is
//! loaded; file name and "Change File" once a GIF is shown.

use crate::app::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    UrlChanged(String),
    Fetch,
    SelectFile,
    Paste,
    ChangeFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    OpenFileDialog,
    Paste,
    Fetch(String),
    ChangeFile,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    url: String,
    fetching: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    pub fn set_fetching(&mut self, fetching: bool) {
        self.fetching = fetching;
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::UrlChanged(url) => {
                self.url = url;
                Effect::None
            }
            Message::Fetch => {
                if self.fetching {
                    return Effect::None;
                }
                // Validated by the app; empty input is reported as an invalid URL.
                self.fetching = true;
                Effect::Fetch(self.url.trim().to_string())
            }
            Message::SelectFile => Effect::OpenFileDialog,
            Message::Paste => Effect::Paste,
            Message::ChangeFile => {
                self.url.clear();
                Effect::ChangeFile
            }
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Name of the loaded GIF, if any.
    pub source_name: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.source_name {
        Some(name) => loaded_view(ctx.i18n, name),
        None => empty_view(&ctx),
    }
}

fn loaded_view<'a>(i18n: &'a I18n, name: &'a str) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(name).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("upload-change-file")))
                .on_press(Message::ChangeFile)
                .style(styles::button::secondary),
        );

    Container::new(row)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn empty_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let buttons = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr("upload-select-button")))
                .on_press(Message::SelectFile)
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(i18n.tr("upload-paste-button")))
                .on_press(Message::Paste)
                .style(styles::button::secondary),
        );

    let url_input = text_input(&i18n.tr("upload-url-placeholder"), &state.url)
        .on_input(Message::UrlChanged)
        .on_submit(Message::Fetch)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::URL_INPUT_WIDTH));

    let fetch_label = if state.fetching {
        i18n.tr("upload-fetching")
    } else {
        i18n.tr("upload-fetch-button")
    };
    let fetch = button(Text::new(fetch_label))
        .on_press_maybe((!state.fetching).then_some(Message::Fetch))
        .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("upload-title")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("upload-drop-hint")).size(typography::BODY))
        .push(buttons)
        .push(Text::new(i18n.tr("upload-or-url")).size(typography::CAPTION))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(url_input)
                .push(fetch),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::LG)
        .style(styles::container::drop_zone)
        .into()
}
