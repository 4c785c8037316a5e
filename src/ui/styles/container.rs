// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Raised surface for the upload panel and the selection toolbar.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dashed-look drop target shown while no GIF is loaded.
pub fn drop_zone(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.base.color)),
        border: Border {
            color: palette::PRIMARY_500,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        text_color: Some(extended.background.base.text),
        ..Default::default()
    }
}

/// Thumbnail frame; outlined when it is the cursor frame.
pub fn thumbnail(is_current: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let (color, width) = if is_current {
            (palette::PRIMARY_500, border::WIDTH_LG)
        } else {
            (theme.extended_palette().background.strong.color, border::WIDTH_SM)
        };

        container::Style {
            border: Border {
                color,
                width,
                radius: radius::SM.into(),
            },
            ..Default::default()
        }
    }
}

/// Full-window dim layer behind overlays.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Card holding the frame-info details.
pub fn modal_card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.base.color)),
        text_color: Some(extended.background.base.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}
