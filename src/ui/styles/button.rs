// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn disabled_style(theme: &Theme) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    button::Style {
        background: Some(Background::Color(if is_light {
            palette::GRAY_100
        } else {
            palette::GRAY_700
        })),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Main actions: select, fetch, export.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500),
        button::Status::Pressed => (palette::PRIMARY_600, palette::PRIMARY_700),
        button::Status::Active => (palette::PRIMARY_500, palette::PRIMARY_600),
        button::Status::Disabled => return disabled_style(theme),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Secondary actions that adapt to the light/dark theme.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            })),
            text_color,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => disabled_style(theme),
    }
}

/// Translucent buttons drawn over a frame (fullscreen, frame navigation).
pub fn overlay(theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_STRONG,
        button::Status::Pressed => opacity::BACKDROP,
        button::Status::Active => opacity::OVERLAY_MEDIUM,
        button::Status::Disabled => return disabled_style(theme),
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Round selection toggle on a thumbnail.
pub fn selection_badge(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match (selected, status) {
            (true, button::Status::Hovered) => palette::PRIMARY_400,
            (true, _) => palette::PRIMARY_500,
            (false, button::Status::Hovered) => Color {
                a: opacity::OVERLAY_STRONG,
                ..BLACK
            },
            (false, _) => Color {
                a: opacity::OVERLAY_MEDIUM,
                ..BLACK
            },
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                color: WHITE,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Thumbnail body; transparent so the container outline carries the state.
pub fn thumbnail(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
