// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::text;
use iced::{Color, Theme};

/// Secondary copy: subtitles, descriptions, captions.
pub fn muted(theme: &Theme) -> text::Style {
    let base = theme.palette().text;
    text::Style {
        color: Some(Color {
            a: opacity::MUTED_TEXT,
            ..base
        }),
    }
}

/// Brand-colored accent text.
pub fn accent(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::BRAND_START),
    }
}

/// Inline field error.
pub fn error(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::ERROR_500),
    }
}
