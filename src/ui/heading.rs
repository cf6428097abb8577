// SPDX-License-Identifier: MPL-2.0
//! Shared section heading.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Text};
use iced::{alignment::Horizontal, Element};

/// Title with a muted subtitle underneath, centered.
pub fn view<'a, M: 'a>(title: &'a str, subtitle: &'a str) -> Element<'a, M> {
    Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Text::new(title)
                .size(typography::TITLE_LG)
                .align_x(Horizontal::Center),
        )
        .push(
            Text::new(subtitle)
                .size(typography::BODY_LG)
                .align_x(Horizontal::Center)
                .style(styles::text::muted),
        )
        .into()
}
