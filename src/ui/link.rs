// SPDX-License-Identifier: MPL-2.0
//! External links shown in project cards and the profile.

use crate::ui::design_tokens::typography;
use crate::ui::styles;
use iced::widget::{button, Column, Text};
use iced::{Element, Padding};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Open the URL in the system browser.
    Open(String),
}

/// The URL to hand to the browser, or `None` for placeholders like `#`.
#[must_use]
pub fn target(url: &str) -> Option<&str> {
    let url = url.trim();
    let lower = url.to_ascii_lowercase();
    let has_host = ["https://", "http://"]
        .iter()
        .any(|scheme| lower.starts_with(scheme) && lower.len() > scheme.len());
    has_host.then_some(url)
}

/// Caption label above a clickable URL. Placeholders render disabled.
pub fn view<'a>(label: &'a str, url: &'a str) -> Element<'a, Message> {
    let address = button(
        Text::new(url)
            .size(typography::CAPTION)
            .style(styles::text::accent),
    )
    .padding(Padding::ZERO)
    .style(styles::button::link)
    .on_press_maybe(target(url).map(|url| Message::Open(url.to_string())));

    Column::new()
        .push(Text::new(label).size(typography::CAPTION))
        .push(address)
        .into()
}
