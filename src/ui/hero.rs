// SPDX-License-Identifier: MPL-2.0
//! Landing section with the headline and the two call-to-action buttons.

use crate::i18n::Translations;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::navbar::Section;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Length};

pub struct ViewContext<'a> {
    pub t: &'a Translations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ViewWork,
    GetInTouch,
}

/// Maps a call-to-action to the section it scrolls to.
#[must_use]
pub fn target(message: Message) -> Section {
    match message {
        Message::ViewWork => Section::Work,
        Message::GetInTouch => Section::Contact,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let t = ctx.t;

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new(t.hero.view_work.as_str()).size(typography::BODY_LG))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .padding([spacing::XS, spacing::LG])
                .on_press(Message::ViewWork)
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(t.hero.get_in_touch.as_str()).size(typography::BODY_LG))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .padding([spacing::XS, spacing::LG])
                .on_press(Message::GetInTouch)
                .style(styles::button::outline),
        );

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(
            Text::new(t.hero.title.as_str())
                .size(typography::DISPLAY)
                .align_x(Horizontal::Center),
        )
        .push(
            Text::new(t.hero.subtitle.as_str())
                .size(typography::BODY_LG)
                .align_x(Horizontal::Center)
                .style(styles::text::muted),
        )
        .push(actions)
        .push(
            Text::new(t.hero.scroll_to_explore.as_str())
                .size(typography::CAPTION)
                .style(styles::text::muted),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::LG])
        .center_x(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calls_to_action_scroll_to_their_sections() {
        assert_eq!(target(Message::ViewWork), Section::Work);
        assert_eq!(target(Message::GetInTouch), Section::Contact);
    }
}
