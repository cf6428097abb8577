// SPDX-License-Identifier: MPL-2.0
//! Navigation bar: section links and the language picker.

use crate::domain::locale::Language;
use crate::i18n::Translations;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, pick_list, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

/// A scroll target on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Work,
    About,
    Tech,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Work,
        Section::About,
        Section::Tech,
        Section::Contact,
    ];

    /// Approximate vertical position of the section on the page (0.0-1.0).
    #[must_use]
    pub fn anchor(self) -> f32 {
        match self {
            Section::Home => 0.0,
            Section::Work => 0.2,
            Section::About => 0.45,
            Section::Tech => 0.7,
            Section::Contact => 1.0,
        }
    }

    #[must_use]
    pub fn label(self, t: &Translations) -> &str {
        match self {
            Section::Home => &t.nav.home,
            Section::Work => &t.nav.work,
            Section::About => &t.nav.about,
            Section::Tech => &t.nav.tech,
            Section::Contact => &t.nav.contact,
        }
    }
}

pub struct ViewContext<'a> {
    pub t: &'a Translations,
    pub language: Language,
}

#[derive(Debug, Clone)]
pub enum Message {
    ScrollTo(Section),
    SelectLanguage(Language),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ScrollTo(Section),
    ChangeLanguage(Language),
}

/// Process a navbar message and return the corresponding event.
///
/// Re-selecting the shown language is forwarded too: a language set with
/// `--lang` is only persisted once the user picks it.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::ScrollTo(section) => Event::ScrollTo(section),
        Message::SelectLanguage(language) => Event::ChangeLanguage(language),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let links = Section::ALL.into_iter().fold(
        Row::new().spacing(spacing::XS).align_y(Vertical::Center),
        |row, section| {
            row.push(
                button(Text::new(section.label(ctx.t)).size(typography::BODY))
                    .on_press(Message::ScrollTo(section))
                    .style(styles::button::link),
            )
        },
    );

    let picker = pick_list(&Language::ALL[..], Some(ctx.language), Message::SelectLanguage)
        .placeholder(ctx.t.app.language_label.as_str())
        .text_size(typography::BODY);

    let bar = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(Text::new("Portfolio").size(typography::TITLE_SM).style(styles::text::accent))
        .push(Space::new().width(Length::Fill))
        .push(links)
        .push(Text::new(ctx.t.app.language_label.as_str()).size(typography::CAPTION))
        .push(picker);

    Container::new(bar)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .style(styles::container::navbar)
        .into()
}
