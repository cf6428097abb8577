// SPDX-License-Identifier: MPL-2.0
//! Contact form view.

use crate::app::contact::ContactState;
use crate::domain::contact::Field;
use crate::i18n::Translations;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{heading, styles};
use iced::widget::{button, text_editor, text_input, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};

pub struct ViewContext<'a> {
    pub t: &'a Translations,
    pub state: &'a ContactState,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageEdited(text_editor::Action),
    Submit,
}

impl Message {
    /// The edited field and its new value, for single-line inputs.
    #[must_use]
    pub fn into_edit(self) -> Option<(Field, String)> {
        match self {
            Message::NameChanged(value) => Some((Field::Name, value)),
            Message::EmailChanged(value) => Some((Field::Email, value)),
            Message::MessageEdited(_) | Message::Submit => None,
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let t = ctx.t;
    let state = ctx.state;
    let submitting = state.is_submitting();

    let fields = [
        (Field::Name, t.contact.name.as_str(), Message::NameChanged as fn(String) -> Message),
        (Field::Email, t.contact.email.as_str(), Message::EmailChanged),
    ];

    let form = fields.into_iter().fold(
        Column::new().spacing(spacing::MD),
        |column, (field, label, on_input)| {
            let mut input = text_input(label, state.form().value(field))
                .padding(spacing::SM)
                .size(typography::BODY);
            if !submitting {
                input = input.on_input(on_input).on_submit(Message::Submit);
            }
            column.push(field_group(t, state, field, label, input.into()))
        },
    );

    let message_label = t.contact.message.as_str();
    let mut editor = text_editor(state.message())
        .placeholder(message_label)
        .height(Length::Fixed(sizing::MESSAGE_EDITOR_HEIGHT))
        .padding(spacing::SM)
        .size(typography::BODY);
    if !submitting {
        editor = editor.on_action(Message::MessageEdited);
    }
    let form = form.push(field_group(
        t,
        state,
        Field::Message,
        message_label,
        editor.into(),
    ));

    let label = if submitting {
        t.contact.sending.as_str()
    } else {
        t.contact.send.as_str()
    };
    let send = button(
        Text::new(label)
            .size(typography::BODY_LG)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .on_press_maybe((!submitting).then_some(Message::Submit))
    .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .max_width(sizing::FORM_MAX_WIDTH)
        .push(heading::view(&t.contact.title, &t.contact.subtitle))
        .push(
            Container::new(form.push(send))
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::card),
        );

    Container::new(content)
        .padding([spacing::SECTION, spacing::LG])
        .center_x(Length::Fill)
        .into()
}

/// Label, input and the field's validation error, stacked.
fn field_group<'a>(
    t: &'a Translations,
    state: &'a ContactState,
    field: Field,
    label: &'a str,
    input: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut group = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::CAPTION))
        .push(input);
    if let Some(error) = state.errors().get(field) {
        group = group.push(
            Text::new(t.tr(error.i18n_key()))
                .size(typography::CAPTION)
                .style(styles::text::error),
        );
    }
    group.into()
}
