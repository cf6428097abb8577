// SPDX-License-Identifier: MPL-2.0
//! Contact form session state.

use crate::application::port::EmailError;
use crate::domain::contact::{ContactForm, Field, FormErrors};
use crate::ui::notifications::Notification;
use iced::widget::text_editor;
use std::collections::BTreeMap;

/// Notification key shown after a successful send.
pub const SENT_KEY: &str = "contact-success";

/// Notification key shown after a failed send.
pub const FAILED_KEY: &str = "contact-error";

#[derive(Default)]
pub struct ContactState {
    form: ContactForm,
    errors: FormErrors,
    submitting: bool,
    /// Multi-line editor buffer behind the message field.
    message: text_editor::Content,
}

impl ContactState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn message(&self) -> &text_editor::Content {
        &self.message
    }

    /// Updates a field and clears its error.
    pub fn edit(&mut self, field: Field, value: String) {
        self.form.set(field, value);
        self.errors.clear(field);
    }

    /// Applies an editor action to the message and syncs the form on edits.
    pub fn edit_message(&mut self, action: text_editor::Action) {
        let is_edit = action.is_edit();
        self.message.perform(action);
        if is_edit {
            let text = self.message.text();
            self.edit(Field::Message, text);
        }
    }

    /// Validates the form and, when it passes, marks it as submitting.
    ///
    /// Returns the template variables to send, or `None` when the form is
    /// invalid or a send is already in flight.
    pub fn submit(&mut self, recipient_label: &str) -> Option<BTreeMap<String, String>> {
        if self.submitting {
            return None;
        }

        self.errors = self.form.validate();
        if !self.errors.is_empty() {
            return None;
        }

        self.submitting = true;
        Some(self.form.template_variables(recipient_label))
    }

    /// Records the outcome of a send and returns the banner to show.
    pub fn finish(&mut self, result: &Result<(), EmailError>) -> Notification {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.form = ContactForm::default();
                self.errors = FormErrors::default();
                self.message = text_editor::Content::new();
                Notification::success(SENT_KEY)
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact message was not sent");
                Notification::error(FAILED_KEY)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::FieldError;
    use crate::ui::notifications::Severity;
    use iced::widget::text_editor::{Action, Edit};
    use std::sync::Arc;

    fn filled() -> ContactState {
        let mut state = ContactState::new();
        state.edit(Field::Name, "Ada".into());
        state.edit(Field::Email, "ada@example.com".into());
        state.edit(Field::Message, "I would like to talk.".into());
        state
    }

    #[test]
    fn invalid_form_is_not_submitted() {
        let mut state = ContactState::new();

        assert!(state.submit("Owner").is_none());
        assert!(!state.is_submitting());
        assert_eq!(state.errors().get(Field::Name), Some(FieldError::NameRequired));
    }

    #[test]
    fn editing_clears_only_that_field_error() {
        let mut state = ContactState::new();
        state.submit("Owner");

        state.edit(Field::Email, "not-an-email".into());

        assert_eq!(state.errors().get(Field::Email), None);
        assert!(state.errors().get(Field::Name).is_some());
    }

    #[test]
    fn valid_form_produces_template_variables() {
        let mut state = filled();

        let variables = state.submit("Portfolio Owner").expect("valid form");

        assert!(state.is_submitting());
        assert_eq!(variables["from_name"], "Ada");
        assert_eq!(variables["to_name"], "Portfolio Owner");
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut state = filled();
        state.submit("Owner");
        assert!(state.submit("Owner").is_none());
    }

    #[test]
    fn success_clears_form() {
        let mut state = filled();
        state.submit("Owner");

        let banner = state.finish(&Ok(()));

        assert_eq!(banner.severity(), Severity::Success);
        assert_eq!(banner.message_key(), SENT_KEY);
        assert_eq!(state.form().value(Field::Name), "");
        assert!(!state.is_submitting());
    }

    #[test]
    fn message_editor_keeps_line_breaks() {
        let mut state = ContactState::new();

        state.edit_message(Action::Edit(Edit::Paste(Arc::new(
            "First line.\nSecond line.".to_string(),
        ))));

        let message = state.form().value(Field::Message);
        assert!(message.starts_with("First line.\nSecond line."));
        assert!(state.message().text().contains('\n'));
    }

    #[test]
    fn cursor_moves_do_not_touch_message_error() {
        let mut state = ContactState::new();
        state.submit("Owner");
        assert!(state.errors().get(Field::Message).is_some());

        state.edit_message(Action::SelectAll);

        assert!(state.errors().get(Field::Message).is_some());
    }

    #[test]
    fn success_clears_message_editor() {
        let mut state = filled();
        state.edit_message(Action::Edit(Edit::Paste(Arc::new(
            "Hello,\nI would like to talk.".to_string(),
        ))));
        state.submit("Owner");

        state.finish(&Ok(()));

        assert_eq!(state.message().text().trim(), "");
    }

    #[test]
    fn failure_keeps_form_for_resubmission() {
        let mut state = filled();
        state.submit("Owner");

        let banner = state.finish(&Err(EmailError::Transport("offline".into())));

        assert_eq!(banner.severity(), Severity::Error);
        assert_eq!(state.form().value(Field::Name), "Ada");
        assert!(state.submit("Owner").is_some());
    }
}
