// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::contact::ContactState;
use super::content::PageContent;
use super::Message;
use crate::application::port::{EmailError, EmailSender};
use crate::config::Config;
use crate::i18n::LocaleResolver;
use crate::infrastructure::{browser, EmailJsSender};
use crate::ui::navbar::{self, Event as NavbarEvent, Section};
use crate::ui::notifications;
use crate::ui::{contact, hero, link};
use super::view::PAGE_SCROLLABLE_ID;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::sync::Arc;

/// Mutable application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub locale: &'a mut LocaleResolver,
    pub config: &'a Config,
    pub content: &'a mut PageContent,
    pub contact: &'a mut ContactState,
    pub mailer: Option<&'a Arc<EmailJsSender>>,
    pub notifications: &'a mut notifications::Manager,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => handle_navbar(ctx, message),
        Message::Hero(message) => scroll_to(hero::target(message)),
        Message::Contact(message) => handle_contact(ctx, message),
        Message::Link(message) => {
            handle_link(message);
            Task::none()
        }
        Message::Notification(message) => {
            ctx.notifications.handle_message(&message);
            Task::none()
        }
        Message::ProjectsLoaded {
            generation,
            projects,
        } => {
            ctx.content.apply_projects(generation, projects);
            Task::none()
        }
        Message::AboutLoaded {
            generation,
            profile,
            education,
        } => {
            ctx.content.apply_about(generation, profile, education);
            Task::none()
        }
        Message::ContactSent(result) => {
            let banner = ctx.contact.finish(&result);
            ctx.notifications.push(banner);
            Task::none()
        }
        Message::Tick(now) => {
            ctx.notifications.tick(now);
            Task::none()
        }
    }
}

fn handle_navbar(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::ScrollTo(section) => scroll_to(section),
        NavbarEvent::ChangeLanguage(language) => {
            ctx.locale.set_locale(language);
            Task::none()
        }
    }
}

fn handle_contact(ctx: &mut UpdateContext<'_>, message: contact::Message) -> Task<Message> {
    if let contact::Message::MessageEdited(action) = message {
        ctx.contact.edit_message(action);
        return Task::none();
    }
    if let Some((field, value)) = message.into_edit() {
        ctx.contact.edit(field, value);
        return Task::none();
    }

    let Some(variables) = ctx.contact.submit(&ctx.config.email.recipient_label) else {
        return Task::none();
    };
    let request = ctx.config.email.request(variables);

    match ctx.mailer {
        Some(mailer) => {
            let mailer = Arc::clone(mailer);
            Task::perform(
                async move { mailer.send(&request).await },
                Message::ContactSent,
            )
        }
        None => Task::done(Message::ContactSent(Err(EmailError::NotConfigured(
            "email client",
        )))),
    }
}

fn handle_link(message: link::Message) {
    let link::Message::Open(url) = message;
    let Some(url) = link::target(&url) else {
        tracing::debug!(url = %url, "ignoring link without a web address");
        return;
    };
    if let Err(err) = browser::open(url) {
        tracing::warn!(url, error = %err, "failed to open link");
    }
}

fn scroll_to(section: Section) -> Task<Message> {
    operation::snap_to(
        Id::new(PAGE_SCROLLABLE_ID),
        RelativeOffset {
            x: 0.0,
            y: section.anchor(),
        },
    )
}
