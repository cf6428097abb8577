// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one scrollable column of sections under a fixed navigation
//! bar, with banners stacked on top.

use super::contact::ContactState;
use super::content::PageContent;
use super::Message;
use crate::domain::locale::Language;
use crate::i18n::Translations;
use crate::ui::notifications::{self, Toast};
use crate::ui::{about, contact, hero, navbar, tech, work};
use iced::widget::{scrollable, Column, Container, Id, Stack};
use iced::{Element, Length};

/// Identifier of the page scrollable, targeted by section navigation.
pub const PAGE_SCROLLABLE_ID: &str = "folio-page";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub t: &'a Translations,
    pub language: Language,
    pub content: &'a PageContent,
    pub contact: &'a ContactState,
    pub notifications: &'a notifications::Manager,
}

/// Renders the whole page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let t = ctx.t;

    let sections = Column::new()
        .width(Length::Fill)
        .push(hero::view(hero::ViewContext { t }).map(Message::Hero))
        .push(
            work::view(work::ViewContext {
                t,
                projects: ctx.content.projects(),
                loading: ctx.content.projects_loading(),
            })
            .map(Message::Link),
        )
        .push(
            about::view(about::ViewContext {
                t,
                profile: ctx.content.profile(),
                education: ctx.content.education(),
                loading: ctx.content.about_loading(),
            })
            .map(Message::Link),
        )
        .push(tech::view(tech::ViewContext { t }))
        .push(
            contact::view(contact::ViewContext {
                t,
                state: ctx.contact,
            })
            .map(Message::Contact),
        );

    let page = Column::new()
        .push(
            navbar::view(navbar::ViewContext {
                t,
                language: ctx.language,
            })
            .map(Message::Navbar),
        )
        .push(
            scrollable(sections)
                .id(Id::new(PAGE_SCROLLABLE_ID))
                .width(Length::Fill)
                .height(Length::Fill),
        );

    let base = Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill);

    if ctx.notifications.has_notifications() {
        Stack::new()
            .push(base)
            .push(Toast::view_overlay(ctx.notifications, t).map(Message::Notification))
            .into()
    } else {
        base.into()
    }
}
