// SPDX-License-Identifier: MPL-2.0
//! Project showcase.
//!
//! Cards are text only: the thumbnail is represented by its alt text, since
//! remote images are not downloaded.

use crate::domain::content::Project;
use crate::i18n::Translations;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{heading, link, styles};
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{alignment::Horizontal, Element, Length};

pub struct ViewContext<'a> {
    pub t: &'a Translations,
    pub projects: &'a [Project],
    pub loading: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, link::Message> {
    let cards = ctx
        .projects
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, project| {
            row.push(card(project, ctx.t))
        })
        .wrap()
        .vertical_spacing(spacing::LG);

    let mut content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(heading::view(&ctx.t.work.title, &ctx.t.work.subtitle));

    if ctx.loading {
        content = content.push(
            Text::new(ctx.t.common.loading.as_str())
                .size(typography::CAPTION)
                .style(styles::text::muted),
        );
    }

    Container::new(content.push(cards))
        .padding([spacing::SECTION, spacing::LG])
        .center_x(Length::Fill)
        .into()
}

fn card<'a>(project: &'a Project, t: &'a Translations) -> Element<'a, link::Message> {
    let mut title_row = Row::new()
        .spacing(spacing::XS)
        .push(Text::new(project.title.as_str()).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill));
    if project.featured {
        title_row = title_row.push(badge(t.work.featured.as_str()));
    }

    let technologies = project
        .technology_names()
        .fold(Row::new().spacing(spacing::XXS), |row, name| row.push(badge(name)))
        .wrap()
        .vertical_spacing(spacing::XXS);

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(
            Text::new(project.image.alt.as_deref().unwrap_or(project.title.as_str()))
                .size(typography::CAPTION)
                .style(styles::text::muted),
        )
        .push(title_row)
        .push(Text::new(project.description.as_str()).size(typography::BODY))
        .push(technologies);

    for (label, url) in [
        (&t.work.view_live, &project.live_url),
        (&t.work.view_source, &project.github_url),
    ] {
        if let Some(url) = url.as_deref() {
            column = column.push(link::view(label, url));
        }
    }

    Container::new(column)
        .width(Length::Fixed(sizing::PROJECT_CARD_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

fn badge<'a, M: 'a>(label: &'a str) -> Element<'a, M> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::badge)
        .into()
}
