// SPDX-License-Identifier: MPL-2.0
//! Tech stack section: skill bars per category plus a list of extra skills.

use crate::domain::tech::{CategoryKind, Skill, TechCategory, ADDITIONAL_SKILLS, CATEGORIES};
use crate::i18n::Translations;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{heading, styles};
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{alignment::Horizontal, Element, Length};

pub struct ViewContext<'a> {
    pub t: &'a Translations,
}

/// Localized heading for a category.
#[must_use]
pub fn category_title(kind: CategoryKind, t: &Translations) -> &str {
    match kind {
        CategoryKind::Frontend => &t.tech.frontend,
        CategoryKind::Backend => &t.tech.backend,
        CategoryKind::Styling => &t.tech.styling,
        CategoryKind::Tools => &t.tech.tools,
    }
}

pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let t = ctx.t;

    let categories = CATEGORIES
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, category| {
            row.push(category_card(category, t))
        })
        .wrap()
        .vertical_spacing(spacing::LG);

    let extras = ADDITIONAL_SKILLS
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, skill| {
            row.push(
                Container::new(Text::new(*skill).size(typography::BODY))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::container::badge),
            )
        })
        .wrap()
        .vertical_spacing(spacing::XS);

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(heading::view(&t.tech.title, &t.tech.subtitle))
        .push(categories)
        .push(Text::new(t.tech.additional_skills.as_str()).size(typography::TITLE_SM))
        .push(extras);

    Container::new(content)
        .padding([spacing::SECTION, spacing::LG])
        .center_x(Length::Fill)
        .into()
}

fn category_card<'a, M: 'a>(category: &'a TechCategory, t: &'a Translations) -> Element<'a, M> {
    let title = Row::new()
        .spacing(spacing::XS)
        .push(Text::new(category.icon).size(typography::TITLE_SM))
        .push(Text::new(category_title(category.kind, t)).size(typography::TITLE_SM));

    let skills = category
        .skills
        .iter()
        .fold(Column::new().spacing(spacing::SM), |column, skill| {
            column.push(skill_row(*skill))
        });

    Container::new(Column::new().spacing(spacing::MD).push(title).push(skills))
        .width(Length::Fixed(sizing::PROJECT_CARD_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn skill_row<'a, M: 'a>(skill: Skill) -> Element<'a, M> {
    let label = Row::new()
        .push(Text::new(skill.name).size(typography::BODY).width(Length::Fill))
        .push(
            Text::new(format!("{}%", skill.level))
                .size(typography::CAPTION)
                .style(styles::text::muted),
        );

    Column::new()
        .spacing(spacing::XXS)
        .push(label)
        .push(skill_bar(skill))
        .into()
}

/// Filled track whose filled share matches the skill level.
fn skill_bar<'a, M: 'a>(skill: Skill) -> Element<'a, M> {
    let (filled, remaining) = bar_portions(skill);
    let height = Length::Fixed(sizing::SKILL_BAR_HEIGHT);

    let mut bar = Row::new().height(height);
    if filled > 0 {
        bar = bar.push(
            Container::new(Space::new())
                .width(Length::FillPortion(filled))
                .height(height)
                .style(styles::container::skill_fill),
        );
    }
    if remaining > 0 {
        bar = bar.push(Space::new().width(Length::FillPortion(remaining)));
    }

    Container::new(bar)
        .width(Length::Fill)
        .height(height)
        .style(styles::container::skill_track)
        .into()
}

/// Fill portions of a skill bar, summing to 100.
fn bar_portions(skill: Skill) -> (u16, u16) {
    let filled = u16::from(skill.level.min(100));
    (filled, 100 - filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::locale::Language;
    use crate::i18n::translations;

    #[test]
    fn category_titles_are_localized() {
        let en = translations(Language::En);
        assert_eq!(category_title(CategoryKind::Tools, en), "Tools & Others");
        assert_eq!(category_title(CategoryKind::Backend, en), "Backend & Database");
    }

    #[test]
    fn bar_portions_always_sum_to_one_hundred() {
        for category in &CATEGORIES {
            for skill in category.skills {
                let (filled, remaining) = bar_portions(*skill);
                assert_eq!(filled + remaining, 100);
                assert_eq!(filled, u16::from(skill.level));
            }
        }
    }
}
