// SPDX-License-Identifier: MPL-2.0
//! About section: profile, biography, social links and education history.

use crate::domain::content::{Education, Profile};
use crate::i18n::Translations;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::{heading, link, styles};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{container, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the about section.
pub struct ViewContext<'a> {
    pub t: &'a Translations,
    pub profile: &'a Profile,
    pub education: &'a [Education],
    pub loading: bool,
}

/// Render the about section.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, link::Message> {
    let t = ctx.t;

    let mut content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(heading::view(&t.about.title, &t.about.subtitle));

    if ctx.loading {
        content = content.push(
            Text::new(t.common.loading.as_str())
                .size(typography::CAPTION)
                .style(styles::text::muted),
        );
    }

    let body = Row::new()
        .spacing(spacing::XL)
        .push(
            Container::new(build_profile_section(&ctx)).width(Length::FillPortion(1)),
        )
        .push(
            Container::new(build_education_section(&ctx)).width(Length::FillPortion(1)),
        );

    Container::new(content.push(body))
        .padding([spacing::SECTION, spacing::LG])
        .center_x(Length::Fill)
        .into()
}

/// Avatar, name, journey text and contact details.
fn build_profile_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, link::Message> {
    let profile = ctx.profile;

    let identity = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(build_avatar(profile))
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(profile.name.as_str()).size(typography::TITLE_SM))
                .push(
                    Text::new(profile.title.as_str())
                        .size(typography::BODY)
                        .style(styles::text::accent),
                ),
        );

    let mut details = Column::new()
        .spacing(spacing::XS)
        .push(build_detail_line(&ctx.t.about.based_in, &profile.location))
        .push(build_detail_line(&ctx.t.contact.email, &profile.email));

    for (label, url) in social_links(profile) {
        details = details.push(link::view(label, url));
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .push(identity)
        .push(Text::new(ctx.t.about.my_journey.as_str()).size(typography::BODY_LG))
        .push(Text::new(profile.bio.as_str()).size(typography::BODY))
        .push(details);

    build_card(content.into())
}

fn build_education_section<'a, M: 'a>(ctx: &ViewContext<'a>) -> Element<'a, M> {
    let entries = ctx.education.iter().fold(
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(ctx.t.about.education.as_str()).size(typography::TITLE_SM)),
        |column, entry| column.push(build_education_entry(entry)),
    );

    build_card(entries.into())
}

fn build_education_entry<'a, M: 'a>(entry: &'a Education) -> Element<'a, M> {
    let header = Row::new()
        .spacing(spacing::SM)
        .push(
            Text::new(entry.degree.as_str())
                .size(typography::BODY_LG)
                .width(Length::Fill),
        )
        .push(
            Text::new(entry.year.as_str())
                .size(typography::CAPTION)
                .style(styles::text::muted),
        );

    let achievements = entry.achievement_names().fold(
        Column::new().spacing(spacing::XXS),
        |column, achievement| {
            column.push(Text::new(format!("• {achievement}")).size(typography::BODY))
        },
    );

    Column::new()
        .spacing(spacing::XXS)
        .push(header)
        .push(
            Text::new(entry.institution.as_str())
                .size(typography::BODY)
                .style(styles::text::accent),
        )
        .push(Text::new(entry.description.as_str()).size(typography::BODY))
        .push(achievements)
        .into()
}

/// Circular placeholder carrying the profile initials.
fn build_avatar<'a, M: 'a>(profile: &'a Profile) -> Element<'a, M> {
    Container::new(Text::new(initials(&profile.name)).size(typography::TITLE_LG))
        .width(Length::Fixed(sizing::PROFILE_IMAGE / 2.0))
        .height(Length::Fixed(sizing::PROFILE_IMAGE / 2.0))
        .center_x(Length::Fixed(sizing::PROFILE_IMAGE / 2.0))
        .center_y(Length::Fixed(sizing::PROFILE_IMAGE / 2.0))
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().primary.weak.color.into()),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn build_detail_line<'a, M: 'a>(label: &'a str, value: &'a str) -> Element<'a, M> {
    Row::new()
        .spacing(spacing::XS)
        .push(
            Text::new(label)
                .size(typography::CAPTION)
                .style(styles::text::muted),
        )
        .push(Text::new(value).size(typography::BODY))
        .into()
}

fn build_card<'a, M: 'a>(content: Element<'a, M>) -> Element<'a, M> {
    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

/// Social profiles that are present, with their display names.
fn social_links(profile: &Profile) -> impl Iterator<Item = (&'static str, &str)> {
    let links = &profile.social_links;
    [
        ("GitHub", links.github.as_deref()),
        ("LinkedIn", links.linkedin.as_deref()),
        ("Twitter", links.twitter.as_deref()),
    ]
    .into_iter()
    .filter_map(|(name, url)| url.map(|url| (name, url)))
}

/// First letter of up to two words, uppercased.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::fallback_profile;

    #[test]
    fn initials_take_two_words() {
        assert_eq!(initials("yuta hamasaki"), "YH");
        assert_eq!(initials("Ada"), "A");
        assert_eq!(initials("  "), "");
    }

    #[test]
    fn fallback_profile_lists_present_social_links() {
        let profile = fallback_profile();
        let names: Vec<&str> = social_links(&profile).map(|(name, _)| name).collect();
        assert_eq!(names, ["GitHub", "LinkedIn"]);
    }
}
