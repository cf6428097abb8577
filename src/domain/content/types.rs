// SPDX-License-Identifier: MPL-2.0
//! Content entities served by the headless CMS.
//!
//! Field names follow the service's camelCase JSON. Every non-`Option` field
//! is required: a record missing one fails to decode, and the loader treats
//! the whole response as absent rather than rendering it partially.

use super::Timestamp;
use serde::{Deserialize, Serialize};

/// An image reference (`{ url, alt? }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl ImageRef {
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: Some(alt.into()),
        }
    }
}

/// One entry of a project's repeated technology field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub id: String,
    pub technologies: String,
}

/// One entry of an education record's repeated achievement field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub achievements: String,
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: ImageRef,
    pub technologies: Vec<Technology>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// Technology labels in CMS order.
    pub fn technology_names(&self) -> impl Iterator<Item = &str> {
        self.technologies.iter().map(|t| t.technologies.as_str())
    }
}

/// Social profile links. All optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

/// The singleton profile record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub profile_image: ImageRef,
    pub location: String,
    pub email: String,
    pub social_links: SocialLinks,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An education entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub description: String,
    pub achievements: Vec<Achievement>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Education {
    /// Achievement labels in CMS order.
    pub fn achievement_names(&self) -> impl Iterator<Item = &str> {
        self.achievements.iter().map(|a| a.achievements.as_str())
    }
}

/// A blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub thumbnail: ImageRef,
    pub tags: Vec<String>,
    pub published_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECT_JSON: &str = r#"{
        "id": "p1",
        "title": "Portfolio",
        "description": "This site",
        "image": { "url": "https://images.example/p1.png", "alt": "Screenshot" },
        "technologies": [
            { "id": "t1", "technologies": "Next.js" },
            { "id": "t2", "technologies": "GSAP" }
        ],
        "githubUrl": "https://github.com/example/portfolio",
        "featured": true,
        "createdAt": "2024-02-01T10:00:00.000Z",
        "updatedAt": "2024-02-02T10:00:00.000Z",
        "publishedAt": "2024-02-01T10:00:00.000Z",
        "revisedAt": "2024-02-02T10:00:00.000Z"
    }"#;

    #[test]
    fn project_decodes_camel_case_and_ignores_unknown_fields() {
        let project: Project = serde_json::from_str(PROJECT_JSON).expect("valid project");
        assert_eq!(project.id, "p1");
        assert!(project.featured);
        assert_eq!(project.live_url, None);
        assert_eq!(
            project.github_url.as_deref(),
            Some("https://github.com/example/portfolio")
        );
        assert_eq!(
            project.technology_names().collect::<Vec<_>>(),
            vec!["Next.js", "GSAP"]
        );
    }

    #[test]
    fn project_missing_required_field_fails() {
        let mut value: serde_json::Value = serde_json::from_str(PROJECT_JSON).unwrap();
        value.as_object_mut().unwrap().remove("featured");
        assert!(serde_json::from_value::<Project>(value).is_err());
    }

    #[test]
    fn image_alt_is_optional() {
        let image: ImageRef = serde_json::from_str(r#"{ "url": "/a.png" }"#).unwrap();
        assert_eq!(image.alt, None);
    }

    #[test]
    fn profile_requires_nested_image_url() {
        let json = r#"{
            "id": "me", "name": "A", "title": "B", "bio": "C",
            "profileImage": { "alt": "no url" },
            "location": "Tokyo", "email": "a@b.co", "socialLinks": {},
            "createdAt": "2024-01-01", "updatedAt": "2024-01-01"
        }"#;
        assert!(serde_json::from_str::<Profile>(json).is_err());
    }

    #[test]
    fn education_lists_achievement_names() {
        let json = r#"{
            "id": "e1", "degree": "BSc", "institution": "Uni", "year": "2020",
            "description": "CS",
            "achievements": [{ "id": "a", "achievements": "Dean's List" }],
            "createdAt": "2024-01-01", "updatedAt": "2024-01-01"
        }"#;
        let education: Education = serde_json::from_str(json).unwrap();
        assert_eq!(
            education.achievement_names().collect::<Vec<_>>(),
            vec!["Dean's List"]
        );
    }
}
