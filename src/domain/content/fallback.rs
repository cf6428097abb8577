// SPDX-License-Identifier: MPL-2.0
//! Static content shown before (or instead of) fetched CMS data.

use super::{Achievement, Education, ImageRef, Profile, Project, SocialLinks, Technology, Timestamp};
use chrono::DateTime;

/// 2024-01-01T00:00:00Z.
const FALLBACK_EPOCH_NANOS: i64 = 1_704_067_200 * 1_000_000_000;

fn fallback_timestamp() -> Timestamp {
    Timestamp::new(DateTime::from_timestamp_nanos(FALLBACK_EPOCH_NANOS))
}

/// Projects rendered when the CMS is unreachable or empty.
#[must_use]
pub fn fallback_projects() -> Vec<Project> {
    vec![Project {
        id: "1".into(),
        title: "E-Commerce Platform".into(),
        description: "A modern, responsive e-commerce platform built with Next.js and Stripe integration. Features include product catalog, shopping cart, user authentication, and payment processing.".into(),
        image: ImageRef::new("/modern-ecommerce-interface.png", "E-Commerce Platform"),
        technologies: vec![Technology {
            id: "technologies".into(),
            technologies: "Next.js".into(),
        }],
        live_url: Some("#".into()),
        github_url: Some("#".into()),
        featured: true,
        created_at: fallback_timestamp(),
        updated_at: fallback_timestamp(),
    }]
}

/// Profile rendered when the CMS is unreachable or returns an incomplete record.
#[must_use]
pub fn fallback_profile() -> Profile {
    Profile {
        id: "1".into(),
        name: "Frontend Developer".into(),
        title: "Frontend Engineer & Designer".into(),
        bio: "Data".into(),
        profile_image: ImageRef::new("/placeholder.svg", "Profile"),
        location: "New York, NY".into(),
        email: "hello@example.com".into(),
        social_links: SocialLinks {
            github: Some("https://github.com".into()),
            linkedin: Some("https://linkedin.com".into()),
            twitter: None,
        },
        created_at: fallback_timestamp(),
        updated_at: fallback_timestamp(),
    }
}

/// Education entries rendered when the CMS is unreachable or empty.
#[must_use]
pub fn fallback_education() -> Vec<Education> {
    vec![Education {
        id: "1".into(),
        degree: "test".into(),
        institution: "University of Technology".into(),
        year: "2018-2022".into(),
        description: "Specialized in Software Engineering and Web Development".into(),
        achievements: vec![
            Achievement {
                id: "achievements".into(),
                achievements: "Magna Cum Laude".into(),
            },
            Achievement {
                id: "achievements".into(),
                achievements: "Dean's List".into(),
            },
        ],
        created_at: fallback_timestamp(),
        updated_at: fallback_timestamp(),
    }]
}
