// SPDX-License-Identifier: MPL-2.0
//! Tech stack shown in the portfolio.

/// Heading of a tech category. Resolved to a localized label by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Frontend,
    Backend,
    Styling,
    Tools,
}

/// A single technology with a self-assessed skill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent (0-100).
    pub level: u8,
}

impl Skill {
    const fn new(name: &'static str, level: u8) -> Self {
        Self { name, level }
    }

    /// Level as a 0.0-1.0 fraction, suitable for progress bars.
    #[must_use]
    pub fn fraction(self) -> f32 {
        f32::from(self.level.min(100)) / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechCategory {
    pub kind: CategoryKind,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

pub const CATEGORIES: [TechCategory; 4] = [
    TechCategory {
        kind: CategoryKind::Frontend,
        icon: "🎨",
        skills: &[
            Skill::new("React", 75),
            Skill::new("Next.js", 75),
            Skill::new("Astro", 65),
            Skill::new("TypeScript", 65),
            Skill::new("Javascript", 65),
        ],
    },
    TechCategory {
        kind: CategoryKind::Backend,
        icon: "⚡",
        skills: &[
            Skill::new("Node.js", 70),
            Skill::new("Express.js", 70),
            Skill::new("MongoDB", 75),
            Skill::new("PostgreSQL", 70),
            Skill::new("Supabase", 78),
            Skill::new("Firebase", 70),
            Skill::new("MicroCMS", 88),
        ],
    },
    TechCategory {
        kind: CategoryKind::Styling,
        icon: "💅",
        skills: &[
            Skill::new("Tailwind CSS", 85),
            Skill::new("SCSS/Sass", 85),
            Skill::new("CSS3", 85),
            Skill::new("StoryBook", 40),
            Skill::new("GSAP", 40),
        ],
    },
    TechCategory {
        kind: CategoryKind::Tools,
        icon: "🛠️",
        skills: &[
            Skill::new("Git", 70),
            Skill::new("Vite", 75),
            Skill::new("Jest", 20),
            Skill::new("Figma", 50),
        ],
    },
];

pub const ADDITIONAL_SKILLS: [&str; 6] = [
    "Responsive Design",
    "Performance Optimization",
    "API Integration",
    "AI APIs",
    "Jamstack",
    "Communication",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_levels_are_percentages() {
        for category in CATEGORIES {
            for skill in category.skills {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn fraction_scales_level() {
        assert!((Skill::new("x", 88).fraction() - 0.88).abs() < f32::EPSILON);
    }

    #[test]
    fn every_category_kind_appears_once() {
        let kinds: Vec<_> = CATEGORIES.iter().map(|c| c.kind).collect();
        for kind in [
            CategoryKind::Frontend,
            CategoryKind::Backend,
            CategoryKind::Styling,
            CategoryKind::Tools,
        ] {
            assert_eq!(kinds.iter().filter(|k| **k == kind).count(), 1);
        }
    }
}
