// SPDX-License-Identifier: MPL-2.0
//! Page content with fallback composition.
//!
//! The page renders embedded fallback data from the first frame. Each fetch
//! result then replaces its own collection only when it carries something;
//! an empty list or a missing profile keeps what is already shown.
//!
//! Every load is tagged with a generation. Results from an older load are
//! dropped, so a slow response can never overwrite a newer one.

use crate::domain::content::{
    fallback_education, fallback_profile, fallback_projects, Education, Profile, Project,
};

/// Identifies one round of content fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Generation(u64);

#[derive(Debug, Clone)]
pub struct PageContent {
    generation: Generation,
    projects: Vec<Project>,
    profile: Profile,
    education: Vec<Education>,
    projects_loading: bool,
    about_loading: bool,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            generation: Generation::default(),
            projects: fallback_projects(),
            profile: fallback_profile(),
            education: fallback_education(),
            projects_loading: false,
            about_loading: false,
        }
    }
}

impl PageContent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new load and returns the tag its results must carry.
    pub fn begin_load(&mut self) -> Generation {
        self.generation = Generation(self.generation.0 + 1);
        self.projects_loading = true;
        self.about_loading = true;
        self.generation
    }

    /// Applies fetched projects. Returns `false` for a stale result.
    pub fn apply_projects(&mut self, generation: Generation, projects: Vec<Project>) -> bool {
        if generation != self.generation {
            tracing::debug!("dropping stale project result");
            return false;
        }
        self.projects_loading = false;
        if !projects.is_empty() {
            self.projects = projects;
        }
        true
    }

    /// Applies fetched profile and education. Returns `false` for a stale result.
    pub fn apply_about(
        &mut self,
        generation: Generation,
        profile: Option<Profile>,
        education: Vec<Education>,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!("dropping stale about result");
            return false;
        }
        self.about_loading = false;
        if let Some(profile) = profile {
            self.profile = profile;
        }
        if !education.is_empty() {
            self.education = education;
        }
        true
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn education(&self) -> &[Education] {
        &self.education
    }

    pub fn projects_loading(&self) -> bool {
        self.projects_loading
    }

    pub fn about_loading(&self) -> bool {
        self.about_loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::Timestamp;

    fn project(id: &str) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            ..fallback_projects().remove(0)
        }
    }

    #[test]
    fn starts_with_fallback_data() {
        let content = PageContent::new();
        assert_eq!(content.projects()[0].title, "E-Commerce Platform");
        assert_eq!(content.profile().name, "Frontend Developer");
        assert_eq!(content.profile().title, "Frontend Engineer & Designer");
        assert_eq!(content.education().len(), 1);
        assert!(!content.projects_loading());
    }

    #[test]
    fn fetched_projects_replace_fallback() {
        let mut content = PageContent::new();
        let generation = content.begin_load();

        assert!(content.apply_projects(generation, vec![project("a"), project("b")]));

        assert_eq!(content.projects().len(), 2);
        assert_eq!(content.projects()[0].id, "a");
        assert!(!content.projects_loading());
    }

    #[test]
    fn empty_projects_keep_fallback() {
        let mut content = PageContent::new();
        let generation = content.begin_load();

        content.apply_projects(generation, Vec::new());

        assert_eq!(content.projects(), fallback_projects().as_slice());
        assert!(!content.projects_loading());
    }

    #[test]
    fn empty_education_renders_single_fallback_entry() {
        let mut content = PageContent::new();
        let generation = content.begin_load();

        content.apply_about(generation, None, Vec::new());

        assert_eq!(content.education().len(), 1);
        assert_eq!(content.education()[0].degree, "test");
        assert_eq!(content.profile(), &fallback_profile());
    }

    #[test]
    fn collections_are_independent() {
        let mut content = PageContent::new();
        let generation = content.begin_load();
        let profile = Profile {
            name: "Fetched".to_string(),
            updated_at: Timestamp::parse("2024-05-01").unwrap(),
            ..fallback_profile()
        };

        content.apply_projects(generation, Vec::new());
        content.apply_about(generation, Some(profile), Vec::new());

        assert_eq!(content.profile().name, "Fetched");
        assert_eq!(content.projects(), fallback_projects().as_slice());
        assert_eq!(content.education()[0].degree, "test");
    }

    #[test]
    fn stale_results_are_dropped() {
        let mut content = PageContent::new();
        let first = content.begin_load();
        let second = content.begin_load();

        assert!(!content.apply_projects(first, vec![project("old")]));
        assert!(content.projects_loading());

        assert!(content.apply_projects(second, vec![project("new")]));
        assert_eq!(content.projects()[0].id, "new");
    }
}
