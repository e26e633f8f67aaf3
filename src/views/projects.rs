//! Projects page transforms.

use serde::Serialize;

use super::{facet_options, filter_by_facet};
use crate::models::Project;

/// How many projects the home page features.
pub const HOME_FEATURED_LIMIT: usize = 3;

/// A project together with its split technology tags.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    #[serde(flatten)]
    pub project: Project,
    pub technologies: Vec<String>,
}

impl From<Project> for ProjectCard {
    fn from(project: Project) -> Self {
        let technologies = project.technologies();
        Self {
            project,
            technologies,
        }
    }
}

pub fn status_options(projects: &[Project]) -> Vec<String> {
    facet_options(projects, |p| p.status.as_deref())
}

pub fn filter_by_status(projects: Vec<Project>, status: Option<&str>) -> Vec<Project> {
    filter_by_facet(projects, status, |p| p.status.as_deref())
}

/// The first projects in store order.
pub fn featured(mut projects: Vec<Project>, limit: usize) -> Vec<Project> {
    projects.truncate(limit);
    projects
}
