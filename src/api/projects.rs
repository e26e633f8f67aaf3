//! Project API endpoints.

use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::models::Project;
use crate::views::{filter_by_status, status_options, ProjectCard, ALL};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ProjectsQuery {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsPage {
    /// `"all"` followed by every status in use.
    pub statuses: Vec<String>,
    pub selected: String,
    pub projects: Vec<ProjectCard>,
}

/// GET /api/projects - Projects, optionally narrowed to one status.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectsQuery>,
) -> ApiResult<ProjectsPage> {
    let projects = state.crud.get_all::<Project>().await?.items;
    let statuses = status_options(&projects);
    let selected = params.status.unwrap_or_else(|| ALL.to_string());

    let projects = filter_by_status(projects, Some(&selected))
        .into_iter()
        .map(ProjectCard::from)
        .collect();

    success(ProjectsPage {
        statuses,
        selected,
        projects,
    })
}

/// GET /api/projects/:id - Get a single project with its technology tags.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ProjectCard> {
    let project = state.crud.get_by_id::<Project>(&id).await?;
    success(ProjectCard::from(project))
}
