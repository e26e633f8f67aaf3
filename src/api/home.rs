//! Home page endpoint.

use axum::extract::State;
use serde::Serialize;

use super::{success, ApiResult};
use crate::models::{Event, Project, TeamMember};
use crate::views::{
    featured, upcoming_preview, ProjectCard, TimelineStage, CAREER_TIMELINE,
    HOME_FEATURED_LIMIT, HOME_UPCOMING_LIMIT,
};
use crate::AppState;

/// Headline counts for the stats strip.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteStats {
    pub events: usize,
    pub projects: usize,
    pub members: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub upcoming_events: Vec<Event>,
    pub featured_projects: Vec<ProjectCard>,
    pub stats: SiteStats,
    pub career_timeline: &'static [TimelineStage],
}

/// GET /api/home - Upcoming events, featured projects and site stats.
pub async fn get_home(State(state): State<AppState>) -> ApiResult<HomePage> {
    let (events, projects, members) = tokio::try_join!(
        state.crud.get_all::<Event>(),
        state.crud.get_all::<Project>(),
        state.crud.get_all::<TeamMember>(),
    )?;

    let stats = SiteStats {
        events: events.items.len(),
        projects: projects.items.len(),
        members: members.items.len(),
    };

    success(HomePage {
        upcoming_events: upcoming_preview(events.items, HOME_UPCOMING_LIMIT),
        featured_projects: featured(projects.items, HOME_FEATURED_LIMIT)
            .into_iter()
            .map(ProjectCard::from)
            .collect(),
        stats,
        career_timeline: CAREER_TIMELINE,
    })
}
