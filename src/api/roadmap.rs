//! Roadmap API endpoint.

use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::models::RoadmapMilestone;
use crate::views::{category_options, filter_by_category, sort_by_target_date, MilestoneCard, ALL};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RoadmapQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPage {
    pub categories: Vec<String>,
    pub selected: String,
    pub milestones: Vec<MilestoneCard>,
}

/// GET /api/roadmap - Milestones by target date, undated first.
pub async fn get_roadmap(
    State(state): State<AppState>,
    Query(params): Query<RoadmapQuery>,
) -> ApiResult<RoadmapPage> {
    let milestones = sort_by_target_date(state.crud.get_all::<RoadmapMilestone>().await?.items);
    let categories = category_options(&milestones);
    let selected = params.category.unwrap_or_else(|| ALL.to_string());

    let milestones = filter_by_category(milestones, Some(&selected))
        .into_iter()
        .map(MilestoneCard::from)
        .collect();

    success(RoadmapPage {
        categories,
        selected,
        milestones,
    })
}
