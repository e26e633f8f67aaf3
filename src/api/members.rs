//! Member directory endpoints. Mounted behind the session gate.

use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::models::TeamMember;
use crate::views::search_members;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct MembersQuery {
    /// Matched against name and role, ignoring case.
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembersPage {
    pub query: String,
    pub total: usize,
    pub members: Vec<TeamMember>,
}

/// GET /api/members - List members, optionally searched.
pub async fn list_members(
    State(state): State<AppState>,
    Query(params): Query<MembersQuery>,
) -> ApiResult<MembersPage> {
    let members = state.crud.get_all::<TeamMember>().await?.items;
    let total = members.len();
    let members = search_members(members, &params.q);

    success(MembersPage {
        query: params.q,
        total,
        members,
    })
}

/// GET /api/members/:id - Get a single member.
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<TeamMember> {
    success(state.crud.get_by_id::<TeamMember>(&id).await?)
}
