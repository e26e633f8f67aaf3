//! Generic collection endpoints over the CRUD layer.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use super::{success, ApiResult};
use crate::auth::{sign_in_response, DIRECTORY_SIGN_IN, MEMBER_SIGN_IN};
use crate::errors::AppError;
use crate::models::{Collection, ItemList};
use crate::AppState;

/// GET /api/collections/:collection - Every record of a collection.
pub async fn list_collection(
    State(state): State<AppState>,
    Path(collection): Path<String>,
) -> Result<Response, AppError> {
    // An encoded name can route here while decoding to a gated collection
    if collection.parse::<Collection>()? == Collection::TeamMembers {
        return Ok(sign_in_response(DIRECTORY_SIGN_IN));
    }
    Ok(success(state.crud.get_all_in(&collection).await?).into_response())
}

/// GET /api/collections/:collection/:id - One record of a collection.
pub async fn get_collection_item(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    if collection.parse::<Collection>()? == Collection::TeamMembers {
        return Ok(sign_in_response(MEMBER_SIGN_IN));
    }
    Ok(success(state.crud.get_by_id_in(&collection, &id).await?).into_response())
}

// Team members are routed separately so the session gate covers them.

/// GET /api/collections/teammembers
pub async fn list_team_member_records(State(state): State<AppState>) -> ApiResult<ItemList<Value>> {
    success(state.crud.get_all_in(Collection::TeamMembers.as_str()).await?)
}

/// GET /api/collections/teammembers/:id
pub async fn get_team_member_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Value> {
    success(
        state
            .crud
            .get_by_id_in(Collection::TeamMembers.as_str(), &id)
            .await?,
    )
}
