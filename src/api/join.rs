//! Join form endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::MemberApplication;
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationReceipt {
    pub received: bool,
    pub name: String,
}

/// POST /api/join - Submit a member application.
pub async fn submit_application(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<ApplicationReceipt> {
    let Some(applications) = state.applications.as_ref() else {
        return Err(AppError::NotConfigured(
            "Member applications are not available right now".to_string(),
        ));
    };

    let Json(body) = payload?;
    let application = serde_json::from_value::<MemberApplication>(body)
        .map_err(|e| {
            tracing::debug!("Rejected application payload: {}", e);
            AppError::BadRequest(format!("Invalid application: {}", e))
        })?
        .normalized()?;
    applications.submit(&application).await?;

    success(ApplicationReceipt {
        received: true,
        name: application.name,
    })
}
