//! REST API module.
//!
//! One handler module per site page. Every handler reads through the shared
//! [`CrudService`](crate::store::CrudService) and shapes a page view model.

mod collections;
mod events;
mod home;
mod join;
mod members;
mod projects;
mod roadmap;
mod terminal;

pub use collections::*;
pub use events::*;
pub use home::*;
pub use join::*;
pub use members::*;
pub use projects::*;
pub use roadmap::*;
pub use terminal::*;

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;

/// Success response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}

/// Catch-all for unknown paths.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No page at {}", uri.path()))
}
