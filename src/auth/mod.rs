//! Member session gate for the protected pages.
//!
//! Implements constant-time comparison to mitigate timing attacks.

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use subtle::ConstantTimeEq;

use crate::errors::AppError;

/// Header carrying the member session token.
pub const SESSION_HEADER: &str = "x-session-token";

pub const DIRECTORY_SIGN_IN: &str = "Sign in to view the team members directory";
pub const MEMBER_SIGN_IN: &str = "Sign in to view member details";

/// Body returned instead of a gated page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInPrompt {
    pub success: bool,
    pub error: SignInDetails,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInDetails {
    pub code: &'static str,
    pub message: String,
    pub sign_in_required: bool,
}

/// Gate layer function: the wrapped handler only runs for a valid session.
///
/// Without a configured secret nobody is authenticated.
pub async fn member_gate(
    session_secret: Option<String>,
    message_to_sign_in: &'static str,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = session_secret else {
        return sign_in_response(message_to_sign_in);
    };

    let provided = request
        .headers()
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .or_else(|| {
            request
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.strip_prefix("Bearer "))
        })
        .map(str::to_string);

    match provided {
        Some(token) if constant_time_compare(&token, &expected) => next.run(request).await,
        _ => {
            tracing::debug!(path = %request.uri().path(), "Blocked unauthenticated member request");
            sign_in_response(message_to_sign_in)
        }
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// The 401 a gated route answers with.
pub fn sign_in_response(message: &str) -> Response {
    let err = AppError::Unauthorized(message.to_string());
    let body = SignInPrompt {
        success: false,
        error: SignInDetails {
            code: err.error_code(),
            message: err.message(),
            sign_in_required: true,
        },
    };

    (err.status_code(), Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, middleware, routing::get, Router};
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };
    use tower::ServiceExt;

    fn gated(secret: Option<&str>, hits: Arc<AtomicUsize>) -> Router {
        let secret = secret.map(str::to_string);
        Router::new()
            .route(
                "/members",
                get(move || {
                    let hits = hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        "directory"
                    }
                }),
            )
            .route_layer(middleware::from_fn(move |req, next| {
                member_gate(secret.clone(), DIRECTORY_SIGN_IN, req, next)
            }))
    }

    fn request(token: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().uri("/members");
        if let Some(token) = token {
            builder = builder.header(SESSION_HEADER, token);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_valid_session_runs_handler() {
        let hits = Arc::new(AtomicUsize::new(0));
        let resp = gated(Some("s3cret"), hits.clone())
            .oneshot(request(Some("s3cret")))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_bearer_session_accepted() {
        let hits = Arc::new(AtomicUsize::new(0));
        let req = axum::http::Request::builder()
            .uri("/members")
            .header(header::AUTHORIZATION, "Bearer s3cret")
            .body(Body::empty())
            .unwrap();
        let resp = gated(Some("s3cret"), hits).oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_session_never_runs_handler() {
        let hits = Arc::new(AtomicUsize::new(0));
        let resp = gated(Some("s3cret"), hits.clone())
            .oneshot(request(None))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_wrong_session_rejected() {
        let hits = Arc::new(AtomicUsize::new(0));
        let resp = gated(Some("s3cret"), hits.clone())
            .oneshot(request(Some("guess")))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unconfigured_gate_stays_closed() {
        let hits = Arc::new(AtomicUsize::new(0));
        let resp = gated(None, hits.clone())
            .oneshot(request(Some("anything")))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("test-key-123", "test-key-123"));
        assert!(!constant_time_compare("test-key-123", "test-key-124"));
        assert!(!constant_time_compare("short", "much-longer-key"));
        assert!(!constant_time_compare("", "not-empty"));
    }
}
