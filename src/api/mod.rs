//! HTTP API surface
//!
//! Thin JSON layer over the services. Callers present an already-verified
//! user identity in the `x-user-id` header; verifying that identity is the
//! external auth provider's job, not this crate's.

pub mod catalog;
pub mod events;
pub mod profile;

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::database::{connection, DatabasePool};
use crate::services::ServiceFactory;
use crate::session::Session;
use crate::utils::errors::SportsyError;

/// Shared application state for request handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<ServiceFactory>,
    pub pool: DatabasePool,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/users", post(profile::register))
        .route("/api/profile", get(profile::get_profile).put(profile::update_profile))
        .route("/api/dashboard", get(profile::dashboard))
        .route("/api/dashboard/events", get(events::dashboard_events))
        .route("/api/dashboard/joined", get(events::joined_events))
        .route("/api/events", get(events::list_events).post(events::create_event))
        .route(
            "/api/events/{id}",
            axum::routing::put(events::update_event).delete(events::delete_event),
        )
        .route("/api/events/{id}/join", post(events::join_event))
        .route("/api/events/{id}/leave", post(events::leave_event))
        .route(
            "/api/categories",
            get(catalog::list_categories).post(catalog::create_category),
        )
        .route(
            "/api/categories/{id}",
            axum::routing::put(catalog::update_category).delete(catalog::delete_category),
        )
        .route("/api/cities", get(catalog::list_cities).post(catalog::create_city))
        .route(
            "/api/cities/{id}",
            axum::routing::put(catalog::update_city).delete(catalog::delete_city),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET /health - liveness plus a database round trip
async fn health(State(state): State<AppState>) -> ApiResult<Json<serde_json::Value>> {
    connection::health_check(&state.pool).await.map_err(|_| {
        ApiError::Internal(SportsyError::ServiceUnavailable(
            "database unreachable".to_string(),
        ))
    })?;
    Ok(Json(json!({ "status": "ok" })))
}

/// API-level error with an HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    Conflict(String),
    Internal(SportsyError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<SportsyError> for ApiError {
    fn from(err: SportsyError) -> Self {
        ApiError::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Internal(err) => {
                let status = match &err {
                    SportsyError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                    SportsyError::PermissionDenied(_) => StatusCode::FORBIDDEN,
                    SportsyError::UserNotFound { .. }
                    | SportsyError::EventNotFound { .. }
                    | SportsyError::CategoryNotFound { .. }
                    | SportsyError::CityNotFound { .. } => StatusCode::NOT_FOUND,
                    SportsyError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    tracing::error!(error = %err, "Request failed");
                }
                (status, err.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Open a session for the identity presented in the request headers
pub async fn current_session(state: &AppState, headers: &HeaderMap) -> ApiResult<Session> {
    let raw = headers
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing x-user-id header".to_string()))?;

    let user_id = Uuid::parse_str(raw)
        .map_err(|_| ApiError::Unauthorized("Invalid x-user-id header".to_string()))?;

    let session = state.services.auth_service.open_session(user_id).await?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        let response =
            ApiError::Internal(SportsyError::InvalidInput("bad title".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::Internal(SportsyError::PermissionDenied(
            "admin role required".to_string(),
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = ApiError::Internal(SportsyError::EventNotFound {
            event_id: Uuid::new_v4(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::Internal(SportsyError::ServiceUnavailable(
            "database unreachable".to_string(),
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = ApiError::Conflict("event is full".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = ApiError::Unauthorized("missing header".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
