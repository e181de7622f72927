//! User registration, profile, and dashboard metadata endpoints

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::models::user::{CreateUserRequest, UpdateUserRequest, UserProfile};
use crate::services::auth::{AuthService, DashboardScope, DashboardTab};

use super::{current_session, ApiResult, AppState};

/// What the caller's dashboard should show for their role
#[derive(Debug, Serialize)]
pub struct DashboardInfo {
    pub scope: DashboardScope,
    pub tabs: Vec<DashboardTab>,
}

/// POST /api/users, registration of a verified identity
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<impl IntoResponse> {
    let profile = state
        .services
        .auth_service
        .register_or_get_user(request.full_name, request.email, request.role)
        .await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /api/profile
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<UserProfile>> {
    let session = current_session(&state, &headers).await?;
    let profile = state.services.auth_service.profile(&session).await?;
    Ok(Json(profile))
}

/// PUT /api/profile
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserProfile>> {
    let session = current_session(&state, &headers).await?;
    let profile = state
        .services
        .auth_service
        .update_profile(&session, request)
        .await?;
    Ok(Json(profile))
}

/// GET /api/dashboard, role-gated view metadata
pub async fn dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<DashboardInfo>> {
    let session = current_session(&state, &headers).await?;
    Ok(Json(DashboardInfo {
        scope: AuthService::dashboard_scope(session.role),
        tabs: AuthService::visible_tabs(session.role),
    }))
}
