//! Reference-data endpoints (categories and cities)

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use crate::models::category::{Category, CreateCategoryRequest, UpdateCategoryRequest};
use crate::models::city::{City, CreateCityRequest, UpdateCityRequest};

use super::{current_session, ApiResult, AppState};

/// GET /api/categories - open to every authenticated user
pub async fn list_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<Vec<Category>>> {
    current_session(&state, &headers).await?;
    let categories = state.services.catalog_service.list_categories().await?;
    Ok(Json(categories))
}

/// POST /api/categories - admin only
pub async fn create_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateCategoryRequest>,
) -> ApiResult<impl IntoResponse> {
    let session = current_session(&state, &headers).await?;
    let category = state
        .services
        .catalog_service
        .create_category(&session, request)
        .await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/categories/{id} - admin only
pub async fn update_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(category_id): Path<Uuid>,
    Json(request): Json<UpdateCategoryRequest>,
) -> ApiResult<Json<Category>> {
    let session = current_session(&state, &headers).await?;
    let category = state
        .services
        .catalog_service
        .update_category(&session, category_id, request)
        .await?;
    Ok(Json(category))
}

/// DELETE /api/categories/{id} - admin only
pub async fn delete_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(category_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let session = current_session(&state, &headers).await?;
    state
        .services
        .catalog_service
        .delete_category(&session, category_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/cities - admin only
pub async fn list_cities(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<Vec<City>>> {
    let session = current_session(&state, &headers).await?;
    let cities = state.services.catalog_service.list_cities(&session).await?;
    Ok(Json(cities))
}

/// POST /api/cities - admin only
pub async fn create_city(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateCityRequest>,
) -> ApiResult<impl IntoResponse> {
    let session = current_session(&state, &headers).await?;
    let city = state
        .services
        .catalog_service
        .create_city(&session, request)
        .await?;
    Ok((StatusCode::CREATED, Json(city)))
}

/// PUT /api/cities/{id} - admin only
pub async fn update_city(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(city_id): Path<Uuid>,
    Json(request): Json<UpdateCityRequest>,
) -> ApiResult<Json<City>> {
    let session = current_session(&state, &headers).await?;
    let city = state
        .services
        .catalog_service
        .update_city(&session, city_id, request)
        .await?;
    Ok(Json(city))
}

/// DELETE /api/cities/{id} - admin only
pub async fn delete_city(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(city_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let session = current_session(&state, &headers).await?;
    state
        .services
        .catalog_service
        .delete_city(&session, city_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
