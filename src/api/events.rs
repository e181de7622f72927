//! Event endpoints
//!
//! Listings run the stored events through the filter-sort-search pipeline
//! and annotate each record with the caller's membership status.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::models::event::{CreateEventRequest, Event, UpdateEventRequest};
use crate::services::event::{JoinOutcome, LeaveOutcome};
use crate::services::membership::MembershipStatus;
use crate::services::pipeline::EventQuery;
use crate::session::Session;

use super::{current_session, ApiError, ApiResult, AppState};

/// An event as rendered for a particular caller
#[derive(Debug, Serialize)]
pub struct EventView {
    #[serde(flatten)]
    pub event: Event,
    pub status: MembershipStatus,
    pub participant_count: usize,
}

impl EventView {
    fn for_session(event: Event, session: &Session) -> Self {
        let status = MembershipStatus::of(&event, session.user_id);
        let participant_count = event.participant_count();
        Self {
            event,
            status,
            participant_count,
        }
    }
}

fn render(events: Vec<Event>, session: &Session) -> Vec<EventView> {
    events
        .into_iter()
        .map(|event| EventView::for_session(event, session))
        .collect()
}

/// GET /api/events - browse every event, filtered and sorted
pub async fn list_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EventQuery>,
) -> ApiResult<Json<Vec<EventView>>> {
    let session = current_session(&state, &headers).await?;
    let events = state.services.event_service.browse(&query).await?;
    Ok(Json(render(events, &session)))
}

/// GET /api/dashboard/events - role-scoped event set
pub async fn dashboard_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EventQuery>,
) -> ApiResult<Json<Vec<EventView>>> {
    let session = current_session(&state, &headers).await?;
    let events = state
        .services
        .event_service
        .list_for_dashboard(&session, &query)
        .await?;
    Ok(Json(render(events, &session)))
}

/// GET /api/dashboard/joined - events the caller has joined
pub async fn joined_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EventQuery>,
) -> ApiResult<Json<Vec<EventView>>> {
    let session = current_session(&state, &headers).await?;
    let events = state
        .services
        .event_service
        .list_joined(&session, &query)
        .await?;
    Ok(Json(render(events, &session)))
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateEventRequest>,
) -> ApiResult<impl IntoResponse> {
    let session = current_session(&state, &headers).await?;
    let event = state
        .services
        .event_service
        .create(&session, request)
        .await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/events/{id}
pub async fn update_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<Uuid>,
    Json(request): Json<UpdateEventRequest>,
) -> ApiResult<Json<Event>> {
    let session = current_session(&state, &headers).await?;
    let event = state
        .services
        .event_service
        .update(&session, event_id, request)
        .await?;
    Ok(Json(event))
}

/// DELETE /api/events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let session = current_session(&state, &headers).await?;
    state
        .services
        .event_service
        .delete(&session, event_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/events/{id}/join
pub async fn join_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<Uuid>,
) -> ApiResult<Json<EventView>> {
    let session = current_session(&state, &headers).await?;
    match state
        .services
        .event_service
        .join(&session, event_id)
        .await?
    {
        JoinOutcome::Joined(event) => Ok(Json(EventView::for_session(event, &session))),
        JoinOutcome::AlreadyJoined => Err(ApiError::Conflict(
            "You have already joined this event".to_string(),
        )),
        JoinOutcome::Full => Err(ApiError::Conflict("This event is full".to_string())),
    }
}

/// POST /api/events/{id}/leave
pub async fn leave_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<Uuid>,
) -> ApiResult<Json<EventView>> {
    let session = current_session(&state, &headers).await?;
    match state
        .services
        .event_service
        .leave(&session, event_id)
        .await?
    {
        LeaveOutcome::Left(event) => Ok(Json(EventView::for_session(event, &session))),
        LeaveOutcome::NotJoined => Err(ApiError::Conflict(
            "You have not joined this event".to_string(),
        )),
    }
}
