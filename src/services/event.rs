//! Event service implementation
//!
//! This service owns the event lifecycle: role-scoped listing, creation,
//! editing, deletion, and the join/leave flow. Every mutation is validated
//! through the membership rule engine before it is forwarded to the store;
//! rejections are outcomes, not errors. A failed store write leaves the
//! persisted roster untouched and the caller re-lists to resynchronize.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::database::repositories::EventRepository;
use crate::models::event::{CreateEventRequest, Event, UpdateEventRequest};
use crate::services::membership;
use crate::services::pipeline::{self, EventQuery};
use crate::session::Session;
use crate::utils::errors::{Result, SportsyError};
use crate::utils::logging;

/// Result of a join attempt after rule validation
#[derive(Debug, Clone)]
pub enum JoinOutcome {
    Joined(Event),
    AlreadyJoined,
    Full,
}

/// Result of a leave attempt after rule validation
#[derive(Debug, Clone)]
pub enum LeaveOutcome {
    Left(Event),
    NotJoined,
}

#[derive(Debug, Clone)]
pub struct EventService {
    event_repository: EventRepository,
}

impl EventService {
    pub fn new(event_repository: EventRepository) -> Self {
        Self { event_repository }
    }

    /// All events, unfiltered (full scan)
    pub async fn list_all(&self) -> Result<Vec<Event>> {
        self.event_repository.list().await
    }

    /// All events narrowed and ordered by the caller's query
    pub async fn browse(&self, query: &EventQuery) -> Result<Vec<Event>> {
        let events = self.event_repository.list().await?;
        Ok(pipeline::view(events, query))
    }

    /// The dashboard event set for a session: admins see every event,
    /// regular users see only events they created.
    pub async fn list_for_dashboard(
        &self,
        session: &Session,
        query: &EventQuery,
    ) -> Result<Vec<Event>> {
        let events = if session.is_admin() {
            self.event_repository.list().await?
        } else {
            self.event_repository.list_by_creator(session.user_id).await?
        };
        Ok(pipeline::view(events, query))
    }

    /// Events the session's user has joined
    pub async fn list_joined(&self, session: &Session, query: &EventQuery) -> Result<Vec<Event>> {
        let events = self.event_repository.list_joined(session.user_id).await?;
        Ok(pipeline::view(events, query))
    }

    /// Create a new event owned by the session's user
    pub async fn create(&self, session: &Session, request: CreateEventRequest) -> Result<Event> {
        request.validate().map_err(SportsyError::InvalidInput)?;

        let event = self
            .event_repository
            .create(request, session.user_id)
            .await?;
        logging::log_event_action(event.id, "create", session.user_id, None);
        Ok(event)
    }

    /// Edit an event; only the creator may edit
    pub async fn update(
        &self,
        session: &Session,
        event_id: Uuid,
        request: UpdateEventRequest,
    ) -> Result<Event> {
        request.validate().map_err(SportsyError::InvalidInput)?;

        let event = self.get(event_id).await?;
        if !membership::is_owner(&event, session.user_id) {
            warn!(user_id = %session.user_id, event_id = %event_id, "Edit denied: not the creator");
            return Err(SportsyError::PermissionDenied(
                "Only the event creator can edit this event".to_string(),
            ));
        }

        let updated = self.event_repository.update(event_id, request).await?;
        logging::log_event_action(event_id, "update", session.user_id, None);
        Ok(updated)
    }

    /// Delete an event; the creator or an admin may delete
    pub async fn delete(&self, session: &Session, event_id: Uuid) -> Result<()> {
        let event = self.get(event_id).await?;
        if !membership::is_owner(&event, session.user_id) && !session.is_admin() {
            warn!(user_id = %session.user_id, event_id = %event_id, "Delete denied");
            return Err(SportsyError::PermissionDenied(
                "Only the event creator or an admin can delete this event".to_string(),
            ));
        }

        self.event_repository.delete(event_id).await?;
        logging::log_event_action(event_id, "delete", session.user_id, None);
        Ok(())
    }

    /// Join an event. The capacity check runs on the freshly fetched snapshot
    /// and the store applies an idempotent set-insert; capacity itself is not
    /// re-checked inside the store write.
    pub async fn join(&self, session: &Session, event_id: Uuid) -> Result<JoinOutcome> {
        let event = self.get(event_id).await?;

        if !membership::can_join(&event, session.user_id) {
            let outcome = if event.participants.contains(&session.user_id) {
                debug!(user_id = %session.user_id, event_id = %event_id, "Join rejected: already a participant");
                JoinOutcome::AlreadyJoined
            } else {
                debug!(user_id = %session.user_id, event_id = %event_id, "Join rejected: event is full");
                JoinOutcome::Full
            };
            return Ok(outcome);
        }

        self.event_repository
            .add_participant(event_id, session.user_id)
            .await?;
        logging::log_event_action(event_id, "join", session.user_id, None);

        let refreshed = self.get(event_id).await?;
        Ok(JoinOutcome::Joined(refreshed))
    }

    /// Leave an event; leaving an event one never joined is a no-op outcome
    pub async fn leave(&self, session: &Session, event_id: Uuid) -> Result<LeaveOutcome> {
        let event = self.get(event_id).await?;

        if !membership::can_leave(&event, session.user_id) {
            debug!(user_id = %session.user_id, event_id = %event_id, "Leave rejected: not a participant");
            return Ok(LeaveOutcome::NotJoined);
        }

        self.event_repository
            .remove_participant(event_id, session.user_id)
            .await?;
        logging::log_event_action(event_id, "leave", session.user_id, None);

        let refreshed = self.get(event_id).await?;
        Ok(LeaveOutcome::Left(refreshed))
    }

    /// Point read; absent ids surface as a not-found error
    pub async fn get(&self, event_id: Uuid) -> Result<Event> {
        self.event_repository
            .find_by_id(event_id)
            .await?
            .ok_or(SportsyError::EventNotFound { event_id })
    }
}
