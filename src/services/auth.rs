//! Authentication and role-gating service
//!
//! Authentication itself is delegated to an external provider; this service
//! turns an already-verified user identity into an explicit `Session` and
//! answers role questions: which event subset a caller's dashboard shows and
//! which admin-only tabs are visible.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::database::repositories::UserRepository;
use crate::models::user::{CreateUserRequest, Role, UpdateUserRequest, UserProfile};
use crate::session::Session;
use crate::utils::errors::{Result, SportsyError};
use crate::utils::logging;

/// Which event subset a dashboard shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardScope {
    /// Admins see the full event collection
    AllEvents,
    /// Regular users see only events they created
    OwnEvents,
}

/// Dashboard tabs a role may see
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardTab {
    MyEvents,
    JoinedEvents,
    Categories,
    Cities,
}

#[derive(Debug, Clone)]
pub struct AuthService {
    user_repository: UserRepository,
}

impl AuthService {
    pub fn new(user_repository: UserRepository) -> Self {
        Self { user_repository }
    }

    /// Register a new user or return the existing profile for the email
    pub async fn register_or_get_user(
        &self,
        full_name: String,
        email: String,
        role: Role,
    ) -> Result<UserProfile> {
        if let Some(existing) = self.user_repository.find_by_email(&email).await? {
            debug!(user_id = %existing.id, "User already registered, returning existing profile");
            return Ok(existing);
        }

        let request = CreateUserRequest {
            full_name,
            email,
            role,
        };
        request.validate().map_err(SportsyError::InvalidInput)?;

        let profile = self.user_repository.create(request).await?;
        logging::log_user_action(profile.id, "register", None);
        Ok(profile)
    }

    /// Open a session for a verified user identity. The role is read from
    /// the stored profile once, here, and not re-read for the session's life.
    pub async fn open_session(&self, user_id: Uuid) -> Result<Session> {
        let profile = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(SportsyError::UserNotFound { user_id })?;

        Ok(Session::open(&profile))
    }

    /// Fetch the stored profile behind a session
    pub async fn profile(&self, session: &Session) -> Result<UserProfile> {
        self.user_repository
            .find_by_id(session.user_id)
            .await?
            .ok_or(SportsyError::UserNotFound {
                user_id: session.user_id,
            })
    }

    /// Update the profile behind a session
    pub async fn update_profile(
        &self,
        session: &Session,
        request: UpdateUserRequest,
    ) -> Result<UserProfile> {
        self.user_repository.update(session.user_id, request).await
    }

    /// Require the admin role or fail
    pub fn require_admin(&self, session: &Session) -> Result<()> {
        if !session.is_admin() {
            warn!(user_id = %session.user_id, "Admin access denied");
            return Err(SportsyError::PermissionDenied(
                "Admin role required".to_string(),
            ));
        }
        Ok(())
    }

    /// Which event subset the dashboard shows for a role
    pub fn dashboard_scope(role: Role) -> DashboardScope {
        match role {
            Role::Admin => DashboardScope::AllEvents,
            Role::User => DashboardScope::OwnEvents,
        }
    }

    /// Tabs visible on the dashboard for a role; reference-data tabs are
    /// admin-only.
    pub fn visible_tabs(role: Role) -> Vec<DashboardTab> {
        let mut tabs = vec![DashboardTab::MyEvents, DashboardTab::JoinedEvents];
        if role.is_admin() {
            tabs.push(DashboardTab::Categories);
            tabs.push(DashboardTab::Cities);
        }
        tabs
    }
}
