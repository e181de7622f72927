//! Session context management
//!
//! Identity and role are carried in an explicitly passed session object
//! rather than process-wide state. A session is opened when the auth state
//! changes and closed on sign-out; the role is read once at open time and
//! treated as immutable for the session's duration.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::models::{Role, UserProfile};

/// An authenticated user's session
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub user_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Open a session from a stored profile (auth-state change)
    pub fn open(profile: &UserProfile) -> Self {
        info!(user_id = %profile.id, role = %profile.role, "Session opened");
        Self {
            user_id: profile.id,
            full_name: profile.full_name.clone(),
            email: profile.email.clone(),
            role: profile.role,
            started_at: Utc::now(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Tear down the session (sign-out)
    pub fn close(self) {
        info!(user_id = %self.user_id, "Session closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(role: Role) -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            full_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            role,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_session_carries_profile_identity() {
        let profile = profile(Role::User);
        let session = Session::open(&profile);
        assert_eq!(session.user_id, profile.id);
        assert_eq!(session.full_name, "Asha Rao");
        assert!(!session.is_admin());
    }

    #[test]
    fn test_admin_session() {
        let session = Session::open(&profile(Role::Admin));
        assert!(session.is_admin());
        session.close();
    }
}
