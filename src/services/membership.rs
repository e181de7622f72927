//! Membership rule engine
//!
//! Pure decision logic for the event roster: whether a join or leave is
//! permitted, ownership, and the derived display status of an event for a
//! given user. The engine never errors; it returns booleans and enums only.
//! Store-level failures are the caller's concern.
//!
//! The capacity check here runs against the caller's locally-held snapshot.
//! The store guarantees only idempotent set-insertion, not a conditional
//! insert bounded by capacity, so two near-simultaneous joins against an
//! almost-full event can both pass. Best effort, not a linearizable guarantee.

use uuid::Uuid;

use crate::models::Event;

/// Whether `user_id` may join `event`: rejected on a duplicate join or when
/// capacity is reached.
pub fn can_join(event: &Event, user_id: Uuid) -> bool {
    if event.participants.contains(&user_id) {
        return false;
    }
    if event.is_full() {
        return false;
    }
    true
}

/// Whether `user_id` may leave `event`: true iff currently a participant.
pub fn can_leave(event: &Event, user_id: Uuid) -> bool {
    event.participants.contains(&user_id)
}

/// Strict equality between the event's creator and the acting user
pub fn is_owner(event: &Event, user_id: Uuid) -> bool {
    event.created_by == user_id
}

/// Derived display state of an event for a user.
///
/// Precedence when several apply: Owner > Joined > Full > Joinable.
/// Ownership and membership both suppress the Full state even at capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    Owner,
    Joined,
    Full,
    Joinable,
}

impl MembershipStatus {
    pub fn of(event: &Event, user_id: Uuid) -> Self {
        if is_owner(event, user_id) {
            MembershipStatus::Owner
        } else if event.participants.contains(&user_id) {
            MembershipStatus::Joined
        } else if event.is_full() {
            MembershipStatus::Full
        } else {
            MembershipStatus::Joinable
        }
    }
}
