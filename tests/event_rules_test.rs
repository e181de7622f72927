//! Membership rule tests
//!
//! Covers capacity enforcement, duplicate-join rejection, the
//! join-then-leave round trip, and status precedence.

mod helpers;

use helpers::*;
use proptest::prelude::*;
use sportsy::services::membership::{can_join, can_leave, is_owner, MembershipStatus};
use uuid::Uuid;

/// Set-union semantics as the store applies them: appending a present id
/// is a no-op.
fn apply_join(event: &mut sportsy::models::Event, user_id: Uuid) {
    if !event.participants.contains(&user_id) {
        event.participants.push(user_id);
    }
}

/// Set-difference semantics: removing an absent id is a no-op.
fn apply_leave(event: &mut sportsy::models::Event, user_id: Uuid) {
    event.participants.retain(|id| *id != user_id);
}

#[test]
fn join_fills_up_to_capacity_then_rejects() {
    let mut event = with_capacity(sample_event("Evening Cricket", "Cricket", "2024-06-15"), 2);
    event = with_participants(event, vec![user(10)]);

    assert!(can_join(&event, user(11)));
    apply_join(&mut event, user(11));

    // Capacity reached: the next candidate is turned away
    assert!(!can_join(&event, user(12)));
}

#[test]
fn duplicate_join_is_rejected() {
    let event = with_participants(
        sample_event("Morning Run", "Running", "2024-05-01"),
        vec![user(10)],
    );
    assert!(!can_join(&event, user(10)));
}

#[test]
fn leave_by_non_member_is_rejected_without_mutation() {
    let mut event = with_participants(
        sample_event("Morning Run", "Running", "2024-05-01"),
        vec![user(10)],
    );
    assert!(!can_leave(&event, user(99)));

    let before = event.participants.clone();
    apply_leave(&mut event, user(99));
    assert_eq!(event.participants, before);
}

#[test]
fn join_then_leave_restores_roster() {
    let mut event = with_participants(
        sample_event("Morning Run", "Running", "2024-05-01"),
        vec![user(10), user(11)],
    );
    let original = event.participants.clone();

    assert!(can_join(&event, user(12)));
    apply_join(&mut event, user(12));
    assert!(can_leave(&event, user(12)));
    apply_leave(&mut event, user(12));

    assert_eq!(event.participants, original);
}

#[test]
fn owner_never_shown_join_controls() {
    let mut event = with_capacity(sample_event("Finals", "Cricket", "2024-07-01"), 1);
    event.created_by = user(1);
    event = with_participants(event, vec![user(2)]);

    // Even at capacity the owner's status is Owner, not Full
    assert_eq!(MembershipStatus::of(&event, user(1)), MembershipStatus::Owner);
    assert!(is_owner(&event, user(1)));
    assert!(!is_owner(&event, user(2)));
}

#[test]
fn full_badge_only_for_outsiders() {
    let event = with_participants(
        with_capacity(sample_event("Finals", "Cricket", "2024-07-01"), 1),
        vec![user(2)],
    );

    assert_eq!(MembershipStatus::of(&event, user(2)), MembershipStatus::Joined);
    assert_eq!(MembershipStatus::of(&event, user(3)), MembershipStatus::Full);
}

proptest! {
    /// For any roster below capacity and any user not on it, join then leave
    /// restores the original roster exactly.
    #[test]
    fn prop_join_leave_round_trip(ids in proptest::collection::vec(0u128..50, 0..8), joiner in 50u128..60) {
        let mut participants: Vec<Uuid> = ids.into_iter().map(user).collect();
        participants.sort();
        participants.dedup();

        let mut event = with_participants(
            with_capacity(sample_event("Prop Event", "Running", "2024-01-01"), 100),
            participants.clone(),
        );

        prop_assert!(can_join(&event, user(joiner)));
        apply_join(&mut event, user(joiner));
        apply_leave(&mut event, user(joiner));
        prop_assert_eq!(event.participants, participants);
    }

    /// can_join is false exactly when the user is present or capacity is hit
    #[test]
    fn prop_can_join_matches_definition(ids in proptest::collection::vec(0u128..20, 0..10), candidate in 0u128..25, max in 1i32..12) {
        let mut participants: Vec<Uuid> = ids.into_iter().map(user).collect();
        participants.sort();
        participants.dedup();

        let event = with_participants(
            with_capacity(sample_event("Prop Event", "Running", "2024-01-01"), max),
            participants.clone(),
        );

        let expected = !participants.contains(&user(candidate))
            && participants.len() < max as usize;
        prop_assert_eq!(can_join(&event, user(candidate)), expected);
    }
}
