//! Shared test helpers and builders

use chrono::{NaiveDate, NaiveTime, Utc};
use sportsy::models::Event;
use uuid::Uuid;

/// Deterministic user id for readable assertions
pub fn user(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

/// Build an event with sensible defaults
pub fn sample_event(title: &str, category: &str, date: &str) -> Event {
    Event {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: format!("{} open to all", title),
        date: date.parse::<NaiveDate>().expect("valid date literal"),
        time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        location: "Community Ground".to_string(),
        category: category.to_string(),
        max_participants: 10,
        entry_fee: None,
        participants: vec![],
        created_by: user(1),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn with_capacity(mut event: Event, max_participants: i32) -> Event {
    event.max_participants = max_participants;
    event
}

pub fn with_participants(mut event: Event, participants: Vec<Uuid>) -> Event {
    event.participants = participants;
    event
}

pub fn with_entry_fee(mut event: Event, fee: &str) -> Event {
    event.entry_fee = Some(fee.to_string());
    event
}
