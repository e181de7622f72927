//! Filter-sort-search pipeline
//!
//! Pure, deterministic view transformation over an event collection: a
//! category filter and a free-text search narrow the set, then exactly one
//! stable sort orders it. Filtering always runs before sorting; the two
//! filters AND together.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::models::Event;

/// Category selector matching every event
pub const ALL_CATEGORIES: &str = "all";

/// Closed set of comparators selectable by a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Ascending by calendar date
    #[default]
    Date,
    /// Ascending, case-insensitive lexicographic by title
    Title,
    /// Descending by roster size (most subscribed first)
    Participants,
    /// Ascending by parsed fee; unparsable or missing fees sort last
    EntryFee,
}

/// Query applied to an event collection
#[derive(Debug, Clone, Deserialize)]
pub struct EventQuery {
    /// Free-text search term; empty means no text filtering
    #[serde(default)]
    pub term: String,
    /// Category name, or `"all"` to skip the category filter
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub sort: SortKey,
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

impl Default for EventQuery {
    fn default() -> Self {
        Self {
            term: String::new(),
            category: default_category(),
            sort: SortKey::default(),
        }
    }
}

impl EventQuery {
    fn matches(&self, event: &Event) -> bool {
        if self.category != ALL_CATEGORIES && event.category != self.category {
            return false;
        }
        if !self.term.is_empty() {
            let term = self.term.to_lowercase();
            let hit = event.title.to_lowercase().contains(&term)
                || event.description.to_lowercase().contains(&term)
                || event.location.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }
        true
    }
}

/// Produce the filtered, ordered view of `events` for `query`.
///
/// The sort is stable: equal-key events keep their relative input order.
pub fn view(events: Vec<Event>, query: &EventQuery) -> Vec<Event> {
    let mut filtered: Vec<Event> = events
        .into_iter()
        .filter(|event| query.matches(event))
        .collect();

    match query.sort {
        SortKey::Date => filtered.sort_by(|a, b| a.date.cmp(&b.date)),
        SortKey::Title => {
            filtered.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
        SortKey::Participants => {
            filtered.sort_by(|a, b| b.participants.len().cmp(&a.participants.len()))
        }
        SortKey::EntryFee => filtered.sort_by(|a, b| compare_fees(a, b)),
    }

    filtered
}

/// Total order over fees: parsed values ascending, unparsable/missing last.
/// Never panics on malformed input.
fn compare_fees(a: &Event, b: &Event) -> Ordering {
    match (fee_value(a), fee_value(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn fee_value(event: &Event) -> Option<f64> {
    event
        .entry_fee
        .as_deref()?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Utc};
    use uuid::Uuid;

    fn event(title: &str, category: &str, date: &str) -> Event {
        Event {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: format!("{} for everyone", title),
            date: date.parse().unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            location: "City Ground".to_string(),
            category: category.to_string(),
            max_participants: 20,
            entry_fee: None,
            participants: vec![],
            created_by: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn titles(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let result = view(vec![], &EventQuery::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_category_filter_exact_match() {
        let events = vec![
            event("Morning Run", "Running", "2024-03-01"),
            event("Evening Cricket", "Cricket", "2024-03-02"),
        ];
        let query = EventQuery {
            category: "Running".to_string(),
            ..Default::default()
        };
        let result = view(events, &query);
        assert_eq!(titles(&result), vec!["Morning Run"]);
    }

    #[test]
    fn test_category_filter_is_case_sensitive() {
        let events = vec![event("Morning Run", "Running", "2024-03-01")];
        let query = EventQuery {
            category: "running".to_string(),
            ..Default::default()
        };
        assert!(view(events, &query).is_empty());
    }

    #[test]
    fn test_term_search_over_title_description_location() {
        let mut by_location = event("Pickup Football", "Football", "2024-03-01");
        by_location.location = "Cricket Stadium Annex".to_string();
        by_location.description = "Casual game".to_string();

        let events = vec![
            event("Evening Cricket", "Cricket", "2024-03-01"),
            event("Football Match", "Football", "2024-03-02"),
            by_location,
        ];
        let query = EventQuery {
            term: "CRICKET".to_string(),
            ..Default::default()
        };
        let result = view(events, &query);
        assert_eq!(titles(&result), vec!["Evening Cricket", "Pickup Football"]);
    }

    #[test]
    fn test_no_match_yields_empty_not_error() {
        let events = vec![event("Evening Cricket", "Cricket", "2024-03-01")];
        let query = EventQuery {
            term: "chess".to_string(),
            ..Default::default()
        };
        assert!(view(events, &query).is_empty());
    }

    #[test]
    fn test_filters_and_together() {
        let events = vec![
            event("Evening Cricket", "Cricket", "2024-03-01"),
            event("Cricket Trials", "Running", "2024-03-02"),
        ];
        let query = EventQuery {
            term: "cricket".to_string(),
            category: "Running".to_string(),
            ..Default::default()
        };
        let result = view(events, &query);
        assert_eq!(titles(&result), vec!["Cricket Trials"]);
    }

    #[test]
    fn test_date_sort_stable_on_ties() {
        let events = vec![
            event("B", "Running", "2024-01-02"),
            event("A", "Running", "2024-01-02"),
            event("C", "Running", "2024-01-01"),
        ];
        let query = EventQuery {
            sort: SortKey::Date,
            ..Default::default()
        };
        let result = view(events, &query);
        assert_eq!(titles(&result), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_title_sort_case_insensitive() {
        let events = vec![
            event("banana cup", "Running", "2024-01-01"),
            event("Apple Open", "Running", "2024-01-01"),
        ];
        let query = EventQuery {
            sort: SortKey::Title,
            ..Default::default()
        };
        let result = view(events, &query);
        assert_eq!(titles(&result), vec!["Apple Open", "banana cup"]);
    }

    #[test]
    fn test_participants_sort_descending() {
        let mut a = event("A", "Running", "2024-01-01");
        let mut b = event("B", "Running", "2024-01-01");
        a.participants = vec![Uuid::new_v4()];
        b.participants = vec![Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        let query = EventQuery {
            sort: SortKey::Participants,
            ..Default::default()
        };
        let result = view(vec![a, b], &query);
        assert_eq!(titles(&result), vec!["B", "A"]);
    }

    #[test]
    fn test_entry_fee_unparsable_sorts_last() {
        let mut free = event("Free", "Running", "2024-01-01");
        let mut cheap = event("Cheap", "Running", "2024-01-01");
        let mut garbled = event("Garbled", "Running", "2024-01-01");
        let mut missing = event("Missing", "Running", "2024-01-01");
        free.entry_fee = Some("0".to_string());
        cheap.entry_fee = Some("5.50".to_string());
        garbled.entry_fee = Some("ten dollars".to_string());
        missing.entry_fee = None;

        let query = EventQuery {
            sort: SortKey::EntryFee,
            ..Default::default()
        };
        let result = view(vec![garbled, cheap, missing, free], &query);
        assert_eq!(titles(&result), vec!["Free", "Cheap", "Garbled", "Missing"]);
    }

    #[test]
    fn test_view_is_idempotent() {
        let events = vec![
            event("B", "Running", "2024-01-02"),
            event("A", "Cricket", "2024-01-02"),
            event("C", "Running", "2024-01-01"),
        ];
        let query = EventQuery {
            category: "Running".to_string(),
            sort: SortKey::Date,
            ..Default::default()
        };
        let once = view(events, &query);
        let twice = view(once.clone(), &query);
        assert_eq!(titles(&once), titles(&twice));
    }

    #[test]
    fn test_query_deserializes_camel_case_sort() {
        let query: EventQuery = serde_json::from_str(r#"{"sort":"entryFee"}"#).unwrap();
        assert_eq!(query.sort, SortKey::EntryFee);
        assert_eq!(query.category, ALL_CATEGORIES);
        assert!(query.term.is_empty());

        assert!(serde_json::from_str::<EventQuery>(r#"{"sort":"price"}"#).is_err());
    }
}
