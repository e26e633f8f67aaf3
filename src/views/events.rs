//! Events page transforms.

use std::cmp::Reverse;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::Event;

/// How many upcoming events the home page previews.
pub const HOME_UPCOMING_LIMIT: usize = 3;

/// The events page's three-way filter.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventFilter {
    #[default]
    All,
    Upcoming,
    Past,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Upcoming => event.is_upcoming,
            EventFilter::Past => !event.is_upcoming,
        }
    }
}

impl FromStr for EventFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(EventFilter::All),
            "upcoming" => Ok(EventFilter::Upcoming),
            "past" => Ok(EventFilter::Past),
            other => Err(AppError::Validation(format!(
                "Unknown event filter: {} (expected all, upcoming or past)",
                other
            ))),
        }
    }
}

/// Newest first; undated events sink to the end.
pub fn sort_newest_first(mut events: Vec<Event>) -> Vec<Event> {
    events.sort_by_key(|e| Reverse(e.event_date));
    events
}

pub fn filter_events(events: Vec<Event>, filter: EventFilter) -> Vec<Event> {
    events.into_iter().filter(|e| filter.matches(e)).collect()
}

/// The soonest upcoming events, oldest date first.
pub fn upcoming_preview(events: Vec<Event>, limit: usize) -> Vec<Event> {
    let mut upcoming = filter_events(events, EventFilter::Upcoming);
    upcoming.sort_by_key(|e| e.event_date);
    upcoming.truncate(limit);
    upcoming
}
