//! Event API endpoints.

use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::models::Event;
use crate::views::{filter_events, sort_newest_first, EventFilter};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    /// `all`, `upcoming` or `past`.
    pub filter: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsPage {
    pub filter: EventFilter,
    pub events: Vec<Event>,
}

/// GET /api/events - Events, newest first.
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<EventsQuery>,
) -> ApiResult<EventsPage> {
    let filter = match params.filter.as_deref() {
        Some(raw) => raw.parse::<EventFilter>()?,
        None => EventFilter::All,
    };

    let events = state.crud.get_all::<Event>().await?.items;
    let events = filter_events(sort_newest_first(events), filter);

    success(EventsPage { filter, events })
}

/// GET /api/events/:id - Get a single event.
pub async fn get_event(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Event> {
    success(state.crud.get_by_id::<Event>(&id).await?)
}
