//! Generic typed read layer over the content store.
//!
//! Every page goes through [`CrudService`]: `get_all` for list views and
//! `get_by_id` for detail views, parameterized only by the entity type.
//! Backends implement [`ContentStore`] and deal in raw JSON records; the
//! service owns decoding and the not-found contract.

mod http;

pub use http::*;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::{
    Collection, Entity, Event, ItemList, Project, RoadmapMilestone, TeamMember,
};

/// A source of content records keyed by collection.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Short name used in logs.
    fn backend_tag(&self) -> &'static str;

    /// All records of a collection, in store-native order.
    async fn list(&self, collection: Collection) -> Result<Vec<Value>, AppError>;

    /// The record with the given `_id`, or `None`.
    async fn find(&self, collection: Collection, id: &str) -> Result<Option<Value>, AppError>;
}

/// Typed CRUD read access shared by all pages.
///
/// Holds no cache and no retry policy; every call is a fresh round trip.
#[derive(Clone)]
pub struct CrudService {
    store: Arc<dyn ContentStore>,
}

impl CrudService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    pub fn backend_tag(&self) -> &'static str {
        self.store.backend_tag()
    }

    /// Fetch every record of `T`'s collection.
    ///
    /// A single malformed record fails the whole call.
    pub async fn get_all<T: Entity>(&self) -> Result<ItemList<T>, AppError> {
        let collection = T::COLLECTION;
        let raw = self.store.list(collection).await?;
        tracing::debug!(
            backend = self.store.backend_tag(),
            %collection,
            count = raw.len(),
            "Fetched collection"
        );

        let items = raw
            .into_iter()
            .map(|value| decode::<T>(collection, value))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ItemList { items })
    }

    /// Fetch one record of `T`'s collection by `_id`.
    pub async fn get_by_id<T: Entity>(&self, id: &str) -> Result<T, AppError> {
        let collection = T::COLLECTION;
        if id.trim().is_empty() {
            return Err(AppError::Validation("Record id is required".to_string()));
        }

        let value = self
            .store
            .find(collection, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No {} record with id {}", collection, id)))?;

        let record = decode::<T>(collection, value)?;
        if record.id() != id {
            return Err(AppError::MalformedRecord(format!(
                "Store returned {} record {} for id {}",
                collection,
                record.id(),
                id
            )));
        }

        Ok(record)
    }

    /// `get_all` keyed by a collection name, re-encoded as JSON.
    pub async fn get_all_in(&self, name: &str) -> Result<ItemList<Value>, AppError> {
        let items = match name.parse::<Collection>()? {
            Collection::Events => to_values(self.get_all::<Event>().await?.items)?,
            Collection::Projects => to_values(self.get_all::<Project>().await?.items)?,
            Collection::RoadmapMilestones => {
                to_values(self.get_all::<RoadmapMilestone>().await?.items)?
            }
            Collection::TeamMembers => to_values(self.get_all::<TeamMember>().await?.items)?,
        };
        Ok(ItemList { items })
    }

    /// `get_by_id` keyed by a collection name, re-encoded as JSON.
    pub async fn get_by_id_in(&self, name: &str, id: &str) -> Result<Value, AppError> {
        let value = match name.parse::<Collection>()? {
            Collection::Events => serde_json::to_value(self.get_by_id::<Event>(id).await?),
            Collection::Projects => serde_json::to_value(self.get_by_id::<Project>(id).await?),
            Collection::RoadmapMilestones => {
                serde_json::to_value(self.get_by_id::<RoadmapMilestone>(id).await?)
            }
            Collection::TeamMembers => {
                serde_json::to_value(self.get_by_id::<TeamMember>(id).await?)
            }
        };
        value.map_err(|e| AppError::Internal(format!("Failed to encode record: {}", e)))
    }
}

fn decode<T: Entity>(collection: Collection, value: Value) -> Result<T, AppError> {
    let id = value
        .get("_id")
        .and_then(Value::as_str)
        .unwrap_or("<missing _id>")
        .to_string();

    serde_json::from_value(value).map_err(|e| {
        tracing::warn!(%collection, %id, "Rejected malformed record: {}", e);
        AppError::MalformedRecord(format!("Malformed {} record {}: {}", collection, id, e))
    })
}

fn to_values<T: Entity>(items: Vec<T>) -> Result<Vec<Value>, AppError> {
    items
        .into_iter()
        .map(|item| {
            serde_json::to_value(item)
                .map_err(|e| AppError::Internal(format!("Failed to encode record: {}", e)))
        })
        .collect()
}
