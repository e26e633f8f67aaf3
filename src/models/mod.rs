//! Data models for the Code Vimarsh site.
//!
//! Entity field names are the content store's wire contract (`_id`, `eventName`, ...).

mod application;
mod collection;
mod date;
mod event;
mod member;
mod project;
mod roadmap;

pub use application::*;
pub use collection::*;
pub use date::*;
pub use event::*;
pub use member::*;
pub use project::*;
pub use roadmap::*;

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

/// A typed record shape bound to one content store collection.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection the records of this type live in.
    const COLLECTION: Collection;

    /// The store-assigned identifier (`_id`).
    fn id(&self) -> &str;
}

/// Records returned by a list call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemList<T> {
    pub items: Vec<T>,
}

/// Boolean store fields may be missing or `null`; both read as `false`.
pub(crate) fn flag_or_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
