//! Roadmap milestone model matching the `roadmapmilestones` collection.

use serde::{Deserialize, Serialize};

use super::{Collection, Entity, StoreDate};

/// A planned or delivered roadmap milestone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapMilestone {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<StoreDate>,
    #[serde(rename = "_updatedDate", default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<StoreDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<StoreDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<StoreDate>,
}

/// Progress bucket derived from a milestone's free-text status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum MilestoneProgress {
    Completed,
    InProgress,
    Planned,
}

impl MilestoneProgress {
    pub fn from_status(status: Option<&str>) -> Self {
        match status.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("completed") => MilestoneProgress::Completed,
            Some("in progress") => MilestoneProgress::InProgress,
            _ => MilestoneProgress::Planned,
        }
    }
}

impl RoadmapMilestone {
    pub fn progress(&self) -> MilestoneProgress {
        MilestoneProgress::from_status(self.status.as_deref())
    }
}

impl Entity for RoadmapMilestone {
    const COLLECTION: Collection = Collection::RoadmapMilestones;

    fn id(&self) -> &str {
        &self.id
    }
}
