//! Roadmap page transforms.

use serde::Serialize;

use super::{facet_options, filter_by_facet};
use crate::models::{MilestoneProgress, RoadmapMilestone};

/// A milestone with its derived progress bucket.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneCard {
    #[serde(flatten)]
    pub milestone: RoadmapMilestone,
    pub progress: MilestoneProgress,
}

impl From<RoadmapMilestone> for MilestoneCard {
    fn from(milestone: RoadmapMilestone) -> Self {
        let progress = milestone.progress();
        Self {
            milestone,
            progress,
        }
    }
}

/// Ascending by target date. Undated milestones come first; ties keep store order.
pub fn sort_by_target_date(mut milestones: Vec<RoadmapMilestone>) -> Vec<RoadmapMilestone> {
    milestones.sort_by_key(|m| m.target_date);
    milestones
}

pub fn category_options(milestones: &[RoadmapMilestone]) -> Vec<String> {
    facet_options(milestones, |m| m.category.as_deref())
}

pub fn filter_by_category(
    milestones: Vec<RoadmapMilestone>,
    category: Option<&str>,
) -> Vec<RoadmapMilestone> {
    filter_by_facet(milestones, category, |m| m.category.as_deref())
}
