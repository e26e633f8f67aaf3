//! Career timeline shown on the home page.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StageStatus {
    Completed,
    InProgress,
    Planned,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStage {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub status: StageStatus,
}

pub const CAREER_TIMELINE: &[TimelineStage] = &[
    TimelineStage {
        id: "student",
        title: "Student",
        description: "Beginning your journey",
        details: &[
            "Learn fundamentals",
            "Join community",
            "Participate in discussions",
            "Build first projects",
        ],
        status: StageStatus::Completed,
    },
    TimelineStage {
        id: "contributor",
        title: "Contributor",
        description: "Making meaningful impact",
        details: &[
            "Submit pull requests",
            "Review code",
            "Mentor others",
            "Lead discussions",
        ],
        status: StageStatus::Completed,
    },
    TimelineStage {
        id: "architect",
        title: "Architect",
        description: "Designing solutions",
        details: &[
            "Design systems",
            "Lead projects",
            "Shape roadmap",
            "Influence direction",
        ],
        status: StageStatus::InProgress,
    },
    TimelineStage {
        id: "core-developer",
        title: "Core Developer",
        description: "Shaping the future",
        details: &[
            "Strategic decisions",
            "Community leadership",
            "Vision setting",
            "Legacy building",
        ],
        status: StageStatus::Planned,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_ids_unique() {
        let mut ids: Vec<&str> = CAREER_TIMELINE.iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), CAREER_TIMELINE.len());
    }

    #[test]
    fn test_status_wire_name() {
        let value = serde_json::to_value(StageStatus::InProgress).unwrap();
        assert_eq!(value, "in-progress");
    }
}
