//! Members directory transforms.

use super::contains_ignore_case;
use crate::models::TeamMember;

/// Members whose name or role contains `query`, ignoring case.
pub fn search_members(members: Vec<TeamMember>, query: &str) -> Vec<TeamMember> {
    let query = query.trim();
    members
        .into_iter()
        .filter(|m| {
            contains_ignore_case(m.name.as_deref(), query)
                || contains_ignore_case(m.role.as_deref(), query)
        })
        .collect()
}
