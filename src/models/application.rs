//! Member application submitted through the join form.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A request to join the community.
///
/// Insert-only: written to the application table, never read back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MemberApplication {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_handle: Option<String>,
}

impl MemberApplication {
    /// Trim every field and check the required ones.
    pub fn normalized(self) -> Result<Self, AppError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }

        let email = self.email.trim().to_string();
        if !looks_like_email(&email) {
            return Err(AppError::Validation("A valid email is required".to_string()));
        }

        Ok(Self {
            name,
            email,
            tech_stack: non_blank(self.tech_stack),
            github_handle: non_blank(self.github_handle)
                .map(|h| h.trim_start_matches('@').to_string()),
        })
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
