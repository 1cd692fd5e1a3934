//! UserProfile domain model.
//!
//! Identity and goal attributes collected by onboarding and edited in settings.

use serde::{Deserialize, Serialize};

/// User profile domain model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub college: String,
    pub city: String,
    /// Study year label, e.g. "3rd Year"
    pub year: String,
    pub branch: String,
    pub target_role: String,
    /// Ordered by preference
    pub target_companies: Vec<String>,
    pub current_skills: Vec<String>,
    pub github_url: String,
    /// Two-letter initials shown in the avatar bubble
    pub avatar: String,
    /// Free-text preparation horizon, e.g. "3 months"
    pub timeline: String,
}

/// Partial update for [`UserProfile`].
///
/// Every `Some` field replaces the corresponding profile field; `None` leaves it
/// untouched. Lists are replaced wholesale, never merged element-wise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfilePatch {
    pub name: Option<String>,
    pub college: Option<String>,
    pub city: Option<String>,
    pub year: Option<String>,
    pub branch: Option<String>,
    pub target_role: Option<String>,
    pub target_companies: Option<Vec<String>>,
    pub current_skills: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub avatar: Option<String>,
    pub timeline: Option<String>,
}

impl UserProfilePatch {
    /// Returns true when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Merges the patch into `profile`.
    pub fn apply_to(self, profile: &mut UserProfile) {
        if let Some(value) = self.name {
            profile.name = value;
        }
        if let Some(value) = self.college {
            profile.college = value;
        }
        if let Some(value) = self.city {
            profile.city = value;
        }
        if let Some(value) = self.year {
            profile.year = value;
        }
        if let Some(value) = self.branch {
            profile.branch = value;
        }
        if let Some(value) = self.target_role {
            profile.target_role = value;
        }
        if let Some(value) = self.target_companies {
            profile.target_companies = value;
        }
        if let Some(value) = self.current_skills {
            profile.current_skills = value;
        }
        if let Some(value) = self.github_url {
            profile.github_url = value;
        }
        if let Some(value) = self.avatar {
            profile.avatar = value;
        }
        if let Some(value) = self.timeline {
            profile.timeline = value;
        }
    }
}

/// Builds avatar initials from a display name ("Vikas Sharma" -> "VS").
///
/// Takes the first letter of at most two words, upper-cased. Falls back to
/// "?" for a blank name.
pub fn avatar_initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        "?".to_string()
    } else {
        initials
    }
}
