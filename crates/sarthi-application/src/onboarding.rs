//! Onboarding form and its conversion into a profile update.

use sarthi_core::error::{Result, SarthiError};
use sarthi_core::profile::{UserProfilePatch, avatar_initials};
use serde::{Deserialize, Serialize};

/// What the five-step onboarding wizard collects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingForm {
    pub full_name: String,
    pub college: String,
    pub city: String,
    pub year: String,
    pub branch: String,
    pub skills: Vec<String>,
    /// Free-text skill typed next to the checklist
    pub custom_skill: String,
    pub target_role: String,
    pub target_companies: Vec<String>,
    pub timeline: String,
    pub github_url: String,
}

/// Splits a comma-separated list, trimming entries and dropping blanks.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn dedup_trimmed(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        let item = item.trim().to_string();
        if !item.is_empty() && !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

impl OnboardingForm {
    /// Converts the form into a profile patch.
    ///
    /// A name and a target role are required. Empty optional text fields leave
    /// the existing profile values alone.
    pub fn into_patch(self) -> Result<UserProfilePatch> {
        let name = self.full_name.trim().to_string();
        if name.is_empty() {
            return Err(SarthiError::invalid_input("full name is required"));
        }
        let target_role = self.target_role.trim().to_string();
        if target_role.is_empty() {
            return Err(SarthiError::invalid_input("target role is required"));
        }

        let non_empty = |value: String| {
            let value = value.trim().to_string();
            (!value.is_empty()).then_some(value)
        };
        let skills = dedup_trimmed(
            self.skills
                .into_iter()
                .chain(std::iter::once(self.custom_skill)),
        );
        let companies = dedup_trimmed(self.target_companies);

        Ok(UserProfilePatch {
            avatar: Some(avatar_initials(&name)),
            name: Some(name),
            college: non_empty(self.college),
            city: non_empty(self.city),
            year: non_empty(self.year),
            branch: non_empty(self.branch),
            target_role: Some(target_role),
            target_companies: (!companies.is_empty()).then_some(companies),
            current_skills: (!skills.is_empty()).then_some(skills),
            github_url: non_empty(self.github_url),
            timeline: non_empty(self.timeline),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> OnboardingForm {
        OnboardingForm {
            full_name: " Ananya Rao ".to_string(),
            college: "IIIT Kota".to_string(),
            target_role: "Frontend SDE".to_string(),
            skills: vec!["React".to_string(), "CSS".to_string(), "React".to_string()],
            custom_skill: "Figma".to_string(),
            target_companies: vec!["Swiggy".to_string(), " ".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_patch_from_form() {
        let patch = form().into_patch().unwrap();
        assert_eq!(patch.name.as_deref(), Some("Ananya Rao"));
        assert_eq!(patch.avatar.as_deref(), Some("AR"));
        assert_eq!(
            patch.current_skills,
            Some(vec!["React".to_string(), "CSS".to_string(), "Figma".to_string()])
        );
        assert_eq!(patch.target_companies, Some(vec!["Swiggy".to_string()]));
        assert!(patch.city.is_none());
        assert!(patch.timeline.is_none());
    }

    #[test]
    fn test_missing_required_fields() {
        let mut no_name = form();
        no_name.full_name = "  ".to_string();
        assert!(no_name.into_patch().unwrap_err().is_invalid_input());

        let mut no_role = form();
        no_role.target_role.clear();
        assert!(no_role.into_patch().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list("Flipkart, Razorpay,, Zerodha "),
            vec!["Flipkart", "Razorpay", "Zerodha"]
        );
        assert!(split_list(" , ").is_empty());
    }
}
