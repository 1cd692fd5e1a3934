//! Interview practice counters.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewPrepData {
    pub questions_attempted: u32,
    /// Solved question ids in submission order; may contain repeats
    pub questions_solved: Vec<String>,
    pub mock_sessions_completed: u32,
    pub weak_areas: Vec<String>,
    pub strong_areas: Vec<String>,
}

impl InterviewPrepData {
    /// Solved ids with repeats removed, first occurrence order.
    pub fn unique_solved_questions(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.questions_solved
            .iter()
            .map(String::as_str)
            .filter(|id| seen.insert(*id))
            .collect()
    }

    pub fn has_solved(&self, id: &str) -> bool {
        self.questions_solved.iter().any(|q| q == id)
    }
}
