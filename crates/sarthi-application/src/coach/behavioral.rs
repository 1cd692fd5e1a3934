//! Simulated STAR-method feedback for behavioral interview answers.

use sarthi_core::config::SimulationConfig;
use sarthi_core::error::{Result, SarthiError};
use serde::{Deserialize, Serialize};

use crate::simulate::latency;

/// Practice prompts offered for behavioral rounds.
pub const BEHAVIORAL_QUESTIONS: [&str; 3] = [
    "Tell me about a time you had a conflict with a teammate.",
    "Describe a situation where you had to meet a tight deadline.",
    "Tell me about your most challenging technical problem.",
];

/// Situation, Task, Action, Result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarAnswer {
    pub situation: String,
    pub task: String,
    pub action: String,
    pub result: String,
}

impl StarAnswer {
    fn missing_part(&self) -> Option<&'static str> {
        [
            ("situation", &self.situation),
            ("task", &self.task),
            ("action", &self.action),
            ("result", &self.result),
        ]
        .into_iter()
        .find(|(_, text)| text.trim().is_empty())
        .map(|(name, _)| name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarFeedback {
    /// Out of 10
    pub score: u8,
    pub verdict: String,
    pub strengths: Vec<String>,
    pub improvement: String,
}

#[derive(Debug, Clone)]
pub struct BehavioralCoach {
    simulation: SimulationConfig,
}

impl BehavioralCoach {
    pub fn new(simulation: SimulationConfig) -> Self {
        Self { simulation }
    }

    /// Evaluates a STAR answer. Every part must be filled in.
    pub async fn evaluate(&self, answer: &StarAnswer) -> Result<StarFeedback> {
        if let Some(part) = answer.missing_part() {
            return Err(SarthiError::invalid_input(format!("{part} is empty")));
        }
        latency(self.simulation.behavioral_delay()).await;
        tracing::debug!("Behavioral answer evaluated");

        Ok(StarFeedback {
            score: 8,
            verdict: "Strong Answer".to_string(),
            strengths: vec![
                "Clear definition of the problem in Situation.".to_string(),
                "Action section uses \"I\" instead of \"We\", showing personal ownership."
                    .to_string(),
            ],
            improvement: "Your Result lacks quantitative metrics. Try to add numbers. \
                          For example, instead of \"the query became faster\", say \
                          \"the query latency dropped by 45% (from 200ms to 110ms)\"."
                .to_string(),
        })
    }
}
