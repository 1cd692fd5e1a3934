//! Simulated coach chat.

use sarthi_core::config::SimulationConfig;
use sarthi_core::error::{Result, SarthiError};
use sarthi_core::profile::UserProfile;
use serde::{Deserialize, Serialize};

use crate::simulate::latency;

pub const DSA_HINT: &str = "Think about what data structure allows O(1) lookup... \
                            Consider storing complements as you iterate.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    fn ai(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Ai,
            content: content.into(),
        }
    }
}

/// Canned coaching replies. Conversations are not stored.
#[derive(Debug, Clone)]
pub struct CoachChat {
    simulation: SimulationConfig,
}

impl CoachChat {
    pub fn new(simulation: SimulationConfig) -> Self {
        Self { simulation }
    }

    /// Answers any question with a profile-aware suggestion.
    pub async fn ask(&self, profile: &UserProfile, question: &str) -> Result<ChatMessage> {
        if question.trim().is_empty() {
            return Err(SarthiError::invalid_input("message is empty"));
        }
        latency(self.simulation.chat_delay()).await;
        tracing::debug!(question = %question.trim(), "Coach chat reply");
        Ok(ChatMessage::ai(coach_reply(profile)))
    }

    /// Answers a request for a hint on a DSA question.
    pub async fn hint(&self, question: &str) -> Result<ChatMessage> {
        if question.trim().is_empty() {
            return Err(SarthiError::invalid_input("message is empty"));
        }
        latency(self.simulation.chat_delay()).await;
        Ok(ChatMessage::ai(DSA_HINT))
    }
}

fn coach_reply(profile: &UserProfile) -> String {
    let companies = match profile.target_companies.as_slice() {
        [] => "your target companies".to_string(),
        [only] => only.clone(),
        [first, second, ..] => format!("{first} & {second}"),
    };
    format!(
        "Great question! Based on your profile targeting **{}** roles at {}, \
         I'd suggest focusing on your weak areas first. Since I'm running in demo mode, \
         connect a model provider for real-time AI coaching.",
        profile.target_role, companies
    )
}
