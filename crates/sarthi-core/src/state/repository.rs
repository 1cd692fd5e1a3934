//! State repository trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::state::model::AppState;

/// Durable storage for the single application state record.
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// Saves the app state to storage, replacing any previous record.
    async fn save_state(&self, state: AppState) -> Result<()>;

    /// Loads the stored record, or `None` when nothing has been saved yet.
    async fn load_state(&self) -> Result<Option<AppState>>;

    /// Removes the stored record. Loading afterwards returns `None`.
    async fn clear(&self) -> Result<()>;
}
