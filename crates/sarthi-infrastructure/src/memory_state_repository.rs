//! In-memory snapshot repository.
//!
//! Used when no data directory is wanted (`--ephemeral`) and by tests that
//! need to observe or fail writes.

use sarthi_core::error::{Result, SarthiError};
use sarthi_core::state::model::AppState;
use sarthi_core::state::repository::StateRepository;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct InMemoryStateRepository {
    state: Arc<Mutex<Option<AppState>>>,
    saves: Arc<AtomicUsize>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository that already holds `state`.
    pub fn with_state(state: AppState) -> Self {
        Self {
            state: Arc::new(Mutex::new(Some(state))),
            ..Self::default()
        }
    }

    /// Makes subsequent `save_state` and `clear` calls fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(SarthiError::io("storage is read-only"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl StateRepository for InMemoryStateRepository {
    async fn save_state(&self, state: AppState) -> Result<()> {
        self.check_writable()?;
        *self.state.lock().await = Some(state);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn load_state(&self) -> Result<Option<AppState>> {
        Ok(self.state.lock().await.clone())
    }

    async fn clear(&self) -> Result<()> {
        self.check_writable()?;
        *self.state.lock().await = None;
        Ok(())
    }
}
