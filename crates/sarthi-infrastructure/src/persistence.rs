//! Background persistence of store snapshots.
//!
//! The persister subscribes to a store's watch channel and writes the latest
//! snapshot through a [`StateRepository`]. It is best-effort: a failed write
//! is logged and the store keeps running with its in-memory state.

use sarthi_core::state::repository::StateRepository;
use sarthi_core::{StoreAction, StoreSnapshot};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// What a persister did before its store went away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersistReport {
    pub saved: usize,
    pub cleared: usize,
    pub failed: usize,
    /// Revision of the last snapshot handled, successful or not
    pub last_revision: u64,
}

pub struct SnapshotPersister;

impl SnapshotPersister {
    /// Spawns the persister on the current runtime.
    ///
    /// The task ends once the store (the channel's sender) is dropped, after
    /// writing any snapshot it has not handled yet. Snapshots published while
    /// a write is in flight are coalesced into one write of the newest state.
    pub fn spawn<R>(repo: Arc<R>, changes: watch::Receiver<StoreSnapshot>) -> JoinHandle<PersistReport>
    where
        R: StateRepository + ?Sized + 'static,
    {
        tokio::spawn(Self::run(repo, changes))
    }

    async fn run<R>(repo: Arc<R>, mut changes: watch::Receiver<StoreSnapshot>) -> PersistReport
    where
        R: StateRepository + ?Sized,
    {
        let mut report = PersistReport::default();

        while changes.changed().await.is_ok() {
            let snapshot = changes.borrow_and_update().clone();
            Self::persist(repo.as_ref(), &snapshot, &mut report).await;
        }

        tracing::debug!(
            saved = report.saved,
            cleared = report.cleared,
            failed = report.failed,
            "Snapshot persister stopped"
        );
        report
    }

    async fn persist<R>(repo: &R, snapshot: &StoreSnapshot, report: &mut PersistReport)
    where
        R: StateRepository + ?Sized,
    {
        // the initial state came from storage (or is the demo state)
        if snapshot.is_initial() {
            return;
        }

        let revision = snapshot.revision;
        let result = match snapshot.action {
            StoreAction::Reset => repo.clear().await.map(|()| report.cleared += 1),
            _ => repo
                .save_state(snapshot.state.as_ref().clone())
                .await
                .map(|()| report.saved += 1),
        };
        report.last_revision = revision;

        match result {
            Ok(()) => {
                tracing::debug!(revision, action = %snapshot.action, "Persisted snapshot");
            }
            Err(e) => {
                report.failed += 1;
                tracing::warn!(
                    revision,
                    action = %snapshot.action,
                    error = %e,
                    "Failed to persist snapshot; continuing with in-memory state"
                );
            }
        }
    }
}
