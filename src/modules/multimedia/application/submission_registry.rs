use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::watch;
use uuid::Uuid;

/// In-flight submissions and their overall progress, for polling clients.
#[derive(Clone, Default)]
pub struct SubmissionRegistry {
    entries: Arc<RwLock<HashMap<Uuid, watch::Receiver<u8>>>>,
}

impl SubmissionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracks `submission_id` until the returned guard is dropped. An id that
    /// is already in flight is refused and the existing entry is untouched.
    pub fn register(
        &self,
        submission_id: Uuid,
        progress: watch::Receiver<u8>,
    ) -> Result<SubmissionGuard, SubmissionInFlight> {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        match entries.entry(submission_id) {
            Entry::Occupied(_) => Err(SubmissionInFlight(submission_id)),
            Entry::Vacant(slot) => {
                slot.insert(progress);
                Ok(SubmissionGuard {
                    registry: self.clone(),
                    submission_id,
                })
            }
        }
    }

    pub fn progress(&self, submission_id: Uuid) -> Option<u8> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&submission_id)
            .map(|rx| *rx.borrow())
    }

    pub fn in_flight(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    fn remove(&self, submission_id: Uuid) {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&submission_id);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Submission {0} is already in flight")]
pub struct SubmissionInFlight(pub Uuid);

pub struct SubmissionGuard {
    registry: SubmissionRegistry,
    submission_id: Uuid,
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        self.registry.remove(self.submission_id);
    }
}
