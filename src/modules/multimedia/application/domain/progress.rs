//! Byte-level upload progress for one submission.
//!
//! Every file owns one slot, addressed by index. A slot holds the highest
//! percent reported for its file, and the overall value is recomputed from
//! all slots, so events may arrive in any order. Transfers map onto 0..=95;
//! 100 is only published by [`ProgressTracker::complete`] once the records
//! are stored.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

pub const TRANSFER_SHARE_PERCENT: u64 = 95;

/// round(loaded / total * 100), half-up. A zero-byte file is complete.
pub fn file_percent(loaded: u64, total: u64) -> u8 {
    if total == 0 {
        return 100;
    }
    let loaded = loaded.min(total) as u128;
    let total = total as u128;
    ((loaded * 200 + total) / (total * 2)) as u8
}

/// round(mean(percents) * 0.95), half-up, in integer arithmetic.
pub fn overall_percent(percents: &[u8]) -> u8 {
    if percents.is_empty() {
        return 0;
    }
    let n = percents.len() as u64;
    let sum: u64 = percents.iter().map(|p| u64::from((*p).min(100))).sum();
    ((sum * TRANSFER_SHARE_PERCENT * 2 + n * 100) / (n * 200)) as u8
}

struct Inner {
    slots: Vec<AtomicU8>,
    overall: watch::Sender<u8>,
}

#[derive(Clone)]
pub struct ProgressTracker {
    inner: Arc<Inner>,
}

impl ProgressTracker {
    pub fn new(file_count: usize) -> Self {
        let (overall, _) = watch::channel(0u8);
        Self {
            inner: Arc::new(Inner {
                slots: (0..file_count).map(|_| AtomicU8::new(0)).collect(),
                overall,
            }),
        }
    }

    pub fn file_count(&self) -> usize {
        self.inner.slots.len()
    }

    /// `None` when `index` is out of range.
    pub fn slot(&self, index: usize) -> Option<ProgressSlot> {
        (index < self.inner.slots.len()).then(|| ProgressSlot {
            inner: Arc::clone(&self.inner),
            index,
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<u8> {
        self.inner.overall.subscribe()
    }

    pub fn current(&self) -> u8 {
        *self.inner.overall.borrow()
    }

    pub fn file_percents(&self) -> Vec<u8> {
        self.inner.percents()
    }

    /// Publishes 100. Call only after the database write succeeded.
    pub fn complete(&self) {
        self.inner.overall.send_replace(100);
    }
}

impl Inner {
    fn percents(&self) -> Vec<u8> {
        self.slots.iter().map(|s| s.load(Ordering::Acquire)).collect()
    }

    fn publish(&self) {
        let next = overall_percent(&self.percents());
        self.overall.send_if_modified(|current| {
            if next > *current {
                *current = next;
                true
            } else {
                false
            }
        });
    }
}

/// Write handle for a single file's progress.
#[derive(Clone)]
pub struct ProgressSlot {
    inner: Arc<Inner>,
    index: usize,
}

impl ProgressSlot {
    /// A slot not attached to any observer.
    pub fn detached() -> Self {
        Self {
            inner: ProgressTracker::new(1).inner,
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Keeps the highest percent seen; a stale event cannot lower the slot.
    pub fn report(&self, loaded: u64, total: u64) {
        let percent = file_percent(loaded, total);
        self.inner.slots[self.index].fetch_max(percent, Ordering::AcqRel);
        self.inner.publish();
    }
}
