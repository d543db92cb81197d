//! Bounded in-memory toast queue rendered by the wizard screen.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Utc};

use super::sink::ToastSink;
use super::Toast;

/// Keeps the most recent toasts until they expire.
pub struct ToastQueue {
    toasts: Mutex<VecDeque<Toast>>,
    capacity: usize,
    ttl: Duration,
}

impl ToastQueue {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            toasts: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity: capacity.max(1),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Toast>> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of queued toasts, expired or not
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop expired toasts
    pub fn prune(&self, now: DateTime<Utc>) {
        let ttl = self.ttl;
        self.lock().retain(|toast| now - toast.created_at < ttl);
    }

    /// Toasts still alive at `now`, oldest first
    pub fn visible(&self, now: DateTime<Utc>) -> Vec<Toast> {
        self.lock()
            .iter()
            .filter(|toast| now - toast.created_at < self.ttl)
            .cloned()
            .collect()
    }

    /// Every queued toast, oldest first
    pub fn snapshot(&self) -> Vec<Toast> {
        self.lock().iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl ToastSink for ToastQueue {
    fn name(&self) -> &str {
        "screen"
    }

    fn push(&self, toast: &Toast) {
        let mut toasts = self.lock();
        while toasts.len() >= self.capacity {
            toasts.pop_front();
        }
        toasts.push_back(toast.clone());
    }
}
