//! Session metrics.
//!
//! Counters describing how a contact form session went, reported once when
//! the session ends.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters for one contact form session.
///
/// Cloning shares the underlying counters.
#[derive(Debug, Clone)]
pub struct SessionMetrics {
    submissions_accepted: Arc<AtomicU64>,
    submissions_rejected: Arc<AtomicU64>,
    phone_edits_rejected: Arc<AtomicU64>,
    notices_posted: Arc<AtomicU64>,
}

impl SessionMetrics {
    /// Create a zeroed tracker.
    pub fn new() -> Self {
        Self {
            submissions_accepted: Arc::new(AtomicU64::new(0)),
            submissions_rejected: Arc::new(AtomicU64::new(0)),
            phone_edits_rejected: Arc::new(AtomicU64::new(0)),
            notices_posted: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track the result of a submit.
    pub fn track_submission(&self, accepted: bool) {
        if accepted {
            self.submissions_accepted.fetch_add(1, Ordering::Relaxed);
        } else {
            self.submissions_rejected.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Track a phone edit refused by the entry filter.
    pub fn track_phone_edit_rejected(&self) {
        self.phone_edits_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Track a posted notice.
    pub fn track_notice(&self) {
        self.notices_posted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn submissions_accepted(&self) -> u64 {
        self.submissions_accepted.load(Ordering::Relaxed)
    }

    pub fn submissions_rejected(&self) -> u64 {
        self.submissions_rejected.load(Ordering::Relaxed)
    }

    pub fn phone_edits_rejected(&self) -> u64 {
        self.phone_edits_rejected.load(Ordering::Relaxed)
    }

    pub fn notices_posted(&self) -> u64 {
        self.notices_posted.load(Ordering::Relaxed)
    }

    /// Share of submits that were rejected (0.0 to 1.0).
    pub fn rejection_rate(&self) -> f64 {
        let rejected = self.submissions_rejected() as f64;
        let total = (self.submissions_accepted() + self.submissions_rejected()) as f64;

        if total == 0.0 {
            0.0
        } else {
            rejected / total
        }
    }

    /// Human-readable summary of all counters.
    pub fn summary(&self) -> String {
        format!(
            "Session Summary:\n\
             Contacts Added: {}\n\
             Submissions Rejected: {} ({:.2}% rejection rate)\n\
             Phone Edits Rejected: {}\n\
             Notices Posted: {}",
            self.submissions_accepted(),
            self.submissions_rejected(),
            self.rejection_rate() * 100.0,
            self.phone_edits_rejected(),
            self.notices_posted(),
        )
    }

    /// Emit the counters as one structured log event.
    pub fn log_summary(&self) {
        tracing::info!(
            submissions_accepted = self.submissions_accepted(),
            submissions_rejected = self.submissions_rejected(),
            phone_edits_rejected = self.phone_edits_rejected(),
            notices_posted = self.notices_posted(),
            rejection_rate = self.rejection_rate(),
            "Session finished"
        );
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
