//! Short-lived user-facing messages.
//!
//! Posting a notice is fire-and-forget: the poster pushes it onto an
//! unbounded queue and carries on, while a [`NoticeHost`] task shows queued
//! notices one after another through a [`NoticePresenter`].

pub mod host;

pub use host::{NoticeHost, NoticePresenter};

use std::fmt;
use tokio::sync::mpsc;

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A contact was accepted and added to the list.
    ContactAdded { name: String },
    /// A submit was rejected by validation.
    InvalidDetails,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContactAdded { name } => write!(f, "Contact Added: {}", name),
            Self::InvalidDetails => write!(f, "Please enter valid details."),
        }
    }
}

/// Create a connected sender/receiver pair.
pub fn notice_channel() -> (NoticeSender, NoticeReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (NoticeSender { tx }, NoticeReceiver { rx })
}

/// Posting half of the notice queue.
#[derive(Debug, Clone)]
pub struct NoticeSender {
    tx: mpsc::UnboundedSender<Notice>,
}

impl NoticeSender {
    /// Queue a notice. Never blocks; a notice posted after the host has
    /// gone away is dropped.
    pub fn post(&self, notice: Notice) {
        tracing::debug!(notice = %notice, "Posting notice");
        if let Err(mpsc::error::SendError(notice)) = self.tx.send(notice) {
            tracing::warn!(notice = %notice, "Notice host is gone, dropping notice");
        }
    }
}

/// Receiving half of the notice queue.
#[derive(Debug)]
pub struct NoticeReceiver {
    rx: mpsc::UnboundedReceiver<Notice>,
}

impl NoticeReceiver {
    /// Wait for the next notice. `None` once every sender is dropped and
    /// the queue is drained.
    pub async fn recv(&mut self) -> Option<Notice> {
        self.rx.recv().await
    }

    /// Take the next queued notice without waiting.
    pub fn try_recv(&mut self) -> Option<Notice> {
        self.rx.try_recv().ok()
    }

    /// Drain every notice currently queued.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }
}
