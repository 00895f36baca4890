//! Background task that displays queued notices.

use super::{Notice, NoticeReceiver};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Something that can put a notice in front of the user.
#[async_trait]
pub trait NoticePresenter: Send + Sync {
    /// Start showing a notice.
    async fn show(&self, notice: &Notice);

    /// Stop showing a notice once its display time is over.
    async fn dismiss(&self, _notice: &Notice) {}
}

/// Shows notices one at a time, in the order they were posted.
///
/// A notice posted while another is visible waits behind it.
pub struct NoticeHost {
    presenter: Arc<dyn NoticePresenter>,
    display_for: Duration,
}

impl NoticeHost {
    /// Create a host that keeps each notice up for `display_for`.
    pub fn new(presenter: Arc<dyn NoticePresenter>, display_for: Duration) -> Self {
        Self {
            presenter,
            display_for,
        }
    }

    /// Display notices from `receiver` until every sender is dropped.
    pub async fn run(self, mut receiver: NoticeReceiver) {
        let mut shown = 0usize;
        while let Some(notice) = receiver.recv().await {
            self.presenter.show(&notice).await;
            if !self.display_for.is_zero() {
                tokio::time::sleep(self.display_for).await;
            }
            self.presenter.dismiss(&notice).await;
            shown += 1;
        }
        tracing::debug!(shown = shown, "Notice host stopped");
    }

    /// Run the host on a background task.
    pub fn spawn(self, receiver: NoticeReceiver) -> JoinHandle<()> {
        tokio::spawn(self.run(receiver))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::notice_channel;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingPresenter {
        events: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl NoticePresenter for RecordingPresenter {
        async fn show(&self, notice: &Notice) {
            self.events.lock().unwrap().push(format!("show {}", notice));
        }

        async fn dismiss(&self, notice: &Notice) {
            self.events.lock().unwrap().push(format!("dismiss {}", notice));
        }
    }

    #[tokio::test]
    async fn test_host_shows_notices_in_order() {
        let presenter = Arc::new(RecordingPresenter::default());
        let (sender, receiver) = notice_channel();
        let handle = NoticeHost::new(presenter.clone(), Duration::ZERO).spawn(receiver);

        sender.post(Notice::InvalidDetails);
        sender.post(Notice::ContactAdded {
            name: "Ada".to_string(),
        });
        drop(sender);
        handle.await.unwrap();

        let events = presenter.events.lock().unwrap().clone();
        assert_eq!(
            events,
            vec![
                "show Please enter valid details.",
                "dismiss Please enter valid details.",
                "show Contact Added: Ada",
                "dismiss Contact Added: Ada",
            ]
        );
    }

    #[tokio::test]
    async fn test_host_stops_when_senders_dropped() {
        let presenter = Arc::new(RecordingPresenter::default());
        let (sender, receiver) = notice_channel();
        drop(sender);

        NoticeHost::new(presenter.clone(), Duration::from_millis(5))
            .run(receiver)
            .await;
        assert!(presenter.events.lock().unwrap().is_empty());
    }
}
