use async_trait::async_trait;
use contact_manager::notice::{Notice, NoticePresenter};
use std::sync::{Arc, Mutex};

/// Notice presenter that remembers what it was asked to show.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingPresenter {
    shown: Arc<Mutex<Vec<Notice>>>,
    dismissed: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices shown so far, in order.
    pub fn shown(&self) -> Vec<Notice> {
        self.shown.lock().unwrap().clone()
    }

    /// Notice texts shown so far, in order.
    pub fn shown_text(&self) -> Vec<String> {
        self.shown().iter().map(|n| n.to_string()).collect()
    }

    pub fn dismissed_count(&self) -> usize {
        *self.dismissed.lock().unwrap()
    }
}

#[async_trait]
impl NoticePresenter for RecordingPresenter {
    async fn show(&self, notice: &Notice) {
        self.shown.lock().unwrap().push(notice.clone());
    }

    async fn dismiss(&self, _notice: &Notice) {
        *self.dismissed.lock().unwrap() += 1;
    }
}
