//! Notice presenter for the terminal.

use crate::notice::{Notice, NoticePresenter};
use async_trait::async_trait;

/// Prints each notice on its own line of stdout.
#[derive(Debug, Default)]
pub struct TerminalPresenter;

#[async_trait]
impl NoticePresenter for TerminalPresenter {
    async fn show(&self, notice: &Notice) {
        println!(">> {}", notice);
    }
}
