//! Contact Manager - Main entry point
//!
//! Runs the launcher and contact screens as a line-oriented terminal app.
//! Commands are read from stdin; screens, list updates and notices are
//! written to stdout, logs to stderr.

use anyhow::Result;
use contact_manager::app::render::render_contact_rows;
use contact_manager::app::{InputLines, TerminalPresenter};
use contact_manager::{
    notice_channel, Config, ContactStore, NoticeHost, Screen, Session, SessionMetrics,
};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only, stdout is the UI)
    let default_level = config.as_ref().map_or("error", |cfg| cfg.log_level.as_str());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let store = Arc::new(ContactStore::new());
    let metrics = SessionMetrics::new();
    let (notices, notice_receiver) = notice_channel();

    let notice_task = NoticeHost::new(Arc::new(TerminalPresenter), config.notice_duration())
        .spawn(notice_receiver);

    // Re-render the list whenever a contact is appended
    let mut subscription = store.subscribe();
    let list_task = tokio::spawn(async move {
        while let Some(contacts) = subscription.changed().await {
            println!("--- Contacts ({}) ---", contacts.len());
            for row in render_contact_rows(&contacts) {
                println!("{}", row);
            }
        }
    });

    let start = if config.skip_launcher {
        Screen::ContactManager
    } else {
        Screen::Launcher
    };
    let mut session = Session::new(start, store, notices, metrics.clone());

    info!(screen = start.name(), "Contact Manager started");
    for line in session.render() {
        println!("{}", line);
    }

    let mut input = InputLines::new(BufReader::new(tokio::io::stdin()));
    while let Some(line) = input.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        match session.handle_line(&line) {
            Ok(lines) => {
                for line in lines {
                    println!("{}", line);
                }
            }
            Err(e) => println!("{}", e),
        }

        if session.is_finished() {
            break;
        }

        // Let the list renderer and notice host catch up before the next prompt
        tokio::task::yield_now().await;
    }

    drop(session);
    list_task.abort();
    notice_task.abort();

    metrics.log_summary();
    eprintln!("{}", metrics.summary());
    info!("Contact Manager shutdown complete");
    Ok(())
}
