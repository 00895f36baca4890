//! End-to-end flows through the terminal session: launcher navigation,
//! contact entry, list updates and notices.

mod mocks;

use contact_manager::app::InputLines;
use contact_manager::{
    notice_channel, CommandError, ContactStore, NoticeHost, Screen, Session, SessionMetrics,
};
use mocks::RecordingPresenter;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::BufReader;

fn run(session: &mut Session, lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .flat_map(|line| session.handle_line(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_add_contact_from_launcher() {
    let store = Arc::new(ContactStore::new());
    let presenter = RecordingPresenter::new();
    let (notices, receiver) = notice_channel();
    let host = NoticeHost::new(Arc::new(presenter.clone()), Duration::ZERO).spawn(receiver);

    let mut session = Session::new(
        Screen::Launcher,
        store.clone(),
        notices,
        SessionMetrics::new(),
    );

    run(
        &mut session,
        &[
            "open",
            "name Ada",
            "phone 1234567890",
            "email ada@example.com",
            "type friend",
            "submit",
        ],
    );

    let rows = session.handle_line("list").unwrap();
    assert_eq!(rows, vec!["Ada - 1234567890 - ada@example.com - Friend"]);
    assert!(session.controller().state().is_cleared());

    drop(session);
    host.await.unwrap();
    assert_eq!(presenter.shown_text(), vec!["Contact Added: Ada"]);
    assert_eq!(presenter.dismissed_count(), 1);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_rejected_submit_shows_field_errors() {
    let presenter = RecordingPresenter::new();
    let (notices, receiver) = notice_channel();
    let host = NoticeHost::new(Arc::new(presenter.clone()), Duration::ZERO).spawn(receiver);

    let mut session = Session::new(
        Screen::ContactManager,
        Arc::new(ContactStore::new()),
        notices,
        SessionMetrics::new(),
    );

    let lines = run(
        &mut session,
        &["name Ada", "phone 12345", "email not-an-email", "submit"],
    );

    assert!(lines.contains(&"  ! Enter a valid 10-digit phone number".to_string()));
    assert!(lines.contains(&"  ! Enter a valid email address".to_string()));
    assert!(lines.contains(&"Phone: 12345".to_string()));
    assert_eq!(
        session.handle_line("list").unwrap(),
        vec!["No contacts yet."]
    );

    drop(session);
    host.await.unwrap();
    assert_eq!(presenter.shown_text(), vec!["Please enter valid details."]);
}

#[tokio::test]
async fn test_subscription_receives_each_append() {
    let store = Arc::new(ContactStore::new());
    let mut subscription = store.subscribe();
    let (notices, _receiver) = notice_channel();
    let mut session = Session::new(
        Screen::ContactManager,
        store,
        notices,
        SessionMetrics::new(),
    );

    run(
        &mut session,
        &["name A", "phone 1111111111", "email a@example.com", "submit"],
    );
    let contacts = subscription.changed().await.unwrap();
    assert_eq!(contacts.len(), 1);

    run(
        &mut session,
        &["name B", "phone 2222222222", "email b@example.com", "submit"],
    );
    let contacts = subscription.changed().await.unwrap();
    let names: Vec<_> = contacts.iter().map(|c| c.name.to_string()).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn test_phone_typed_key_by_key() {
    let (notices, _receiver) = notice_channel();
    let mut session = Session::new(
        Screen::ContactManager,
        Arc::new(ContactStore::new()),
        notices,
        SessionMetrics::new(),
    );

    for digit in "12345678901".chars() {
        let _ = session.handle_line(&format!("key {}", digit)).unwrap();
    }
    assert_eq!(session.controller().state().phone(), "1234567890");

    let lines = session.handle_line("key -").unwrap();
    assert_eq!(lines, vec!["Phone unchanged: '-' is not a digit"]);

    let lines = session.handle_line("backspace").unwrap();
    assert_eq!(lines, vec!["Phone: 123456789"]);
}

#[test]
fn test_export_prints_json() {
    let (notices, _receiver) = notice_channel();
    let mut session = Session::new(
        Screen::ContactManager,
        Arc::new(ContactStore::new()),
        notices,
        SessionMetrics::new(),
    );
    run(
        &mut session,
        &["name Ada", "phone 1234567890", "email ada@example.com", "submit"],
    );

    let json = session.handle_line("export").unwrap().join("\n");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["name"], "Ada");
    assert_eq!(value[0]["type"], "");
}

#[test]
fn test_errors_leave_session_usable() {
    let (notices, _receiver) = notice_channel();
    let mut session = Session::new(
        Screen::Launcher,
        Arc::new(ContactStore::new()),
        notices,
        SessionMetrics::new(),
    );

    assert!(matches!(
        session.handle_line("frobnicate"),
        Err(CommandError::UnknownCommand(_))
    ));
    assert!(matches!(
        session.handle_line("name Ada"),
        Err(CommandError::WrongScreen { .. })
    ));
    assert_eq!(session.screen(), Screen::Launcher);
    assert!(session.handle_line("open").is_ok());
    assert!(matches!(
        session.handle_line("type enemy"),
        Err(CommandError::InvalidArgument(_))
    ));
    assert!(session.handle_line("show").is_ok());
}

#[tokio::test]
async fn test_garbled_input_line_does_not_end_session() {
    let (notices, _receiver) = notice_channel();
    let mut session = Session::new(
        Screen::Launcher,
        Arc::new(ContactStore::new()),
        notices,
        SessionMetrics::new(),
    );

    let bytes: &[u8] = b"open\nname \xff\xfe\nname Ada\r\nphone\t 1234567890\nshow\nquit\nlist\n";
    let mut input = InputLines::new(BufReader::new(bytes));
    let mut handled = 0;
    while let Some(line) = input.next_line().await.unwrap() {
        session.handle_line(&line).unwrap();
        handled += 1;
        if session.is_finished() {
            break;
        }
    }

    assert_eq!(handled, 6);
    assert!(session.is_finished());
    assert_eq!(session.controller().state().name(), "Ada");
    assert_eq!(session.controller().state().phone(), "1234567890");
}
