//! Text rendering of screens, the form and the contact list.

use super::screen::Screen;
use crate::domain::ContactType;
use crate::form::FormState;
use crate::models::Contact;

pub const LAUNCHER_ACTION: &str = "Manage Contacts";

pub fn render_launcher() -> Vec<String> {
    vec![
        "=== Contact Manager ===".to_string(),
        format!("[ {} ]  (type 'open')", LAUNCHER_ACTION),
    ]
}

/// The form as a block of lines, with field errors under their fields.
pub fn render_form(state: &FormState) -> Vec<String> {
    let mut lines = Vec::new();

    let name_flag = if state.name_error() { "  (required)" } else { "" };
    lines.push(format!("Name:  {}{}", state.name(), name_flag));

    lines.push(format!("Phone: {}", state.phone()));
    if let Some(message) = state.phone_error_message() {
        lines.push(format!("  ! {}", message));
    }

    lines.push(format!("Email: {}", state.email()));
    if let Some(message) = state.email_error_message() {
        lines.push(format!("  ! {}", message));
    }

    lines.push(format!(
        "Select Contact Type: {}",
        render_type_selector(state.selected_type())
    ));
    lines.push("[ Add Contact ]  (type 'submit')".to_string());
    lines
}

/// Radio-style selector, e.g. `(x) Friend  ( ) Family  ( ) Work`.
pub fn render_type_selector(selected: Option<ContactType>) -> String {
    ContactType::ALL
        .iter()
        .map(|kind| {
            let mark = if selected == Some(*kind) { 'x' } else { ' ' };
            format!("({}) {}", mark, kind)
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// One row per contact, in list order.
pub fn render_contact_rows(contacts: &[Contact]) -> Vec<String> {
    if contacts.is_empty() {
        return vec!["No contacts yet.".to_string()];
    }
    contacts.iter().map(|contact| contact.to_string()).collect()
}

pub fn render_help(screen: Screen) -> Vec<String> {
    let mut lines = match screen {
        Screen::Launcher => vec!["open              Manage Contacts".to_string()],
        Screen::ContactManager => vec![
            "name <text>       set the name".to_string(),
            "phone <digits>    set the phone number (max 10 digits)".to_string(),
            "key <char>        type one character into the phone field".to_string(),
            "backspace         delete the last phone character".to_string(),
            "email <text>      set the email address".to_string(),
            "type <kind>       friend, family, work or none".to_string(),
            "submit            add the contact".to_string(),
            "show              show the form".to_string(),
            "list              show all contacts".to_string(),
            "export            print all contacts as JSON".to_string(),
        ],
    };
    lines.push("help              show this help".to_string());
    lines.push("quit              leave".to_string());
    lines
}
