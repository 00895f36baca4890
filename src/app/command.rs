//! Commands typed at the terminal.

use super::screen::Screen;
use crate::domain::ContactType;
use crate::error::CommandError;
use std::str::FromStr;

/// One user action, parsed from a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// "Manage Contacts" on the launcher
    OpenContacts,
    /// Replace the name field
    SetName(String),
    /// Replace the phone field
    SetPhone(String),
    /// Type one character into the phone field
    PhoneKey(char),
    /// Delete the last phone character
    PhoneBackspace,
    /// Replace the email field
    SetEmail(String),
    /// Select a type, or clear the selection with `None`
    SelectType(Option<ContactType>),
    Submit,
    /// Show the form
    Show,
    /// Show the contact list
    List,
    /// Print the contact list as JSON
    Export,
    Help,
    Quit,
}

impl Command {
    /// Whether the command can be used on `screen`.
    pub fn available_on(&self, screen: Screen) -> bool {
        match self {
            Self::Help | Self::Quit => true,
            Self::OpenContacts => screen == Screen::Launcher,
            _ => screen == Screen::ContactManager,
        }
    }
}

/// Parses `<command> [argument]`.
///
/// The command word ends at the first whitespace character. `name` and
/// `email` keep the rest of the line as typed; `phone`, `key` and `type`
/// ignore surrounding whitespace.
impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, arg) = match line.split_once(char::is_whitespace) {
            Some((word, arg)) => (word, arg),
            None => (line.trim_end(), ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "open" | "manage" => Self::OpenContacts,
            "name" => Self::SetName(arg.to_string()),
            "phone" => Self::SetPhone(arg.trim().to_string()),
            "email" => Self::SetEmail(arg.to_string()),
            "key" => {
                let mut chars = arg.trim().chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::PhoneKey(c),
                    _ => {
                        return Err(CommandError::MissingArgument {
                            command: "key",
                            what: "a single character",
                        })
                    }
                }
            }
            "backspace" => Self::PhoneBackspace,
            "type" => match arg.trim() {
                "" => {
                    return Err(CommandError::MissingArgument {
                        command: "type",
                        what: "friend, family, work or none",
                    })
                }
                label if label.eq_ignore_ascii_case("none") => Self::SelectType(None),
                label => Self::SelectType(Some(label.parse()?)),
            },
            "submit" | "add" => Self::Submit,
            "show" => Self::Show,
            "list" => Self::List,
            "export" => Self::Export,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => return Err(CommandError::UnknownCommand(line.trim_end().to_string())),
        };

        Ok(command)
    }
}
