//! One run of the application: current screen plus the contact form.

use super::command::Command;
use super::render::{
    render_contact_rows, render_form, render_help, render_launcher, LAUNCHER_ACTION,
};
use super::screen::Screen;
use crate::error::{CommandError, CommandResult};
use crate::form::{ContactFormController, PhoneEdit, SubmitOutcome};
use crate::notice::NoticeSender;
use crate::observability::SessionMetrics;
use crate::store::ContactStore;
use std::sync::Arc;

/// Applies commands and produces the text to show for them.
///
/// The session never prints; callers decide where the returned lines go.
pub struct Session {
    screen: Screen,
    controller: ContactFormController,
    finished: bool,
}

impl Session {
    /// Start a session on `screen`.
    pub fn new(
        screen: Screen,
        store: Arc<ContactStore>,
        notices: NoticeSender,
        metrics: SessionMetrics,
    ) -> Self {
        Self {
            screen,
            controller: ContactFormController::new(store, notices, metrics),
            finished: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn controller(&self) -> &ContactFormController {
        &self.controller
    }

    /// The user asked to quit.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Lines describing the current screen.
    pub fn render(&self) -> Vec<String> {
        match self.screen {
            Screen::Launcher => render_launcher(),
            Screen::ContactManager => {
                let mut lines = render_form(self.controller.state());
                lines.push(String::new());
                lines.extend(render_contact_rows(&self.controller.store().list()));
                lines
            }
        }
    }

    /// Parse and apply one line of input.
    pub fn handle_line(&mut self, line: &str) -> CommandResult<Vec<String>> {
        let command: Command = line.parse()?;
        self.handle(command)
    }

    /// Apply one command.
    pub fn handle(&mut self, command: Command) -> CommandResult<Vec<String>> {
        if !command.available_on(self.screen) {
            return Err(CommandError::WrongScreen {
                command: format!("{:?}", command),
                screen: self.screen.name(),
            });
        }

        tracing::debug!(screen = self.screen.name(), command = ?command, "Handling command");

        let lines = match command {
            Command::OpenContacts => {
                tracing::info!(action = LAUNCHER_ACTION, "Opening contact manager");
                self.screen = Screen::ContactManager;
                self.render()
            }
            Command::SetName(name) => {
                self.controller.set_name(name);
                Vec::new()
            }
            Command::SetPhone(phone) => Self::phone_feedback(self.controller.set_phone(phone)),
            Command::PhoneKey(c) => Self::phone_feedback(self.controller.push_phone_char(c)),
            Command::PhoneBackspace => {
                self.controller.pop_phone_char();
                vec![format!("Phone: {}", self.controller.state().phone())]
            }
            Command::SetEmail(email) => {
                self.controller.set_email(email);
                Vec::new()
            }
            Command::SelectType(Some(kind)) => {
                self.controller.select_type(kind);
                Vec::new()
            }
            Command::SelectType(None) => {
                self.controller.clear_type();
                Vec::new()
            }
            Command::Submit => {
                if let SubmitOutcome::Accepted(contact) = self.controller.submit() {
                    tracing::debug!(row = %contact, "Submitted contact");
                }
                render_form(self.controller.state())
            }
            Command::Show => self.render(),
            Command::List => render_contact_rows(&self.controller.store().list()),
            Command::Export => {
                let contacts = self.controller.store().list();
                match serde_json::to_string_pretty(&contacts) {
                    Ok(json) => json.lines().map(str::to_string).collect(),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to serialize contacts");
                        vec![format!("Export failed: {}", e)]
                    }
                }
            }
            Command::Help => render_help(self.screen),
            Command::Quit => {
                self.finished = true;
                Vec::new()
            }
        };

        Ok(lines)
    }

    fn phone_feedback(edit: PhoneEdit) -> Vec<String> {
        match edit {
            PhoneEdit::Accepted => Vec::new(),
            PhoneEdit::Rejected(reason) => vec![format!("Phone unchanged: {}", reason)],
        }
    }
}
