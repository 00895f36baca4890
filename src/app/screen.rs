//! The two screens of the application.

/// Which screen the session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Entry screen. Its only action opens the contact manager.
    Launcher,
    /// Contact form with the contact list below it.
    ContactManager,
}

impl Screen {
    /// Short name used in messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Launcher => "launcher",
            Self::ContactManager => "contacts",
        }
    }
}
