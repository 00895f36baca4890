//! Terminal presentation layer.
//!
//! Maps typed commands onto the launcher and contact screens and renders
//! their state as plain text lines.

pub mod command;
pub mod input;
pub mod presenter;
pub mod render;
pub mod screen;
pub mod session;

pub use command::Command;
pub use input::InputLines;
pub use presenter::TerminalPresenter;
pub use screen::Screen;
pub use session::Session;
