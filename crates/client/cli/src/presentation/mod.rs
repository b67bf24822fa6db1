//! Terminal presentation components used by the CLI client.
pub mod event_loop;
pub mod layout;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use event_loop::EventLoop;

/// One-line message shown in the footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub is_error: bool,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}
