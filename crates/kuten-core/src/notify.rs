//! User-facing notifications, one per replacement attempt.

use std::fmt;

pub const MSG_CHOOSE_FILE: &str = "Please choose a file.";
pub const MSG_FILE_MISSING: &str = "The file does not exist.";
pub const MSG_NOTHING_TO_REPLACE: &str = "There is nothing to be replaced.";
pub const MSG_REPLACED: &str = "Replacement has been done.";
pub const MSG_UNDEFINED_OPTION: &str = "Undefined Option";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

impl Level {
    /// Dialog title used by the original window.
    pub fn title(self) -> &'static str {
        match self {
            Level::Info => "Information",
            Level::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level.title(), self.message)
    }
}

/// Receiver supplied by the presentation layer.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}
