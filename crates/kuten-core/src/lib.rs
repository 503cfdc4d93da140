//! Conversion between kuten-style (、。) and comma-style (，．) Japanese
//! punctuation in UTF-8 text files.

pub mod backup;
pub mod clock;
pub mod notify;
pub mod punctuation;
pub mod replacer;
pub mod settings;

pub use notify::{Level, Notification, Notifier};
pub use punctuation::{Direction, DirectionError};
pub use replacer::{
    notification_for, run_raw, run_request, Outcome, ReplaceError, ReplacementRequest, Replacer,
    ValidationError,
};
