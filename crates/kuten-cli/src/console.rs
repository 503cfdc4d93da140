//! Terminal rendering of notifications: info on stdout, errors on stderr.

use std::io::{self, Stderr, Stdout, Write};

use kuten_core::{Level, Notification, Notifier};

pub struct ConsoleNotifier<O, E> {
    out: O,
    err: E,
    errors: usize,
}

impl ConsoleNotifier<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleNotifier<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self {
            out,
            err,
            errors: 0,
        }
    }

    /// True once any error notification has been shown.
    pub fn failed(&self) -> bool {
        self.errors > 0
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> Notifier for ConsoleNotifier<O, E> {
    fn notify(&mut self, notification: Notification) {
        // A closed pipe is not worth a panic here.
        let _ = match notification.level {
            Level::Info => writeln!(self.out, "{}", notification.message),
            Level::Error => {
                self.errors += 1;
                writeln!(self.err, "Error: {}", notification.message)
            }
        };
    }
}
