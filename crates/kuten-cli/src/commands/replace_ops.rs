use std::process;

use tracing::info;

use kuten_core::{notification_for, Direction, Notifier, Replacer};

use crate::console::ConsoleNotifier;

/// Convert `file` in place and print the result. Exits with status 1 on error.
pub fn replace_cmd(file: &str, direction: Direction) {
    let mut console = ConsoleNotifier::stdio();
    replace_into(file, direction, &mut console);
    if console.failed() {
        process::exit(1);
    }
}

pub fn replace_into<N: Notifier + ?Sized>(file: &str, direction: Direction, notifier: &mut N) {
    info!(file, %direction, "replace");
    Replacer::new(file, direction).run(notifier);
}

/// Dry run: print how many marks would change. Exits with status 1 on error.
pub fn check_cmd(file: &str, direction: Direction) {
    let mut console = ConsoleNotifier::stdio();
    check_into(file, direction, &mut console);
    if console.failed() {
        process::exit(1);
    }
}

pub fn check_into<N: Notifier + ?Sized>(file: &str, direction: Direction, notifier: &mut N) {
    info!(file, %direction, "check");
    notifier.notify(notification_for(Replacer::new(file, direction).check()));
}
