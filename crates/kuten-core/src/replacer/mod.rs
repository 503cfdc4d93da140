//! In-place punctuation replacement with a backup taken before the first write.
//!
//! One call handles one file:
//! validate → read → detect → back up → substitute → write → report.
//! Expected conditions (not a file, nothing to replace) are values; only
//! filesystem failures come back as [`ReplaceError`]. [`Replacer::run`] folds
//! every result into a single [`Notification`] for the presentation layer.


use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, debug_span, warn};

use crate::backup;
use crate::clock::{Clock, SystemClock};
use crate::notify::{
    Notification, Notifier, MSG_CHOOSE_FILE, MSG_FILE_MISSING, MSG_NOTHING_TO_REPLACE,
    MSG_REPLACED,
};
use crate::punctuation::{self, Direction, DirectionError, Pattern};
use crate::settings::settings;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{msg}", msg = MSG_CHOOSE_FILE)]
    NotAFile,
    #[error("{msg}", msg = MSG_FILE_MISSING)]
    Missing,
}

#[derive(Debug, thiserror::Error)]
pub enum ReplaceError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error(
        "backup {} already exists; wait a second and try again",
        path.display()
    )]
    BackupExists { path: PathBuf },
    #[error("failed to write backup {}: {source}", path.display())]
    Backup { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// What a successful call did (or, for a dry run, would do).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NothingToReplace,
    WouldReplace { occurrences: usize },
    Replaced { backup: PathBuf, replacements: usize },
}

impl Outcome {
    pub fn notification(&self) -> Notification {
        match self {
            Outcome::NothingToReplace => Notification::info(MSG_NOTHING_TO_REPLACE),
            Outcome::WouldReplace { occurrences } => {
                Notification::info(format!("{occurrences} mark(s) would be replaced."))
            }
            Outcome::Replaced { .. } => Notification::info(MSG_REPLACED),
        }
    }
}

/// A file path plus the direction chosen for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementRequest {
    pub path: PathBuf,
    pub direction: Direction,
}

impl ReplacementRequest {
    pub fn new(path: impl Into<PathBuf>, direction: Direction) -> Self {
        Self {
            path: path.into(),
            direction,
        }
    }

    /// Build from an unchecked UI flag (0 or 1).
    pub fn from_raw(path: impl Into<PathBuf>, flag: u8) -> Result<Self, DirectionError> {
        Ok(Self::new(path, Direction::try_from(flag)?))
    }
}

pub struct Replacer<C: Clock = SystemClock> {
    path: PathBuf,
    direction: Direction,
    /// Indexed by `Direction as usize`.
    patterns: [Pattern; 2],
    clock: C,
}

impl Replacer<SystemClock> {
    pub fn new(path: impl Into<PathBuf>, direction: Direction) -> Self {
        Self::with_clock(path, direction, SystemClock::new(settings().timezone()))
    }

    pub fn from_request(request: ReplacementRequest) -> Self {
        Self::new(request.path, request.direction)
    }
}

impl<C: Clock> Replacer<C> {
    pub fn with_clock(path: impl Into<PathBuf>, direction: Direction, clock: C) -> Self {
        Self {
            path: path.into(),
            direction,
            patterns: Direction::ALL.map(Pattern::compile),
            clock,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn pattern(&self) -> &Pattern {
        &self.patterns[self.direction as usize]
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.path.is_file() {
            return Err(ValidationError::NotAFile);
        }
        // Unreachable after the is_file check; kept so both messages stay wired.
        if !self.path.exists() {
            return Err(ValidationError::Missing);
        }
        Ok(())
    }

    fn read(&self) -> Result<String, ReplaceError> {
        fs::read_to_string(&self.path).map_err(|source| ReplaceError::Read {
            path: self.path.clone(),
            source,
        })
    }

    /// Dry run: validate, read and detect without touching the filesystem.
    pub fn check(&self) -> Result<Outcome, ReplaceError> {
        let _span = debug_span!(
            "check",
            path = %self.path.display(),
            direction = %self.direction
        )
        .entered();
        self.validate()?;
        let content = self.read()?;
        let occurrences = self.pattern().count(&content);
        debug!(occurrences);
        if occurrences == 0 {
            Ok(Outcome::NothingToReplace)
        } else {
            Ok(Outcome::WouldReplace { occurrences })
        }
    }

    pub fn replace(&self) -> Result<Outcome, ReplaceError> {
        let _span = debug_span!(
            "replace",
            path = %self.path.display(),
            direction = %self.direction
        )
        .entered();
        self.validate()?;
        let content = self.read()?;

        let pattern = self.pattern();
        if !pattern.is_match(&content) {
            debug!("no source punctuation, file left untouched");
            return Ok(Outcome::NothingToReplace);
        }
        let replacements = pattern.count(&content);

        let backup = backup::backup_path(&self.path, &self.clock.now());
        backup::create_backup(&self.path, &backup, content.as_bytes()).map_err(|source| {
            // Backup names have one-second resolution.
            if source.kind() == io::ErrorKind::AlreadyExists {
                ReplaceError::BackupExists {
                    path: backup.clone(),
                }
            } else {
                ReplaceError::Backup {
                    path: backup.clone(),
                    source,
                }
            }
        })?;

        let converted = punctuation::convert(&content, self.direction);
        fs::write(&self.path, converted).map_err(|source| ReplaceError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(replacements, backup = %backup.display(), "file rewritten");

        Ok(Outcome::Replaced {
            backup,
            replacements,
        })
    }

    /// Run `replace` and deliver exactly one notification. Never fails.
    pub fn run<N: Notifier + ?Sized>(&self, notifier: &mut N) {
        notifier.notify(notification_for(self.replace()));
    }
}

/// Map a `replace` or `check` result to the notification shown to the user.
pub fn notification_for(result: Result<Outcome, ReplaceError>) -> Notification {
    match result {
        Ok(outcome) => outcome.notification(),
        Err(ReplaceError::Invalid(e)) => Notification::error(e.to_string()),
        Err(e) => {
            warn!(error = %e, "replacement failed");
            Notification::error(e.to_string())
        }
    }
}

pub fn run_request<N: Notifier + ?Sized>(request: ReplacementRequest, notifier: &mut N) {
    Replacer::from_request(request).run(notifier);
}

/// Entry point for callers holding an unchecked direction flag.
pub fn run_raw<N: Notifier + ?Sized>(path: impl Into<PathBuf>, flag: u8, notifier: &mut N) {
    match ReplacementRequest::from_raw(path, flag) {
        Ok(request) => run_request(request, notifier),
        Err(e) => notifier.notify(Notification::error(e.to_string())),
    }
}
