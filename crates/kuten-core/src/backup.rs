//! Timestamped sibling copies taken before a file is rewritten.
//!
//! `notes.txt` backed up at 2024-01-02 03:04:05 becomes
//! `notes_backup_20240102_030405.txt` in the same directory.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use time::OffsetDateTime;
use tracing::debug;

const MARKER: &str = "_backup_";

/// `YYYYMMDD_HHMMSS`, zero-padded.
pub fn format_timestamp(at: &OffsetDateTime) -> String {
    format!(
        "{:04}{:02}{:02}_{:02}{:02}{:02}",
        at.year(),
        at.month() as u8,
        at.day(),
        at.hour(),
        at.minute(),
        at.second()
    )
}

/// Backup location for `original` taken at `at`.
///
/// A trailing dot is not a suffix: `foo.` keeps `foo.` as its stem.
pub fn backup_path(original: &Path, at: &OffsetDateTime) -> PathBuf {
    let (stem, suffix) = match original.extension() {
        Some(ext) if ext.is_empty() => (original.file_name(), None),
        ext => (original.file_stem(), ext),
    };
    let mut name = OsString::new();
    if let Some(stem) = stem {
        name.push(stem);
    }
    name.push(MARKER);
    name.push(format_timestamp(at));
    if let Some(ext) = suffix {
        name.push(".");
        name.push(ext);
    }
    original.with_file_name(name)
}

/// Write `contents` (the bytes read from `original`) to `backup`.
/// Never overwrites an existing file.
pub fn create_backup(original: &Path, backup: &Path, contents: &[u8]) -> io::Result<()> {
    let mut out = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(backup)?;
    out.write_all(contents)?;
    out.sync_all()?;
    if let Ok(meta) = fs::metadata(original) {
        // Best effort: keep the original's permissions on the copy.
        let _ = fs::set_permissions(backup, meta.permissions());
    }
    debug!(backup = %backup.display(), bytes = contents.len(), "backup written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn timestamp_is_zero_padded() {
        let at = datetime!(2024-01-02 03:04:05 UTC);
        assert_eq!(format_timestamp(&at), "20240102_030405");
    }

    #[test]
    fn path_keeps_directory_and_suffix() {
        let at = datetime!(2024-01-02 03:04:05 UTC);
        let path = backup_path(Path::new("/tmp/docs/notes.txt"), &at);
        assert_eq!(
            path,
            PathBuf::from("/tmp/docs/notes_backup_20240102_030405.txt")
        );
    }

    #[test]
    fn path_without_suffix() {
        let at = datetime!(2023-12-31 23:59:59 UTC);
        let path = backup_path(Path::new("README"), &at);
        assert_eq!(path, PathBuf::from("README_backup_20231231_235959"));
    }

    #[test]
    fn path_trailing_dot() {
        let at = datetime!(2024-01-02 03:04:05 UTC);
        let path = backup_path(Path::new("/d/foo."), &at);
        assert_eq!(path, PathBuf::from("/d/foo._backup_20240102_030405"));
    }

    #[test]
    fn path_dotfile_has_no_suffix() {
        let at = datetime!(2024-01-02 03:04:05 UTC);
        let path = backup_path(Path::new("/d/.memo"), &at);
        assert_eq!(path, PathBuf::from("/d/.memo_backup_20240102_030405"));
    }

    #[test]
    fn path_only_last_suffix_is_kept() {
        let at = datetime!(2024-01-02 03:04:05 UTC);
        let path = backup_path(Path::new("draft.v2.md"), &at);
        assert_eq!(path, PathBuf::from("draft.v2_backup_20240102_030405.md"));
    }

    #[test]
    fn copy_is_exact_and_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("a.txt");
        let backup = dir.path().join("a_backup.txt");
        fs::write(&original, "今日は、良い天気です。").unwrap();
        let bytes = fs::read(&original).unwrap();

        create_backup(&original, &backup, &bytes).unwrap();
        assert_eq!(fs::read(&backup).unwrap(), bytes);

        let err = create_backup(&original, &backup, b"other").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }
}
