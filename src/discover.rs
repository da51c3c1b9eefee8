//! Input file discovery.
//!
//! Knowledge-base documents follow a dated naming convention. The renderer
//! looks for today's file first and falls back to the most recently modified
//! match; finding nothing is a fatal startup condition.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// File name prefix shared by all knowledge-base documents.
pub const FILE_PREFIX: &str = "File_Easy_Knowledge_Base_";

/// Source document extension.
pub const SOURCE_EXT: &str = "md";

/// Name of the source document for a given date.
pub fn dated_filename(date: NaiveDate) -> String {
    format!("{}{}.{}", FILE_PREFIX, date.format("%Y%m%d"), SOURCE_EXT)
}

/// Name of the rendered PDF for a given date.
pub fn pdf_filename(date: NaiveDate) -> String {
    format!("{}{}.pdf", FILE_PREFIX, date.format("%Y%m%d"))
}

/// The default search directory: the user's Downloads directory, falling
/// back to `Downloads` under the home directory, then the current directory.
pub fn default_search_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Locate the input document in `dir` for the given date.
///
/// Tries the exact dated name first, then the most recently modified file
/// matching `File_Easy_Knowledge_Base_*.md`.
pub fn find_input(dir: &Path, date: NaiveDate) -> Result<PathBuf> {
    let exact = dir.join(dated_filename(date));
    if exact.is_file() {
        debug!("found dated input {}", exact.display());
        return Ok(exact);
    }

    let mut newest: Option<(PathBuf, SystemTime)> = None;
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if !is_candidate(&path) {
                continue;
            }
            let modified = entry
                .metadata()
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            match &newest {
                Some((_, best)) if *best >= modified => {}
                _ => newest = Some((path, modified)),
            }
        }
    }

    match newest {
        Some((path, _)) => {
            info!("falling back to most recent input {}", path.display());
            Ok(path)
        }
        None => Err(Error::MissingInput {
            dir: dir.to_path_buf(),
            pattern: format!("{}*.{}", FILE_PREFIX, SOURCE_EXT),
        }),
    }
}

/// Check if a path matches the knowledge-base naming pattern.
fn is_candidate(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name,
        None => return false,
    };
    name.starts_with(FILE_PREFIX) && name.ends_with(&format!(".{}", SOURCE_EXT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::time::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_dated_filenames() {
        let d = date(2025, 11, 3);
        assert_eq!(dated_filename(d), "File_Easy_Knowledge_Base_20251103.md");
        assert_eq!(pdf_filename(d), "File_Easy_Knowledge_Base_20251103.pdf");
    }

    #[test]
    fn test_exact_match_wins() {
        let dir = tempfile::tempdir().unwrap();
        let today = date(2025, 11, 3);
        let exact = dir.path().join(dated_filename(today));
        fs::write(&exact, "# FILE EASY TEST").unwrap();
        fs::write(
            dir.path().join("File_Easy_Knowledge_Base_20240101.md"),
            "old",
        )
        .unwrap();

        let found = find_input(dir.path(), today).unwrap();
        assert_eq!(found, exact);
    }

    #[test]
    fn test_fallback_to_newest_match() {
        let dir = tempfile::tempdir().unwrap();
        let older = dir.path().join("File_Easy_Knowledge_Base_20240101.md");
        let newer = dir.path().join("File_Easy_Knowledge_Base_20240201.md");
        fs::write(&older, "old").unwrap();
        fs::write(&newer, "new").unwrap();

        // Push the older file's mtime into the past so ordering does not
        // depend on filesystem timestamp granularity.
        let past = SystemTime::now() - Duration::from_secs(3600);
        File::options()
            .write(true)
            .open(&older)
            .unwrap()
            .set_modified(past)
            .unwrap();

        let found = find_input(dir.path(), date(2025, 11, 3)).unwrap();
        assert_eq!(found, newer);
    }

    #[test]
    fn test_non_matching_files_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.md"), "x").unwrap();
        fs::write(dir.path().join("File_Easy_Knowledge_Base_20240101.txt"), "x").unwrap();

        let result = find_input(dir.path(), date(2025, 11, 3));
        assert!(matches!(result, Err(Error::MissingInput { .. })));
    }

    #[test]
    fn test_missing_input_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = find_input(dir.path(), date(2025, 11, 3));
        match result {
            Err(Error::MissingInput { dir: d, pattern }) => {
                assert_eq!(d, dir.path());
                assert_eq!(pattern, "File_Easy_Knowledge_Base_*.md");
            }
            other => panic!("expected MissingInput, got {:?}", other),
        }
    }
}
