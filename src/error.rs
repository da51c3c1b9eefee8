//! Error types for the kbpress library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for kbpress operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during assembly or rendering.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No knowledge-base document was found in the search directory.
    #[error("no knowledge-base document matching {pattern} found in {}", .dir.display())]
    MissingInput {
        /// Directory that was searched
        dir: PathBuf,
        /// File name pattern that was expected
        pattern: String,
    },

    /// The service manifest could not be read or parsed.
    #[error("service manifest error: {0}")]
    Manifest(String),

    /// The generated markup failed to compile.
    #[error("document compilation error: {0}")]
    Compile(String),

    /// The compiled document could not be exported as PDF.
    #[error("PDF export error: {0}")]
    Export(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Manifest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingInput {
            dir: PathBuf::from("/tmp/downloads"),
            pattern: "File_Easy_Knowledge_Base_*.md".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no knowledge-base document matching File_Easy_Knowledge_Base_*.md found in /tmp/downloads"
        );

        let err = Error::Compile("unknown variable".to_string());
        assert_eq!(
            err.to_string(),
            "document compilation error: unknown variable"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_manifest_error_conversion() {
        let json_err = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Manifest(_)));
    }
}
