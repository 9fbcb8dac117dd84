//! Run-level errors: reading the mower file and parsing it.

use crate::parser::ParseError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Broad class of an input problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The file could not be opened or read
    FileAccess,
    /// A line has the wrong shape: token count, integers, embedded spaces
    Format,
    /// A token is well-formed but not an accepted value
    Validation,
    /// The lines do not group into position/instruction pairs
    Structural,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("The file at path '{}' was not found.", .0.display())]
    FileNotFound(PathBuf),
    #[error("An I/O error occurred while reading the file: {0}")]
    Io(#[source] io::Error),
    #[error("An error occurred: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileNotFound(_) | Self::Io(_) => ErrorKind::FileAccess,
            Self::Parse(e) => e.kind(),
        }
    }

    /// Wrap an I/O failure on `path`, singling out a missing file
    pub fn from_io(path: impl Into<PathBuf>, error: io::Error) -> Self {
        if error.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound(path.into())
        } else {
            Self::Io(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_reported_by_path() {
        let err = Error::from_io(
            "lawn.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.kind(), ErrorKind::FileAccess);
        assert_eq!(err.to_string(), "The file at path 'lawn.txt' was not found.");
    }

    #[test]
    fn test_other_io_errors_keep_their_message() {
        let err = Error::from_io(
            "lawn.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(
            err.to_string(),
            "An I/O error occurred while reading the file: permission denied"
        );
    }

    #[test]
    fn test_parse_errors_are_prefixed() {
        let err = Error::from(ParseError::MissingPair);
        assert_eq!(err.kind(), ErrorKind::Structural);
        assert_eq!(
            err.to_string(),
            "An error occurred: The file has an odd number of lines, missing a pair."
        );
    }
}
