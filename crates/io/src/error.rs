//! Error types for dhmc-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the dhmc-io crate.
///
/// This enum covers file-system failures, unparsable table rows, and
/// validation problems found when loading observed or simulated records.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps a read or write failure on a specific file.
    #[error("i/o error on {}: {reason}", path.display())]
    File {
        /// File being read or written.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when a table row cannot be parsed.
    #[error("line {line}: {reason}")]
    Parse {
        /// One-based line number in the input.
        line: usize,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Wraps a failure assembling the simulated table.
    #[error("simulated table: {reason}")]
    Table {
        /// Description of the underlying failure.
        reason: String,
    },
}

impl IoError {
    pub(crate) fn file(path: &std::path::Path, e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::File {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        }
    }
}

impl From<dhmc_sim::SimError> for IoError {
    fn from(e: dhmc_sim::SimError) -> Self {
        IoError::Table {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.txt"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.txt");
    }

    #[test]
    fn display_file() {
        let err = IoError::File {
            path: PathBuf::from("/data/out.txt"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "i/o error on /data/out.txt: permission denied"
        );
    }

    #[test]
    fn display_parse() {
        let err = IoError::Parse {
            line: 12,
            reason: "expected at least 4 columns, found 3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "line 12: expected at least 4 columns, found 3"
        );
    }

    #[test]
    fn display_validation() {
        let err = IoError::Validation {
            count: 2,
            details: "negative depth at line 3; 1979-01-05 follows 1979-01-03".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "2 validation error(s): negative depth at line 3; 1979-01-05 follows 1979-01-03"
        );
    }

    #[test]
    fn not_found_kind_maps_to_file_not_found() {
        let e = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IoError::file(Path::new("obs.txt"), e);
        assert!(matches!(err, IoError::FileNotFound { .. }));

        let e = std::io::Error::other("disk full");
        let err = IoError::file(Path::new("obs.txt"), e);
        assert!(matches!(err, IoError::File { .. }));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn from_sim_error() {
        let sim = dhmc_sim::SimError::LengthMismatch {
            replicate: 1,
            expected: 3,
            got: 2,
        };
        let err: IoError = sim.into();
        assert!(matches!(err, IoError::Table { .. }));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
