//! Error types for grid construction, neighbour queries and pattern I/O

use std::fmt;
use std::path::PathBuf;

/// Grid axis named in coordinate errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Row index (first coordinate)
    Row,
    /// Column index (second coordinate)
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => write!(f, "Row"),
            Self::Column => write!(f, "Column"),
        }
    }
}

/// Main error type for all crate operations
#[derive(Debug)]
pub enum LifeError {
    /// Neighbour query was given a negative coordinate
    ///
    /// The row is validated before the column, so a query where both are
    /// negative always reports the row.
    InvalidCoordinate {
        /// Axis that failed validation
        axis: Axis,
        /// Offending coordinate value
        value: i32,
    },

    /// Grid shape cannot be represented
    ///
    /// Covers zero or oversize dimensions, an empty row set, and rows of
    /// differing length.
    MalformedGrid {
        /// Description of what's wrong with the shape
        reason: String,
    },

    /// Failed to decode a pattern image
    PatternLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Plaintext pattern contains a line that cannot be parsed
    PatternParse {
        /// 1-based line number of the offending line
        line: usize,
        /// Explanation of the failure
        reason: String,
    },

    /// Failed to save a grid as an image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { axis, value } => {
                write!(f, "{axis} index cannot be negative (got {value})")
            }
            Self::MalformedGrid { reason } => {
                write!(f, "Malformed grid: {reason}")
            }
            Self::PatternLoad { path, source } => {
                write!(f, "Failed to load pattern '{}': {source}", path.display())
            }
            Self::PatternParse { line, reason } => {
                write!(f, "Invalid pattern at line {line}: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for LifeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PatternLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, LifeError>;

impl From<std::io::Error> for LifeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LifeError {
    LifeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed grid error
pub fn malformed_grid(reason: &impl ToString) -> LifeError {
    LifeError::MalformedGrid {
        reason: reason.to_string(),
    }
}
