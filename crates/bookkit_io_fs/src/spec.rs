//! Discovery specification models and top-level error types.

use std::fmt;
use std::path::PathBuf;

////////////////////////////////////////////////////////////////////////////////
// #region Constants

/// Basename prefix Office uses for lock/owner files next to an open workbook.
pub const C_TEMP_FILE_MARKER: &str = "~$";
/// Glob for macro-free workbook packages.
pub const C_PATTERN_XLSX: &str = "*.xlsx";
/// Glob for macro-enabled workbook packages.
pub const C_PATTERN_XLSM: &str = "*.xlsm";

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Input options for `find_workbook_files`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecFindBooksOptions {
    /// Walk nested directories (top-down) instead of only the root.
    pub if_recursive: bool,
    /// Also accept macro-enabled `.xlsm` packages.
    pub if_include_xlsm: bool,
}

impl SpecFindBooksOptions {
    /// Basename glob patterns accepted under these options.
    pub fn patterns_include(&self) -> Vec<&'static str> {
        if self.if_include_xlsm {
            vec![C_PATTERN_XLSX, C_PATTERN_XLSM]
        } else {
            vec![C_PATTERN_XLSX]
        }
    }
}

/// "Top-level call failed" errors.
///
/// Unreadable nested directories are not errors; they land in
/// [`crate::ReportFindBooks::warnings`].
#[derive(Debug)]
pub enum FindBooksError {
    /// Root path is missing or not a directory.
    SourceNotDirectory(PathBuf),
    /// Root directory exists but could not be listed.
    ReadDirFailed {
        /// Directory that failed to list.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Built-in extension pattern failed to compile.
    InvalidPattern(String),
}

impl fmt::Display for FindBooksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceNotDirectory(path) => {
                write!(f, "Source is not a directory: {}", path.display())
            }
            Self::ReadDirFailed { path, message } => {
                write!(f, "Failed to read directory {}: {message}", path.display())
            }
            Self::InvalidPattern(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for FindBooksError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////
