//! Shared XLSX specification models and the crate error type.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::conf::{
    C_SHAPE_LOCATION_PREFIX, N_RATIO_COLUMN_WIDTH_PER_PIXEL, N_RATIO_ROW_HEIGHT_PER_PIXEL,
};
use crate::util::derive_cell_reference;

////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Failure of any workbook operation.
#[derive(Debug, thiserror::Error)]
pub enum WorkbookError {
    /// Caller passed an unusable argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Sort order other than `asc` / `desc`.
    #[error("Invalid value for 'order': `{0}`. Must be 'asc' or 'desc'.")]
    InvalidOrder(String),
    /// Search pattern failed to compile.
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(String),
    /// Named sheet is not in the workbook.
    #[error("Sheet '{sheet_name}' does not exist in {}", .path.display())]
    SheetNotFound {
        /// Requested sheet name.
        sheet_name: String,
        /// Workbook path.
        path: PathBuf,
    },
    /// Shape index is out of range for the sheet.
    #[error("Shape #{index} does not exist on sheet '{sheet_name}'")]
    ShapeNotFound {
        /// Sheet holding the shape.
        sheet_name: String,
        /// Enumeration index of the shape.
        index: usize,
    },
    /// Workbook could not be opened (missing, locked, corrupted).
    #[error("Failed to open workbook {}: {message}", .path.display())]
    OpenFailed {
        /// Workbook path.
        path: PathBuf,
        /// Engine error text.
        message: String,
    },
    /// Workbook could not be written back.
    #[error("Failed to save workbook {}: {message}", .path.display())]
    SaveFailed {
        /// Workbook path.
        path: PathBuf,
        /// Engine error text.
        message: String,
    },
    /// Attempted to save a session opened read-only.
    #[error("Workbook session is read-only: {}", .0.display())]
    ReadOnlySession(PathBuf),
    /// CSV serialization failed.
    #[error("Failed to write CSV {}: {message}", .path.display())]
    CsvWrite {
        /// Destination path.
        path: PathBuf,
        /// Writer error text.
        message: String,
    },
    /// Plain filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetOrder

/// Direction for [`crate::sort_sheet_names`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumSheetOrder {
    /// Lexicographic ascending (default).
    #[default]
    Asc,
    /// Lexicographic descending.
    Desc,
}

impl FromStr for EnumSheetOrder {
    type Err = WorkbookError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(WorkbookError::InvalidOrder(value.to_string())),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region MatchSpecification

/// Flags selecting the text matching rule for search/replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpecMatchOptions {
    /// Whole value must match (equality, or anchored regex).
    pub if_exact_match: bool,
    /// Interpret the search string as a regular expression.
    pub if_use_regex: bool,
}

/// Where a match was found inside a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumMatchLocation {
    /// Grid cell, 1-based.
    Cell {
        /// Row number.
        row: u32,
        /// Column number.
        col: u32,
    },
    /// Text of a drawing shape.
    Shape {
        /// Shape name as stored in the drawing.
        name: String,
    },
}

impl fmt::Display for EnumMatchLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cell { row, col } => write!(f, "{}", derive_cell_reference(*row, *col)),
            Self::Shape { name } => write!(f, "{C_SHAPE_LOCATION_PREFIX}{name}"),
        }
    }
}

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecMatchRecord {
    /// Sheet holding the hit.
    pub sheet_name: String,
    /// Cell or shape.
    pub location: EnumMatchLocation,
    /// Stringified value that matched.
    pub value: String,
}

/// One replacement actually written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecReplaceRecord {
    /// Sheet holding the edit.
    pub sheet_name: String,
    /// Cell or shape.
    pub location: EnumMatchLocation,
    /// Value before the write.
    pub value_old: String,
    /// Value after the write.
    pub value_new: String,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetGeometry

/// Inclusive rectangle of stored cells on a sheet, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecUsedRange {
    /// First used row.
    pub row_min: u32,
    /// Last used row.
    pub row_max: u32,
    /// First used column.
    pub col_min: u32,
    /// Last used column.
    pub col_max: u32,
}

impl SpecUsedRange {
    /// Same bottom-right corner, top-left pinned at `A1`.
    pub fn anchored_at_origin(&self) -> Self {
        Self {
            row_min: 1,
            row_max: self.row_max,
            col_min: 1,
            col_max: self.col_max,
        }
    }

    /// Number of cells covered.
    pub fn cell_count(&self) -> u64 {
        u64::from(self.row_max - self.row_min + 1) * u64::from(self.col_max - self.col_min + 1)
    }
}

/// Pixel-to-dimension multipliers for grid sizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecGridRatios {
    /// Row height per pixel.
    pub ratio_row_height: f64,
    /// Column width per pixel.
    pub ratio_column_width: f64,
}

impl Default for SpecGridRatios {
    fn default() -> Self {
        Self {
            ratio_row_height: N_RATIO_ROW_HEIGHT_PER_PIXEL,
            ratio_column_width: N_RATIO_COLUMN_WIDTH_PER_PIXEL,
        }
    }
}

/// Row height / column width pair applied uniformly to a sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecGridSize {
    /// Row height in points.
    pub row_height: f64,
    /// Column width in character units.
    pub column_width: f64,
}

/// Text of one shape as exposed by a [`crate::BookSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecShapeText {
    /// Enumeration index within the sheet, used to address the shape on write.
    pub index: usize,
    /// Shape name.
    pub name: String,
    /// Paragraph texts joined with `\n`.
    pub text: String,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
