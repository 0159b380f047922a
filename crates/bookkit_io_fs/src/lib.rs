//! `bookkit_io_fs` v1:
//! Rust-side workbook file discovery.
//!
//! - `find`   : directory traversal and filtering
//! - `spec`   : constants/options/errors
//! - `report` : run-time report model
//! - `util`   : extension pattern matching

pub mod find;
pub mod report;
pub mod spec;
mod util;

pub use find::find_workbook_files;
pub use report::{ReportFindBooks, ReportFindBooksBuilder};
pub use spec::{
    C_PATTERN_XLSM, C_PATTERN_XLSX, C_TEMP_FILE_MARKER, FindBooksError, SpecFindBooksOptions,
};
