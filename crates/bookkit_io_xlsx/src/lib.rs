//! `bookkit_io_xlsx` v1:
//! Rust-side workbook maintenance kernel.
//!
//! - `conf`    : constants and default presets
//! - `spec`    : specs/models/options and the crate error
//! - `util`    : pure helper functions
//! - `matcher` : search/replace matching rule
//! - `session` : scoped workbook sessions (`BookSession`)
//! - `sheet`   : sheet listing and ordering
//! - `export`  : sheet-to-CSV export
//! - `style`   : sheet-wide font change
//! - `search`  : search and replace over cells and shapes
//! - `grid`    : uniform row height / column width
pub mod conf;
pub mod export;
pub mod grid;
pub mod matcher;
pub mod search;
pub mod session;
pub mod sheet;
pub mod spec;
pub mod style;
pub mod util;

mod book;
#[cfg(test)]
mod testing;

pub use conf::{
    C_FONT_NAME_DEFAULT, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, N_RATIO_COLUMN_WIDTH_PER_PIXEL,
    N_RATIO_ROW_HEIGHT_PER_PIXEL,
};
pub use export::export_sheet_to_csv;
pub use grid::set_grid_size;
pub use matcher::TextMatcher;
pub use search::{replace_in_book, replace_in_session, scan_session, search_book};
pub use session::{BookSession, EnumSessionMode, UmyaBookSession};
pub use sheet::{list_sheet_names, sort_sheet_names};
pub use spec::{
    EnumMatchLocation, EnumSheetOrder, SpecGridRatios, SpecGridSize, SpecMatchOptions,
    SpecMatchRecord, SpecReplaceRecord, SpecShapeText, SpecUsedRange, WorkbookError,
};
pub use style::change_font;
pub use util::{derive_cell_reference, derive_column_letters, derive_grid_size};
