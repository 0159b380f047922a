//! Load/save contract over `umya-spreadsheet` and sheet lookup helpers.

use std::path::Path;

use umya_spreadsheet::{Spreadsheet, Worksheet};

use crate::spec::{SpecUsedRange, WorkbookError};
use crate::util::derive_used_range;

/// Load a workbook fully into memory.
pub(crate) fn load_book(path_book: &Path) -> Result<Spreadsheet, WorkbookError> {
    log::debug!("Loading workbook {}", path_book.display());
    umya_spreadsheet::reader::xlsx::read(path_book).map_err(|e| WorkbookError::OpenFailed {
        path: path_book.to_path_buf(),
        message: e.to_string(),
    })
}

/// Write `book` to `path_book`, replacing the file.
pub(crate) fn save_book(book: &Spreadsheet, path_book: &Path) -> Result<(), WorkbookError> {
    log::debug!("Saving workbook {}", path_book.display());
    umya_spreadsheet::writer::xlsx::write(book, path_book).map_err(|e| {
        WorkbookError::SaveFailed {
            path: path_book.to_path_buf(),
            message: e.to_string(),
        }
    })
}

pub(crate) fn derive_sheet_names(book: &Spreadsheet) -> Vec<String> {
    book.get_sheet_collection_no_check()
        .iter()
        .map(|sheet| sheet.get_name().to_string())
        .collect()
}

pub(crate) fn find_sheet<'a>(
    book: &'a Spreadsheet,
    sheet_name: &str,
    path_book: &Path,
) -> Result<&'a Worksheet, WorkbookError> {
    book.get_sheet_by_name(sheet_name)
        .ok_or_else(|| WorkbookError::SheetNotFound {
            sheet_name: sheet_name.to_string(),
            path: path_book.to_path_buf(),
        })
}

pub(crate) fn find_sheet_mut<'a>(
    book: &'a mut Spreadsheet,
    sheet_name: &str,
    path_book: &Path,
) -> Result<&'a mut Worksheet, WorkbookError> {
    book.get_sheet_by_name_mut(sheet_name)
        .ok_or_else(|| WorkbookError::SheetNotFound {
            sheet_name: sheet_name.to_string(),
            path: path_book.to_path_buf(),
        })
}

/// Bounding box of every stored cell (value or formatting only).
pub(crate) fn derive_sheet_used_range(sheet: &Worksheet) -> Option<SpecUsedRange> {
    derive_used_range(sheet.get_cell_collection().into_iter().map(|cell| {
        let coord = cell.get_coordinate();
        (*coord.get_col_num(), *coord.get_row_num())
    }))
}

/// Stored value of a cell as text; absent cells read as `""`.
///
/// Formula cells yield their cached result.
pub(crate) fn derive_cell_text(sheet: &Worksheet, row: u32, col: u32) -> String {
    sheet
        .get_cell((col, row))
        .map(|cell| cell.get_value().to_string())
        .unwrap_or_default()
}
