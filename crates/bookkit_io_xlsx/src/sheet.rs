//! Sheet name listing and ordering.

use std::path::Path;

use crate::book::{derive_sheet_names, load_book};
use crate::spec::{EnumSheetOrder, WorkbookError};

/// Sheet names in stored workbook order.
pub fn list_sheet_names<P>(file_book: P) -> Result<Vec<String>, WorkbookError>
where
    P: AsRef<Path>,
{
    let book = load_book(file_book.as_ref())?;
    Ok(derive_sheet_names(&book))
}

/// Sheet names sorted case-sensitively by `order`.
///
/// Read-only: the workbook keeps its stored sheet order.
pub fn sort_sheet_names<P>(file_book: P, order: EnumSheetOrder) -> Result<Vec<String>, WorkbookError>
where
    P: AsRef<Path>,
{
    let mut l_names = list_sheet_names(file_book)?;
    l_names.sort();
    if order == EnumSheetOrder::Desc {
        l_names.reverse();
    }
    Ok(l_names)
}
