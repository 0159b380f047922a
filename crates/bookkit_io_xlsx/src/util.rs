//! Stateless helper utilities shared by the workbook operations.

use crate::conf::{N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX};
use crate::spec::{SpecGridRatios, SpecGridSize, SpecUsedRange, WorkbookError};

////////////////////////////////////////////////////////////////////////////////
// #region CellAddressing

/// Convert a 1-based column number to its letters (`1 -> A`, `27 -> AA`).
///
/// Bijective base-26; `0` yields an empty string.
pub fn derive_column_letters(col: u32) -> String {
    let mut n_rest = col;
    let mut l_chars: Vec<char> = Vec::new();
    while n_rest > 0 {
        let n_digit = (n_rest - 1) % 26;
        l_chars.push(char::from(b'A' + n_digit as u8));
        n_rest = (n_rest - 1) / 26;
    }
    l_chars.iter().rev().collect()
}

/// A1-style reference for a 1-based `(row, col)`.
pub fn derive_cell_reference(row: u32, col: u32) -> String {
    format!("{}{row}", derive_column_letters(col))
}

/// Bounding rectangle of `(col, row)` coordinates, `None` when empty.
pub fn derive_used_range<I>(coords: I) -> Option<SpecUsedRange>
where
    I: IntoIterator<Item = (u32, u32)>,
{
    coords
        .into_iter()
        .fold(None, |acc: Option<SpecUsedRange>, (col, row)| {
            Some(match acc {
                None => SpecUsedRange {
                    row_min: row,
                    row_max: row,
                    col_min: col,
                    col_max: col,
                },
                Some(range) => SpecUsedRange {
                    row_min: range.row_min.min(row),
                    row_max: range.row_max.max(row),
                    col_min: range.col_min.min(col),
                    col_max: range.col_max.max(col),
                },
            })
        })
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region GridSizing

/// Row height and column width for a square grid of `pixel_size` pixels.
pub fn derive_grid_size(
    pixel_size: u32,
    ratios: &SpecGridRatios,
) -> Result<SpecGridSize, WorkbookError> {
    if pixel_size == 0 {
        return Err(WorkbookError::InvalidArgument(
            "Arg `pixel_size` must be >= 1.".to_string(),
        ));
    }
    if ratios.ratio_row_height <= 0.0 || ratios.ratio_column_width <= 0.0 {
        return Err(WorkbookError::InvalidArgument(
            "Grid ratios must be > 0.".to_string(),
        ));
    }
    let n_pixel = f64::from(pixel_size);
    Ok(SpecGridSize {
        row_height: n_pixel * ratios.ratio_row_height,
        column_width: n_pixel * ratios.ratio_column_width,
    })
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

pub(crate) fn validate_cell_bound(row: u32, col: u32) -> Result<(), WorkbookError> {
    if row == 0 || row > N_NROWS_EXCEL_MAX {
        return Err(WorkbookError::InvalidArgument(format!(
            "row index out of range: {row}"
        )));
    }
    if col == 0 || col > N_NCOLS_EXCEL_MAX {
        return Err(WorkbookError::InvalidArgument(format!(
            "column index out of range: {col}"
        )));
    }
    Ok(())
}
