//! Sheet-to-CSV export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::book::{derive_cell_text, derive_sheet_used_range, find_sheet, load_book};
use crate::conf::{BYTES_UTF8_BOM, N_CSV_DELIMITER};
use crate::spec::WorkbookError;

/// Write the values of `sheet_name` to `file_csv`.
///
/// Rows and columns run from `A1` to the last used cell; blanks become empty
/// fields and formulas are written as their cached result. Output is UTF-8
/// with a BOM, comma separated, CRLF terminated.
///
/// Returns the number of records written.
pub fn export_sheet_to_csv<P, Q>(
    file_book: P,
    sheet_name: &str,
    file_csv: Q,
) -> Result<u64, WorkbookError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let path_book = file_book.as_ref();
    let path_csv = file_csv.as_ref();

    let book = load_book(path_book)?;
    let sheet = find_sheet(&book, sheet_name, path_book)?;

    let mut file_out = BufWriter::new(File::create(path_csv)?);
    file_out.write_all(BYTES_UTF8_BOM)?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(N_CSV_DELIMITER)
        .terminator(csv::Terminator::CRLF)
        .from_writer(file_out);

    let mut n_rows_written = 0u64;
    if let Some(range) = derive_sheet_used_range(sheet).map(|r| r.anchored_at_origin()) {
        for n_row in range.row_min..=range.row_max {
            let l_fields: Vec<String> = (range.col_min..=range.col_max)
                .map(|n_col| derive_cell_text(sheet, n_row, n_col))
                .collect();
            writer
                .write_record(&l_fields)
                .map_err(|e| WorkbookError::CsvWrite {
                    path: path_csv.to_path_buf(),
                    message: e.to_string(),
                })?;
            n_rows_written += 1;
        }
    }
    writer.flush()?;

    log::info!(
        "[CSV] sheet='{sheet_name}' rows={n_rows_written} {} -> {}",
        path_book.display(),
        path_csv.display()
    );
    Ok(n_rows_written)
}
