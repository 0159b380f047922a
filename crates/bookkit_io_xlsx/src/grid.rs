//! "Graph paper" grid sizing.

use std::path::Path;

use crate::session::{BookSession, EnumSessionMode, UmyaBookSession};
use crate::spec::{SpecGridRatios, SpecGridSize, WorkbookError};
use crate::util::derive_grid_size;

/// Give every row and column of `sheet_name` the size of a `pixel_size` square.
///
/// Returns the applied row height / column width.
pub fn set_grid_size<P>(
    file_book: P,
    sheet_name: &str,
    pixel_size: u32,
    ratios: &SpecGridRatios,
) -> Result<SpecGridSize, WorkbookError>
where
    P: AsRef<Path>,
{
    let size = derive_grid_size(pixel_size, ratios)?;
    let mut session = UmyaBookSession::open(file_book, EnumSessionMode::ReadWrite)?;
    session.set_uniform_grid(sheet_name, &size)?;
    session.save()?;

    log::info!(
        "[GRID] sheet='{sheet_name}' px={pixel_size} row_height={} column_width={} {}",
        size.row_height,
        size.column_width,
        session.path().display()
    );
    Ok(size)
}
