//! XLSX constants and default presets.

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: u32 = 1_048_576;
/// Excel worksheet maximum column count (`XFD`).
pub const N_NCOLS_EXCEL_MAX: u32 = 16_384;

/// Font applied by `change_font` when the caller does not name one.
pub const C_FONT_NAME_DEFAULT: &str = "Meiryo UI";

/// Row height (points) per pixel of grid cell size. Visual calibration, not a unit conversion.
pub const N_RATIO_ROW_HEIGHT_PER_PIXEL: f64 = 0.75;
/// Column width (character units) per pixel of grid cell size. Visual calibration.
pub const N_RATIO_COLUMN_WIDTH_PER_PIXEL: f64 = 0.14;

/// Location label prefix for matches found in shape text.
pub const C_SHAPE_LOCATION_PREFIX: &str = "Shape: ";
/// Separator used when flattening shape paragraphs into one string.
pub const C_SHAPE_PARAGRAPH_SEPARATOR: char = '\n';

/// UTF-8 byte-order mark written at the head of exported CSV files.
pub const BYTES_UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
/// CSV field delimiter.
pub const N_CSV_DELIMITER: u8 = b',';
