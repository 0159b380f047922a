//! Sheet-wide font change.

use std::path::Path;

use crate::book::{derive_sheet_used_range, find_sheet_mut, load_book, save_book};
use crate::spec::WorkbookError;

/// Set the font name of every cell from `A1` to the last used cell, then save.
///
/// Blank cells inside that rectangle get the font too. Returns the number of
/// cells touched.
pub fn change_font<P>(file_book: P, sheet_name: &str, font_name: &str) -> Result<u64, WorkbookError>
where
    P: AsRef<Path>,
{
    if font_name.is_empty() {
        return Err(WorkbookError::InvalidArgument(
            "Font name must not be empty.".to_string(),
        ));
    }
    let path_book = file_book.as_ref();

    let mut book = load_book(path_book)?;
    let sheet = find_sheet_mut(&mut book, sheet_name, path_book)?;

    let mut cnt_cells = 0u64;
    if let Some(range) = derive_sheet_used_range(sheet).map(|r| r.anchored_at_origin()) {
        for n_row in range.row_min..=range.row_max {
            for n_col in range.col_min..=range.col_max {
                sheet
                    .get_style_mut((n_col, n_row))
                    .get_font_mut()
                    .set_name(font_name);
                cnt_cells += 1;
            }
        }
    }
    save_book(&book, path_book)?;

    log::info!(
        "[FONT] sheet='{sheet_name}' font='{font_name}' cells={cnt_cells} {}",
        path_book.display()
    );
    Ok(cnt_cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::C_FONT_NAME_DEFAULT;
    use crate::testing::{EnumFixtureCell, TestDir, write_single_sheet_book};

    fn read_font_names(path_book: &Path) -> Vec<String> {
        let book = load_book(path_book).expect("load");
        let sheet = book.get_sheet_by_name("Sheet1").expect("sheet");
        let mut l_names = Vec::new();
        for n_row in 1..=2u32 {
            for n_col in 1..=2u32 {
                let c_name = sheet
                    .get_cell((n_col, n_row))
                    .and_then(|cell| cell.get_style().get_font())
                    .map(|font| font.get_name().to_string())
                    .unwrap_or_default();
                l_names.push(c_name);
            }
        }
        l_names
    }

    fn seed_book(path: &Path) {
        write_single_sheet_book(
            path,
            vec![
                vec![EnumFixtureCell::Text("a"), EnumFixtureCell::Blank],
                vec![EnumFixtureCell::Blank, EnumFixtureCell::Number(2.0)],
            ],
        );
    }

    #[test]
    fn font_covers_rectangle_from_origin() {
        let tmp = TestDir::new();
        let path_book = tmp.path().join("book.xlsx");
        seed_book(&path_book);

        let cnt = change_font(&path_book, "Sheet1", C_FONT_NAME_DEFAULT).expect("font");
        assert_eq!(cnt, 4);
        assert_eq!(read_font_names(&path_book), vec![C_FONT_NAME_DEFAULT; 4]);
    }

    #[test]
    fn font_change_is_idempotent() {
        let tmp = TestDir::new();
        let path_book = tmp.path().join("book.xlsx");
        seed_book(&path_book);

        let cnt_first = change_font(&path_book, "Sheet1", "Arial").expect("first");
        let l_first = read_font_names(&path_book);
        let cnt_second = change_font(&path_book, "Sheet1", "Arial").expect("second");
        let l_second = read_font_names(&path_book);

        assert_eq!(cnt_first, cnt_second);
        assert_eq!(l_first, l_second);
        assert_eq!(l_second, vec!["Arial"; 4]);
    }

    #[test]
    fn font_rejects_unknown_sheet_and_empty_name() {
        let tmp = TestDir::new();
        let path_book = tmp.path().join("book.xlsx");
        seed_book(&path_book);

        assert!(matches!(
            change_font(&path_book, "Nope", "Arial"),
            Err(WorkbookError::SheetNotFound { .. })
        ));
        assert!(matches!(
            change_font(&path_book, "Sheet1", ""),
            Err(WorkbookError::InvalidArgument(_))
        ));
    }
}
