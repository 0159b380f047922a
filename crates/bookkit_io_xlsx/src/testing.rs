//! Test-only helpers: temp directories and fixture workbooks.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rust_xlsxwriter::{Shape, ShapeFont, Workbook};

use crate::session::BookSession;
use crate::spec::{SpecGridSize, SpecShapeText, SpecUsedRange, WorkbookError};
use crate::util::derive_used_range;

static N_TEST_DIR_SEQ: AtomicUsize = AtomicUsize::new(0);

pub(crate) struct TestDir {
    path: PathBuf,
}

impl TestDir {
    pub(crate) fn new() -> Self {
        let n = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let n_seq = N_TEST_DIR_SEQ.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "bookkit_xlsx_test_{}_{n}_{n_seq}",
            std::process::id()
        ));
        std::fs::create_dir_all(&path).expect("create test dir");
        Self { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum EnumFixtureCell {
    Text(&'static str),
    Number(f64),
    Blank,
}

/// Write a workbook with one worksheet per `(name, rows)` entry, starting at `A1`.
pub(crate) fn write_fixture_book(path: &Path, sheets: &[(&str, Vec<Vec<EnumFixtureCell>>)]) {
    let mut workbook = Workbook::new();
    for (sheet_name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*sheet_name).expect("sheet name");
        for (n_idx_row, row) in rows.iter().enumerate() {
            for (n_idx_col, cell) in row.iter().enumerate() {
                let n_row = n_idx_row as u32;
                let n_col = n_idx_col as u16;
                match cell {
                    EnumFixtureCell::Text(val) => {
                        worksheet.write_string(n_row, n_col, *val).expect("write string");
                    }
                    EnumFixtureCell::Number(val) => {
                        worksheet.write_number(n_row, n_col, *val).expect("write number");
                    }
                    EnumFixtureCell::Blank => {}
                }
            }
        }
    }
    workbook.save(path).expect("save fixture");
}

/// Single-sheet fixture named `Sheet1`.
pub(crate) fn write_single_sheet_book(path: &Path, rows: Vec<Vec<EnumFixtureCell>>) {
    write_fixture_book(path, &[("Sheet1", rows)]);
}

/// `Sheet1` with `A1 = "a"` plus explicit sizes; indices are 0-based as in the writer.
pub(crate) fn write_sized_book(path: &Path, row_heights: &[(u32, f64)], col_widths: &[(u16, f64)]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Sheet1").expect("sheet name");
    worksheet.write_string(0, 0, "a").expect("write string");
    for (n_row, height) in row_heights {
        worksheet.set_row_height(*n_row, *height).expect("row height");
    }
    for (n_col, width) in col_widths {
        worksheet.set_column_width(*n_col, *width).expect("column width");
    }
    workbook.save(path).expect("save fixture");
}

/// `Sheet1` with `A1 = "a"` and one bold text box per entry, stacked down column C.
///
/// Boxes are named `TextBox 1`, `TextBox 2`, ... by the writer.
pub(crate) fn write_textbox_book(path: &Path, texts: &[&str]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Sheet1").expect("sheet name");
    worksheet.write_string(0, 0, "a").expect("write string");
    for (n_idx, text) in texts.iter().enumerate() {
        let shape = Shape::textbox()
            .set_text(*text)
            .set_font(&ShapeFont::new().set_bold());
        worksheet
            .insert_shape(n_idx as u32 * 10 + 1, 2, &shape)
            .expect("insert shape");
    }
    workbook.save(path).expect("save fixture");
}

////////////////////////////////////////////////////////////////////////////////
// #region FakeSession

#[derive(Debug, Default)]
pub(crate) struct FakeSheet {
    pub(crate) name: String,
    pub(crate) cells: BTreeMap<(u32, u32), String>,
    /// `(name, text)`; `None` text stands for a shape without a text body.
    pub(crate) shapes: Vec<(String, Option<String>)>,
    pub(crate) grid: Option<SpecGridSize>,
}

/// In-memory [`BookSession`] for traversal tests: textless shapes and exact
/// write bookkeeping without a file round trip.
#[derive(Debug)]
pub(crate) struct FakeBookSession {
    path_book: PathBuf,
    pub(crate) sheets: Vec<FakeSheet>,
    pub(crate) cnt_saved: usize,
}

impl FakeBookSession {
    pub(crate) fn new() -> Self {
        Self {
            path_book: PathBuf::from("fake.xlsx"),
            sheets: Vec::new(),
            cnt_saved: 0,
        }
    }

    /// Add a sheet; cells are `(row, col, text)`, shapes are `(name, text)`.
    pub(crate) fn with_sheet(
        mut self,
        name: &str,
        cells: &[(u32, u32, &str)],
        shapes: &[(&str, Option<&str>)],
    ) -> Self {
        self.sheets.push(FakeSheet {
            name: name.to_string(),
            cells: cells
                .iter()
                .map(|(row, col, text)| ((*row, *col), text.to_string()))
                .collect(),
            shapes: shapes
                .iter()
                .map(|(name, text)| (name.to_string(), text.map(str::to_string)))
                .collect(),
            grid: None,
        });
        self
    }

    pub(crate) fn sheet(&self, name: &str) -> &FakeSheet {
        self.sheets
            .iter()
            .find(|sheet| sheet.name == name)
            .expect("fake sheet")
    }

    fn find(&self, name: &str) -> Result<&FakeSheet, WorkbookError> {
        self.sheets
            .iter()
            .find(|sheet| sheet.name == name)
            .ok_or_else(|| WorkbookError::SheetNotFound {
                sheet_name: name.to_string(),
                path: self.path_book.clone(),
            })
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut FakeSheet, WorkbookError> {
        let path_book = self.path_book.clone();
        self.sheets
            .iter_mut()
            .find(|sheet| sheet.name == name)
            .ok_or_else(|| WorkbookError::SheetNotFound {
                sheet_name: name.to_string(),
                path: path_book,
            })
    }
}

impl BookSession for FakeBookSession {
    fn path(&self) -> &Path {
        &self.path_book
    }

    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|sheet| sheet.name.clone()).collect()
    }

    fn used_range(&self, sheet_name: &str) -> Result<Option<SpecUsedRange>, WorkbookError> {
        let sheet = self.find(sheet_name)?;
        Ok(derive_used_range(
            sheet.cells.keys().map(|(row, col)| (*col, *row)),
        ))
    }

    fn cell_text(&self, sheet_name: &str, row: u32, col: u32) -> Result<String, WorkbookError> {
        let sheet = self.find(sheet_name)?;
        Ok(sheet.cells.get(&(row, col)).cloned().unwrap_or_default())
    }

    fn set_cell_text(
        &mut self,
        sheet_name: &str,
        row: u32,
        col: u32,
        text: &str,
    ) -> Result<(), WorkbookError> {
        self.find_mut(sheet_name)?
            .cells
            .insert((row, col), text.to_string());
        Ok(())
    }

    fn shapes(&self, sheet_name: &str) -> Result<Vec<SpecShapeText>, WorkbookError> {
        let sheet = self.find(sheet_name)?;
        Ok(sheet
            .shapes
            .iter()
            .enumerate()
            .filter_map(|(index, (name, text))| {
                text.as_ref().map(|text| SpecShapeText {
                    index,
                    name: name.clone(),
                    text: text.clone(),
                })
            })
            .collect())
    }

    fn set_shape_text(
        &mut self,
        sheet_name: &str,
        index: usize,
        text: &str,
    ) -> Result<(), WorkbookError> {
        let slot = self
            .find_mut(sheet_name)?
            .shapes
            .get_mut(index)
            .and_then(|(_, text)| text.as_mut())
            .ok_or_else(|| WorkbookError::ShapeNotFound {
                sheet_name: sheet_name.to_string(),
                index,
            })?;
        *slot = text.to_string();
        Ok(())
    }

    fn set_uniform_grid(
        &mut self,
        sheet_name: &str,
        size: &SpecGridSize,
    ) -> Result<(), WorkbookError> {
        self.find_mut(sheet_name)?.grid = Some(*size);
        Ok(())
    }

    fn save(&mut self) -> Result<(), WorkbookError> {
        self.cnt_saved += 1;
        Ok(())
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
