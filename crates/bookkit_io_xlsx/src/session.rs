//! Scoped workbook sessions used by search, replace and grid sizing.
//!
//! A [`BookSession`] is the automation-style view of one opened workbook:
//! sheets, used ranges, cell text, shape text and uniform row/column sizing.
//! [`UmyaBookSession`] implements it on the OOXML file directly and releases
//! the loaded workbook when dropped.

use std::path::{Path, PathBuf};

use umya_spreadsheet::drawing::{Paragraph, Run};
use umya_spreadsheet::drawing::spreadsheet::Shape;
use umya_spreadsheet::{Spreadsheet, Worksheet};

use crate::book::{
    derive_cell_text, derive_sheet_names, derive_sheet_used_range, find_sheet, find_sheet_mut,
    load_book, save_book,
};
use crate::conf::C_SHAPE_PARAGRAPH_SEPARATOR;
use crate::spec::{SpecGridSize, SpecShapeText, SpecUsedRange, WorkbookError};
use crate::util::validate_cell_bound;

////////////////////////////////////////////////////////////////////////////////
// #region SessionContract

/// Access mode requested when opening a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumSessionMode {
    ReadOnly,
    ReadWrite,
}

/// One opened workbook. Implementations release their resources on drop.
pub trait BookSession {
    /// Path the session was opened from.
    fn path(&self) -> &Path;

    /// Sheet names in workbook order.
    fn sheet_names(&self) -> Vec<String>;

    /// Bounding box of stored cells, `None` for an empty sheet.
    fn used_range(&self, sheet_name: &str) -> Result<Option<SpecUsedRange>, WorkbookError>;

    /// Cell value as text; absent cells read as `""`.
    fn cell_text(&self, sheet_name: &str, row: u32, col: u32) -> Result<String, WorkbookError>;

    fn set_cell_text(
        &mut self,
        sheet_name: &str,
        row: u32,
        col: u32,
        text: &str,
    ) -> Result<(), WorkbookError>;

    /// Shapes carrying a text body, in enumeration order.
    fn shapes(&self, sheet_name: &str) -> Result<Vec<SpecShapeText>, WorkbookError>;

    /// Replace the text of the shape at `index` (as reported by [`BookSession::shapes`]).
    fn set_shape_text(
        &mut self,
        sheet_name: &str,
        index: usize,
        text: &str,
    ) -> Result<(), WorkbookError>;

    /// Apply one row height and one column width to the whole sheet.
    fn set_uniform_grid(&mut self, sheet_name: &str, size: &SpecGridSize)
    -> Result<(), WorkbookError>;

    /// Persist pending edits in place.
    fn save(&mut self) -> Result<(), WorkbookError>;
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region UmyaSession

/// [`BookSession`] over a workbook loaded with `umya-spreadsheet`.
pub struct UmyaBookSession {
    path_book: PathBuf,
    book: Spreadsheet,
    mode: EnumSessionMode,
    if_dirty: bool,
}

impl UmyaBookSession {
    pub fn open<P: AsRef<Path>>(file_book: P, mode: EnumSessionMode) -> Result<Self, WorkbookError> {
        let path_book = file_book.as_ref().to_path_buf();
        let book = load_book(&path_book)?;
        log::debug!("Session opened ({mode:?}) {}", path_book.display());
        Ok(Self {
            path_book,
            book,
            mode,
            if_dirty: false,
        })
    }

    pub fn mode(&self) -> EnumSessionMode {
        self.mode
    }

    fn sheet_mut(&mut self, sheet_name: &str) -> Result<&mut Worksheet, WorkbookError> {
        if self.mode == EnumSessionMode::ReadOnly {
            return Err(WorkbookError::ReadOnlySession(self.path_book.clone()));
        }
        find_sheet_mut(&mut self.book, sheet_name, &self.path_book)
    }
}

impl BookSession for UmyaBookSession {
    fn path(&self) -> &Path {
        &self.path_book
    }

    fn sheet_names(&self) -> Vec<String> {
        derive_sheet_names(&self.book)
    }

    fn used_range(&self, sheet_name: &str) -> Result<Option<SpecUsedRange>, WorkbookError> {
        let sheet = find_sheet(&self.book, sheet_name, &self.path_book)?;
        Ok(derive_sheet_used_range(sheet))
    }

    fn cell_text(&self, sheet_name: &str, row: u32, col: u32) -> Result<String, WorkbookError> {
        validate_cell_bound(row, col)?;
        let sheet = find_sheet(&self.book, sheet_name, &self.path_book)?;
        Ok(derive_cell_text(sheet, row, col))
    }

    fn set_cell_text(
        &mut self,
        sheet_name: &str,
        row: u32,
        col: u32,
        text: &str,
    ) -> Result<(), WorkbookError> {
        validate_cell_bound(row, col)?;
        let sheet = self.sheet_mut(sheet_name)?;
        sheet.get_cell_mut((col, row)).set_value(text);
        self.if_dirty = true;
        Ok(())
    }

    fn shapes(&self, sheet_name: &str) -> Result<Vec<SpecShapeText>, WorkbookError> {
        let sheet = find_sheet(&self.book, sheet_name, &self.path_book)?;
        let l_shapes = sheet
            .get_worksheet_drawing()
            .get_two_cell_anchor_collection()
            .iter()
            .enumerate()
            .filter_map(|(index, anchor)| {
                let shape = anchor.get_shape()?;
                let text = derive_shape_text(shape)?;
                Some(SpecShapeText {
                    index,
                    name: derive_shape_name(shape),
                    text,
                })
            })
            .collect();
        Ok(l_shapes)
    }

    fn set_shape_text(
        &mut self,
        sheet_name: &str,
        index: usize,
        text: &str,
    ) -> Result<(), WorkbookError> {
        let sheet = self.sheet_mut(sheet_name)?;
        let text_body = sheet
            .get_worksheet_drawing_mut()
            .get_two_cell_anchor_collection_mut()
            .get_mut(index)
            .and_then(|anchor| anchor.get_shape_mut())
            .and_then(|shape| shape.get_text_body_mut())
            .ok_or_else(|| WorkbookError::ShapeNotFound {
                sheet_name: sheet_name.to_string(),
                index,
            })?;

        // New runs inherit the formatting of the first existing run.
        let run_template = text_body
            .get_paragraph()
            .iter()
            .flat_map(|para| para.get_run().iter())
            .next()
            .cloned()
            .unwrap_or_default();

        let l_paragraphs = text_body.get_paragraph_mut();
        l_paragraphs.clear();
        for line in text.split(C_SHAPE_PARAGRAPH_SEPARATOR) {
            let mut run = run_template.clone();
            run.set_text(line);
            let mut para = Paragraph::default();
            para.add_run(run);
            l_paragraphs.push(para);
        }
        self.if_dirty = true;
        Ok(())
    }

    fn set_uniform_grid(
        &mut self,
        sheet_name: &str,
        size: &SpecGridSize,
    ) -> Result<(), WorkbookError> {
        let sheet = self.sheet_mut(sheet_name)?;

        let format = sheet.get_sheet_format_properties_mut();
        format.set_default_row_height(size.row_height);
        format.set_custom_height(true);
        format.set_default_column_width(size.column_width);

        // Explicit dimensions win over the defaults: give the used area its own,
        // then overwrite every dimension already stored anywhere on the sheet.
        if let Some(range) = derive_sheet_used_range(sheet).map(|r| r.anchored_at_origin()) {
            for n_row in range.row_min..=range.row_max {
                sheet.get_row_dimension_mut(&n_row);
            }
            for n_col in range.col_min..=range.col_max {
                sheet.get_column_dimension_by_number_mut(&n_col);
            }
        }
        for row in sheet.get_row_dimensions_mut() {
            row.set_height(size.row_height);
            row.set_custom_height(true);
        }
        for col in sheet.get_column_dimensions_mut() {
            col.set_width(size.column_width);
            col.set_best_fit(false);
            col.set_auto_width(false);
        }
        self.if_dirty = true;
        Ok(())
    }

    fn save(&mut self) -> Result<(), WorkbookError> {
        if self.mode == EnumSessionMode::ReadOnly {
            return Err(WorkbookError::ReadOnlySession(self.path_book.clone()));
        }
        save_book(&self.book, &self.path_book)?;
        self.if_dirty = false;
        Ok(())
    }
}

impl Drop for UmyaBookSession {
    fn drop(&mut self) {
        if self.if_dirty {
            log::debug!(
                "Session released with unsaved edits discarded {}",
                self.path_book.display()
            );
        } else {
            log::debug!("Session released {}", self.path_book.display());
        }
    }
}

fn derive_shape_name(shape: &Shape) -> String {
    shape
        .get_non_visual_shape_properties()
        .get_non_visual_drawing_properties()
        .get_name()
        .to_string()
}

/// Paragraph texts joined with the separator; `None` without a text body.
fn derive_shape_text(shape: &Shape) -> Option<String> {
    let text_body = shape.get_text_body()?;
    let l_lines: Vec<String> = text_body
        .get_paragraph()
        .iter()
        .map(|para| para.get_run().iter().map(Run::get_text).collect())
        .collect();
    Some(l_lines.join(C_SHAPE_PARAGRAPH_SEPARATOR.to_string().as_str()))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
