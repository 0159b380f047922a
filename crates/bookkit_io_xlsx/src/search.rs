//! Search and replace across cell values and shape text.
//!
//! Traversal order is fixed: sheets in workbook order, then the used range of
//! each sheet row by row, then the sheet's shapes in enumeration order.

use std::path::Path;

use crate::matcher::TextMatcher;
use crate::session::{BookSession, EnumSessionMode, UmyaBookSession};
use crate::spec::{
    EnumMatchLocation, SpecMatchOptions, SpecMatchRecord, SpecReplaceRecord, WorkbookError,
};

/// One text slot visited by the traversal.
struct SpecVisit {
    sheet_name: String,
    location: EnumMatchLocation,
    /// Shape index for shape slots.
    shape_index: Option<usize>,
    value: String,
}

fn collect_visits<S>(session: &S) -> Result<Vec<SpecVisit>, WorkbookError>
where
    S: BookSession + ?Sized,
{
    let mut l_visits = Vec::new();
    for sheet_name in session.sheet_names() {
        if let Some(range) = session.used_range(&sheet_name)? {
            for row in range.row_min..=range.row_max {
                for col in range.col_min..=range.col_max {
                    l_visits.push(SpecVisit {
                        sheet_name: sheet_name.clone(),
                        location: EnumMatchLocation::Cell { row, col },
                        shape_index: None,
                        value: session.cell_text(&sheet_name, row, col)?,
                    });
                }
            }
        }
        for shape in session.shapes(&sheet_name)? {
            l_visits.push(SpecVisit {
                sheet_name: sheet_name.clone(),
                location: EnumMatchLocation::Shape { name: shape.name },
                shape_index: Some(shape.index),
                value: shape.text,
            });
        }
    }
    Ok(l_visits)
}

/// Every cell or shape of an opened session whose text satisfies `matcher`.
pub fn scan_session<S>(session: &S, matcher: &TextMatcher) -> Result<Vec<SpecMatchRecord>, WorkbookError>
where
    S: BookSession + ?Sized,
{
    let l_records: Vec<SpecMatchRecord> = collect_visits(session)?
        .into_iter()
        .filter(|visit| matcher.is_match(&visit.value))
        .map(|visit| {
            log::debug!("[SEARCH] hit {}!{}", visit.sheet_name, visit.location);
            SpecMatchRecord {
                sheet_name: visit.sheet_name,
                location: visit.location,
                value: visit.value,
            }
        })
        .collect();
    Ok(l_records)
}

/// Rewrite every matching text slot of an opened session. Does not save.
///
/// A slot is written only when the replacement changes its value.
pub fn replace_in_session<S>(
    session: &mut S,
    matcher: &TextMatcher,
    replacement: &str,
) -> Result<Vec<SpecReplaceRecord>, WorkbookError>
where
    S: BookSession + ?Sized,
{
    let mut l_records = Vec::new();
    for visit in collect_visits(session)? {
        let Some(value_new) = matcher.replace(&visit.value, replacement) else {
            continue;
        };
        if value_new == visit.value {
            continue;
        }

        match (&visit.location, visit.shape_index) {
            (EnumMatchLocation::Cell { row, col }, _) => {
                session.set_cell_text(&visit.sheet_name, *row, *col, &value_new)?;
            }
            (EnumMatchLocation::Shape { .. }, Some(index)) => {
                session.set_shape_text(&visit.sheet_name, index, &value_new)?;
            }
            (EnumMatchLocation::Shape { .. }, None) => continue,
        }
        log::debug!(
            "[REPLACE] {}!{}: '{}' -> '{}'",
            visit.sheet_name,
            visit.location,
            visit.value,
            value_new
        );
        l_records.push(SpecReplaceRecord {
            sheet_name: visit.sheet_name,
            location: visit.location,
            value_old: visit.value,
            value_new,
        });
    }
    Ok(l_records)
}

/// Search a workbook file read-only.
pub fn search_book<P>(
    file_book: P,
    search: &str,
    options: SpecMatchOptions,
) -> Result<Vec<SpecMatchRecord>, WorkbookError>
where
    P: AsRef<Path>,
{
    let matcher = TextMatcher::new(search, options)?;
    let session = UmyaBookSession::open(file_book, EnumSessionMode::ReadOnly)?;
    let l_records = scan_session(&session, &matcher)?;
    log::info!(
        "[SEARCH] '{search}' matches={} {}",
        l_records.len(),
        session.path().display()
    );
    Ok(l_records)
}

/// Replace matches in a workbook file and save it in place.
///
/// With `if_use_regex`, `replacement` uses the `regex` crate syntax: groups
/// are `$1` / `${name}` (not `\1`) and a literal dollar sign is `$$`.
pub fn replace_in_book<P>(
    file_book: P,
    search: &str,
    replacement: &str,
    options: SpecMatchOptions,
) -> Result<Vec<SpecReplaceRecord>, WorkbookError>
where
    P: AsRef<Path>,
{
    let matcher = TextMatcher::new(search, options)?;
    let mut session = UmyaBookSession::open(file_book, EnumSessionMode::ReadWrite)?;
    let l_records = replace_in_session(&mut session, &matcher, replacement)?;
    session.save()?;
    log::info!(
        "[REPLACE] '{search}' -> '{replacement}' replaced={} {}",
        l_records.len(),
        session.path().display()
    );
    Ok(l_records)
}
