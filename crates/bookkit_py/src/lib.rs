use std::collections::BTreeMap;

use bookkit_io_fs::{FindBooksError, ReportFindBooks, SpecFindBooksOptions, find_workbook_files};
use bookkit_io_xlsx::{
    C_FONT_NAME_DEFAULT, EnumSheetOrder, SpecGridRatios, SpecMatchOptions, WorkbookError,
    change_font, export_sheet_to_csv, list_sheet_names, replace_in_book, search_book,
    set_grid_size, sort_sheet_names,
};
use pyo3::exceptions::{PyNotADirectoryError, PyOSError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

const N_BRIDGE_ABI_VERSION: u64 = 1;
const C_BRIDGE_CONTRACT_VERSION: &str = "bookkit.excel_operator.v1";
const C_BRIDGE_TRANSPORT: &str = "rust_native";

////////////////////////////////////////////////////////////////////////////////
// #region Report

#[pyclass(name = "ReportFindBooks")]
#[derive(Debug, Clone)]
struct PyReportFindBooks {
    inner: ReportFindBooks,
}

impl From<ReportFindBooks> for PyReportFindBooks {
    fn from(report_find: ReportFindBooks) -> Self {
        Self { inner: report_find }
    }
}

impl PyReportFindBooks {
    fn derive_paths(&self) -> Vec<String> {
        self.inner
            .paths
            .iter()
            .map(|path| path.to_string_lossy().to_string())
            .collect()
    }
}

#[pymethods]
impl PyReportFindBooks {
    #[getter]
    fn paths(&self) -> Vec<String> {
        self.derive_paths()
    }

    #[getter]
    fn cnt_scanned(&self) -> u64 {
        self.inner.cnt_scanned
    }

    #[getter]
    fn cnt_matched(&self) -> u64 {
        self.inner.cnt_matched
    }

    #[getter]
    fn cnt_skipped_temp(&self) -> u64 {
        self.inner.cnt_skipped_temp
    }

    #[getter]
    fn warnings(&self) -> Vec<String> {
        self.inner.warnings.clone()
    }

    #[getter]
    fn warning_count(&self) -> usize {
        self.inner.warning_count()
    }

    fn to_dict(&self) -> BTreeMap<String, u64> {
        self.inner.to_dict()
    }

    #[pyo3(signature = (prefix = "[FIND]"))]
    fn format(&self, prefix: &str) -> String {
        self.inner.format(prefix)
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ErrorMapping

fn map_find_books_error(exception: FindBooksError) -> PyErr {
    match exception {
        FindBooksError::SourceNotDirectory(path_src) => PyNotADirectoryError::new_err(format!(
            "Source is not a directory: {}",
            path_src.display()
        )),
        FindBooksError::ReadDirFailed { path, message } => PyOSError::new_err(format!(
            "Failed to read directory {}: {message}",
            path.display()
        )),
        FindBooksError::InvalidPattern(message) => PyValueError::new_err(message),
    }
}

fn map_workbook_error(exception: WorkbookError) -> PyErr {
    let c_message = exception.to_string();
    match exception {
        WorkbookError::InvalidArgument(_)
        | WorkbookError::InvalidOrder(_)
        | WorkbookError::InvalidPattern(_)
        | WorkbookError::SheetNotFound { .. } => PyValueError::new_err(c_message),
        WorkbookError::OpenFailed { .. }
        | WorkbookError::SaveFailed { .. }
        | WorkbookError::CsvWrite { .. }
        | WorkbookError::Io(_) => PyOSError::new_err(c_message),
        WorkbookError::ReadOnlySession(_) | WorkbookError::ShapeNotFound { .. } => {
            PyRuntimeError::new_err(c_message)
        }
    }
}

fn parse_rule_order(value: &str) -> PyResult<EnumSheetOrder> {
    value.parse::<EnumSheetOrder>().map_err(map_workbook_error)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Functions

#[pyfunction(name = "find_workbook_files")]
#[pyo3(signature = (search_path, sub_dir_flg = false, xlsm_flg = false))]
fn find_workbook_files_py(
    py: Python<'_>,
    search_path: String,
    sub_dir_flg: bool,
    xlsm_flg: bool,
) -> PyResult<PyReportFindBooks> {
    let spec_find_options = SpecFindBooksOptions {
        if_recursive: sub_dir_flg,
        if_include_xlsm: xlsm_flg,
    };
    let report_find = py.allow_threads(|| find_workbook_files(search_path, spec_find_options));
    let report_find = report_find.map_err(map_find_books_error)?;
    Ok(PyReportFindBooks::from(report_find))
}

#[pyfunction(name = "get_files_in_path")]
#[pyo3(signature = (search_path, sub_dir_flg = false, xlsm_flg = false))]
fn get_files_in_path_py(
    py: Python<'_>,
    search_path: String,
    sub_dir_flg: bool,
    xlsm_flg: bool,
) -> PyResult<Vec<String>> {
    let report_find = find_workbook_files_py(py, search_path, sub_dir_flg, xlsm_flg)?;
    Ok(report_find.derive_paths())
}

#[pyfunction(name = "get_sheets_name")]
fn get_sheets_name_py(py: Python<'_>, excel_file_path: String) -> PyResult<Vec<String>> {
    py.allow_threads(|| list_sheet_names(excel_file_path))
        .map_err(map_workbook_error)
}

#[pyfunction(name = "sort_sheet")]
#[pyo3(signature = (excel_file_path, order = "asc"))]
fn sort_sheet_py(py: Python<'_>, excel_file_path: String, order: &str) -> PyResult<Vec<String>> {
    let rule_order = parse_rule_order(order)?;
    py.allow_threads(|| sort_sheet_names(excel_file_path, rule_order))
        .map_err(map_workbook_error)
}

#[pyfunction(name = "convert_csv")]
fn convert_csv_py(
    py: Python<'_>,
    excel_file_path: String,
    sheet_name: String,
    csv_file_path: String,
) -> PyResult<()> {
    py.allow_threads(|| export_sheet_to_csv(excel_file_path, &sheet_name, csv_file_path))
        .map_err(map_workbook_error)?;
    Ok(())
}

#[pyfunction(name = "change_font")]
#[pyo3(signature = (excel_file_path, sheet_name, font_name = C_FONT_NAME_DEFAULT))]
fn change_font_py(
    py: Python<'_>,
    excel_file_path: String,
    sheet_name: String,
    font_name: &str,
) -> PyResult<()> {
    py.allow_threads(|| change_font(excel_file_path, &sheet_name, font_name))
        .map_err(map_workbook_error)?;
    Ok(())
}

#[pyfunction(name = "search_string_in_book")]
#[pyo3(signature = (excel_file_path, search_string, exact_match = false, use_regex = false))]
fn search_string_in_book_py(
    py: Python<'_>,
    excel_file_path: String,
    search_string: String,
    exact_match: bool,
    use_regex: bool,
) -> PyResult<Vec<(String, String, String)>> {
    let spec_match_options = SpecMatchOptions {
        if_exact_match: exact_match,
        if_use_regex: use_regex,
    };
    let l_records = py
        .allow_threads(|| search_book(excel_file_path, &search_string, spec_match_options))
        .map_err(map_workbook_error)?;
    Ok(l_records
        .into_iter()
        .map(|record| (record.sheet_name, record.location.to_string(), record.value))
        .collect())
}

#[pyfunction(name = "replace_string_in_book")]
#[pyo3(signature = (
    excel_file_path,
    search_string,
    replace_string,
    exact_match = false,
    use_regex = false
))]
fn replace_string_in_book_py(
    py: Python<'_>,
    excel_file_path: String,
    search_string: String,
    replace_string: String,
    exact_match: bool,
    use_regex: bool,
) -> PyResult<Vec<(String, String, String, String)>> {
    let spec_match_options = SpecMatchOptions {
        if_exact_match: exact_match,
        if_use_regex: use_regex,
    };
    let l_records = py
        .allow_threads(|| {
            replace_in_book(
                excel_file_path,
                &search_string,
                &replace_string,
                spec_match_options,
            )
        })
        .map_err(map_workbook_error)?;
    Ok(l_records
        .into_iter()
        .map(|record| {
            (
                record.sheet_name,
                record.location.to_string(),
                record.value_old,
                record.value_new,
            )
        })
        .collect())
}

#[pyfunction(name = "set_grid_size")]
fn set_grid_size_py(
    py: Python<'_>,
    excel_file_path: String,
    sheet_name: String,
    pixel_size: u32,
) -> PyResult<()> {
    let spec_ratios = SpecGridRatios::default();
    py.allow_threads(|| set_grid_size(excel_file_path, &sheet_name, pixel_size, &spec_ratios))
        .map_err(map_workbook_error)?;
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[pymodule]
fn _bookkit_rs(module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_class::<PyReportFindBooks>()?;
    module.add_function(wrap_pyfunction!(find_workbook_files_py, module)?)?;
    module.add_function(wrap_pyfunction!(get_files_in_path_py, module)?)?;
    module.add_function(wrap_pyfunction!(get_sheets_name_py, module)?)?;
    module.add_function(wrap_pyfunction!(sort_sheet_py, module)?)?;
    module.add_function(wrap_pyfunction!(convert_csv_py, module)?)?;
    module.add_function(wrap_pyfunction!(change_font_py, module)?)?;
    module.add_function(wrap_pyfunction!(search_string_in_book_py, module)?)?;
    module.add_function(wrap_pyfunction!(replace_string_in_book_py, module)?)?;
    module.add_function(wrap_pyfunction!(set_grid_size_py, module)?)?;
    module.add("__bridge_abi__", N_BRIDGE_ABI_VERSION)?;
    module.add("__bridge_contract__", C_BRIDGE_CONTRACT_VERSION)?;
    module.add("__bridge_transport__", C_BRIDGE_TRANSPORT)?;
    Ok(())
}
