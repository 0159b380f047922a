//! Discovery report models and mutable report builder.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Result of one `find_workbook_files` run.
#[derive(Debug, Default, Clone)]
pub struct ReportFindBooks {
    /// Matching workbook paths in traversal order.
    pub paths: Vec<PathBuf>,
    /// Total file entries inspected.
    pub cnt_scanned: u64,
    /// Number of files accepted into `paths`.
    pub cnt_matched: u64,
    /// Number of extension matches dropped for carrying the temp-file marker.
    pub cnt_skipped_temp: u64,
    /// Non-fatal warnings (unreadable nested directories, odd entries).
    pub warnings: Vec<String>,
}

impl ReportFindBooks {
    /// Number of collected warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_scanned".to_string(), self.cnt_scanned);
        dict_counts.insert("cnt_matched".to_string(), self.cnt_matched);
        dict_counts.insert("cnt_skipped_temp".to_string(), self.cnt_skipped_temp);
        dict_counts.insert("cnt_warnings".to_string(), self.warning_count() as u64);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} scanned={} matched={} skipped_temp={} warnings={}",
            self.cnt_scanned,
            self.cnt_matched,
            self.cnt_skipped_temp,
            self.warning_count()
        )
    }
}

impl fmt::Display for ReportFindBooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[FIND]"))
    }
}

/// Mutable accumulator used during the walk.
#[derive(Debug, Default, Clone)]
pub struct ReportFindBooksBuilder {
    paths: Vec<PathBuf>,
    cnt_scanned: u64,
    cnt_skipped_temp: u64,
    warnings: Vec<String>,
}

impl ReportFindBooksBuilder {
    /// Increment scanned count by one.
    pub fn add_scanned(&mut self) {
        self.cnt_scanned += 1;
    }

    /// Increment temp-marker skip count by one.
    pub fn add_skipped_temp(&mut self) {
        self.cnt_skipped_temp += 1;
    }

    /// Record one accepted workbook path.
    pub fn add_matched(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    /// Add warning message.
    pub fn add_warning(&mut self, warning: String) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportFindBooks {
        ReportFindBooks {
            cnt_matched: self.paths.len() as u64,
            paths: self.paths,
            cnt_scanned: self.cnt_scanned,
            cnt_skipped_temp: self.cnt_skipped_temp,
            warnings: self.warnings,
        }
    }
}
