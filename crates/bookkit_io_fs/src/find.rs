//! Workbook file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use crate::report::{ReportFindBooks, ReportFindBooksBuilder};
use crate::spec::{FindBooksError, SpecFindBooksOptions};
use crate::util::{EnumNameVerdict, SpecBookPatterns};

#[derive(Debug)]
struct SpecFindContext {
    spec_find_options: SpecFindBooksOptions,
    spec_book_pats: SpecBookPatterns,
    builder_find_report: ReportFindBooksBuilder,
}

/// Collect workbook files under `dir_source`.
///
/// - `.xlsx` always, `.xlsm` when `if_include_xlsm` is set;
/// - names starting with `~$` (Office lock files) are skipped;
/// - with `if_recursive`, a directory's own files come before those of its
///   subdirectories, and entries are visited in name order.
///
/// Returns [`FindBooksError`] only when the root itself cannot be listed.
pub fn find_workbook_files<P>(
    dir_source: P,
    spec_find_options: SpecFindBooksOptions,
) -> Result<ReportFindBooks, FindBooksError>
where
    P: AsRef<Path>,
{
    let path_dir_src = dir_source.as_ref().to_path_buf();
    if !path_dir_src.is_dir() {
        return Err(FindBooksError::SourceNotDirectory(path_dir_src));
    }

    let spec_book_pats = SpecBookPatterns::from_options(&spec_find_options)?;
    let mut spec_find_ctx = SpecFindContext {
        spec_find_options,
        spec_book_pats,
        builder_find_report: ReportFindBooksBuilder::default(),
    };

    let iter_entries =
        fs::read_dir(&path_dir_src).map_err(|e| FindBooksError::ReadDirFailed {
            path: path_dir_src.clone(),
            message: e.to_string(),
        })?;
    walk_entries(&path_dir_src, iter_entries, &mut spec_find_ctx);

    let report = spec_find_ctx.builder_find_report.build();
    log::info!("{} root={}", report, path_dir_src.display());
    Ok(report)
}

fn walk_directory(path_root: &Path, spec_find_ctx: &mut SpecFindContext) {
    let iter_entries = match fs::read_dir(path_root) {
        Ok(iter) => iter,
        Err(e) => {
            spec_find_ctx.builder_find_report.add_warning(format!(
                "Failed to read directory {} ({e})",
                path_root.display()
            ));
            return;
        }
    };
    walk_entries(path_root, iter_entries, spec_find_ctx);
}

fn walk_entries(path_root: &Path, iter_entries: fs::ReadDir, spec_find_ctx: &mut SpecFindContext) {
    let mut l_dirs: Vec<(String, PathBuf)> = Vec::new();
    let mut l_files: Vec<(String, PathBuf)> = Vec::new();

    for _entry_res in iter_entries {
        let entry = match _entry_res {
            Ok(v) => v,
            Err(e) => {
                spec_find_ctx.builder_find_report.add_warning(format!(
                    "Failed to read directory entry under {} ({e})",
                    path_root.display()
                ));
                continue;
            }
        };

        let path_entry = entry.path();
        let c_name = entry.file_name().to_string_lossy().to_string();
        let cfg_file_type = match entry.file_type() {
            Ok(v) => v,
            Err(e) => {
                spec_find_ctx
                    .builder_find_report
                    .add_warning(format!("Failed to inspect {} ({e})", path_entry.display()));
                continue;
            }
        };

        if cfg_file_type.is_dir() {
            l_dirs.push((c_name, path_entry));
        } else if cfg_file_type.is_file() || (cfg_file_type.is_symlink() && path_entry.is_file())
        {
            l_files.push((c_name, path_entry));
        }
        // Symlinked directories and special files are neither listed nor descended.
    }

    l_files.sort_by(|a, b| a.0.cmp(&b.0));
    for (c_name, path_file) in l_files {
        spec_find_ctx.builder_find_report.add_scanned();
        match spec_find_ctx.spec_book_pats.classify(&c_name) {
            EnumNameVerdict::Accept => spec_find_ctx.builder_find_report.add_matched(path_file),
            EnumNameVerdict::SkipTemp => spec_find_ctx.builder_find_report.add_skipped_temp(),
            EnumNameVerdict::Reject => {}
        }
    }

    if !spec_find_ctx.spec_find_options.if_recursive {
        return;
    }

    l_dirs.sort_by(|a, b| a.0.cmp(&b.0));
    for (_, path_dir_sub) in l_dirs {
        walk_directory(&path_dir_sub, spec_find_ctx);
    }
}
