use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::spec::{C_TEMP_FILE_MARKER, FindBooksError, SpecFindBooksOptions};

////////////////////////////////////////////////////////////////////////////////
// #region PatternMatching

/// Outcome of checking one file basename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EnumNameVerdict {
    /// Extension matches and the name is not a lock file.
    Accept,
    /// Extension matches but the name carries the temp-file marker.
    SkipTemp,
    /// Extension does not match.
    Reject,
}

#[derive(Debug, Clone)]
pub(crate) struct SpecBookPatterns {
    set_include: GlobSet,
}

impl SpecBookPatterns {
    pub(crate) fn from_options(
        spec_find_options: &SpecFindBooksOptions,
    ) -> Result<Self, FindBooksError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in spec_find_options.patterns_include() {
            let glob = Glob::new(pattern).map_err(|e| {
                FindBooksError::InvalidPattern(format!("Invalid extension pattern: {e}"))
            })?;
            builder.add(glob);
        }
        let set_include = builder.build().map_err(|e| {
            FindBooksError::InvalidPattern(format!("Invalid extension pattern set: {e}"))
        })?;
        Ok(Self { set_include })
    }

    pub(crate) fn classify(&self, name_file: &str) -> EnumNameVerdict {
        if !self.set_include.is_match(name_file) {
            return EnumNameVerdict::Reject;
        }
        if name_file.starts_with(C_TEMP_FILE_MARKER) {
            return EnumNameVerdict::SkipTemp;
        }
        EnumNameVerdict::Accept
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
