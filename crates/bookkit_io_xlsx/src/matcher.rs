//! Text matching rules shared by search and replace.

use regex::Regex;

use crate::spec::{SpecMatchOptions, WorkbookError};

/// Compiled matching rule.
///
/// | regex | exact | rule                          |
/// |-------|-------|-------------------------------|
/// | no    | no    | substring containment         |
/// | no    | yes   | full equality                 |
/// | yes   | no    | pattern found anywhere        |
/// | yes   | yes   | pattern spans the whole value |
#[derive(Debug, Clone)]
pub enum TextMatcher {
    /// Plain substring search.
    Contains(String),
    /// Whole-value equality.
    Equals(String),
    /// Regular expression (already anchored for exact mode).
    Pattern(Regex),
}

impl TextMatcher {
    /// Build a matcher for `search` under `options`.
    pub fn new(search: &str, options: SpecMatchOptions) -> Result<Self, WorkbookError> {
        if search.is_empty() {
            return Err(WorkbookError::InvalidArgument(
                "Search string must not be empty.".to_string(),
            ));
        }

        if !options.if_use_regex {
            return Ok(if options.if_exact_match {
                Self::Equals(search.to_string())
            } else {
                Self::Contains(search.to_string())
            });
        }

        let c_pattern = if options.if_exact_match {
            format!("^(?:{search})$")
        } else {
            search.to_string()
        };
        let regex =
            Regex::new(&c_pattern).map_err(|e| WorkbookError::InvalidPattern(e.to_string()))?;
        Ok(Self::Pattern(regex))
    }

    /// Whether `value` matches.
    pub fn is_match(&self, value: &str) -> bool {
        match self {
            Self::Contains(needle) => value.contains(needle.as_str()),
            Self::Equals(needle) => value == needle,
            Self::Pattern(regex) => regex.is_match(value),
        }
    }

    /// Replacement result for `value`, or `None` when it does not match.
    ///
    /// Regex replacements accept `$1` / `${name}` group references; `$$` is a literal `$`.
    pub fn replace(&self, value: &str, replacement: &str) -> Option<String> {
        if !self.is_match(value) {
            return None;
        }
        Some(match self {
            Self::Contains(needle) => value.replace(needle.as_str(), replacement),
            Self::Equals(_) => replacement.to_string(),
            Self::Pattern(regex) => regex.replace_all(value, replacement).into_owned(),
        })
    }
}
