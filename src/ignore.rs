//! Skip pattern handling for stencil templates.
//! A skip pattern is a regular expression searched (not anchored) in a path
//! string; a match drops the file, or prunes the whole directory subtree.

use log::debug;
use regex::{Regex, RegexSet};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::ext::PathExt;

/// Compiled skip patterns, matched against absolute paths and against paths
/// relative to the invocation working directory.
#[derive(Debug, Clone)]
pub struct SkipPatterns {
    patterns: RegexSet,
    working_dir: PathBuf,
}

impl SkipPatterns {
    /// Compiles `patterns`.
    ///
    /// # Arguments
    /// * `patterns` - Regular expression sources from the template configuration
    /// * `working_dir` - Directory used to build the relative form of a path
    ///
    /// # Errors
    /// * `Error::InvalidPatternError` naming the first pattern that fails to compile
    pub fn new<S: AsRef<str>, P: AsRef<Path>>(patterns: &[S], working_dir: P) -> Result<Self> {
        // Compile one by one first so the error names the offending pattern.
        for pattern in patterns {
            let pattern = pattern.as_ref();
            Regex::new(pattern).map_err(|source| Error::InvalidPatternError {
                pattern: pattern.to_string(),
                source,
            })?;
        }
        let patterns = RegexSet::new(patterns).map_err(|source| {
            Error::InvalidPatternError { pattern: "<skip patterns>".to_string(), source }
        })?;

        Ok(Self { patterns, working_dir: working_dir.as_ref().to_path_buf() })
    }

    /// Returns a set that never matches.
    pub fn empty<P: AsRef<Path>>(working_dir: P) -> Self {
        Self { patterns: RegexSet::empty(), working_dir: working_dir.as_ref().to_path_buf() }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Tests `path` against every pattern.
    pub fn is_match<P: AsRef<Path>>(&self, path: P) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let path = path.as_ref();
        let absolute = path.to_string_lossy();
        if self.patterns.is_match(&absolute) {
            debug!("Skipping '{absolute}'");
            return true;
        }

        let relative = path.relative_to(&self.working_dir);
        let relative = relative.to_string_lossy();
        if self.patterns.is_match(&relative) {
            debug!("Skipping '{relative}'");
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_never_matches() {
        let skip = SkipPatterns::empty("/work");
        assert!(skip.is_empty());
        assert!(!skip.is_match("/work/anything"));
    }

    #[test]
    fn test_search_is_not_anchored() {
        let skip = SkipPatterns::new(&["node_modules"], "/work").unwrap();
        assert!(skip.is_match("/work/tpl/node_modules/pkg/index.js"));
        assert!(!skip.is_match("/work/tpl/src/index.js"));
    }

    #[test]
    fn test_relative_form_is_tested() {
        let skip = SkipPatterns::new(&["^a$"], "/work").unwrap();
        assert!(skip.is_match("/work/a"));
        assert!(!skip.is_match("/work/b/a"));
    }

    #[test]
    fn test_invalid_pattern_is_named() {
        match SkipPatterns::new(&["ok", "(broken"], "/work") {
            Err(Error::InvalidPatternError { pattern, .. }) => assert_eq!(pattern, "(broken"),
            other => panic!("Expected InvalidPatternError, got {other:?}"),
        }
    }
}
