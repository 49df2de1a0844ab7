//! Field substitution applied to template paths and file contents.
//!
//! Field names are regular expression sources, not literal strings: a name
//! like `a.b` also matches `axb`. Callers that want literal matching must
//! escape their names with [`regex::escape`] before building the map. A name
//! that does not compile as a pattern (the common `{{name}}` token style, for
//! instance) is matched literally instead.
//!
//! Fields are applied one after another in insertion order. When a value
//! contains another field's name, a later field rewrites it again within the
//! same call, so the outcome depends on that order.

use indexmap::IndexMap;
use log::{debug, trace};
use regex::{NoExpand, Regex};

use crate::error::{Error, Result};

/// An ordered set of compiled field substitutions.
#[derive(Debug, Clone, Default)]
pub struct FieldMap {
    fields: Vec<(Regex, String)>,
}

impl FieldMap {
    /// Compiles every field name of `fields` into a pattern.
    pub fn new(fields: &IndexMap<String, String>) -> Result<Self> {
        let fields = fields
            .iter()
            .map(|(name, value)| -> Result<(Regex, String)> {
                Ok((compile_field(name)?, value.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { fields })
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Replaces all occurrences of every field name in `text` with its value.
    ///
    /// Values are inserted verbatim; `$1`-style references are not expanded.
    pub fn substitute(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (pattern, value) in &self.fields {
            let replaced = pattern.replace_all(&result, NoExpand(value));
            if let std::borrow::Cow::Owned(replaced) = replaced {
                trace!("Field '{}' applied", pattern.as_str());
                result = replaced;
            }
        }
        result
    }
}

fn compile_field(name: &str) -> Result<Regex> {
    Regex::new(name)
        .or_else(|e| {
            debug!("Field '{name}' is not a pattern ({e}), matching it literally");
            Regex::new(&regex::escape(name))
        })
        .map_err(|source| Error::InvalidPatternError { pattern: name.to_string(), source })
}
