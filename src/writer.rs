//! Materializes a render plan on disk.

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::fields::FieldMap;
use crate::planner::RenderPlan;
use crate::reporter::Reporter;

/// Writes the substituted content of every plan entry.
pub struct Writer<'a> {
    fields: &'a FieldMap,
    working_dir: &'a Path,
    reporter: &'a dyn Reporter,
}

impl<'a> Writer<'a> {
    pub fn new(fields: &'a FieldMap, working_dir: &'a Path, reporter: &'a dyn Reporter) -> Self {
        Self { fields, working_dir, reporter }
    }

    /// Reads and substitutes every source, then writes the results in plan order.
    ///
    /// All sources are read before the first write, so an unreadable source
    /// aborts without touching the output. A failing write leaves the files
    /// written before it in place.
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - Written destinations, in plan order
    pub fn write(&self, plan: &RenderPlan) -> Result<Vec<PathBuf>> {
        let mut staged = Vec::with_capacity(plan.len());
        for entry in plan {
            let content = read_file(&entry.src)?;
            staged.push((entry.dest.as_path(), self.fields.substitute(&content)));
        }
        debug!("Staged {} file(s)", staged.len());

        let mut written = Vec::with_capacity(staged.len());
        for (dest, content) in staged {
            write_file(dest, &content)?;
            let relative = dest.relative_to(self.working_dir);
            info!("Wrote '{}'", dest.display());
            self.reporter.added(&relative);
            written.push(dest.to_path_buf());
        }
        Ok(written)
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(Error::IoError)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::write(path, content).map_err(Error::IoError)
}
