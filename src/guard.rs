//! Pre-flight collision detection for render plans.

use log::debug;
use std::path::Path;

use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::planner::RenderPlan;

/// Fails on the first planned destination that already exists.
///
/// Runs over the whole plan before anything is written, so a rejected render
/// leaves the filesystem untouched. Destinations shared by several entries of
/// the same plan are not reported here.
///
/// # Errors
/// * `Error::DestinationExistsError` with the path relative to `working_dir`
/// * `Error::IoError` if a destination cannot be probed
pub fn check(plan: &RenderPlan, working_dir: &Path) -> Result<()> {
    for entry in plan {
        if entry.dest.try_exists()? {
            return Err(Error::DestinationExistsError {
                path: entry.dest.relative_to(working_dir).display().to_string(),
            });
        }
    }
    debug!("No collisions across {} planned file(s)", plan.len());
    Ok(())
}
