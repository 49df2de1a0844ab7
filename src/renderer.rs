//! Render pipeline orchestration.
//! Discovers the template tree, plans destinations, rejects collisions and
//! finally writes the output.

use indexmap::IndexMap;
use log::debug;
use std::path::{Path, PathBuf};

use crate::config::{get_template_config, TemplateConfig};
use crate::error::Result;
use crate::fields::FieldMap;
use crate::guard;
use crate::ignore::SkipPatterns;
use crate::planner::{self, RenderPlan, TemplateRoot};
use crate::reporter::Reporter;
use crate::walker;
use crate::writer::Writer;

/// What the caller asks to render.
#[derive(Debug, Clone, Default)]
pub struct RenderRequest {
    /// Name of the template in the configuration
    pub template_name: String,
    /// Field names mapped to their values, applied in insertion order
    pub fields: IndexMap<String, String>,
}

/// Builds the render plan for `config` without touching the output.
///
/// # Arguments
/// * `config` - Template locations and skip patterns
/// * `fields` - Compiled field substitutions
/// * `working_dir` - Directory the configured paths are relative to
///
/// # Errors
/// * `Error::TemplateDoesNotExistError` / `Error::ConfigError` if the template root cannot be classified
/// * `Error::InvalidPatternError` for a malformed skip pattern
/// * `Error::WalkError` if the template tree cannot be read
pub fn build_plan(config: &TemplateConfig, fields: &FieldMap, working_dir: &Path) -> Result<RenderPlan> {
    let template_root = TemplateRoot::resolve(config.template_dir(working_dir))?;
    let output_root = config.output_dir(working_dir);
    let skip = SkipPatterns::new(config.skip_patterns.as_slice(), working_dir)?;

    let template_files = walker::discover(template_root.path(), &skip)?;
    planner::plan(&template_files, &template_root, &output_root, fields, &skip)
}

/// Renders the template described by `config`.
///
/// Nothing is written unless every planned destination is free.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Absolute paths of the written files
pub fn render(
    config: &TemplateConfig,
    fields: &IndexMap<String, String>,
    working_dir: &Path,
    reporter: &dyn Reporter,
) -> Result<Vec<PathBuf>> {
    let fields = FieldMap::new(fields)?;
    let plan = build_plan(config, &fields, working_dir)?;
    debug!("Render plan has {} file(s)", plan.len());

    guard::check(&plan, working_dir)?;

    let written = Writer::new(&fields, working_dir, reporter).write(&plan)?;
    reporter.finished();
    Ok(written)
}

/// Looks up `request.template_name` in the configuration at
/// `config_location` and renders it.
pub fn render_files<P: AsRef<Path>>(
    request: &RenderRequest,
    config_location: P,
    working_dir: &Path,
    reporter: &dyn Reporter,
) -> Result<Vec<PathBuf>> {
    let config = get_template_config(&request.template_name, config_location)?;
    debug!("Rendering template '{}'", request.template_name);
    render(&config, &request.fields, working_dir, reporter)
}
