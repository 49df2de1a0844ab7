//! Configuration handling for stencil.
//! This module loads the template registry and resolves a template name into
//! the locations and skip patterns used by one render.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Supported configuration file names
pub const CONFIG_FILES: [&str; 3] = ["stencil.json", "stencil.yml", "stencil.yaml"];

/// A single template entry of the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    /// Template file or directory, relative to the working directory
    pub template_path: PathBuf,
    /// Directory receiving the rendered output, relative to the working directory
    pub output_path: PathBuf,
    /// Regular expressions pruning files and directories from the template
    #[serde(default)]
    pub skip_patterns: Vec<String>,
}

impl TemplateConfig {
    /// Absolute template location for an invocation run from `working_dir`.
    pub fn template_dir(&self, working_dir: &Path) -> PathBuf {
        working_dir.join(&self.template_path)
    }

    /// Absolute output location for an invocation run from `working_dir`.
    pub fn output_dir(&self, working_dir: &Path) -> PathBuf {
        working_dir.join(&self.output_path)
    }
}

/// The whole configuration file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub templates: IndexMap<String, TemplateConfig>,
}

impl Config {
    /// Parses configuration content, trying JSON first and YAML second.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the content is neither
    pub fn parse(content: &str) -> Result<Self> {
        match serde_json::from_str(content) {
            Ok(config) => Ok(config),
            Err(json_err) => {
                debug!("Configuration is not JSON ({json_err}), trying YAML");
                serde_yaml::from_str(content)
                    .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}")))
            }
        }
    }

    /// Looks up a template by name.
    ///
    /// # Errors
    /// * `Error::ConfigError` naming the known templates if `name` is unknown
    pub fn template(&self, name: &str) -> Result<&TemplateConfig> {
        self.templates.get(name).ok_or_else(|| {
            let available: Vec<&str> = self.templates.keys().map(String::as_str).collect();
            Error::ConfigError(format!(
                "unknown template '{name}' (available: {})",
                available.join(", ")
            ))
        })
    }

    pub fn template_names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }
}

/// Finds the configuration file at `location`.
///
/// A file is used as is; a directory is searched for the first of
/// [`CONFIG_FILES`].
///
/// # Errors
/// * `Error::ConfigError` if no configuration file exists
pub fn find_config_file<P: AsRef<Path>>(location: P) -> Result<PathBuf> {
    let location = location.as_ref();
    if location.is_file() {
        return Ok(location.to_path_buf());
    }

    for file in CONFIG_FILES {
        let config_path = location.join(file);
        if config_path.is_file() {
            return Ok(config_path);
        }
    }

    Err(Error::ConfigError(format!(
        "No configuration file found in {} (tried: {})",
        location.display(),
        CONFIG_FILES.join(", ")
    )))
}

/// Loads and parses the configuration at `location`.
pub fn load_config<P: AsRef<Path>>(location: P) -> Result<Config> {
    let config_path = find_config_file(location)?;
    debug!("Loading configuration from {}", config_path.display());
    let content = std::fs::read_to_string(&config_path).map_err(Error::IoError)?;
    Config::parse(&content)
}

/// Returns the configuration of the template called `name`.
pub fn get_template_config<P: AsRef<Path>>(name: &str, location: P) -> Result<TemplateConfig> {
    let config = load_config(location)?;
    config.template(name).cloned()
}
