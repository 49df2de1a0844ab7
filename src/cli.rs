//! Command-line interface implementation for stencil.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use indexmap::IndexMap;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Command-line arguments structure for stencil.
#[derive(Parser, Debug)]
#[command(author, version, about = "stencil: render file and directory templates", long_about = None)]
pub struct Args {
    /// Name of the template to render, as declared in the configuration
    #[arg(value_name = "TEMPLATE", required_unless_present = "list")]
    pub template: Option<String>,

    /// Field substitutions, e.g. '{{name}}=World'. Applied in the given order
    #[arg(value_name = "FIELD=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    /// Configuration file, or a directory containing stencil.json / stencil.yml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// List the configured templates and exit
    #[arg(short, long)]
    pub list: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Collects the field arguments into an ordered map.
    ///
    /// # Errors
    /// * `Error::InvalidFieldError` if the same field name is given twice
    pub fn field_map(&self) -> Result<IndexMap<String, String>> {
        let mut fields = IndexMap::with_capacity(self.fields.len());
        for (name, value) in &self.fields {
            if fields.insert(name.clone(), value.clone()).is_some() {
                return Err(Error::InvalidFieldError(format!("'{name}' is given more than once")));
            }
        }
        Ok(fields)
    }
}

/// Splits a `FIELD=VALUE` argument at the first `=`.
pub fn parse_field(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some(("", _)) => Err(format!("field name is empty in '{s}'")),
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(format!("expected FIELD=VALUE, got '{s}'")),
    }
}

/// Prints the condensed help shown when required arguments are missing.
pub fn print_usage() -> std::io::Result<()> {
    Args::command()
        .help_template(
            r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
        )
        .print_help()
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                if let Err(e) = print_usage() {
                    eprintln!("{e}");
                }
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
