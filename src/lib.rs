//! stencil renders a template, either a single file or a directory tree, into
//! a new file or tree, replacing field names in both paths and contents.

/// Command-line interface module for the stencil application
pub mod cli;

/// Template registry loading
/// Supports JSON and YAML formats (stencil.json, stencil.yml, stencil.yaml)
pub mod config;

/// Error types and handling for the stencil application
pub mod error;

/// Extension traits for path types
pub mod ext;

/// Field substitution for paths and file contents
pub mod fields;

/// Pre-flight collision detection
pub mod guard;

/// Regex skip patterns pruning files and directories
pub mod ignore;

/// Destination path planning
pub mod planner;

/// Core render orchestration
/// Combines all components to generate the final output
pub mod renderer;

/// Per-file notifications
pub mod reporter;

/// Template tree discovery
pub mod walker;

/// Output materialization
pub mod writer;
