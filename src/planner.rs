//! Destination planning: maps discovered template files to output paths.

use indexmap::IndexMap;
use log::{debug, warn};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::fields::FieldMap;
use crate::ignore::SkipPatterns;

/// How destinations are derived for files under a template root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// The template is a single file rendered directly into the output root.
    File,
    /// The template is a directory tree rendered under a renamed top-level folder.
    Directory,
}

/// The resolved template location, classified once per render.
#[derive(Debug, Clone)]
pub struct TemplateRoot {
    path: PathBuf,
    kind: TemplateKind,
}

impl TemplateRoot {
    /// Probes `path` and classifies it.
    ///
    /// # Errors
    /// * `Error::TemplateDoesNotExistError` if nothing exists at `path`
    /// * `Error::ConfigError` if the path cannot be probed
    pub fn resolve<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let metadata = path.metadata().map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::TemplateDoesNotExistError {
                template_path: path.display().to_string(),
            },
            _ => Error::ConfigError(format!("cannot probe '{}': {e}", path.display())),
        })?;
        let kind = if metadata.is_dir() { TemplateKind::Directory } else { TemplateKind::File };
        debug!("Template root {} is a {kind:?} template", path.display());

        Ok(Self { path: path.to_path_buf(), kind })
    }

    pub fn new<P: Into<PathBuf>>(path: P, kind: TemplateKind) -> Self {
        Self { path: path.into(), kind }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }
}

/// One planned file: where it is read from and where it is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputEntry {
    pub src: PathBuf,
    pub dest: PathBuf,
}

/// The ordered list of files a render will write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderPlan {
    entries: Vec<OutputEntry>,
}

impl RenderPlan {
    pub fn entries(&self) -> &[OutputEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Destinations claimed by more than one entry, with their sources.
    ///
    /// Such entries are written in plan order, so the last source wins.
    pub fn duplicate_destinations(&self) -> IndexMap<&Path, Vec<&Path>> {
        let mut by_dest: IndexMap<&Path, Vec<&Path>> = IndexMap::new();
        for entry in &self.entries {
            by_dest.entry(entry.dest.as_path()).or_default().push(entry.src.as_path());
        }
        by_dest.retain(|_, sources| sources.len() > 1);
        by_dest
    }
}

impl FromIterator<OutputEntry> for RenderPlan {
    fn from_iter<I: IntoIterator<Item = OutputEntry>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a RenderPlan {
    type Item = &'a OutputEntry;
    type IntoIter = std::slice::Iter<'a, OutputEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Builds the render plan for `template_files`.
///
/// Files matching a skip pattern are dropped; this applies to single file
/// templates too. Field substitution touches only the renamed root segment
/// and the path below it, never `output_root`.
///
/// # Arguments
/// * `template_files` - Files returned by [`crate::walker::discover`]
/// * `template_root` - The classified template location
/// * `output_root` - Absolute directory receiving the rendered output
/// * `fields` - Substitutions applied to path components
/// * `skip` - Skip patterns
///
/// # Errors
/// * `Error::NonUtf8PathError` if a path component to substitute is not UTF-8
pub fn plan<P: AsRef<Path>>(
    template_files: &[P],
    template_root: &TemplateRoot,
    output_root: &Path,
    fields: &FieldMap,
    skip: &SkipPatterns,
) -> Result<RenderPlan> {
    let mut entries = Vec::with_capacity(template_files.len());

    for file in template_files {
        let file = file.as_ref();
        if skip.is_match(file) {
            continue;
        }

        let entry = match template_root.kind() {
            TemplateKind::Directory => {
                directory_entry(file, template_root.path(), output_root, fields)?
            }
            TemplateKind::File => file_entry(template_root.path(), output_root, fields)?,
        };
        debug!("Planned '{}' -> '{}'", entry.src.display(), entry.dest.display());
        entries.push(entry);
    }

    let plan = RenderPlan { entries };
    for (dest, sources) in plan.duplicate_destinations() {
        warn!(
            "{} template files render to '{}'; the last one wins",
            sources.len(),
            dest.display()
        );
    }

    Ok(plan)
}

fn directory_entry(
    file: &Path,
    root: &Path,
    output_root: &Path,
    fields: &FieldMap,
) -> Result<OutputEntry> {
    let base = file_name(root).to_str_checked()?;
    // The remainder keeps its leading separator while fields are applied.
    let relative = file.strip_prefix(root).unwrap_or(file).to_str_checked()?;
    let relative = format!("{}{relative}", std::path::MAIN_SEPARATOR);

    let mut dest = output_root.to_path_buf();
    push_substituted(&mut dest, &fields.substitute(base));
    push_substituted(&mut dest, &fields.substitute(&relative));

    Ok(OutputEntry { src: file.to_path_buf(), dest })
}

fn file_entry(root: &Path, output_root: &Path, fields: &FieldMap) -> Result<OutputEntry> {
    let name = file_name(root).to_str_checked()?;

    let mut dest = output_root.to_path_buf();
    push_substituted(&mut dest, &fields.substitute(name));

    Ok(OutputEntry { src: root.to_path_buf(), dest })
}

fn file_name(path: &Path) -> &Path {
    path.file_name().map(Path::new).unwrap_or_else(|| Path::new(""))
}

// Leading separators are trimmed so a substituted value cannot replace the
// output root with an absolute path.
fn push_substituted(dest: &mut PathBuf, component: &str) {
    let component = component.trim_start_matches(std::path::is_separator);
    if !component.is_empty() {
        dest.push(component);
    }
}
