//! Template tree discovery.

use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::Result;
use crate::ignore::SkipPatterns;

/// Enumerates the concrete files that make up the template at `root`.
///
/// A plain file root is returned as is; skip patterns are not consulted for
/// it here. For a directory root, every directory (the root included) that
/// matches a skip pattern is pruned together with its subtree. Symlinks are
/// followed, and files appear in directory listing order.
///
/// # Errors
/// * `Error::WalkError` on any unreadable entry or broken link
pub fn discover<P: AsRef<Path>>(root: P, skip: &SkipPatterns) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.metadata()?.is_dir() {
        debug!("Single file template: {}", root.display());
        return Ok(vec![root.to_path_buf()]);
    }

    let walker = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| !(entry.file_type().is_dir() && skip.is_match(entry.path())));

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            files.push(entry.into_path());
        }
    }

    debug!("Discovered {} template file(s) under {}", files.len(), root.display());
    Ok(files)
}
