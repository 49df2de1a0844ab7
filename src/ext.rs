//! Extension traits for built-in path types.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

pub trait PathExt {
    /// Returns this path expressed relative to `base`, lexically.
    ///
    /// Both paths are expected to be absolute. Missing shared components are
    /// bridged with `..` segments; a path equal to `base` yields `.`.
    fn relative_to<B: AsRef<Path>>(&self, base: B) -> PathBuf;

    /// Returns the path as `&str`, failing for non UTF-8 paths.
    fn to_str_checked(&self) -> Result<&str>;
}

impl PathExt for Path {
    fn relative_to<B: AsRef<Path>>(&self, base: B) -> PathBuf {
        let mut target = self.components().peekable();
        let mut base = base.as_ref().components().peekable();

        while let (Some(a), Some(b)) = (target.peek(), base.peek()) {
            if a != b {
                break;
            }
            target.next();
            base.next();
        }

        let mut relative = PathBuf::new();
        for component in base {
            if !matches!(component, Component::CurDir) {
                relative.push("..");
            }
        }
        for component in target {
            relative.push(component);
        }

        if relative.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            relative
        }
    }

    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| Error::NonUtf8PathError {
            path: self.display().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_to_child() {
        let path = Path::new("/work/out/greeting/hello.txt");
        assert_eq!(path.relative_to("/work"), PathBuf::from("out/greeting/hello.txt"));
    }

    #[test]
    fn test_relative_to_sibling() {
        let path = Path::new("/work/out/card.txt");
        assert_eq!(path.relative_to("/work/project"), PathBuf::from("../out/card.txt"));
    }

    #[test]
    fn test_relative_to_same() {
        assert_eq!(Path::new("/work").relative_to("/work"), PathBuf::from("."));
    }
}
