use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use stencil::error::Error;
use stencil::fields::FieldMap;
use stencil::guard;
use stencil::planner::{OutputEntry, RenderPlan};
use stencil::reporter::Reporter;
use stencil::writer::Writer;
use tempfile::TempDir;

struct SilentReporter;

impl Reporter for SilentReporter {
    fn added(&self, _path: &Path) {}
    fn finished(&self) {}
}

fn entry(src: &Path, dest: &Path) -> OutputEntry {
    OutputEntry { src: src.to_path_buf(), dest: dest.to_path_buf() }
}

#[test]
fn test_creates_intermediate_directories() {
    let temp_dir = TempDir::new().unwrap();
    let src = temp_dir.path().join("src.txt");
    fs::write(&src, "value: KEY").unwrap();
    let dest = temp_dir.path().join("deep/nested/dir/dest.txt");

    let mut map = IndexMap::new();
    map.insert("KEY".to_string(), "42".to_string());
    let fields = FieldMap::new(&map).unwrap();

    let plan: RenderPlan = vec![entry(&src, &dest)].into_iter().collect();
    let written = Writer::new(&fields, temp_dir.path(), &SilentReporter).write(&plan).unwrap();

    assert_eq!(written, vec![dest.clone()]);
    assert_eq!(fs::read_to_string(dest).unwrap(), "value: 42");
}

#[test]
fn test_unreadable_source_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let present = temp_dir.path().join("present.txt");
    fs::write(&present, "here").unwrap();
    let vanished = temp_dir.path().join("vanished.txt");

    let first = temp_dir.path().join("out/first.txt");
    let second = temp_dir.path().join("out/second.txt");
    let plan: RenderPlan =
        vec![entry(&present, &first), entry(&vanished, &second)].into_iter().collect();

    let fields = FieldMap::default();
    let result = Writer::new(&fields, temp_dir.path(), &SilentReporter).write(&plan);

    assert!(matches!(result, Err(Error::IoError(_))));
    assert!(!first.exists());
}

#[test]
fn test_guard_reports_relative_path() {
    let temp_dir = TempDir::new().unwrap();
    let taken = temp_dir.path().join("out/taken.txt");
    fs::create_dir_all(taken.parent().unwrap()).unwrap();
    fs::write(&taken, "").unwrap();

    let free = temp_dir.path().join("out/free.txt");
    let plan: RenderPlan = vec![entry(&free, &free), entry(&taken, &taken)].into_iter().collect();

    match guard::check(&plan, temp_dir.path()) {
        Err(Error::DestinationExistsError { path }) => {
            assert_eq!(path, Path::new("out/taken.txt").display().to_string())
        }
        other => panic!("Expected DestinationExistsError, got {other:?}"),
    }
}

#[test]
fn test_guard_accepts_existing_directory_parents() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("out")).unwrap();

    let dest = temp_dir.path().join("out/new.txt");
    let plan: RenderPlan = vec![entry(&dest, &dest)].into_iter().collect();

    assert!(guard::check(&plan, temp_dir.path()).is_ok());
}
