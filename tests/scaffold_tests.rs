use diff_scaffold::commands::scaffold::scaffold_command;
use diff_scaffold::manifest::{file_spec, DIRS, FILES, PROJECT_ROOT};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

/// Every file under `root`, as relative path → contents.
fn snapshot(root: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut files = BTreeMap::new();
    for entry in WalkDir::new(root) {
        let entry = entry.unwrap();
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap()
            .to_string_lossy()
            .replace('\\', "/");
        files.insert(rel, fs::read(entry.path()).unwrap());
    }
    files
}

/// Every directory under `root` (excluding `root` itself), relative.
fn dir_set(root: &Path) -> BTreeSet<String> {
    let mut dirs = BTreeSet::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.unwrap();
        if entry.file_type().is_dir() {
            let rel = entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            dirs.insert(rel);
        }
    }
    dirs
}

#[test]
fn test_fresh_scaffold_matches_manifest_exactly() {
    let temp_dir = TempDir::new().unwrap();

    scaffold_command(temp_dir.path()).unwrap();

    let root = temp_dir.path().join(PROJECT_ROOT);

    let expected_files: BTreeSet<String> =
        FILES.iter().map(|spec| spec.path.to_string()).collect();
    let actual_files: BTreeSet<String> = snapshot(&root).into_keys().collect();
    assert_eq!(actual_files, expected_files);

    let expected_dirs: BTreeSet<String> = DIRS.iter().map(|d| d.to_string()).collect();
    assert_eq!(dir_set(&root), expected_dirs);
}

#[test]
fn test_generated_contents_are_byte_identical_to_manifest() {
    let temp_dir = TempDir::new().unwrap();

    scaffold_command(temp_dir.path()).unwrap();

    let root = temp_dir.path().join(PROJECT_ROOT);
    for spec in FILES {
        let on_disk = fs::read(root.join(spec.path)).unwrap();
        assert_eq!(
            on_disk,
            spec.contents.as_bytes(),
            "content mismatch for {}",
            spec.path
        );
    }
}

#[test]
fn test_scaffolding_twice_changes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join(PROJECT_ROOT);

    scaffold_command(temp_dir.path()).unwrap();
    let first = snapshot(&root);
    let first_dirs = dir_set(&root);

    scaffold_command(temp_dir.path()).unwrap();
    let second = snapshot(&root);
    let second_dirs = dir_set(&root);

    assert_eq!(first, second);
    assert_eq!(first_dirs, second_dirs);
}

#[test]
fn test_existing_root_directory_is_populated() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join(PROJECT_ROOT)).unwrap();

    scaffold_command(temp_dir.path()).unwrap();

    let root = temp_dir.path().join(PROJECT_ROOT);
    assert!(root.join("app/main.py").is_file());
    assert!(root.join("logs").is_dir());
}

#[test]
fn test_root_obstructed_by_file_fails_and_preserves_it() {
    let temp_dir = TempDir::new().unwrap();
    let obstruction = temp_dir.path().join(PROJECT_ROOT);
    fs::write(&obstruction, "precious user data").unwrap();

    let result = scaffold_command(temp_dir.path());

    assert!(result.is_err());
    assert_eq!(
        fs::read_to_string(&obstruction).unwrap(),
        "precious user data"
    );
}

#[test]
fn test_main_py_stub_literal() {
    let temp_dir = TempDir::new().unwrap();

    scaffold_command(temp_dir.path()).unwrap();

    let main_py = temp_dir
        .path()
        .join(PROJECT_ROOT)
        .join("app")
        .join("main.py");
    let contents = fs::read_to_string(&main_py).unwrap();

    assert_eq!(contents, file_spec("app/main.py").unwrap().contents);

    // Docstring block followed by the TODO marker, nothing else.
    let non_blank: Vec<&str> = contents.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(
        non_blank,
        vec![
            "\"\"\"",
            "FastAPI application entry point for diff service.",
            "\"\"\"",
            "# TODO: Implement FastAPI app and entry point",
        ]
    );
}

#[test]
fn test_logs_directory_is_created_empty() {
    let temp_dir = TempDir::new().unwrap();

    scaffold_command(temp_dir.path()).unwrap();

    let logs = temp_dir.path().join(PROJECT_ROOT).join("logs");
    assert!(logs.is_dir());
    assert_eq!(fs::read_dir(&logs).unwrap().count(), 0);
}
