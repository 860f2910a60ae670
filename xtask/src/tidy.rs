use std::{
    fs,
    path::{Path, PathBuf},
};

use walkdir::{DirEntry, WalkDir};

#[test]
fn no_unwrap_in_library_code() {
    for path in rust_files(&project_root().join("src")) {
        let text = fs::read_to_string(&path).unwrap();
        let code = match text.find("#[cfg(test)]") {
            Some(idx) => &text[..idx],
            None => &text,
        };
        for bad in [".unwrap()", ".expect(", "panic!(", "todo!("] {
            assert!(!code.contains(bad), "`{bad}` in {}", path.display());
        }
    }
}

#[test]
fn trailing_whitespace() {
    for path in rust_files(&project_root()) {
        let text = fs::read_to_string(&path).unwrap();
        for (i, line) in text.lines().enumerate() {
            assert!(
                !line.ends_with(' ') && !line.ends_with('\t'),
                "trailing whitespace at {}:{}",
                path.display(),
                i + 1
            );
        }
    }
}

fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).ancestors().nth(1).unwrap().to_path_buf()
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped(entry))
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|it| it == "rs"))
        .map(DirEntry::into_path)
        .collect()
}

fn is_skipped(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name == "target" || name == "examples"
}
