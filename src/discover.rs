//! Expansion of command-line paths into the list of source files to annotate.

use crate::config::WalkOptions;
use crate::error::{Error, Result};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use std::path::{Path, PathBuf};

/// Expands `paths` into source files, in a reproducible order.
///
/// Directories are walked recursively; every file with the configured suffix
/// is kept unless it sits below a skipped directory name. Each
/// directory's files are sorted lexically by full path before being appended.
/// A plain file argument is kept as-is when it has the right suffix and is
/// otherwise ignored.
///
/// # Errors
/// - `Error::Walk` when a directory (or one of its entries) cannot be read.
pub fn collect_source_files(paths: &[PathBuf], opts: &WalkOptions) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for root in paths {
        if root.is_dir() {
            let mut found = Vec::new();
            // The root itself is never pruned, only what lies beneath it.
            let walker = WalkDir::new(root)
                .into_iter()
                .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e, opts));
            for entry in walker {
                let entry = entry.map_err(|e| Error::Walk {
                    root: root.clone(),
                    source: e,
                })?;
                let path = entry.path();
                if entry.file_type().is_file() && has_suffix(path, opts) {
                    found.push(path.to_path_buf());
                }
            }
            found.sort();
            debug!(root = %root.display(), files = found.len(), "walked directory");
            out.extend(found);
        } else if has_suffix(root, opts) {
            out.push(root.clone());
        } else {
            debug!(path = %root.display(), "ignoring non-source path");
        }
    }
    Ok(out)
}

fn has_suffix(path: &Path, opts: &WalkOptions) -> bool {
    path.extension().is_some_and(|ext| ext == opts.suffix.as_str())
}

fn is_skipped_dir(entry: &DirEntry, opts: &WalkOptions) -> bool {
    entry.file_type().is_dir()
        && opts
            .skipped_dirs
            .iter()
            .any(|d| entry.file_name() == d.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, rel: &str) {
        let p = root.join(rel);
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        fs::write(p, "").unwrap();
    }

    #[test]
    fn test_walk_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "b/lib.rs");
        touch(root, "a/z.rs");
        touch(root, "a/m/x.rs");
        touch(root, "a/readme.md");
        touch(root, "target/debug/build.rs");
        touch(root, "a/.cargo/registry/dep.rs");

        let got = collect_source_files(&[root.to_path_buf()], &WalkOptions::default()).unwrap();
        let rel: Vec<String> = got
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(rel, vec!["a/m/x.rs", "a/z.rs", "b/lib.rs"]);
    }

    #[test]
    fn test_extra_skipped_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "src/lib.rs");
        touch(root, "vendor/dep/lib.rs");

        let opts = WalkOptions::default().with_extra_skipped(&["vendor".to_string()]);
        let got = collect_source_files(&[root.to_path_buf()], &opts).unwrap();
        assert_eq!(got, vec![root.join("src/lib.rs")]);
    }

    #[test]
    fn test_explicit_files_keep_argument_order() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "z.rs");
        touch(root, "a.rs");
        touch(root, "notes.txt");

        let args = vec![root.join("z.rs"), root.join("notes.txt"), root.join("a.rs")];
        let got = collect_source_files(&args, &WalkOptions::default()).unwrap();
        assert_eq!(got, vec![root.join("z.rs"), root.join("a.rs")]);
    }

    #[test]
    fn test_missing_path_with_suffix_is_passed_through() {
        let got = collect_source_files(
            &[PathBuf::from("does/not/exist.rs")],
            &WalkOptions::default(),
        )
        .unwrap();
        assert_eq!(got, vec![PathBuf::from("does/not/exist.rs")]);
    }
}
