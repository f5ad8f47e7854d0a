//! Directory traversal with exclusion pruning.
//!
//! Depth-first walk yielding one item per directory with that directory's
//! candidate files. Subdirectories on the exclusion list are pruned before
//! descent, so their contents are never enumerated.

use shared_utils::colors;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Directory names that are never descended into.
pub const EXCLUDED_DIRS: &[&str] = &[
    ".git",
    ".vscode",
    ".idea",
    "node_modules",
    "__pycache__",
    "__MACOSX",
    "vendor",
    "bin",
    "venv",
];

/// One visited directory.
#[derive(Debug, Clone)]
pub struct WalkedDir {
    pub dir: PathBuf,
    /// Subdirectories remaining after exclusion pruning.
    pub subdir_count: usize,
    /// All files in the directory, candidates or not.
    pub file_count: usize,
    /// Files whose name ends with the input extension, in name order.
    pub candidates: Vec<PathBuf>,
}

/// Lazy depth-first iterator over a directory tree.
///
/// Each `next()` reads one directory: prunes excluded subdirectory names,
/// pushes the survivors for later visits, and collects candidate files by
/// suffix. Prints the per-directory status line and one line per pruned
/// subdirectory as it goes. Unreadable directories are logged and skipped.
pub struct DirWalker {
    root: PathBuf,
    suffix: String,
    pending: Vec<PathBuf>,
}

impl DirWalker {
    pub fn new<P: AsRef<Path>>(root: P, input_extension: &str) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            pending: vec![root.clone()],
            root,
            suffix: format!(".{}", input_extension),
        }
    }

    fn read_one(&mut self, dir: &Path) -> Option<WalkedDir> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Cannot read directory, skipping");
                colors::print_warning(&format!("Cannot read directory {}: {}", dir.display(), e));
                return None;
            }
        };

        let mut subdirs: Vec<PathBuf> = Vec::new();
        let mut files: Vec<PathBuf> = Vec::new();

        for entry in entries.flatten() {
            let path = entry.path();
            match entry.file_type() {
                Ok(t) if t.is_dir() => subdirs.push(path),
                Ok(t) if t.is_file() => files.push(path),
                _ => {}
            }
        }

        subdirs.sort();
        files.sort();

        subdirs.retain(|sub| {
            let name = sub.file_name().map(|n| n.to_string_lossy().into_owned());
            let excluded = name
                .as_deref()
                .is_some_and(|n| EXCLUDED_DIRS.contains(&n));
            if excluded {
                println!(
                    "{} {}",
                    colors::error().apply_to("Skipping directory:"),
                    colors::number().apply_to(name.unwrap_or_default())
                );
            }
            !excluded
        });

        // Reverse push so the first subdirectory is visited next.
        for sub in subdirs.iter().rev() {
            self.pending.push(sub.clone());
        }

        let candidates: Vec<PathBuf> = files
            .iter()
            .filter(|f| {
                f.file_name()
                    .is_some_and(|n| n.to_string_lossy().ends_with(&self.suffix))
            })
            .cloned()
            .collect();

        let relative = dir.strip_prefix(&self.root).unwrap_or(dir);
        println!(
            "{} {} | {} {} | {} {}",
            colors::info().apply_to("Root:"),
            colors::number().apply_to(relative.display()),
            colors::info().apply_to("Directories:"),
            colors::number().apply_to(subdirs.len()),
            colors::info().apply_to("Files:"),
            colors::number().apply_to(files.len())
        );

        Some(WalkedDir {
            dir: dir.to_path_buf(),
            subdir_count: subdirs.len(),
            file_count: files.len(),
            candidates,
        })
    }
}

impl Iterator for DirWalker {
    type Item = WalkedDir;

    fn next(&mut self) -> Option<WalkedDir> {
        loop {
            let dir = self.pending.pop()?;
            if let Some(walked) = self.read_one(&dir) {
                return Some(walked);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{create_dir_all, File};

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    #[test]
    fn test_single_directory_candidates_by_suffix() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        touch(&root.join("a.ts"));
        touch(&root.join("b.ts"));
        touch(&root.join("notes.txt"));

        let dirs: Vec<WalkedDir> = DirWalker::new(root, "ts").collect();
        assert_eq!(dirs.len(), 1);

        let first = &dirs[0];
        assert_eq!(first.dir, root);
        assert_eq!(first.subdir_count, 0);
        assert_eq!(first.file_count, 3);

        let names: Vec<String> = first
            .candidates
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.ts", "b.ts"]);
    }

    #[test]
    fn test_suffix_match_is_exact_and_case_sensitive() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        touch(&root.join("upper.TS"));
        touch(&root.join("double.ts.bak"));
        touch(&root.join("plain.ts"));

        let dirs: Vec<WalkedDir> = DirWalker::new(root, "ts").collect();
        assert_eq!(dirs[0].candidates.len(), 1);
        assert!(dirs[0].candidates[0].ends_with("plain.ts"));
    }

    #[test]
    fn test_excluded_directories_are_never_visited() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        create_dir_all(root.join(".git/objects")).unwrap();
        touch(&root.join(".git/c.ts"));
        touch(&root.join(".git/objects/d.ts"));
        create_dir_all(root.join("season1")).unwrap();
        touch(&root.join("season1/e.ts"));

        let dirs: Vec<WalkedDir> = DirWalker::new(root, "ts").collect();

        let visited: Vec<&PathBuf> = dirs.iter().map(|d| &d.dir).collect();
        assert!(visited.iter().all(|d| !d.to_string_lossy().contains(".git")));

        let all_candidates: Vec<PathBuf> = dirs
            .iter()
            .flat_map(|d| d.candidates.iter().cloned())
            .collect();
        assert_eq!(all_candidates.len(), 1);
        assert!(all_candidates[0].ends_with("season1/e.ts"));
    }

    #[test]
    fn test_exclusion_does_not_count_pruned_subdirs() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        create_dir_all(root.join("node_modules")).unwrap();
        create_dir_all(root.join("venv")).unwrap();
        create_dir_all(root.join("kept")).unwrap();

        let first = DirWalker::new(root, "ts").next().unwrap();
        assert_eq!(first.subdir_count, 1);
    }

    #[test]
    fn test_depth_first_order() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        create_dir_all(root.join("a/inner")).unwrap();
        create_dir_all(root.join("b")).unwrap();

        let order: Vec<PathBuf> = DirWalker::new(root, "ts").map(|d| d.dir).collect();
        assert_eq!(
            order,
            vec![
                root.to_path_buf(),
                root.join("a"),
                root.join("a/inner"),
                root.join("b"),
            ]
        );
    }

    #[test]
    fn test_exclusion_matches_whole_name_only() {
        // "bin" is excluded; "binaries" is not.
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        create_dir_all(root.join("bin")).unwrap();
        create_dir_all(root.join("binaries")).unwrap();
        touch(&root.join("binaries/f.ts"));

        let dirs: Vec<WalkedDir> = DirWalker::new(root, "ts").collect();
        assert_eq!(dirs.len(), 2);
        assert!(dirs[1].dir.ends_with("binaries"));
        assert_eq!(dirs[1].candidates.len(), 1);
    }

    #[test]
    fn test_walker_is_restartable() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        touch(&root.join("a.ts"));

        let first: Vec<usize> = DirWalker::new(root, "ts").map(|d| d.candidates.len()).collect();
        let second: Vec<usize> = DirWalker::new(root, "ts").map(|d| d.candidates.len()).collect();
        assert_eq!(first, second);
    }
}
