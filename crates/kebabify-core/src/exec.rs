//! Executes a planned [`OperationSet`] against the filesystem.
//!
//! Execution runs in three passes:
//!
//! 1. destination directories, shallowest first, so a parent always exists
//!    before its children;
//! 2. file moves, each one ensuring its destination parent exists;
//! 3. an advisory cleanup over the original directories, deepest first.
//!
//! Already created destinations are tracked in a set owned by the run so no
//! directory is created twice. A failing move aborts the remaining file
//! operations; completed moves stay where they are.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::CoreResult;
use crate::fs::ops::{ensure_dir, is_dir_empty, move_entry, remove_empty_dir, same_entry};
use crate::plan::operation::{Operation, OperationSet, Stats};

/// What the cleanup pass does with original directories left empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CleanupMode {
    /// Only check whether each original directory is empty.
    #[default]
    Inspect,
    /// Remove original directories that are empty and not a destination.
    Remove,
}

/// Options for a single [`Executor::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecuteOptions {
    /// Compute statistics only; touch nothing on disk.
    pub dry_run: bool,
    pub cleanup: CleanupMode,
}

/// Applies an [`OperationSet`] according to [`ExecuteOptions`].
#[derive(Debug, Clone, Default)]
pub struct Executor {
    options: ExecuteOptions,
}

impl Executor {
    pub fn new(options: ExecuteOptions) -> Self {
        Self { options }
    }

    /// Runs every operation in `set` and returns its planned statistics.
    ///
    /// The returned [`Stats`] always describe the full set, regardless of
    /// what the cleanup pass managed to do.
    ///
    /// # Errors
    ///
    /// - [`crate::CoreError::CreateDir`] if a destination directory cannot be created.
    /// - [`crate::CoreError::Move`] if a file cannot be moved. Remaining file
    ///   operations are skipped; earlier ones are not undone.
    pub fn run(&self, set: &OperationSet) -> CoreResult<Stats> {
        let stats = set.stats();
        if self.options.dry_run {
            tracing::info!(operations = stats.total_operations, "dry run, nothing written");
            return Ok(stats);
        }

        let mut created: HashSet<PathBuf> = HashSet::new();
        let directories = creation_order(set);

        for op in &directories {
            create_once(op.new_path(), &mut created)?;
        }

        for op in set.files() {
            if let Some(parent) = op.new_path().parent() {
                create_once(parent, &mut created)?;
            }
            move_entry(op.original_path(), op.new_path())?;
            tracing::debug!(
                from = %op.original_path().display(),
                to = %op.new_path().display(),
                "moved"
            );
        }

        for op in directories.iter().rev() {
            self.cleanup(op.original_path(), &created);
        }

        tracing::info!(
            files = stats.files_renamed,
            directories = stats.directories_renamed,
            "rename complete"
        );
        Ok(stats)
    }

    /// Advisory: never fails, never reports beyond debug logs.
    fn cleanup(&self, original: &Path, created: &HashSet<PathBuf>) {
        match is_dir_empty(original) {
            Ok(true) => {}
            Ok(false) => return,
            Err(e) => {
                tracing::debug!(path = %original.display(), "cleanup skipped: {e}");
                return;
            }
        }

        if self.options.cleanup == CleanupMode::Inspect {
            return;
        }
        // case-insensitive volumes: `Compute` may already be the created `compute`
        let is_destination =
            created.contains(original) || created.iter().any(|dir| same_entry(original, dir));
        if is_destination {
            return;
        }

        match remove_empty_dir(original) {
            Ok(()) => tracing::debug!(path = %original.display(), "removed empty directory"),
            Err(e) => tracing::debug!(path = %original.display(), "cleanup skipped: {e}"),
        }
    }
}

/// Runs `set`, or only counts it when `dry_run` is set, with inspect-only cleanup.
///
/// # Examples
///
/// ```no_run
/// use kebabify_core::{execute, scan};
/// use std::path::Path;
///
/// let set = scan(Path::new("Azure_Public_Service_Icons")).unwrap();
/// let stats = execute(&set, false).unwrap();
/// println!("{} files moved", stats.files_renamed);
/// ```
pub fn execute(set: &OperationSet, dry_run: bool) -> CoreResult<Stats> {
    Executor::new(ExecuteOptions {
        dry_run,
        ..ExecuteOptions::default()
    })
    .run(set)
}

/// Directory operations ordered by depth of the original path, shallowest
/// first. Equal depths keep scan order.
fn creation_order(set: &OperationSet) -> Vec<&Operation> {
    let mut directories: Vec<&Operation> = set.directories().collect();
    directories.sort_by_key(|op| op.original_path().components().count());
    directories
}

fn create_once(path: &Path, created: &mut HashSet<PathBuf>) -> CoreResult<()> {
    if created.contains(path) {
        return Ok(());
    }
    ensure_dir(path)?;
    created.insert(path.to_path_buf());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::plan::scan::scan;
    use std::fs;
    use tempfile::TempDir;

    fn write(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, path.to_string_lossy().as_bytes()).unwrap();
    }

    fn run_with(set: &OperationSet, cleanup: CleanupMode) -> CoreResult<Stats> {
        Executor::new(ExecuteOptions {
            dry_run: false,
            cleanup,
        })
        .run(set)
    }

    /// Lists every path under `dir`, relative and sorted.
    fn tree(dir: &Path) -> Vec<String> {
        fn walk(base: &Path, dir: &Path, out: &mut Vec<String>) {
            for entry in fs::read_dir(dir).unwrap() {
                let path = entry.unwrap().path();
                out.push(path.strip_prefix(base).unwrap().to_string_lossy().into_owned());
                if path.is_dir() {
                    walk(base, &path, out);
                }
            }
        }
        let mut out = Vec::new();
        walk(dir, dir, &mut out);
        out.sort();
        out
    }

    #[test]
    fn dry_run_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("Azure_Public_Service_Icons");
        write(&root.join("Compute/10-icon-service-Virtual_Machines.svg"));
        let before = tree(tmp.path());

        let set = scan(&root).unwrap();
        let stats = execute(&set, true).unwrap();

        assert_eq!(
            stats,
            Stats {
                files_renamed: 1,
                directories_renamed: 1,
                total_operations: 2,
            }
        );
        assert_eq!(tree(tmp.path()), before);
        assert!(!tmp.path().join("icons").exists());
    }

    #[test]
    fn execute_scenario_moves_file_into_new_tree() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("Azure_Public_Service_Icons");
        let original = root.join("Compute/10-icon-service-Virtual_Machines.svg");
        write(&original);

        let set = scan(&root).unwrap();
        let stats = execute(&set, false).unwrap();

        let moved = tmp.path().join("icons/compute/virtual-machines.svg");
        assert!(moved.is_file());
        assert!(!original.exists());
        assert_eq!(
            fs::read_to_string(&moved).unwrap(),
            original.to_string_lossy()
        );
        assert_eq!(stats.total_operations, 2);
    }

    #[test]
    fn execute_inspect_cleanup_keeps_emptied_directories() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("Src");
        write(&root.join("Compute/VM.svg"));

        let set = scan(&root).unwrap();
        execute(&set, false).unwrap();

        assert!(root.join("Compute").is_dir());
        assert!(is_dir_empty(&root.join("Compute")).unwrap());
    }

    #[test]
    fn execute_remove_cleanup_deletes_emptied_directories_deepest_first() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("Src");
        write(&root.join("Outer Dir/Inner Dir/A.svg"));
        write(&root.join("Outer Dir/B.svg"));

        let set = scan(&root).unwrap();
        run_with(&set, CleanupMode::Remove).unwrap();

        assert!(!root.join("Outer Dir").exists());
        assert!(root.is_dir());
        assert_eq!(
            tree(&tmp.path().join("icons")),
            vec![
                "outer-dir",
                "outer-dir/b.svg",
                "outer-dir/inner-dir",
                "outer-dir/inner-dir/a.svg",
            ]
        );
    }

    #[test]
    fn execute_remove_cleanup_keeps_non_empty_directories() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("Src");
        write(&root.join("Compute/VM.svg"));

        let set = scan(&root).unwrap();
        // appears after planning, so nothing moves it
        write(&root.join("Compute/late.svg"));
        run_with(&set, CleanupMode::Remove).unwrap();

        assert!(root.join("Compute/late.svg").is_file());
        assert!(tmp.path().join("icons/compute/vm.svg").is_file());
    }

    #[test]
    fn execute_in_place_when_root_is_output_dir() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("icons");
        write(&root.join("Storage Accounts/10-icon-service-Blob.svg"));
        write(&root.join("compute/virtual-machines.svg"));

        let set = scan(&root).unwrap();
        assert_eq!(set.len(), 2);
        run_with(&set, CleanupMode::Remove).unwrap();

        assert_eq!(
            tree(&root),
            vec![
                "compute",
                "compute/virtual-machines.svg",
                "storage-accounts",
                "storage-accounts/blob.svg",
            ]
        );
    }

    #[test]
    fn execute_creates_nested_parents_for_deep_files() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("Src");
        write(&root.join("A/BBBBBBBBBBBBBBBBBBBB/C/D.svg"));
        write(&root.join("Z/E.svg"));

        let set = scan(&root).unwrap();
        execute(&set, false).unwrap();

        assert!(tmp.path().join("icons/a/bbbbbbbbbbbbbbbbbbbb/c/d.svg").is_file());
        assert!(tmp.path().join("icons/z/e.svg").is_file());
    }

    #[test]
    fn execute_preserves_empty_directories() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("Src");
        fs::create_dir_all(root.join("Empty Dir")).unwrap();

        let set = scan(&root).unwrap();
        execute(&set, false).unwrap();

        assert!(tmp.path().join("icons/empty-dir").is_dir());
    }

    #[test]
    fn execute_stops_on_collision_without_rollback() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("icons");
        write(&root.join("A B.svg"));
        write(&root.join("A_B.svg"));
        write(&root.join("Z.svg"));

        let set = scan(&root).unwrap();
        let result = execute(&set, false);

        assert!(matches!(result, Err(CoreError::Move { .. })));
        // first of the colliding pair went through, the rest did not
        assert!(root.join("a-b.svg").is_file());
        assert!(!root.join("A B.svg").exists());
        assert!(root.join("A_B.svg").is_file());
        assert!(root.join("Z.svg").is_file());
    }

    #[test]
    fn execute_reports_vanished_source() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("Src");
        let file = root.join("File.svg");
        write(&file);

        let set = scan(&root).unwrap();
        fs::remove_file(&file).unwrap();
        let result = execute(&set, false);

        assert!(matches!(result, Err(CoreError::Move { .. })));
    }

    #[test]
    fn execute_empty_set_is_noop() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("icons");
        write(&root.join("done.svg"));

        let set = scan(&root).unwrap();
        let stats = execute(&set, false).unwrap();

        assert_eq!(stats, Stats::default());
        assert!(root.join("done.svg").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn remove_cleanup_keeps_directory_created_under_another_name() {
        let tmp = TempDir::new().unwrap();
        let original = tmp.path().join("Src/Empty");
        fs::create_dir_all(&original).unwrap();
        // `Alias/Empty` reaches the same directory, as `empty` would reach `Empty`
        // on a case-insensitive volume
        std::os::unix::fs::symlink(tmp.path().join("Src"), tmp.path().join("Alias")).unwrap();
        let created: HashSet<PathBuf> = [tmp.path().join("Alias/Empty")].into_iter().collect();
        let executor = Executor::new(ExecuteOptions {
            dry_run: false,
            cleanup: CleanupMode::Remove,
        });

        executor.cleanup(&original, &created);
        assert!(original.is_dir());

        executor.cleanup(&original, &HashSet::new());
        assert!(!original.exists());
    }

    #[test]
    fn creation_order_is_by_depth_not_length() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("Src");
        fs::create_dir_all(root.join("A Very Long Directory Name")).unwrap();
        fs::create_dir_all(root.join("B/C")).unwrap();

        let set = scan(&root).unwrap();
        let depths: Vec<usize> = creation_order(&set)
            .iter()
            .map(|op| op.original_path().components().count())
            .collect();

        let mut sorted = depths.clone();
        sorted.sort();
        assert_eq!(depths, sorted);
        assert_eq!(
            creation_order(&set).last().unwrap().original_path(),
            root.join("B/C")
        );
    }
}
