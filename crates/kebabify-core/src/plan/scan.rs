//! Recursive tree scan producing the planned [`OperationSet`].

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::name::{transform_directory_name, transform_file_name};
use crate::plan::operation::{Operation, OperationKind, OperationSet};

/// Name of the directory the normalised tree is mirrored into.
pub const DEFAULT_OUTPUT_DIR: &str = "icons";

/// Resolves `.` and `..` components without touching the filesystem.
///
/// A `..` directly below the root is dropped; leading `..` of a relative path
/// are kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }
    parts.iter().collect()
}

/// Returns `<parent of root>/<output_dir>`, with `root` normalised first.
///
/// A root without a parent (`/`) mirrors into `/<output_dir>`. A relative
/// root that normalises to the current directory or above it mirrors into
/// `../<output_dir>` relative to that.
pub fn destination_root(root: &Path, output_dir: &str) -> PathBuf {
    let root = normalize_path(root);
    if root.file_name().is_some() {
        return root.parent().unwrap_or(Path::new("")).join(output_dir);
    }
    if root.has_root() {
        root.join(output_dir)
    } else {
        root.join("..").join(output_dir)
    }
}

/// Applies the per-segment naming rule to a path relative to the scan root.
///
/// The last segment is treated as a file name when it contains a `.`; every
/// other segment, and a last segment without a dot, is treated as a directory
/// name. Segments that normalise to the empty string are dropped.
pub fn transform_relative(relative: &Path) -> PathBuf {
    let segments: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    let last = segments.len().saturating_sub(1);

    let mut out = PathBuf::new();
    for (i, segment) in segments.iter().enumerate() {
        let transformed = if i == last && segment.contains('.') {
            transform_file_name(segment)
        } else {
            transform_directory_name(segment)
        };
        if !transformed.is_empty() {
            out.push(transformed);
        }
    }
    out
}

/// Walks a source tree and plans where each entry should move.
#[derive(Debug, Clone)]
pub struct Scanner {
    output_dir: String,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl Scanner {
    /// Creates a scanner mirroring into `<parent of root>/<output_dir>`.
    pub fn new(output_dir: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Scans `root` depth-first and records every entry whose normalised
    /// destination differs from its current path.
    ///
    /// `root` is made absolute against the current directory and its `.` and
    /// `..` components are resolved before anything else, so the destination
    /// is always a sibling of the directory actually scanned.
    ///
    /// Entries in each directory are visited in name order. Directories are
    /// recorded before their contents, and are descended into whether or not
    /// they themselves change. Symbolic links and special files are skipped.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] — `root` does not exist.
    /// - [`CoreError::NotADirectory`] — `root` is not a directory.
    /// - [`CoreError::PermissionDenied`] — a directory in the tree is unreadable.
    /// - [`CoreError::Io`] — any other I/O error while listing.
    pub fn scan(&self, root: &Path) -> CoreResult<OperationSet> {
        let absolute = std::path::absolute(root).map_err(|e| CoreError::from_read(root, e))?;
        let root = normalize_path(&absolute);
        let root = root.as_path();

        let meta = fs::metadata(root).map_err(|e| CoreError::from_read(root, e))?;
        if !meta.is_dir() {
            return Err(CoreError::NotADirectory(root.to_path_buf()));
        }

        let destination = destination_root(root, &self.output_dir);
        let mut operations = Vec::new();
        collect_operations(root, Path::new(""), &destination, &mut operations)?;

        tracing::info!(
            root = %root.display(),
            destination = %destination.display(),
            operations = operations.len(),
            "scan complete"
        );

        Ok(OperationSet::new(
            root.to_path_buf(),
            destination,
            operations,
        ))
    }
}

/// Scans `root` into the default `icons` sibling directory.
///
/// See [`Scanner::scan`] for ordering and error details.
pub fn scan(root: &Path) -> CoreResult<OperationSet> {
    Scanner::default().scan(root)
}

fn collect_operations(
    root: &Path,
    relative_dir: &Path,
    destination: &Path,
    out: &mut Vec<Operation>,
) -> CoreResult<()> {
    let dir = root.join(relative_dir);
    let read_dir = fs::read_dir(&dir).map_err(|e| CoreError::from_read(&dir, e))?;

    let mut children = Vec::new();
    for child in read_dir {
        children.push(child?);
    }
    children.sort_by_key(|c| c.file_name());

    for child in children {
        let relative = relative_dir.join(child.file_name());
        let file_type = child.file_type()?;

        let kind = if file_type.is_dir() {
            OperationKind::Directory
        } else if file_type.is_file() {
            OperationKind::File
        } else {
            tracing::warn!(path = %child.path().display(), "skipping non-regular entry");
            continue;
        };

        let original = root.join(&relative);
        let target = destination.join(transform_relative(&relative));
        if original != target {
            tracing::debug!(
                from = %original.display(),
                to = %target.display(),
                ?kind,
                "planned"
            );
            out.push(Operation::new(original, target, kind));
        }

        if kind == OperationKind::Directory {
            collect_operations(root, &relative, destination, out)?;
        }
    }

    Ok(())
}
