//! Planned rename operations and their summary statistics.

use std::path::{Path, PathBuf};

/// Whether an operation moves a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    File,
    Directory,
}

/// One pending filesystem change: move `original_path` to `new_path`.
///
/// Operations are only ever created by the scanner, and only when the two
/// paths differ. They are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    original_path: PathBuf,
    new_path: PathBuf,
    kind: OperationKind,
}

impl Operation {
    pub(crate) fn new(original_path: PathBuf, new_path: PathBuf, kind: OperationKind) -> Self {
        debug_assert_ne!(original_path, new_path);
        Self {
            original_path,
            new_path,
            kind,
        }
    }

    pub fn original_path(&self) -> &Path {
        &self.original_path
    }

    pub fn new_path(&self) -> &Path {
        &self.new_path
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == OperationKind::Directory
    }
}

/// Summary counts derived from an [`OperationSet`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub files_renamed: usize,
    pub directories_renamed: usize,
    pub total_operations: usize,
}

/// The ordered result of one scan.
///
/// Besides the operations themselves the set remembers which tree it was
/// scanned from and where that tree is being mirrored to, so the preview
/// renderer and executor need nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSet {
    source_root: PathBuf,
    destination_root: PathBuf,
    operations: Vec<Operation>,
}

impl OperationSet {
    pub(crate) fn new(
        source_root: PathBuf,
        destination_root: PathBuf,
        operations: Vec<Operation>,
    ) -> Self {
        Self {
            source_root,
            destination_root,
            operations,
        }
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn destination_root(&self) -> &Path {
        &self.destination_root
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Directory operations, in scan order.
    pub fn directories(&self) -> impl Iterator<Item = &Operation> {
        self.operations.iter().filter(|op| op.is_dir())
    }

    /// File operations, in scan order.
    pub fn files(&self) -> impl Iterator<Item = &Operation> {
        self.operations.iter().filter(|op| !op.is_dir())
    }

    /// Counts planned operations by kind.
    pub fn stats(&self) -> Stats {
        let directories_renamed = self.directories().count();
        Stats {
            files_renamed: self.operations.len() - directories_renamed,
            directories_renamed,
            total_operations: self.operations.len(),
        }
    }
}
