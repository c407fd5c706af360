//! Dry-run preview: renders the destination tree an [`OperationSet`] would produce.
//!
//! Pure in-memory work, nothing here touches the filesystem.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::plan::operation::OperationSet;

/// One node of the planned destination tree. Parents own their children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    /// Keyed by name, so iteration is already in lexicographic order.
    pub children: BTreeMap<String, TreeNode>,
}

impl TreeNode {
    fn directory(name: String, path: PathBuf) -> Self {
        Self {
            name,
            path,
            is_dir: true,
            children: BTreeMap::new(),
        }
    }

    /// Inserts `parts` below this node, creating intermediate directories.
    ///
    /// The leaf is a directory when `leaf_is_dir` is set. A node that has
    /// ever been a directory stays one.
    fn insert(&mut self, parts: &[String], leaf_is_dir: bool) {
        let Some((first, rest)) = parts.split_first() else {
            return;
        };
        let is_dir = !rest.is_empty() || leaf_is_dir;
        let parent_path = &self.path;
        let child = self
            .children
            .entry(first.clone())
            .or_insert_with(|| TreeNode {
                name: first.clone(),
                path: parent_path.join(first),
                is_dir,
                children: BTreeMap::new(),
            });
        child.is_dir |= is_dir;
        child.insert(rest, leaf_is_dir);
    }
}

/// Builds the planned destination tree rooted at the set's destination root.
pub fn build_tree(set: &OperationSet) -> TreeNode {
    let root_path = set.destination_root();
    let mut root = TreeNode::directory(display_name(root_path), root_path.to_path_buf());

    for op in set.operations() {
        let Ok(relative) = op.new_path().strip_prefix(root_path) else {
            tracing::warn!(path = %op.new_path().display(), "outside destination root");
            continue;
        };
        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        root.insert(&parts, op.is_dir());
    }

    root
}

/// Renders the planned destination tree with box-drawing connectors.
///
/// Children are listed in name order and directories carry a trailing `/`:
///
/// ```text
/// icons/
/// ├── compute/
/// │   └── virtual-machines.svg
/// └── storage/
///     └── blob.svg
/// ```
pub fn render(set: &OperationSet) -> String {
    let root = build_tree(set);
    let mut out = format!("{}/\n", root.name);
    render_children(&root, "", &mut out);
    out
}

fn render_children(node: &TreeNode, prefix: &str, out: &mut String) {
    let last_index = node.children.len().saturating_sub(1);
    for (i, child) in node.children.values().enumerate() {
        let is_last = i == last_index;
        let connector = if is_last { "└── " } else { "├── " };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(&child.name);
        if child.is_dir {
            out.push('/');
        }
        out.push('\n');

        if !child.children.is_empty() {
            let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
            render_children(child, &child_prefix, out);
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
