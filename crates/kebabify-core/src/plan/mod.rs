//! Rename planning: what to move where, and how the result will look.
//!
//! [`scan::scan`] walks a source tree into an [`operation::OperationSet`];
//! [`preview::render`] draws the destination tree that set describes.

pub mod operation;
pub mod preview;
pub mod scan;

pub use operation::{Operation, OperationKind, OperationSet, Stats};
pub use preview::{build_tree, render, TreeNode};
pub use scan::{
    destination_root, normalize_path, scan, transform_relative, Scanner, DEFAULT_OUTPUT_DIR,
};
