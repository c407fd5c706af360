//! kebabify core library — UI-agnostic icon tree normalisation.
//!
//! `kebabify-core` mirrors a source tree into a sibling directory with every
//! name converted to kebab-case and vendor prefixes stripped. It does the
//! work in three stages that any frontend can drive:
//!
//! 1. [`scan`] the source tree into an [`OperationSet`];
//! 2. optionally [`render`] the planned destination tree for a preview;
//! 3. [`execute`] the set, creating directories and moving files.
//!
//! # Modules
//!
//! - [`name`] — Pure name normalisation: kebab-case and prefix stripping.
//! - [`plan`] — Operations, the tree scanner and the preview renderer.
//! - [`exec`] — Ordered execution of an [`OperationSet`] with advisory cleanup.
//! - [`fs`] — Filesystem primitives used by the executor.
//! - [`config`] — TOML-based settings.
//! - [`error`] — Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod config;
pub mod error;
pub mod exec;
pub mod fs;
pub mod name;
pub mod plan;

pub use config::settings::Config;
pub use error::{CoreError, CoreResult};
pub use exec::{execute, CleanupMode, ExecuteOptions, Executor};
pub use name::{kebab_case, transform_directory_name, transform_file_name};
pub use plan::{render, scan, Operation, OperationKind, OperationSet, Scanner, Stats};
