//! Filesystem primitives: directory creation, moves and emptiness checks.

pub mod ops;
