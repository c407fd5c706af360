//! Filesystem primitives used by the executor.

use std::io;
use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// Creates `path` and any missing ancestors. Succeeds if it already exists.
///
/// # Errors
///
/// - [`CoreError::CreateDir`] if the directory cannot be created, including
///   when a non-directory already occupies `path`.
pub fn ensure_dir(path: &Path) -> CoreResult<()> {
    std::fs::create_dir_all(path).map_err(|source| CoreError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns `true` if `a` and `b` name the same filesystem entry.
///
/// On case-insensitive filesystems `icons/A.svg` and `icons/a.svg` are one
/// entry. Missing paths are never the same entry.
pub fn same_entry(a: &Path, b: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;

        match (std::fs::metadata(a), std::fs::metadata(b)) {
            (Ok(ma), Ok(mb)) => ma.dev() == mb.dev() && ma.ino() == mb.ino(),
            _ => false,
        }
    }
    #[cfg(not(unix))]
    {
        match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
            (Ok(ca), Ok(cb)) => ca == cb,
            _ => false,
        }
    }
}

/// Moves a file or directory from `src` to `dest` with a single rename.
///
/// No copy fallback is attempted, so `src` and `dest` must live on the same
/// filesystem. An existing entry at `dest` is never overwritten, unless it is
/// `src` itself (a case-only rename on a case-insensitive filesystem).
///
/// # Errors
///
/// - [`CoreError::Move`] if `src` is gone, `dest` already exists, or the
///   rename itself fails.
pub fn move_entry(src: &Path, dest: &Path) -> CoreResult<()> {
    let fail = |source: io::Error| CoreError::Move {
        from: src.to_path_buf(),
        to: dest.to_path_buf(),
        source,
    };

    // symlink_metadata so a dangling link still counts as present
    std::fs::symlink_metadata(src).map_err(fail)?;
    if std::fs::symlink_metadata(dest).is_ok() && !same_entry(src, dest) {
        return Err(fail(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "destination already exists",
        )));
    }

    std::fs::rename(src, dest).map_err(fail)
}

/// Returns `true` if `path` is a directory with no entries.
pub fn is_dir_empty(path: &Path) -> io::Result<bool> {
    Ok(std::fs::read_dir(path)?.next().is_none())
}

/// Removes `path` only if it is an empty directory.
pub fn remove_empty_dir(path: &Path) -> io::Result<()> {
    std::fs::remove_dir(path)
}
