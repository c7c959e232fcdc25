//! Deterministic directory-tree flattening.
//!
//! Subdirectories are expanded in place, depth-first, with the entries at
//! each level sorted by name. Uses an explicit worklist rather than native
//! recursion so arbitrarily deep trees cannot exhaust the stack.

use std::fs;
use std::path::{Path, PathBuf};

use entitydoc_shared::{EntitydocError, Result};

/// Collect every file under `root`, in deterministic depth-first order.
///
/// Nested directories are transparently flattened; entries that are neither
/// files nor directories (sockets, broken symlinks) are ignored.
pub(crate) fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut worklist = Vec::new();

    push_entries(&mut worklist, root)?;

    while let Some(path) = worklist.pop() {
        if path.is_dir() {
            push_entries(&mut worklist, &path)?;
        } else if path.is_file() {
            files.push(path);
        }
    }

    Ok(files)
}

/// Push a directory's entries onto the worklist, reversed so that popping
/// yields them in ascending name order ahead of any pending siblings.
fn push_entries(worklist: &mut Vec<PathBuf>, dir: &Path) -> Result<()> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| EntitydocError::io(dir, e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| EntitydocError::io(dir, e))?
        .into_iter()
        .map(|entry| entry.path())
        .collect();

    entries.sort();
    entries.reverse();
    worklist.extend(entries);

    Ok(())
}
