use std::fs;
use std::path::{Path, PathBuf};

use crate::types::DirRow;

/// Walks the directory tree under `root` depth-first, pre-order, and returns
/// one row per visited directory.
///
/// Children are visited in ascending file-name order (stable sort,
/// platform-default `OsStr` ordering), so a subtree always occupies a
/// contiguous block of rows right after its parent. Symlinked directories are
/// descended into like any other directory; cyclic links are the caller's
/// problem.
///
/// Listing failures (permission, I/O) are reported on stderr and prune that
/// directory's subtree; the directory's own row is kept and the scan carries
/// on. The caller is responsible for ensuring `root` is a directory.
pub fn scan(root: &Path) -> Vec<DirRow> {
    let mut rows = Vec::new();
    let mut level_counts: Vec<usize> = Vec::new();
    walk(root, 0, -1, &mut rows, &mut level_counts);
    rows
}

fn walk(
    path: &Path,
    level: usize,
    parent_index: i64,
    rows: &mut Vec<DirRow>,
    level_counts: &mut Vec<usize>,
) {
    // Levels are entered one at a time, so the counter vector only ever
    // grows by a single slot here.
    if level_counts.len() <= level {
        level_counts.push(0);
    }

    // Position of this row once appended; children point back at it.
    let own_index = rows.len();
    rows.push(DirRow {
        name: display_name(path),
        level,
        index_in_level: level_counts[level],
        parent_index,
    });
    level_counts[level] += 1;

    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("warning: could not access {}: {}", path.display(), err);
            return;
        }
    };

    let mut subdirs: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|p| p.is_dir())
        .collect();
    subdirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    for subdir in subdirs {
        walk(&subdir, level + 1, own_index as i64, rows, level_counts);
    }
}

/// Base name of the path, or the path string itself when there is no
/// base-name component (a bare root like `/`).
fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}
