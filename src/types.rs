use serde::Serialize;

/// One output record describing a single visited directory.
///
/// Rows are appended in pre-order discovery order and never mutated
/// afterwards; `parent_index` is a plain position into that order (-1 for the
/// root), not a reference, so the matrix serializes trivially.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirRow {
    pub name: String,
    pub level: usize,
    pub index_in_level: usize,
    pub parent_index: i64,
}
