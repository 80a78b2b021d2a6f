use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::types::DirRow;

pub const HEADER: &str = "Directory_Name,Level,Index_In_Level,Parent_Index";

pub fn format(rows: &[DirRow]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    for row in rows {
        push_row(&mut out, row);
    }
    out
}

/// Creates or overwrites `dest` with the full CSV document. A failure midway
/// leaves the file in whatever state the failure left it.
pub fn write_file(rows: &[DirRow], dest: &Path) -> Result<()> {
    fs::write(dest, format(rows))?;
    Ok(())
}

fn push_row(out: &mut String, row: &DirRow) {
    use std::fmt::Write as _;
    let _ = writeln!(
        out,
        "{},{},{},{}",
        escape_field(&row.name),
        row.level,
        row.index_in_level,
        row.parent_index
    );
}

// Directory names are arbitrary strings; RFC 4180 quoting when they carry
// the delimiter, a quote, or a line break. Numeric columns never need it.
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, level: usize, index_in_level: usize, parent_index: i64) -> DirRow {
        DirRow {
            name: name.to_string(),
            level,
            index_in_level,
            parent_index,
        }
    }

    #[test]
    fn header_and_row_order() {
        let rows = vec![row("top", 0, 0, -1), row("kid", 1, 0, 0)];
        let s = format(&rows);
        assert_eq!(
            s,
            "Directory_Name,Level,Index_In_Level,Parent_Index\ntop,0,0,-1\nkid,1,0,0\n"
        );
    }

    #[test]
    fn plain_names_are_not_quoted() {
        assert_eq!(escape_field("src"), "src");
        assert_eq!(escape_field("with space"), "with space");
    }

    #[test]
    fn delimiter_and_newline_names_are_quoted() {
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("a\nb"), "\"a\nb\"");
    }

    #[test]
    fn quotes_are_doubled() {
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn write_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.csv");
        let rows = vec![row("only", 0, 0, -1)];
        write_file(&rows, &dest).unwrap();
        let body = fs::read_to_string(&dest).unwrap();
        assert_eq!(body, format(&rows));
    }
}
