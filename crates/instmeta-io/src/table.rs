//! Dimension table files: one physical space per line.
//!
//! ```text
//! # dim_ref range_ref rank_ref dim_phys trans_type
//! 2 1 1 2 0
//! 2 2 1 3 h_grad
//! ```
//!
//! Blank lines and `#` comments are skipped. Any other line must hold
//! exactly four integers in `0..=MAX_ROW_VALUE` and a transformation (code
//! or name).

use instmeta_kernel::{SpaceRow, Transformation};
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// How a line that is neither a comment nor a row is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadMode {
    /// Skip it, warn, and record it in the report.
    #[default]
    Lenient,
    /// Fail on it.
    Strict,
}

/// A line that was not a comment and did not parse as a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: usize,
    pub content: String,
    pub reason: String,
}

/// Rows in file order plus whatever was skipped on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableReport {
    pub rows: Vec<SpaceRow>,
    pub skipped: Vec<SkippedLine>,
}

/// Read rows from a table reader.
pub fn read_rows(reader: impl BufRead, mode: ReadMode) -> Result<TableReport, TableError> {
    let mut report = TableReport::default();
    for (line_no, line) in reader.lines().enumerate() {
        let line_no = line_no + 1;
        let line = line.map_err(|e| TableError::Io(line_no, e.to_string()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match parse_row(trimmed) {
            Ok(row) => report.rows.push(row),
            Err(reason) => {
                if mode == ReadMode::Strict {
                    return Err(TableError::Malformed {
                        line: line_no,
                        content: trimmed.to_string(),
                        reason,
                    });
                }
                tracing::warn!(line = line_no, content = trimmed, %reason, "skipping malformed table line");
                report.skipped.push(SkippedLine {
                    line: line_no,
                    content: trimmed.to_string(),
                    reason,
                });
            }
        }
    }
    tracing::debug!(
        rows = report.rows.len(),
        skipped = report.skipped.len(),
        "read dimension table"
    );
    Ok(report)
}

/// Read rows from a table file path.
pub fn read_rows_from_path(
    path: impl AsRef<Path>,
    mode: ReadMode,
) -> Result<TableReport, TableError> {
    let path = path.as_ref();
    let bytes =
        fs::read(path).map_err(|e| TableError::Io(0, format!("{}: {e}", path.display())))?;
    check_plain_text(path, &bytes)?;
    read_rows(BufReader::new(bytes.as_slice()), mode)
}

/// Parse one significant line.
pub fn parse_row(line: &str) -> Result<SpaceRow, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [dim_ref, range_ref, rank_ref, dim_phys, trans_type] = fields.as_slice() else {
        return Err(format!("expected 5 fields, found {}", fields.len()));
    };
    let int = |field: &str| {
        field
            .parse::<i64>()
            .map_err(|_| format!("`{field}` is not an integer"))
    };
    let row = SpaceRow::new(
        int(*dim_ref)?,
        int(*range_ref)?,
        int(*rank_ref)?,
        int(*dim_phys)?,
        trans_type.parse::<Transformation>()?,
    );
    row.check_bounds()?;
    Ok(row)
}

/// A table is plain text: no NUL bytes, valid UTF-8.
fn check_plain_text(path: &Path, bytes: &[u8]) -> Result<(), TableError> {
    let problem = if bytes.contains(&0) {
        "contains NUL byte(s)"
    } else if std::str::from_utf8(bytes).is_err() {
        "is not valid UTF-8"
    } else {
        return Ok(());
    };
    Err(TableError::Corrupt(format!("{}: {problem}", path.display())))
}

/// Errors from reading table files.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("line {0}: I/O error: {1}")]
    Io(usize, String),

    #[error("line {line}: malformed row `{content}`: {reason}")]
    Malformed {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("corrupted table: {0}")]
    Corrupt(String),
}
