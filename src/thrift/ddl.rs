// src/thrift/ddl.rs

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::types::{LineKind, Requiredness, ThriftType};

// All of these are greedy on purpose: the capture runs to the LAST quote
// on the line, and existing fixtures depend on that.
static SINGLE_QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r"'(.*)'").unwrap());
static BACKTICKED: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.*)`").unwrap());
static COLUMN_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"COMMENT.*'(.*)'").unwrap());

/// Group 1 of the first match of `re` in `line`, or `""` when nothing matches.
pub fn capture_first(line: &str, re: &Regex) -> String {
    re.captures(line)
        .and_then(|c| c.get(1).map(|m| m.as_str().to_owned()))
        .unwrap_or_default()
}

/// Remark of the table-closing line. Empty unless the line contains `ENGINE`.
pub fn table_remark(line: &str) -> String {
    if line.contains("ENGINE") {
        capture_first(line, &SINGLE_QUOTED)
    } else {
        String::new()
    }
}

/// Map a column line onto a Thrift type.
///
/// Checked in order, first hit wins:
/// - bigint    → i64
/// - tinyint   → i32
/// - varchar   → string
/// - timestamp → i64
/// - int       → i32
///
/// `tinyint` has to come before the bare `int` check. Anything else
/// (`PRIMARY KEY`, `UNIQUE KEY`, the parentheses) is `None`.
pub fn map_to_thrift_type(line: &str) -> Option<ThriftType> {
    if line.contains("bigint") {
        Some(ThriftType::I64)
    } else if line.contains("tinyint") {
        Some(ThriftType::I32)
    } else if line.contains("varchar") {
        Some(ThriftType::String)
    } else if line.contains("timestamp") {
        Some(ThriftType::I64)
    } else if line.contains("int") {
        Some(ThriftType::I32)
    } else {
        None
    }
}

/// Case-sensitive: only an upper-case `NOT NULL` makes a field required.
pub fn requiredness(line: &str) -> Requiredness {
    if line.contains("NOT NUL") {
        Requiredness::Required
    } else {
        Requiredness::Optional
    }
}

pub fn field_name(line: &str) -> String {
    capture_first(line, &BACKTICKED)
}

pub fn column_remark(line: &str) -> String {
    capture_first(line, &COLUMN_COMMENT)
}

/// Classify one physical line of a `CREATE TABLE` statement.
pub fn classify_line(line: &str) -> LineKind {
    let remark = table_remark(line);
    if !remark.is_empty() {
        trace!(remark = %remark, "table remark line");
        return LineKind::TableRemark(remark);
    }

    let Some(ty) = map_to_thrift_type(line) else {
        trace!(line = %line, "no column type, skipping");
        return LineKind::Skip;
    };

    let name = field_name(line);
    let required = requiredness(line);
    let remark = column_remark(line);
    trace!(name = %name, ty = %ty, required = %required, "column line");
    LineKind::Column {
        name,
        required,
        ty,
        remark,
    }
}
