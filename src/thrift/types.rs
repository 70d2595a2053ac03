// src/thrift/types.rs

use std::fmt;

/// Thrift field qualifier derived from SQL nullability.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Requiredness {
    Required,
    Optional,
}

impl fmt::Display for Requiredness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requiredness::Required => f.write_str("required"),
            Requiredness::Optional => f.write_str("optional"),
        }
    }
}

/// The Thrift base types a MySQL column can map onto.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ThriftType {
    I32,
    I64,
    String,
}

impl fmt::Display for ThriftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThriftType::I32 => f.write_str("i32"),
            ThriftType::I64 => f.write_str("i64"),
            ThriftType::String => f.write_str("string"),
        }
    }
}

/// A single struct field, as emitted from one column line.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Field {
    pub seq: u32,
    pub required: Requiredness,
    pub ty: ThriftType,
    pub name: String,
    pub remark: String,
}

/// What one physical DDL line turned out to be.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum LineKind {
    /// The `ENGINE` line, carrying a non-empty table remark.
    TableRemark(String),
    /// A column definition. `name` is the raw snake_case identifier.
    Column {
        name: String,
        required: Requiredness,
        ty: ThriftType,
        remark: String,
    },
    Skip,
}
