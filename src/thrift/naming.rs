// src/thrift/naming.rs

use super::ddl::field_name;

/// `snake_case` → `camelCase`.
///
/// The first segment is kept as-is; every later segment gets its first
/// character upper-cased. Input without an underscore comes back unchanged.
pub fn camel_case(raw: &str) -> String {
    let mut segments = raw.split('_');
    let mut out = String::with_capacity(raw.len());
    if let Some(first) = segments.next() {
        out.push_str(first);
    }
    for seg in segments {
        out.push_str(&upper_first(seg));
    }
    out
}

/// Upper-case the first character, leave the rest alone. `""` stays `""`.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derive the struct name from the `CREATE TABLE` line.
///
/// The first occurrence of `table_prefix` is removed wherever it sits,
/// then the rest is camel-cased with a leading capital.
pub fn struct_name_from_table_line(first_line: &str, table_prefix: &str) -> String {
    let table = field_name(first_line);
    let stripped = if table_prefix.is_empty() {
        table
    } else {
        table.replacen(table_prefix, "", 1)
    };
    upper_first(&camel_case(&stripped))
}
