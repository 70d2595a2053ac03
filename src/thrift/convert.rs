// src/thrift/convert.rs

use anyhow::Result;
use tracing::{debug, instrument, trace, warn};

use super::builder::StructBuilder;
use super::ddl::classify_line;
use super::naming::{camel_case, struct_name_from_table_line};
use super::types::LineKind;

/// Returned in place of struct text when no name or no fields were found.
pub const ERROR_MARKER: &str = "error";

/// Split DDL text into physical lines.
///
/// Trailing empty lines are dropped and a trailing `\r` is stripped from
/// each line, so CRLF input behaves like LF input.
pub fn split_lines(ddl: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = ddl
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Convert one `CREATE TABLE` statement into a Thrift struct.
///
/// `Ok(None)` when the input has no lines, `Err` when the statement
/// yields no struct name or no fields.
#[instrument(level = "debug", skip(ddl, ignore_fields), fields(ddl_len = ddl.len()))]
pub fn try_convert_to_thrift_struct<S: AsRef<str>>(
    ddl: &str,
    table_prefix: &str,
    ignore_fields: &[S],
) -> Result<Option<String>> {
    let lines = split_lines(ddl);
    let Some(first) = lines.first() else {
        debug!("empty input");
        return Ok(None);
    };

    let is_ignored = |name: &str| {
        ignore_fields
            .iter()
            .any(|ig| AsRef::<str>::as_ref(ig) == name)
    };

    let mut builder = StructBuilder::new();
    builder.set_table_name(struct_name_from_table_line(first, table_prefix));
    trace!(name = ?builder.table_name(), "derived struct name");

    for line in &lines {
        match classify_line(line) {
            LineKind::TableRemark(remark) => builder.set_table_remark(remark),
            LineKind::Skip => {}
            LineKind::Column {
                name,
                required,
                ty,
                remark,
            } => {
                let camel = camel_case(&name);
                if is_ignored(&name) || is_ignored(&camel) {
                    trace!(name = %name, "ignored field");
                    continue;
                }
                builder.add_field(required, ty, camel, remark);
            }
        }
    }

    debug!(fields = builder.fields().len(), "finished parsing");
    builder.build().map(Some)
}

/// String-in, string-out form of [`try_convert_to_thrift_struct`].
///
/// Returns `""` for empty input and [`ERROR_MARKER`] on failure.
pub fn convert_to_thrift_struct<S: AsRef<str>>(
    ddl: &str,
    table_prefix: &str,
    ignore_fields: &[S],
) -> String {
    match try_convert_to_thrift_struct(ddl, table_prefix, ignore_fields) {
        Ok(Some(text)) => text,
        Ok(None) => String::new(),
        Err(e) => {
            warn!("conversion failed: {}", e);
            ERROR_MARKER.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConvertOptions, DEMO_DDL};
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,sql2thrift::thrift=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    fn body_lines(text: &str) -> Vec<&str> {
        text.split("\r\n")
            .filter(|l| l.starts_with("    "))
            .collect()
    }

    #[test]
    fn test_demo_ddl_end_to_end() {
        init_test_logging();
        let opts = ConvertOptions::demo();
        let text = convert_to_thrift_struct(DEMO_DDL, &opts.table_prefix, &opts.ignore_fields);

        let mut lines = text.split("\r\n");
        assert_eq!(lines.next(), Some("//活动附加信息表"));
        assert_eq!(lines.next(), Some("struct ProjectSubType{"));
        assert_eq!(
            body_lines(&text),
            vec![
                "    1:required i64 id //主键",
                "    2:required i64 projectId //活动id",
                "    3:optional string typeId //[行业|产业带类目|活动基地仓]id",
                "    4:optional string subTypeId //活动对应的[行业|产业带类目|活动基地仓]二级类目id",
            ]
        );
        assert!(text.ends_with("\r\n}"));
        assert!(!text.contains("updateTime"));
    }

    #[test]
    fn test_ignore_list_matches_either_spelling() {
        init_test_logging();
        let ddl = "CREATE TABLE `t_order`\n(\n    `id` bigint NOT NULL,\n    `update_time` timestamp NOT NULL,\n    `create_time` timestamp NULL\n) ENGINE = InnoDB COMMENT = '订单';";

        let text = convert_to_thrift_struct(ddl, "t_", &["update_time"]);
        assert!(!text.contains("updateTime"));
        assert!(text.contains("2:optional i64 createTime //"));

        let text = convert_to_thrift_struct(ddl, "t_", &["createTime"]);
        assert!(!text.contains("createTime"));
        assert!(text.contains("2:required i64 updateTime //"));
    }

    #[test]
    fn test_lowercase_not_null_is_optional() {
        let ddl = "CREATE TABLE `t_a`\n    `id` bigint not null COMMENT 'pk',\n) ENGINE = InnoDB;";
        let text = convert_to_thrift_struct(ddl, "t_", &[] as &[&str]);
        assert_eq!(text, "//\r\nstruct A{\r\n    1:optional i64 id //pk\r\n}");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert_to_thrift_struct("", "t_", &[] as &[&str]), "");
        assert_eq!(convert_to_thrift_struct("\n\n", "t_", &[] as &[&str]), "");
    }

    #[test]
    fn test_first_line_without_identifier() {
        init_test_logging();
        let ddl = "CREATE TABLE orders (\n    `id` bigint NOT NULL,\n) ENGINE = InnoDB;";
        assert_eq!(convert_to_thrift_struct(ddl, "t_", &[] as &[&str]), ERROR_MARKER);
        assert!(try_convert_to_thrift_struct(ddl, "t_", &[] as &[&str]).is_err());
    }

    #[test]
    fn test_no_columns_is_error() {
        let ddl = "CREATE TABLE `t_empty`\n(\n    PRIMARY KEY (`id`)\n) ENGINE = InnoDB;";
        assert_eq!(convert_to_thrift_struct(ddl, "t_", &[] as &[&str]), ERROR_MARKER);
    }

    #[test]
    fn test_crlf_input() {
        let ddl = "CREATE TABLE `t_a`\r\n    `name` varchar(8) NOT NULL COMMENT 'n',\r\n) ENGINE = InnoDB COMMENT = 'a';\r\n";
        assert_eq!(
            convert_to_thrift_struct(ddl, "t_", &[] as &[&str]),
            "//a\r\nstruct A{\r\n    1:required string name //n\r\n}"
        );
    }

    #[test]
    fn test_split_lines() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("a\r\nb\n\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
    }
}
