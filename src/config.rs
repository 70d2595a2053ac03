// src/config.rs

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::debug;

/// The statement the demo binary converts.
pub const DEMO_DDL: &str = "CREATE TABLE `t_capacity_project_sub_type`
(
    `id`          bigint      NOT NULL COMMENT '主键',
    `project_id`  bigint      NOT NULL COMMENT '活动id',
    `type_id`     varchar(32) null     default '' COMMENT '[行业|产业带类目|活动基地仓]id',
    `sub_type_id` varchar(32) null     default '' COMMENT '活动对应的[行业|产业带类目|活动基地仓]二级类目id',
    `update_time` timestamp   NOT NULL default CURRENT_TIMESTAMP on update CURRENT_TIMESTAMP comment '更新时间',
    PRIMARY KEY (`id`),
    UNIQUE KEY `uk_project_id_sub_type_type` (`project_id`, `sub_type_id`, `type_id`)
) ENGINE = InnoDB DEFAULT CHARSET = utf8mb4 COMMENT = '活动附加信息表';";

/// Knobs for one conversion.
///
/// Both keys are optional in an options file:
///
/// ```yaml
/// table_prefix: t_capacity_
/// ignore_fields: [capacity_task_id, update_time]
/// ```
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(default)]
pub struct ConvertOptions {
    /// Removed from the table identifier before it becomes the struct name.
    pub table_prefix: String,
    /// Columns to leave out, in snake_case or camelCase.
    pub ignore_fields: Vec<String>,
}

impl ConvertOptions {
    pub fn demo() -> Self {
        Self {
            table_prefix: "t_capacity_".into(),
            ignore_fields: vec!["capacity_task_id".into(), "update_time".into()],
        }
    }

    /// Load options from a `.json`, `.yaml` or `.yml` file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading options {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let opts: ConvertOptions = match ext.as_deref() {
            Some("json") => serde_json::from_str(&text)
                .with_context(|| format!("parsing JSON options {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&text)
                .with_context(|| format!("parsing YAML options {}", path.display()))?,
            _ => {
                return Err(anyhow!(
                    "unsupported options file `{}` (expected .json, .yaml or .yml)",
                    path.display()
                ))
            }
        };
        debug!(
            prefix = %opts.table_prefix,
            ignored = opts.ignore_fields.len(),
            "loaded options"
        );
        Ok(opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_json() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("opts.json");
        fs::write(
            &path,
            r#"{"table_prefix": "t_", "ignore_fields": ["update_time"]}"#,
        )?;
        let opts = ConvertOptions::load(&path)?;
        assert_eq!(opts.table_prefix, "t_");
        assert_eq!(opts.ignore_fields, vec!["update_time".to_string()]);
        Ok(())
    }

    #[test]
    fn test_load_yaml_with_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("opts.yml");
        fs::write(&path, "table_prefix: t_capacity_\n")?;
        let opts = ConvertOptions::load(&path)?;
        assert_eq!(opts.table_prefix, "t_capacity_");
        assert!(opts.ignore_fields.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_rejects_unknown_extension() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("opts.toml");
        fs::write(&path, "table_prefix = 't_'")?;
        assert!(ConvertOptions::load(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        assert!(ConvertOptions::load("/definitely/not/here.json").is_err());
    }
}
