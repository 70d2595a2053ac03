// src/thrift/builder.rs

use anyhow::{bail, Result};

use super::types::{Field, Requiredness, ThriftType};

/// Line separator of the generated struct text.
pub const LINE_END: &str = "\r\n";

/// Accumulates the table metadata and fields of one `CREATE TABLE`.
#[derive(Debug, Default)]
pub struct StructBuilder {
    table_name: Option<String>,
    table_remark: Option<String>,
    fields: Vec<Field>,
}

impl StructBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty name is treated as no name at all.
    pub fn set_table_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.table_name = (!name.is_empty()).then_some(name);
    }

    pub fn set_table_remark(&mut self, remark: impl Into<String>) {
        self.table_remark = Some(remark.into());
    }

    /// Append a field, numbering it after the ones already added.
    pub fn add_field(
        &mut self,
        required: Requiredness,
        ty: ThriftType,
        name: impl Into<String>,
        remark: impl Into<String>,
    ) -> &Field {
        let seq = self.fields.len() as u32 + 1;
        self.fields.push(Field {
            seq,
            required,
            ty,
            name: name.into(),
            remark: remark.into(),
        });
        &self.fields[self.fields.len() - 1]
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Render the Thrift struct. Fails if the name or every field is missing.
    pub fn build(&self) -> Result<String> {
        let Some(name) = self.table_name.as_deref() else {
            bail!("no table name could be derived");
        };
        if self.fields.is_empty() {
            bail!("struct `{}` has no fields", name);
        }

        let mut out = String::new();
        out.push_str("//");
        out.push_str(self.table_remark.as_deref().unwrap_or_default());
        out.push_str(LINE_END);
        out.push_str(&format!("struct {}{{{}", name, LINE_END));
        for f in &self.fields {
            out.push_str(&format!(
                "    {}:{} {} {} //{}{}",
                f.seq, f.required, f.ty, f.name, f.remark, LINE_END
            ));
        }
        out.push('}');
        Ok(out)
    }
}
