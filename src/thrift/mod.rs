pub mod builder;
pub mod convert;
pub mod ddl;
pub mod naming;
pub mod types;
pub mod write;

pub use builder::StructBuilder;
pub use convert::{convert_to_thrift_struct, try_convert_to_thrift_struct, ERROR_MARKER};
pub use naming::{camel_case, struct_name_from_table_line};
pub use types::{Field, LineKind, Requiredness, ThriftType};
pub use write::write_thrift;
