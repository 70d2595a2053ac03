//! Turn a MySQL `CREATE TABLE` statement into a Thrift `struct`.

pub mod config;
pub mod thrift;

pub use config::ConvertOptions;
pub use thrift::{convert_to_thrift_struct, try_convert_to_thrift_struct, ERROR_MARKER};
