use anyhow::Result;
use sql2thrift::{config::DEMO_DDL, convert_to_thrift_struct, ConvertOptions};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let opts = ConvertOptions::demo();
    info!(prefix = %opts.table_prefix, ignored = ?opts.ignore_fields, "converting demo table");

    let res = convert_to_thrift_struct(DEMO_DDL, &opts.table_prefix, &opts.ignore_fields);
    println!("{}", res);
    Ok(())
}
