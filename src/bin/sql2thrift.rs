use anyhow::{bail, Context, Result};
use sql2thrift::{
    thrift::{struct_name_from_table_line, try_convert_to_thrift_struct, write_thrift},
    ConvertOptions,
};
use std::{env, fs, path::PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    // sql2thrift <ddl.sql> [options.(json|yaml|yml)] [out_dir]
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!(
            "Usage: {} <ddl.sql> [options.json|options.yaml] [out_dir]",
            args[0]
        );
        std::process::exit(1);
    }

    let ddl_path = PathBuf::from(&args[1]);
    let ddl = fs::read_to_string(&ddl_path)
        .with_context(|| format!("reading {}", ddl_path.display()))?;

    let opts = match args.get(2) {
        Some(p) => ConvertOptions::load(p)?,
        None => ConvertOptions::default(),
    };

    let Some(text) = try_convert_to_thrift_struct(&ddl, &opts.table_prefix, &opts.ignore_fields)
        .with_context(|| format!("converting {}", ddl_path.display()))?
    else {
        bail!("{} contains no statement", ddl_path.display());
    };
    println!("{}", text);

    if let Some(out_dir) = args.get(3) {
        let first_line = ddl.lines().next().unwrap_or_default();
        let name = struct_name_from_table_line(first_line, &opts.table_prefix);
        let path = write_thrift(out_dir, &name, &text)?;
        info!("wrote {}", path.display());
    }

    Ok(())
}
