// src/thrift/write.rs

use anyhow::{Context, Result};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

/// Write `text` to `<dir>/<struct_name>.thrift` and return the path.
///
/// Goes through a hidden temp file in the same directory, then renames
/// over the target, so readers never see a half-written file.
pub fn write_thrift<P: AsRef<Path>>(dir: P, struct_name: &str, text: &str) -> Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let path = dir.join(format!("{}.thrift", struct_name));
    let tmp_path = dir.join(format!(".{}.thrift.tmp", struct_name));

    let mut tmp = fs::File::create(&tmp_path)
        .with_context(|| format!("creating {}", tmp_path.display()))?;
    tmp.write_all(text.as_bytes())?;
    tmp.write_all(b"\r\n")?;
    tmp.sync_all()?;
    drop(tmp);

    fs::rename(&tmp_path, &path)
        .with_context(|| format!("renaming {} -> {}", tmp_path.display(), path.display()))?;
    Ok(path)
}
