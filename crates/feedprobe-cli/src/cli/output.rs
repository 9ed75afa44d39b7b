//! Output sink selection: stdout or a file given with `-o`.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Write the feed body verbatim to `path`, or to stdout when `None`.
///
/// Missing parent directories of `path` are created first.
pub fn write_feed(path: Option<&Path>, body: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
            let file =
                fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
            write_to(file, body).with_context(|| format!("write {}", path.display()))
        }
        None => write_to(io::stdout().lock(), body).context("write stdout"),
    }
}

fn write_to<W: Write>(mut out: W, body: &[u8]) -> io::Result<()> {
    out.write_all(body)?;
    out.flush()
}
