//! `glint` — expand a GLSL root file's `#include` tree to stdout.
//!
//! ```text
//! glint shaders/main.frag > expanded.frag
//! RUST_LOG=glint_glsl=trace glint shaders/main.frag
//! ```

use std::io::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use glint_glsl::IncludeResolver;

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args_os().skip(1);
    let root = match args.next() {
        Some(path) => PathBuf::from(path),
        None => bail!("usage: glint <root.glsl>"),
    };
    if args.next().is_some() {
        bail!("usage: glint <root.glsl>");
    }

    let blob = IncludeResolver::new()
        .resolve(&root)
        .with_context(|| format!("failed to expand '{}'", root.display()))?;

    std::io::stdout()
        .lock()
        .write_all(blob.as_bytes())
        .context("failed to write expanded source")?;
    Ok(())
}

/// Honors `RUST_LOG`; defaults to warnings only so stdout stays a clean
/// source blob when piped.
fn init_logging() {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Warn);
    }
    builder.init();
}
