//! Generates the four theme reference workbooks into the current directory.
//!
//! No flags and no configuration; the tables are compiled in. Diagnostics go
//! to stderr via `RUST_LOG`, the confirmation lines to stdout.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use farabi_theme_docs::{documents, write_document};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let out_dir = std::env::current_dir().context("resolving the output directory")?;
    for document in documents::all() {
        let path = write_document(&document, &out_dir)
            .with_context(|| format!("generating {}.xlsx", document.file_stem))?;
        println!("Created: {}", path.display());
    }

    println!("\n✅ All Excel files generated successfully!");
    Ok(())
}
