// Generate the bord(1) man page from the CLI definition
//
// Usage: generate-man [OUTPUT]   (writes to stdout when OUTPUT is omitted)

use anyhow::{Context, Result};
use bord::cli::Cli;
use clap::CommandFactory;
use std::io::Write;

fn main() -> Result<()> {
    let man = clap_mangen::Man::new(Cli::command());
    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer).context("Failed to render man page")?;

    match std::env::args().nth(1) {
        Some(path) => std::fs::write(&path, &buffer)
            .with_context(|| format!("Failed to write man page: {}", path))?,
        None => std::io::stdout().write_all(&buffer)?,
    }
    Ok(())
}
