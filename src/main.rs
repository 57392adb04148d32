use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tagscan::html::Pattern;
use tagscan::{Extractor, Queries};

/// Print the title and first content block of each HTML file.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// HTML files to inspect, processed in order
    paths: Vec<PathBuf>,

    /// Pattern for the title element
    #[arg(long, default_value = tagscan::extract::DEFAULT_TITLE)]
    title: Pattern,

    /// Pattern for the container searched for content
    #[arg(long, default_value = tagscan::extract::DEFAULT_CONTAINER)]
    container: Pattern,

    /// Pattern for the content element inside the container
    #[arg(long, default_value = tagscan::extract::DEFAULT_CONTENT)]
    content: Pattern,

    /// Print the parsed tree before the extracted text
    #[arg(long)]
    dump_tree: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tagscan=warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut extractor = Extractor::new(Queries {
        title: cli.title,
        container: cli.container,
        content: cli.content,
    });
    extractor.dump_tree = cli.dump_tree;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let found = extractor.process_files(&cli.paths, &mut out)?;
    out.flush().context("failed to flush stdout")?;

    tracing::debug!(files = cli.paths.len(), found, "done");

    Ok(())
}
