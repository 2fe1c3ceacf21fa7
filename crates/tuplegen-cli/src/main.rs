//! CLI binary for tuplegen: print tuple `Split` impls for a range of arities.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tuplegen_core::TuplegenConfig;

#[derive(Parser)]
#[command(
    name = "tuplegen",
    version,
    about = "Print Split trait impls for tuples, ready to paste into a source file"
)]
struct Cli {
    /// First arity to generate (default 2)
    #[arg(long)]
    min_arity: Option<usize>,

    /// Last arity to generate (default 16, at most 26)
    #[arg(long)]
    max_arity: Option<usize>,

    /// Trait name used in impl headers (default "Split")
    #[arg(long)]
    trait_name: Option<String>,

    /// Emit the trait definition before the impls
    #[arg(long)]
    with_trait: bool,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (defaults to ./tuplegen.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let range = config.arity_range()?;
    let options = config.emit_options();

    tracing::info!(
        min = range.min(),
        max = range.max(),
        trait_name = %options.trait_name,
        "generating impls"
    );

    let blocks = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            let blocks = tuplegen_core::emit(&mut out, &range, &options)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Generated {} impls into {}", blocks, path.display());
            blocks
        }
        None => {
            let mut out = io::stdout().lock();
            tuplegen_core::emit(&mut out, &range, &options)?
        }
    };

    tracing::info!(blocks, "done");
    Ok(())
}

/// Config file (explicit or `./tuplegen.toml`), then env, then flags.
/// Validation runs once, on the merged result.
fn resolve_config(cli: &Cli) -> Result<TuplegenConfig> {
    let mut config = match &cli.config {
        Some(path) => TuplegenConfig::load_file(path)?,
        None => {
            let cwd = std::env::current_dir().context("failed to get current directory")?;
            TuplegenConfig::load(&cwd)?
        }
    };

    if let Some(min) = cli.min_arity {
        config.arity.min = min;
    }
    if let Some(max) = cli.max_arity {
        config.arity.max = max;
    }
    if let Some(name) = &cli.trait_name {
        config.output.trait_name.clone_from(name);
    }
    if cli.with_trait {
        config.output.with_trait_definition = true;
    }

    config
        .validate()
        .with_context(|| describe_source(config.source.as_deref()))?;
    Ok(config)
}

fn describe_source(source: Option<&Path>) -> String {
    match source {
        Some(path) => format!(
            "invalid settings (from {}, environment and flags)",
            path.display()
        ),
        None => "invalid settings (from defaults, environment and flags)".to_string(),
    }
}
