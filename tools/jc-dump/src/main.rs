//! jc-dump: print the comments of JavaScript and TypeScript files.
//!
//! Each file is scanned once and dumped as comment blocks (JSON), as the raw
//! event stream (JSON), or as plain text pairing every block with the line of
//! code it documents.

mod render;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "jc-dump",
    about = "Dump the comments of JavaScript/TypeScript files",
    version
)]
struct Cli {
    /// Source files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// What to print for each file
    #[arg(short, long, value_enum, default_value_t = Mode::Blocks)]
    mode: Mode,

    /// Write `<stem>.json` (or `<stem>.txt` in text mode) next to each file
    /// instead of printing
    #[arg(short, long)]
    write: bool,

    /// Log scanner activity to stderr (`RUST_LOG` takes precedence)
    #[arg(long)]
    log: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Mode {
    /// Comment blocks with their target lines, as JSON
    Blocks,
    /// Every scanner event, as JSON
    Events,
    /// Each comment followed by the line it documents
    Text,
}

impl Mode {
    fn extension(self) -> &'static str {
        match self {
            Mode::Blocks | Mode::Events => "json",
            Mode::Text => "txt",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log);

    for path in &cli.files {
        dump_file(path, cli.mode, cli.write)?;
    }
    Ok(())
}

/// Install a stderr subscriber filtered by `RUST_LOG`, or by `debug`/`warn`
/// when it is unset.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn dump_file(path: &Path, mode: Mode, write: bool) -> anyhow::Result<()> {
    let source =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    debug!(path = %path.display(), bytes = source.len(), ?mode, "scanning");

    let output = render::render(&source, mode)
        .with_context(|| format!("failed to dump {}", path.display()))?;

    if write {
        let out_path = output_path(path, mode)?;
        fs::write(&out_path, output)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        info!(path = %out_path.display(), "wrote dump");
    } else {
        println!("{output}");
    }
    Ok(())
}

/// `path` with the dump extension of `mode`; an error when that would be
/// `path` itself.
fn output_path(path: &Path, mode: Mode) -> anyhow::Result<PathBuf> {
    let out_path = path.with_extension(mode.extension());
    if out_path == path {
        anyhow::bail!("refusing to overwrite {} with its own dump", path.display());
    }
    Ok(out_path)
}
