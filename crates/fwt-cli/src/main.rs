//! fwt - resolve fixed-width transformer configuration for one file.
//!
//! # Configuration source
//!
//! The document is taken from the first of:
//!
//! 1. `--inline <TEXT>`
//! 2. `--config <PATH>`
//! 3. `config_type=local` → path in `config_name`
//! 4. Object `config_name` in bucket `config_bucket`, served from `--object-root`
//!
//! # Environment Variables
//!
//! - `config_type`: `local` selects a local file, anything else object storage
//! - `config_name`: file path (local) or object key (remote)
//! - `config_bucket`: object storage bucket (remote only)
//! - `RUST_LOG`: log filter when neither `--debug` nor `--verbose` is given

use clap::Parser;
use fwt_cli::{render, ExitCode, OutputFormat};
use fwt_config::{DirObjectStore, FileSpecs, Resolver, DEFAULT_FAMILY};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Resolve the configuration for a file and print its derived specs
#[derive(Parser, Debug)]
#[command(name = "fwt")]
#[command(version, about, long_about = None)]
struct Args {
    /// File identifier (usually the incoming file name) to select a file type for
    #[arg(short, long, value_name = "NAME")]
    file: String,

    /// Local configuration document
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Configuration document given directly as text
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    inline: Option<String>,

    /// Directory mirroring object storage as <root>/<bucket>/<key>
    #[arg(long, value_name = "DIR", env = "FWT_OBJECT_ROOT")]
    object_root: Option<PathBuf>,

    /// Segment family to build layout specs from
    #[arg(long, default_value = DEFAULT_FAMILY)]
    family: String,

    /// Output encoding
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(&args);
    std::process::exit(run(&args).as_i32());
}

fn init_tracing(args: &Args) {
    let filter = if args.debug {
        EnvFilter::new("debug")
    } else if args.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> ExitCode {
    let mut resolver = Resolver::new();
    if let Some(root) = &args.object_root {
        resolver = resolver.with_store(DirObjectStore::new(root));
    }

    debug!(file = %args.file, family = %args.family, "resolving file specs");
    let specs = resolver
        .resolve(args.config.as_deref(), args.inline.as_deref())
        .and_then(|raw| FileSpecs::resolve(&raw, &args.file, &args.family));
    let specs = match specs {
        Ok(specs) => specs,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(e.kind());
        }
    };

    let rendered = match render(&specs, args.format) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::IoError;
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", rendered.trim_end()) {
        eprintln!("error: failed to write output: {}", e);
        return ExitCode::IoError;
    }
    ExitCode::Clean
}
