//! shellscribe: generate JSON documentation from annotated shell scripts.
//!
//! Two modes:
//!
//! - **stdin mode**: `shellscribe < lib.sh` prints the JSON to stdout
//! - **file mode**: `shellscribe -o docs/api lib/ bin/*.sh` writes one
//!   `<name>.json` per script

use anyhow::{Context, Result};
use clap::Parser;
use shellscribe::emit::{self, FileDoc};
use shellscribe::{parser, should_skip, walk, Config};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(
    name = "shellscribe",
    about = "Extract documentation from annotated shell scripts"
)]
struct Cli {
    /// Input files, directories or glob patterns. If omitted, reads from stdin.
    inputs: Vec<String>,

    /// Output directory (required when inputs are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Config file (TOML). Defaults to ./.scribeconf when present.
    #[arg(short = 'c', long)]
    config_file: Option<PathBuf>,

    /// Maximum docblocks per file, the file block included
    #[arg(long)]
    max_docblocks: Option<usize>,

    /// Log per-tag parsing decisions
    #[arg(long)]
    debug: bool,

    /// Log each documented file
    #[arg(long)]
    verbose: bool,

    /// Include @internal functions in output
    #[arg(long)]
    show_internal: bool,
}

impl Cli {
    /// Defaults, then the config file, then flags.
    fn config(&self) -> Result<Config> {
        let mut config = Config::discover(self.config_file.as_deref())?;
        if let Some(max) = self.max_docblocks {
            config.max_docblocks = max;
        }
        config.debug |= self.debug;
        config.verbose |= self.verbose;
        config.show_internal |= self.show_internal;
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.config()?;
    init_tracing(&config);

    if cli.inputs.is_empty() {
        stdin_mode(&config)?;
        return Ok(ExitCode::SUCCESS);
    }

    file_mode(&cli, &config)
}

fn init_tracing(config: &Config) {
    let level = if config.debug {
        LevelFilter::DEBUG
    } else if config.verbose {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// stdin mode: parse one script from stdin, write JSON to stdout.
fn stdin_mode(config: &Config) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let blocks = parser::parse_str("<stdin>", &input, config);
    let doc = if should_skip(&blocks) {
        tracing::info!("input marked with @skip");
        FileDoc::empty("<stdin>")
    } else {
        FileDoc::new("<stdin>", &blocks, config.show_internal)
    };
    print!("{}", emit::to_json(&doc)?);
    Ok(())
}

/// Outcome of one input file.
enum Status {
    Ok,
    Skipped(&'static str),
    Failed(String),
}

/// file mode: one JSON file per input script.
fn file_mode(cli: &Cli, config: &Config) -> Result<ExitCode> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when inputs are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = walk::expand_inputs(&cli.inputs, config.traverse_symlinks)?;
    if input_files.is_empty() {
        eprintln!("error: no input files matched");
        return Ok(ExitCode::FAILURE);
    }

    // output path -> the input that produced it
    let mut written: HashMap<PathBuf, PathBuf> = HashMap::new();
    let (mut processed, mut skipped, mut failed) = (0usize, 0usize, 0usize);
    for path in &input_files {
        let status = match process_file(path, output_dir, config, &mut written) {
            Ok(status) => status,
            Err(e) => Status::Failed(format!("{:#}", e)),
        };
        match &status {
            Status::Ok => {
                processed += 1;
                eprintln!("{} OK", path.display());
            }
            Status::Skipped(reason) => {
                skipped += 1;
                eprintln!("{} SKIPPED ({})", path.display(), reason);
            }
            Status::Failed(reason) => {
                failed += 1;
                eprintln!("{} FAILED ({})", path.display(), reason);
            }
        }
    }

    eprintln!(
        "{} processed, {} skipped, {} failed",
        processed, skipped, failed
    );
    tracing::info!(output = %output_dir.display(), "done");

    Ok(if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn process_file(
    path: &Path,
    output_dir: &Path,
    config: &Config,
    written: &mut HashMap<PathBuf, PathBuf>,
) -> Result<Status> {
    if walk::is_elf_binary(path).with_context(|| format!("failed to open {}", path.display()))? {
        return Ok(Status::Skipped("ELF binary detected"));
    }

    let blocks = parser::parse_file(path, config)?;
    if should_skip(&blocks) {
        return Ok(Status::Skipped("marked with @skip"));
    }

    let source = path.display().to_string();
    let doc = FileDoc::new(&source, &blocks, config.show_internal);
    let out_path = output_dir.join(format!("{}.json", emit::derive_output_name(&source)));
    if let Some(earlier) = written.get(&out_path) {
        return Ok(Status::Failed(format!(
            "{} already written from {}",
            out_path.display(),
            earlier.display()
        )));
    }
    fs::write(&out_path, emit::to_json(&doc)?)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    tracing::info!(
        path = %path.display(),
        functions = blocks.len() - 1,
        "documented"
    );
    written.insert(out_path, path.to_path_buf());
    Ok(Status::Ok)
}
