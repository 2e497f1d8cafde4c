// crates/ib_cli/src/main.rs
//
// Wires up exit codes, typed error mapping, logging, and the four subcommands.
// Every subcommand loads its inputs through ib_io; results go to stdout or,
// with --out, to a file written atomically.

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    pub const VALIDATION: i32 = 2;
    pub const IO: i32 = 4;
}

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use log::LevelFilter;
use serde::Serialize;

use args::{parse_and_validate as parse_cli, Args, Command, InputArgs};
use ib_algo::{filter_ideas, CategoryIndex};
use ib_core::entities::IssueSnapshot;
use ib_core::variables::Params;
use ib_io::{canonical_json, hasher, loader, IoError};
use ib_report::{
    build_rankings, build_summary, render_summary_json_string, IntegrityBlock, ReportError,
};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// JSON shape / cross-reference / domain failures
    Validation(String),
    /// I/O errors (read/write/path/limits)
    Io(String),
    /// Report build or output serialization
    Render(String),
}

impl std::fmt::Display for MainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MainError::Validation(m) => write!(f, "validation: {m}"),
            MainError::Io(m) => write!(f, "io: {m}"),
            MainError::Render(m) => write!(f, "render: {m}"),
        }
    }
}

fn main() -> ExitCode {
    let args = match parse_cli() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("ib: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION as u8);
        }
    };
    init_logging(&args);

    let rc = match run(&args) {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            eprintln!("ib: error: {e}");
            map_error(&e)
        }
    };
    ExitCode::from(rc as u8)
}

/// Default `warn`; `-v` info, `-vv` debug; `--quiet` only errors. RUST_LOG wins.
fn init_logging(args: &Args) {
    let level = if args.quiet {
        LevelFilter::Error
    } else {
        match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(args: &Args) -> Result<(), MainError> {
    let (snapshot, params) = load_inputs(args.command.input())?;

    match &args.command {
        Command::Filter { mode, output, .. } => {
            let highlight = filter_ideas(&snapshot.ideas, *mode, &params);
            log::info!("filter {mode}: {} idea(s) highlighted", highlight.len());
            emit(&highlight, output.out.as_deref())
        }
        Command::Rank { output, .. } => {
            let categories = CategoryIndex::from_params(&snapshot.categories, &params);
            let rankings = build_rankings(&snapshot.ideas, &categories);
            log::info!(
                "rank: {} idea(s) in {} categor(ies)",
                rankings.all.len(),
                rankings.by_category.len()
            );
            emit(&rankings, output.out.as_deref())
        }
        Command::Summary { output, .. } => {
            let digest = hasher::sha256_canonical(&snapshot).map_err(map_io_err)?;
            log::info!("snapshot sha256={digest}");
            let report = build_summary(&snapshot, &params).with_integrity(IntegrityBlock {
                snapshot_sha256: digest,
                engine_name: option_env!("IB_ENGINE_NAME").unwrap_or("ib").to_string(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
            });
            let text = render_summary_json_string(&report).map_err(map_report_err)?;
            write_out(text.as_bytes(), output.out.as_deref())
        }
        Command::Validate { .. } => {
            if !args.quiet {
                eprintln!("validate: inputs OK ({} ideas)", snapshot.ideas.len());
            }
            Ok(())
        }
    }
}

fn load_inputs(input: &InputArgs) -> Result<(IssueSnapshot, Params), MainError> {
    let snapshot = loader::load_snapshot(&input.snapshot).map_err(map_io_err)?;
    let params = match &input.params {
        Some(p) => loader::load_params(p).map_err(map_io_err)?,
        None => Params::default(),
    };
    Ok((snapshot, params))
}

/// Pretty JSON with a trailing newline.
fn emit<T: Serialize>(value: &T, out: Option<&Path>) -> Result<(), MainError> {
    let mut text =
        serde_json::to_string_pretty(value).map_err(|e| MainError::Render(e.to_string()))?;
    text.push('\n');
    write_out(text.as_bytes(), out)
}

fn write_out(bytes: &[u8], out: Option<&Path>) -> Result<(), MainError> {
    match out {
        Some(path) => {
            canonical_json::write_atomic(path, bytes).map_err(map_io_err)?;
            log::info!("wrote {}", path.display());
            Ok(())
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(bytes)
                .and_then(|()| lock.flush())
                .map_err(|e| MainError::Io(format!("stdout: {e}")))
        }
    }
}

/// Map our typed errors to the exit-code table.
fn map_error(e: &MainError) -> i32 {
    use exitcodes::*;
    match e {
        MainError::Validation(_) => VALIDATION,
        MainError::Io(_) => IO,
        MainError::Render(_) => IO,
    }
}

/// Translate ib_io::IoError into MainError buckets for exit-code mapping.
fn map_io_err(e: IoError) -> MainError {
    match e {
        IoError::Json { pointer, msg } => MainError::Validation(format!("json {pointer}: {msg}")),
        IoError::Invalid(m) => MainError::Validation(m),
        IoError::Path(m) => MainError::Io(format!("path: {m}")),
        IoError::Limit(m) => MainError::Io(format!("limit: {m}")),
        IoError::Hash(m) => MainError::Io(format!("hash: {m}")),
    }
}

fn map_report_err(e: ReportError) -> MainError {
    MainError::Render(e.to_string())
}
