// crates/ib_cli/src/args.rs
//
// Offline CLI argument surface for the vote engine.
// - Subcommands: filter | rank | summary | validate
// - No networked paths (reject any scheme:// like http/https/file)
// - --out is optional; without it results go to stdout

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};

use ib_core::variables::FilterMode;

/// Parsed CLI arguments (raw).
#[derive(Debug, Parser, Clone)]
#[command(
    name = "ib",
    version,
    disable_help_subcommand = true,
    about = "Offline, deterministic vote aggregation for idea boards"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Only report errors on stderr.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Raise log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Highlight ideas by mode (most-liked, need-discussion, none).
    Filter {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, value_parser = parse_mode)]
        mode: FilterMode,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Global ranking plus per-category buckets.
    Rank {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Closed-issue summary report.
    Summary {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Load and check inputs without computing anything.
    Validate {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Debug, clap::Args, Clone)]
pub struct InputArgs {
    /// Issue snapshot JSON path.
    #[arg(long)]
    pub snapshot: PathBuf,
    /// Engine params JSON path (defaults apply when omitted).
    #[arg(long)]
    pub params: Option<PathBuf>,
}

#[derive(Debug, clap::Args, Clone)]
pub struct OutputArgs {
    /// Write the result here (atomically) instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl Command {
    pub fn input(&self) -> &InputArgs {
        match self {
            Command::Filter { input, .. }
            | Command::Rank { input, .. }
            | Command::Summary { input, .. }
            | Command::Validate { input } => input,
        }
    }

    pub fn out(&self) -> Option<&Path> {
        match self {
            Command::Filter { output, .. }
            | Command::Rank { output, .. }
            | Command::Summary { output, .. } => output.out.as_deref(),
            Command::Validate { .. } => None,
        }
    }
}

/// Errors surfaced by argument validation.
/// Keep messages short/stable (handy for scripts/tests).
#[derive(Debug)]
pub enum CliError {
    NonLocalPath(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::NonLocalPath(p) => write!(f, "path must be local file (no scheme): {p}"),
        }
    }
}
impl std::error::Error for CliError {}

/// Mode parser: exact tokens only, no silent fallback.
pub fn parse_mode(s: &str) -> Result<FilterMode, String> {
    s.parse::<FilterMode>().map_err(|e| e.to_string())
}

/// Entry point used by main.rs
pub fn parse_and_validate() -> Result<Args, CliError> {
    let args = Args::parse();
    check_paths(&args)?;
    Ok(args)
}

/// Reject schemes for all provided paths (including --out).
pub fn check_paths(args: &Args) -> Result<(), CliError> {
    let input = args.command.input();
    [Some(input.snapshot.as_path()), input.params.as_deref(), args.command.out()]
        .into_iter()
        .flatten()
        .try_for_each(ensure_local_path)
}

/// Reject any explicit URI scheme (e.g., http://, https://, file://).
#[inline]
fn has_scheme(s: &str) -> bool {
    let lower = s.trim().to_ascii_lowercase();
    lower.contains("://")
        || lower.starts_with("http:")
        || lower.starts_with("https:")
        || lower.starts_with("file:")
}

/// Ensure a provided path string is local (no scheme); existence is left to the loader.
#[inline]
fn ensure_local_path(p: &Path) -> Result<(), CliError> {
    if let Some(s) = p.to_str() {
        if has_scheme(s) {
            return Err(CliError::NonLocalPath(s.to_string()));
        }
    }
    Ok(())
}
