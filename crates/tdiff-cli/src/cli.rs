use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "tdiff",
    about = "Structural diff of two tree documents for differential testing",
    version
)]
pub struct Cli {
    /// First document (JSON, or TOML when the extension is .toml)
    pub source_a: PathBuf,

    /// Second document
    pub source_b: PathBuf,

    /// Maximum number of divergences to print [default: 30]
    pub max_diffs: Option<usize>,

    /// Fail instead of descending below this many path segments
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// TOML file with default settings; command-line values win
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Name of the first document in messages
    #[arg(long)]
    pub label_a: Option<String>,

    /// Name of the second document in messages
    #[arg(long)]
    pub label_b: Option<String>,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Colorize the text report
    #[arg(long)]
    pub color: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

/// Process exit code for a failed parse: 1 for usage errors, 0 for
/// `--help` and `--version`.
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
