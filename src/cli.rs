use std::path::PathBuf;

use clap::{Parser, builder::styling};

const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// Commit generated files and push a ref back to its remote
///
/// Step inputs are read from INPUT_* environment variables
/// (INPUT_COMMIT-FILES, INPUT_FORCE, INPUT_TOKEN, ...).
#[derive(Parser, Debug)]
#[command(name = "autopush")]
#[command(author, version, long_about)]
#[command(styles = STYLES)]
pub struct Cli {
    /// Working directory inside the repository
    #[arg(env = "GITHUB_WORKSPACE", default_value = ".")]
    pub path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
