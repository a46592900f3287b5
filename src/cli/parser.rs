use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;

/// Options accepted by `ghcl`
#[derive(Parser, Debug, Default, PartialEq)]
#[command(
    name = "ghcl",
    about = "Generates a markdown changelog for a GitHub milestone"
)]
pub struct Options {
    /// The milestone
    #[arg(short, long)]
    pub milestone: Option<String>,

    /// The file to write the changelog to. Defaults to STDOUT
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Prepend the changelog to the file given with --file (currently ignored)
    #[arg(short, long)]
    pub prepend: bool,

    /// GitHub access token
    #[arg(short, long)]
    pub token: Option<String>,

    /// The user or GitHub organisation
    #[arg(short, long)]
    pub user: Option<String>,

    /// The repository name
    #[arg(short, long)]
    pub repository: Option<String>,

    /// The title of the changelog file (currently ignored)
    #[arg(long)]
    pub title: Option<String>,

    /// Print trace output while fetching
    #[arg(short, long)]
    pub verbose: bool,

    /// GitHub API root, e.g. for GitHub Enterprise
    #[arg(long)]
    pub api_url: Option<String>,
}

/// Enum representing CLI commands
#[derive(Debug, PartialEq)]
pub enum Command {
    Generate(Options),
    /// Usage text requested with `--help`
    Help(String),
    /// Arguments rejected by the parser, with the rendered diagnostic
    Invalid(String),
}

/// Parse command line arguments and return a Command
///
/// # Arguments
/// * `args` - Command line arguments (including program name)
///
/// Required values are not enforced here; `run` validates them so the
/// diagnostics stay specific to the missing option.
pub fn parse_args(args: &[String]) -> Command {
    match Options::try_parse_from(args) {
        Ok(options) => Command::Generate(options),
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            Command::Help(err.render().to_string())
        }
        Err(err) => Command::Invalid(err.render().to_string()),
    }
}
