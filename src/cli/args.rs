//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run catalog lint rules (unfinished, vanished, placeholders, ...)
//! - `clean`: Remove vanished messages from catalogs
//! - `lookup`: Translate one string through a catalog
//! - `stats`: Print translation coverage per catalog
//! - `init`: Initialize tscat configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::rules::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Clean(cmd)) => cmd.args.common.verbose,
            Some(Command::Stats(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(_)) | Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands that scan a directory.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory to scan for .ts catalogs (default: current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: `checks` from config, else all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Parser)]
pub struct CleanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite catalogs (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub args: CleanArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Catalog file (.ts)
    pub file: PathBuf,

    /// Context name (usually the UI class)
    pub context: String,

    /// Source text to translate
    pub source: String,

    /// Arguments substituted into the placeholders
    pub args: Vec<String>,

    /// Disambiguation comment
    #[arg(long)]
    pub comment: Option<String>,

    /// Count used to pick the numerus form and fill %n
    #[arg(short = 'n', long = "count")]
    pub count: Option<u64>,

    /// Ignore translations still marked unfinished
    #[arg(long)]
    pub finished_only: bool,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print statistics as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for unfinished, vanished, duplicate or inconsistent translations
    Check(CheckCommand),
    /// Remove vanished messages from catalogs
    Clean(CleanCommand),
    /// Look up one string in a catalog and print the translation
    Lookup(LookupCommand),
    /// Print translation coverage for each catalog
    Stats(StatsCommand),
    /// Initialize a new .tscatrc.json configuration file
    Init,
}
