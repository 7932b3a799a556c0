//! Command line configuration.

use anyhow::{Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Path value that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Command line configuration for mdpost.
#[derive(Debug, Clone, Parser)]
#[command(name = "mdpost", version, about, long_about = None)]
pub struct Config {
    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also write logs to rotated files in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Operations exposed by the binary.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render markdown to an HTML fragment
    Render {
        /// Markdown file, or `-` for standard input
        input: PathBuf,

        /// Write HTML to this file instead of standard output
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the URL slug for some text
    Slug {
        /// Words to slugify, joined with spaces
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Parse a markdown post and print the post record as JSON
    Parse {
        /// Markdown file, or `-` for standard input
        input: PathBuf,

        #[command(flatten)]
        post: PostArgs,

        /// Pretty print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Write a standalone HTML preview page for a post
    Preview {
        /// Markdown file, or `-` for standard input
        input: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,

        #[command(flatten)]
        post: PostArgs,

        /// Do not open the generated page in a browser
        #[arg(long)]
        no_open: bool,
    },
}

/// Record fields that do not come from the markdown itself.
#[derive(Debug, Clone, clap::Args)]
pub struct PostArgs {
    /// Post author (defaults to "Admin")
    #[arg(long)]
    pub author: Option<String>,

    /// Post category
    #[arg(long, default_value = "")]
    pub category: String,

    /// Comma separated tags
    #[arg(long, default_value = "")]
    pub tags: String,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if an input file does not exist.
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = self.command.input()
            && !is_stdin(input)
            && !input.exists()
        {
            bail!("Input file does not exist: {}", input.display());
        }

        Ok(())
    }
}

impl Command {
    /// Returns the markdown input path, if the command reads one.
    pub fn input(&self) -> Option<&Path> {
        match self {
            Command::Render { input, .. }
            | Command::Parse { input, .. }
            | Command::Preview { input, .. } => Some(input),
            Command::Slug { .. } => None,
        }
    }
}

/// Returns true when `path` selects standard input.
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}
