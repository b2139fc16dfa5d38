use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Command line interface for ptero
#[derive(Parser, Debug)]
#[command(author, version, about = "ptero: versioned documentation content pipeline")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Increase log verbosity (-v for debug, -vv for trace)
  #[arg(short, long, action = ArgAction::Count, global = true)]
  pub verbose: u8,

  /// Path to the configuration file (TOML or JSON). Defaults to the first of
  /// ptero.toml, ptero.json, .ptero.* or .config/ptero.* under the root.
  #[arg(short = 'c', long = "config-file", global = true)]
  pub config_file: Option<PathBuf>,

  /// Project root containing the content directories.
  #[arg(short, long, default_value = ".", global = true)]
  pub root: PathBuf,

  /// Number of threads to use for parallel processing.
  #[arg(short = 'p', long = "jobs", global = true)]
  pub jobs: Option<usize>,
}

/// All supported subcommands for the ptero CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Print the sidebar tree of a version as JSON.
  Sidebar {
    /// Version id or alias. Defaults to latest.
    #[arg(long)]
    version: Option<String>,
  },

  /// Print previous/next links, breadcrumbs and the edit link for a page
  /// URL.
  Nav {
    /// Page URL, e.g. /docs/latest/guides/setup
    path: String,
  },

  /// Build or query the search index.
  Search {
    #[command(subcommand)]
    command: SearchCommands,
  },

  /// Compile a markdown file and print its HTML and code components as JSON.
  Render {
    /// Markdown file, with or without frontmatter.
    file: PathBuf,
  },

  /// List every page to prerender as JSON.
  Entries,
}

#[derive(Subcommand, Debug)]
pub enum SearchCommands {
  /// Build the search index JSON.
  Build {
    /// Write the index here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Base URL for entry hrefs, overriding site.base_url.
    #[arg(long = "base-url")]
    base_url: Option<String>,
  },

  /// Run a query and print ranked hits as JSON.
  Query {
    /// Search text.
    query: String,

    /// Load a prebuilt index instead of scanning the content.
    #[arg(short, long)]
    index: Option<PathBuf>,

    /// Maximum number of hits.
    #[arg(short = 'n', long)]
    limit: Option<usize>,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
