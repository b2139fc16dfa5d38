use std::io::{self, Write};

use color_eyre::eyre::{Context, Result};
use log::{LevelFilter, info};
use ptero::{
  Site,
  cli::{Cli, Commands, SearchCommands},
};
use ptero_config::Config;
use ptero_search::SearchIndex;
use serde::Serialize;

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse_args();

  env_logger::Builder::new()
    .filter_level(match cli.verbose {
      0 => LevelFilter::Info,
      1 => LevelFilter::Debug,
      _ => LevelFilter::Trace,
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  // Setup thread pool once for all parallel operations
  let thread_count = cli.jobs.unwrap_or_else(num_cpus::get);
  rayon::ThreadPoolBuilder::new()
    .num_threads(thread_count)
    .build_global()?;

  let mut config = Config::load(cli.config_file.as_deref(), &cli.root)
    .wrap_err("Failed to load configuration")?;

  if let Commands::Search {
    command: SearchCommands::Build {
      base_url: Some(base_url),
      ..
    },
  } = &cli.command
  {
    config.site.base_url.clone_from(base_url);
    config.validate()?;
  }

  // A prebuilt index is searched without scanning any content.
  if let Commands::Search {
    command:
      SearchCommands::Query {
        query,
        index: Some(index_path),
        limit,
      },
  } = &cli.command
  {
    let index = SearchIndex::read_from(index_path).wrap_err_with(|| {
      format!("Failed to load search index {}", index_path.display())
    })?;
    return query_index(&index, query, *limit, &config);
  }

  let site = Site::load(&cli.root, config).wrap_err_with(|| {
    format!("Failed to load documentation from {}", cli.root.display())
  })?;
  info!("Loaded {} documents", site.store().len());

  match &cli.command {
    Commands::Sidebar { version } => print_json(&site.sidebar(version.as_deref())),
    Commands::Nav { path } => print_json(&site.page(path)),
    Commands::Render { file } => {
      let rendered = site
        .render_file(file)
        .wrap_err_with(|| format!("Failed to render {}", file.display()))?;
      print_json(&rendered)
    },
    Commands::Entries => print_json(&site.prerender_entries()),
    Commands::Search { command } => {
      match command {
        SearchCommands::Build { output, .. } => {
          let index = site.search_index(None);
          match output {
            Some(output) => {
              index.write_to(output)?;
              info!(
                "Wrote search index with {} entries to {}",
                index.len(),
                output.display()
              );
              Ok(())
            },
            None => print_json(&index),
          }
        },
        SearchCommands::Query { query, limit, .. } => {
          query_index(&site.search_index(None), query, *limit, site.config())
        },
      }
    },
  }
}

fn query_index(
  index: &SearchIndex,
  query: &str,
  limit: Option<usize>,
  config: &Config,
) -> Result<()> {
  let mut search = config.search.clone();
  if limit.is_some() {
    search.limit = limit;
  }
  print_json(&index.search(query, &search))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
  let mut stdout = io::stdout().lock();
  serde_json::to_writer_pretty(&mut stdout, value)?;
  writeln!(stdout)?;
  Ok(())
}
