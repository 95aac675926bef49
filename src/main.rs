//! Command-line entry point.
//!
//! Resolves the configuration (defaults, then `--config`, then flags), starts
//! tracing, opens the data file and hands stdin/stdout to the session loop.
//!
//! ```text
//! movie-catalog [--config catalog.toml] [--data-file ~/movies/data.json] [--trace-level debug]
//! ```

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use movie_catalog::observability::init_tracing;
use movie_catalog::storage::JsonStorage;
use movie_catalog::ui::Console;
use movie_catalog::{run, Config, Session};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "movie-catalog")]
#[command(about = "Browse, search and edit a movie catalog stored in a JSON file")]
struct Cli {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog data file. Overrides the configuration file.
    #[arg(long)]
    data_file: Option<String>,

    /// Tracing filter, e.g. `info` or `movie_catalog=debug`.
    #[arg(long)]
    trace_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match start(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("movie-catalog: {e}");
            ExitCode::FAILURE
        }
    }
}

fn start(cli: &Cli) -> movie_catalog::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    }
    .with_overrides(cli.data_file.as_deref(), cli.trace_level.as_deref());

    init_tracing(&config);
    tracing::info!(data_file = ?config.data_file, "starting movie catalog");

    let mut storage = JsonStorage::new(config.data_file.clone())?;
    let (mut session, warning) = Session::open(&storage);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    if let Some(message) = warning {
        console.notice(&message)?;
    }

    run(&mut session, &mut storage, &mut console)?;
    tracing::info!(movies = session.collection().len(), "session finished");
    Ok(())
}
