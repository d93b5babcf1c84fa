//! # CLI Layer
//!
//! The terminal client for the phonebook library. This is the only code that
//! touches stdin, stdout, logging setup, or process exit codes.
//!
//! - `run()`: parses flags, sets up logging, builds the API, starts the session
//! - `setup`: clap definitions
//! - `session`: the interactive menu loop
//! - `render`: menu, tables and colored messages

mod render;
mod session;
mod setup;

use clap::Parser;
use directories::ProjectDirs;
use env_logger::{Builder, Env};
use log::debug;
use phonebook::api::PhonebookApi;
use phonebook::config::PhonebookConfig;
use phonebook::error::Result;
use phonebook::store::fs::FileStore;
use session::Session;
use setup::Cli;
use std::io;
use std::path::PathBuf;

const HOME_ENV: &str = "PHONEBOOK_HOME";

fn init_logger(verbose: bool) {
    // RUST_LOG wins; otherwise stay quiet so logs don't interleave with prompts.
    let default_level = if verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();
}

fn config_dir() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Some(PathBuf::from(home));
    }
    ProjectDirs::from("com", "phonebook", "phonebook").map(|dirs| dirs.config_dir().to_path_buf())
}

fn init_api(cli: &Cli) -> Result<PhonebookApi<FileStore>> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let config = match config_dir() {
        Some(dir) => {
            debug!("reading config from {}", dir.display());
            PhonebookConfig::load(&dir)?
        }
        None => PhonebookConfig::default(),
    };

    let page_size = match cli.page_size {
        Some(size) => size,
        None => config.page_size()?,
    };
    let data_path = match &cli.file {
        Some(path) => path.clone(),
        None => config.data_path(&cwd),
    };
    debug!("data file {}, page size {}", data_path.display(), page_size);

    Ok(PhonebookApi::new(FileStore::new(data_path), page_size))
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let api = init_api(&cli)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(api, stdin.lock(), stdout.lock());
    session.run()
}
