//! bookworm - a terminal client for the CommonsWare book-search API
//!
//! This is the binary entry point. It composes the application by hand
//! (transport -> repository -> presenter -> view); there is no runtime
//! service locator.

use std::path::PathBuf;

use bookworm_app::{config, transport, SearchPresenter, SearchRepository};
use bookworm_core::prelude::*;
use clap::Parser;

/// bookworm - search the book catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "bookworm")]
#[command(about = "Search the CommonsWare book catalog", long_about = None)]
struct Args {
    /// Path to an alternate config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    let args = Args::parse();

    // Initialize logging (to file, since the TUI owns stdout)
    bookworm_core::logging::init()?;

    let settings = config::load_settings(args.config.as_deref());
    info!("Search endpoint: {}", settings.search.base_url);

    // The transport arrives pre-configured with the platform's trust
    // policy; everything downstream is plain constructor injection.
    let client = transport::build_client(&settings.search)?;
    let repository = SearchRepository::new(client, &settings.search.base_url)?;
    let presenter = SearchPresenter::new(repository);

    let result = bookworm_tui::run(presenter).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("bookworm exiting");
    result
}
