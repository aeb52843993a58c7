//! ghmeta - print cached GitHub repository metadata

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use ghmeta::cache::{FileStore, KeyValueStore, MemoryStore};
use ghmeta::cli::{CacheBackend, Cli, Command};
use ghmeta::ui::MetadataBadge;
use ghmeta::{CachedFetcher, GitHubClient, widgets};

/// Initialize the tracing subscriber for logging.
///
/// `--debug` forces debug level, otherwise `RUST_LOG` or warnings only.
/// Logs go to stderr so stdout carries just the badge text.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("ghmeta=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ghmeta=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn open_store(backend: CacheBackend) -> Arc<dyn KeyValueStore> {
    match backend {
        CacheBackend::Memory => Arc::new(MemoryStore::new()),
        CacheBackend::Directory(dir) => Arc::new(FileStore::with_dir(dir)),
        CacheBackend::Default => match FileStore::new() {
            Some(store) => Arc::new(store),
            None => {
                tracing::warn!("no cache directory available, caching in memory");
                Arc::new(MemoryStore::new())
            }
        },
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("ghmeta starting with args: {:?}", cli);

    let client = match GitHubClient::with_base_url(&cli.api_url) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let fetcher = CachedFetcher::with_config(open_store(cli.cache_backend()), cli.fetcher_config());

    let (lookup, mut badge) = match &cli.command {
        Command::Stars { repo } => (
            widgets::star_count(&fetcher, &client, repo).await,
            MetadataBadge::stars(),
        ),
        Command::Version { repo, format } => (
            widgets::latest_version(&fetcher, &client, repo, *format).await,
            MetadataBadge::version(),
        ),
    };

    if lookup.is_stale() {
        let repo = match &cli.command {
            Command::Stars { repo } | Command::Version { repo, .. } => repo,
        };
        tracing::debug!(%repo, "fetch failed, showing last known value");
    }

    if badge.resolve(lookup) {
        if let Some(line) = badge.line() {
            println!("{}", line);
        }
    }

    ExitCode::SUCCESS
}
