use clap::{Parser, Subcommand};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use marquee::client::HttpMovieClient;
use marquee::config::Config;
use marquee::recent::{RecentSearchStore, SuggestionProvider};
use marquee::session::{no_results_message, SearchEvent, SearchSession};

#[derive(Parser)]
#[command(name = "marquee", version, about = "Movie search with persisted recent searches")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search for movies by title
    Search {
        /// Title to search for
        query: String,
        /// Number of result pages to fetch
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// List recent searches, most recent first
    Recent,
}

/// Initialize console tracing, filtered by `RUST_LOG` (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Command::Search { query, pages } => run_search(&config, &query, pages).await,
        Command::Recent => run_recent(&config),
    }
}

async fn run_search(config: &Config, query: &str, pages: u32) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let store = RecentSearchStore::new(config.store_path());
    let client = HttpMovieClient::new(&config.api);
    let mut session = SearchSession::new(client, store, config.api.poster_base_url.clone(), tx);

    session.search(Some(query), true).await;
    for _ in 1..pages {
        session.search(None, false).await;
    }

    let mut failed = false;
    while let Ok(event) = rx.try_recv() {
        match event {
            SearchEvent::ResultsChanged | SearchEvent::RecentSearchesAvailable => {}
            SearchEvent::SearchFailed { message } => {
                eprintln!("{}", message);
                failed = true;
            }
            SearchEvent::NoResults { query } => {
                println!("{}", no_results_message(&query));
            }
        }
    }

    for (index, item) in session.items().iter().enumerate() {
        println!(
            "{:>3}. {}  ({})",
            index + 1,
            item.name_text,
            item.release_date_text
        );
    }

    if failed {
        anyhow::bail!("search did not complete cleanly");
    }
    Ok(())
}

fn run_recent(config: &Config) -> anyhow::Result<()> {
    let store = RecentSearchStore::new(config.store_path());
    let mut provider = SuggestionProvider::new(store);
    provider.load()?;

    if provider.items().is_empty() {
        println!("No recent searches yet.");
        return Ok(());
    }

    for (index, item) in provider.items().iter().enumerate() {
        println!("{:>3}. {}", index + 1, item.search_text);
    }
    Ok(())
}
