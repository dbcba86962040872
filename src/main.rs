use clap::Parser;
use movie_ranker::domain::ports::ConfigProvider;
use movie_ranker::utils::{logger, validation::Validate};
use movie_ranker::{CliConfig, Command, JsonFileStore, ListEngine, MovieEntry, OmdbClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting movie-ranker CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let store = JsonFileStore::new(config.data_path());
    let lookup = OmdbClient::new(config.api_endpoint(), config.api_key())?;
    let engine = ListEngine::new(store, lookup);

    engine.restore().await?;

    match config.command {
        Command::List => {}
        Command::Add {
            ref title,
            year,
            rank,
            score,
        } => {
            println!("Fetching poster...");
            if let Err(e) = engine.add_entry(title, year, rank, score).await {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            println!("✅ Added {}", title.trim());
        }
        Command::Delete { position } => {
            match engine.delete_entry(position).await {
                Ok(removed) => println!("✅ Deleted {}", removed.title),
                Err(e) => {
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    // Let restore-time poster backfill settle before rendering.
    engine.wait_for_backfill().await;
    print_list(&engine.entries().await);

    Ok(())
}

fn print_list(entries: &[MovieEntry]) {
    if entries.is_empty() {
        println!("No movies added yet.");
        return;
    }
    for entry in entries {
        let year = entry
            .year
            .map(|y| format!(" ({})", y))
            .unwrap_or_default();
        let poster = entry.poster.as_deref().unwrap_or("no poster");
        println!(
            "{}. {}{} — {}/10 [{}]",
            entry.rank, entry.title, year, entry.score, poster
        );
    }
}
