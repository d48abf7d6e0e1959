//! Word of the Day CLI
//!
//! Runs the HTTP API or a single pipeline pass from the command line.

use std::path::PathBuf;

use chrono::{Duration, NaiveDate};
use clap::{Parser, Subcommand};
use wotd::{
    error::Result,
    models::{Config, WordPayload, WordPool},
    pipeline::Enricher,
    server,
    services::DateIndexer,
    utils::{self, http},
};

/// wotd - English/Spanish word of the day
#[derive(Parser, Debug)]
#[command(name = "wotd", version, about = "Bilingual word of the day service")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "data/config.toml", env = "WOTD_CONFIG")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the word of the day over HTTP
    Serve {
        /// Address to bind (overrides server.bind)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Build the record for a day and print it as JSON
    Today {
        /// Day to build (YYYY-MM-DD, default: today in UTC)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },

    /// Build the record for a specific word and print it as JSON
    Word {
        word: String,

        /// Date stamped on the record (YYYY-MM-DD, default: today in UTC)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },

    /// Show which word each day selects, without network access
    Pick {
        /// First day (YYYY-MM-DD, default: today in UTC)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Number of consecutive days to list
        #[arg(long, default_value_t = 7)]
        days: u32,
    },

    /// Validate the configuration file
    Validate,
}

fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    utils::parse_date(s).map_err(|e| e.to_string())
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn build_enricher(config: &Config) -> Result<Enricher> {
    config.validate()?;
    let client = http::create_async_client(&config.http)?;
    Enricher::from_config(config, client)
}

fn print_payload(payload: &WordPayload) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(payload)?);
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    config.apply_env_overrides();
    log::debug!("Loaded configuration from {}", cli.config.display());

    match cli.command {
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            config.validate()?;
            server::serve(&config).await?;
        }

        Command::Today { date } => {
            let enricher = build_enricher(&config)?;
            let enriched = match date {
                Some(date) => enricher.build_record_for(date).await,
                None => enricher.build_today_record().await,
            };
            if enriched.is_fallback() {
                log::warn!("Upstream lookup failed; printing the fallback record");
            }
            print_payload(&WordPayload::from_record(&enriched.record))?;
        }

        Command::Word { word, date } => {
            let enricher = build_enricher(&config)?;
            let enriched = enricher
                .build_record_for_word(word.trim(), date.unwrap_or_else(utils::today))
                .await;
            if enriched.is_fallback() {
                log::warn!("Lookup failed for '{}'; printing the fallback record", word);
            }
            print_payload(&WordPayload::from_record(&enriched.record))?;
        }

        Command::Pick { date, days } => {
            let pool = WordPool::new(config.selection.words.iter().cloned())?;
            let indexer = DateIndexer::new(config.selection.strategy);
            let start = date.unwrap_or_else(utils::today);

            log::info!(
                "Strategy {:?}, pool of {} words",
                indexer.strategy(),
                pool.size()
            );
            for offset in 0..days {
                let day = start + Duration::days(i64::from(offset));
                let (index, word) = indexer.pick(&pool, day);
                println!("{day}  #{index:<3} {word}");
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!(
                "✓ Config OK ({} words, {:?} selection)",
                config.selection.words.len(),
                config.selection.strategy
            );
        }
    }

    Ok(())
}
