use std::process::exit;

use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use typing_scraper::{FetcherConfig, TypingScraper};
use url::Url;

use crate::args::Args;

mod args;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    let url = match Url::parse(&args.url) {
        Ok(url) => url,
        Err(error) => {
            log::error!("Invalid source url '{}': {}", args.url, error);
            exit(1);
        }
    };

    let scraper = TypingScraper::new(FetcherConfig {
        driver_path: args.driver,
        port: args.port,
        headless: !args.headed,
    });

    let transcript = match scraper.scrape(&url).await {
        Ok(transcript) => transcript,
        Err(error) => {
            log::error!("Failed to scrape '{}': {}", url, error);
            exit(1);
        }
    };

    if let Err(error) = transcript.save(&args.output) {
        log::error!("Failed to write '{}': {}", args.output.display(), error);
        exit(1);
    }

    log::info!("Saved typing material to '{}'", args.output.display());
}
