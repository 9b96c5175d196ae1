use clap::{command, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Url of the page to scrape, including the scheme
    pub url: String,

    /// Path to the chromedriver binary
    #[arg(long, value_name = "FILE", env = "CHROMEDRIVER_PATH", default_value = "chromedriver")]
    pub driver: PathBuf,

    /// Port the webdriver listens on
    #[arg(long, value_name = "PORT", default_value_t = 9515)]
    pub port: u16,

    /// Run the browser with a visible window
    #[arg(long)]
    pub headed: bool,

    /// Destination of the resulting text file
    #[arg(short, long, value_name = "FILE", default_value = "result.txt")]
    pub output: PathBuf,

    /// Turn debug logging on
    #[arg(short, long)]
    pub debug: bool,
}
