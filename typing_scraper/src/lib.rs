mod error;
mod extractor;
mod fetcher;
mod normalize;
mod transcript;
mod util;

#[cfg(test)]
mod tests;

pub use error::ScraperError;
pub use fetcher::{BrowserFetcher, FetcherConfig};
pub use transcript::Transcript;

use extractor::Extractor;
use log::info;
use url::Url;

/// Turns a single web page into plain-text typing material.
pub struct TypingScraper {
    fetcher: BrowserFetcher,
}

impl TypingScraper {
    pub fn new(config: FetcherConfig) -> Self {
        Self {
            fetcher: BrowserFetcher::new(config),
        }
    }

    /// Fetch `url` through the browser, extract the main content and return
    /// it with markup stripped and whitespace normalized.
    pub async fn scrape(&self, url: &Url) -> Result<Transcript, ScraperError> {
        info!("Scraping typing material from '{}'", url.as_str());

        let html = self.fetcher.fetch(url).await?;
        let (title, text) = Extractor::extract(&html)?;
        let content = normalize::normalize(&text);

        Ok(Transcript { title, content })
    }
}
