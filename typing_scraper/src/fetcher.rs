use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use fantoccini::{Client, ClientBuilder};
use log::{debug, error, info, warn};
use serde_json::json;
use tokio::process::{Child, Command};
use url::Url;
use webdriver::capabilities::Capabilities;

use crate::error::ScraperError;

const CONNECT_ATTEMPTS: u32 = 20;
const CONNECT_RETRY_DELAY: Duration = Duration::from_millis(250);

/// Where to find the webdriver binary and how to run the browser.
pub struct FetcherConfig {
    pub driver_path: PathBuf,
    pub port: u16,
    pub headless: bool,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            driver_path: PathBuf::from("chromedriver"),
            port: 9515,
            headless: true,
        }
    }
}

/// Fetches rendered HTML by driving a browser through a WebDriver session.
pub struct BrowserFetcher {
    config: FetcherConfig,
}

impl BrowserFetcher {
    pub fn new(config: FetcherConfig) -> Self {
        Self { config }
    }

    /// Load `url` in the browser and return the rendered page source.
    ///
    /// The webdriver process is killed before returning, on the success and
    /// on the error path.
    pub async fn fetch(&self, url: &Url) -> Result<String, ScraperError> {
        let mut driver = self.launch_driver()?;
        let result = self.fetch_page(url).await;

        if let Err(error) = driver.kill().await {
            warn!("Failed to kill the webdriver process: {}", error);
        }

        result
    }

    fn launch_driver(&self) -> Result<Child, ScraperError> {
        info!(
            "Starting webdriver '{}' on port {}",
            self.config.driver_path.display(),
            self.config.port
        );

        Command::new(&self.config.driver_path)
            .arg(format!("--port={}", self.config.port))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|err| {
                error!(
                    "Failed to launch webdriver '{}' - '{}'",
                    self.config.driver_path.display(),
                    err
                );
                ScraperError::DriverLaunch(err)
            })
    }

    async fn fetch_page(&self, url: &Url) -> Result<String, ScraperError> {
        let mut client = self.connect().await?;
        let result = Self::page_source(&mut client, url).await;

        if let Err(error) = client.close().await {
            warn!("Failed to close the webdriver session: {}", error);
        }

        result
    }

    async fn connect(&self) -> Result<Client, ScraperError> {
        let webdriver_url = format!("http://localhost:{}", self.config.port);

        // the driver needs a moment before it accepts connections
        let mut attempts = 0;
        loop {
            match ClientBuilder::native()
                .capabilities(self.capabilities())
                .connect(&webdriver_url)
                .await
            {
                Ok(client) => return Ok(client),
                Err(_) if attempts < CONNECT_ATTEMPTS => {
                    attempts += 1;
                    debug!(
                        "Webdriver at '{}' not ready, attempt {}",
                        webdriver_url, attempts
                    );
                    tokio::time::sleep(CONNECT_RETRY_DELAY).await;
                }
                Err(err) => {
                    error!(
                        "Failed to connect to webdriver at '{}' - '{}'",
                        webdriver_url, err
                    );
                    return Err(ScraperError::Session(err));
                }
            }
        }
    }

    fn capabilities(&self) -> Capabilities {
        let mut chrome_opts = HashMap::new();
        if self.config.headless {
            chrome_opts.insert(
                "args".to_string(),
                json!(["--headless", "--disable-gpu"]),
            );
        }

        let mut caps = Capabilities::new();
        caps.insert("goog:chromeOptions".to_string(), json!(chrome_opts));
        caps
    }

    async fn page_source(client: &mut Client, url: &Url) -> Result<String, ScraperError> {
        client.goto(url.as_str()).await.map_err(|err| {
            error!("Navigation to '{}' failed - '{}'", url.as_str(), err);
            err
        })?;

        let html = client.source().await?;
        Ok(html)
    }
}
