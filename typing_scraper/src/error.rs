use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("libXml Error")]
    Xml,
    #[error("No element with role 'main' found")]
    NoContent,
    #[error("Failed to launch the webdriver process")]
    DriverLaunch(#[from] std::io::Error),
    #[error("Failed to start a webdriver session")]
    Session(#[from] fantoccini::error::NewSessionError),
    #[error("WebDriver command failed")]
    WebDriver(#[from] fantoccini::error::CmdError),
}
