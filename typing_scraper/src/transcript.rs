use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;

/// The scraped page reduced to typing material.
pub struct Transcript {
    pub title: String,
    pub content: String,
}

impl Transcript {
    /// Write the transcript to `path`, overwriting an existing file.
    ///
    /// Layout: a `Title:` header line, the title, a blank line and the
    /// normalized content.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let mut file = File::create(path)?;
        writeln!(file, "Title:")?;
        writeln!(file, "{}", self.title)?;
        writeln!(file)?;
        write!(file, "{}", self.content)?;
        Ok(())
    }
}
