//! `$GITHUB_OUTPUT` file writer

use crate::error::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Prefix of the per-run heredoc delimiter
pub const DELIMITER_PREFIX: &str = "linear_automation_";

/// Appends step outputs to the file named by `GITHUB_OUTPUT`
#[derive(Debug, Clone)]
pub struct OutputFileWriter {
    path: PathBuf,
    delimiter: String,
}

impl OutputFileWriter {
    /// Writer appending to `path` with a fresh random delimiter
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_delimiter(path, format!("{}{}", DELIMITER_PREFIX, Uuid::new_v4()))
    }

    /// Writer with a fixed delimiter
    pub fn with_delimiter(path: impl Into<PathBuf>, delimiter: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            delimiter: delimiter.into(),
        }
    }

    /// Target file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Heredoc delimiter used for every entry
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Append `name<<DELIM\nvalue\nDELIM\n`
    ///
    /// # Errors
    ///
    /// See [`OutputFileWriter::write_all`].
    pub fn write(&self, name: &str, value: &str) -> Result<()> {
        self.write_all(&[(name, value)])
    }

    /// Append every entry in a single write.
    ///
    /// All entries are rendered first; if any is rejected the file is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// [`Error::Output`] when a name or value contains the delimiter,
    /// [`Error::Io`] when the file cannot be written.
    pub fn write_all(&self, entries: &[(&str, &str)]) -> Result<()> {
        let mut rendered = String::new();
        for (name, value) in entries {
            rendered.push_str(&format_entry(name, value, &self.delimiter)?);
        }

        let mut f = std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        f.write_all(rendered.as_bytes())?;
        Ok(())
    }
}

/// Render one output entry in heredoc form
pub fn format_entry(name: &str, value: &str, delimiter: &str) -> Result<String> {
    if name.contains(delimiter) {
        return Err(Error::Output(format!(
            "output name must not contain the delimiter {}",
            delimiter
        )));
    }
    if value.contains(delimiter) {
        return Err(Error::Output(format!(
            "value of output \"{}\" must not contain the delimiter {}",
            name, delimiter
        )));
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}
