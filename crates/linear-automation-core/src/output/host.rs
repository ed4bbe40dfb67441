//! GitHub Actions implementation of [`ActionHost`]

use super::commands;
use super::writer::OutputFileWriter;
use crate::error::Result;
use crate::inputs::Environment;
use crate::traits::ActionHost;
use std::io::Write;

/// Variable naming the step's output file
pub const OUTPUT_FILE_VAR: &str = "GITHUB_OUTPUT";

/// Reports to the GitHub runner: workflow commands on `out`, outputs to
/// `$GITHUB_OUTPUT`
pub struct GithubActionsHost<W> {
    out: W,
    output_file: Option<OutputFileWriter>,
    failed: bool,
}

impl GithubActionsHost<std::io::Stdout> {
    /// Host writing commands to stdout, output file taken from `env`
    pub fn from_env<E: Environment>(env: &E) -> Self {
        let output_file = env
            .var(OUTPUT_FILE_VAR)
            .filter(|path| !path.is_empty())
            .map(OutputFileWriter::new);
        Self::new(std::io::stdout(), output_file)
    }
}

impl<W: Write> GithubActionsHost<W> {
    /// Host writing commands to `out`
    pub fn new(out: W, output_file: Option<OutputFileWriter>) -> Self {
        Self {
            out,
            output_file,
            failed: false,
        }
    }

    /// Whether [`ActionHost::set_failed`] was called
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Consume the host, returning the command sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ActionHost for GithubActionsHost<W> {
    fn mask(&mut self, secret: &str) -> Result<()> {
        if secret.is_empty() {
            return Ok(());
        }
        writeln!(self.out, "{}", commands::add_mask(secret))?;
        self.out.flush()?;
        Ok(())
    }

    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        self.set_outputs(&[(name, value)])
    }

    fn set_outputs(&mut self, outputs: &[(&str, &str)]) -> Result<()> {
        match &self.output_file {
            Some(writer) => writer.write_all(outputs),
            None => {
                tracing::warn!("GITHUB_OUTPUT not set, falling back to stdout");
                let mut lines = String::new();
                for (name, value) in outputs {
                    lines.push_str(&commands::set_output(name, value));
                    lines.push('\n');
                }
                self.out.write_all(lines.as_bytes())?;
                Ok(())
            }
        }
    }

    fn set_failed(&mut self, message: &str) {
        self.failed = true;
        // Nowhere left to report a broken stdout
        let _ = writeln!(self.out, "{}", commands::error(message));
    }
}
