//! Terminal presentation shell.
//!
//! Plays the part of the upload page: checks the single-PDF constraint,
//! runs the extractor while a progress line is shown, keeps the result in a
//! [`SessionState`] and renders whatever text the session holds.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::session::SessionState;
use crate::pipeline::extract_path;

pub const PROGRESS_MESSAGE: &str = "Extraindo texto, por favor aguarde...";
pub const SUCCESS_MESSAGE: &str = "Extração concluída!";

#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub input: PathBuf,
    pub quiet: bool,
}

impl ShellConfig {
    pub fn new(input: PathBuf, quiet: bool) -> Self {
        Self { input, quiet }
    }

    /// Only a single existing `.pdf` file is accepted.
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            anyhow::bail!("Input file does not exist: {}", self.input.display());
        }
        if !self.input.is_file() {
            anyhow::bail!("Input is not a file: {}", self.input.display());
        }
        let is_pdf = self
            .input
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if !is_pdf {
            anyhow::bail!("Only PDF files are accepted: {}", self.input.display());
        }
        Ok(())
    }
}

/// Run one extraction and return the session with its text replaced.
///
/// Progress and completion notices go to `status`.
pub fn process_upload<W: Write>(
    config: &ShellConfig,
    session: SessionState,
    status: &mut W,
) -> Result<SessionState> {
    config.validate()?;

    if !config.quiet {
        writeln!(status, "[*] {}", PROGRESS_MESSAGE)?;
    }

    let outcome = extract_path(&config.input);

    if !config.quiet {
        if let Some(doc) = outcome.document() {
            writeln!(
                status,
                "[✓] {} ({} of {} page(s) with text)",
                SUCCESS_MESSAGE, doc.pages_with_text, doc.page_count
            )?;
        }
    }

    Ok(session.record(outcome))
}

/// Write the session text to the display surface, if there is any.
pub fn render<W: Write>(session: &SessionState, out: &mut W) -> Result<()> {
    if session.has_text() {
        out.write_all(session.text().as_bytes())
            .context("failed to write extracted text")?;
        if !session.text().ends_with('\n') {
            writeln!(out)?;
        }
    }
    Ok(())
}
