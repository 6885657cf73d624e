use crate::core::error::ExtractionError;
use crate::core::normalize::normalize_decimals;

/// Separator placed between the text of consecutive pages.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Fixed phrase shown in front of every extraction diagnostic.
pub const DIAGNOSTIC_PREFIX: &str = "Ocorreu um erro ao tentar ler o arquivo PDF:";

/// Normalized text of one PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    pub text: String,
    pub page_count: usize,
    pub pages_with_text: usize,
}

impl ExtractedDocument {
    /// Join per-page contributions in order and run the decimal comma pass.
    ///
    /// `pages` holds only the pages that yielded text.
    pub fn from_pages(page_count: usize, pages: Vec<String>) -> Self {
        let pages_with_text = pages.len();
        let joined = pages.join(PAGE_SEPARATOR);
        Self {
            text: normalize_decimals(&joined),
            page_count,
            pages_with_text,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Result of one extraction, kept tagged until it reaches the display.
#[derive(Debug)]
pub enum ExtractionOutcome {
    Extracted(ExtractedDocument),
    Failed(ExtractionError),
}

impl ExtractionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Extracted(_))
    }

    pub fn document(&self) -> Option<&ExtractedDocument> {
        match self {
            Self::Extracted(doc) => Some(doc),
            Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ExtractionError> {
        match self {
            Self::Extracted(_) => None,
            Self::Failed(err) => Some(err),
        }
    }

    /// Collapse into the single string the user sees: document text, or a
    /// diagnostic starting with [`DIAGNOSTIC_PREFIX`].
    pub fn into_display_string(self) -> String {
        match self {
            Self::Extracted(doc) => doc.text,
            Self::Failed(err) => diagnostic(&err),
        }
    }
}

impl From<Result<ExtractedDocument, ExtractionError>> for ExtractionOutcome {
    fn from(result: Result<ExtractedDocument, ExtractionError>) -> Self {
        match result {
            Ok(doc) => Self::Extracted(doc),
            Err(err) => Self::Failed(err),
        }
    }
}

pub fn diagnostic(err: &ExtractionError) -> String {
    format!("{DIAGNOSTIC_PREFIX} {err}")
}
