use std::io::Read;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::core::error::ExtractionError;
use crate::core::model::{ExtractedDocument, ExtractionOutcome};
use crate::parser::PdfReader;

/// Walk every page of an opened PDF and build the normalized document.
pub fn build_document(reader: &PdfReader) -> ExtractedDocument {
    let pages = reader.pages();
    let page_count = pages.len();
    let mut contributions = Vec::with_capacity(page_count);

    for page in pages {
        match page.text() {
            Some(text) => contributions.push(text),
            None => debug!(page = page.page_idx() + 1, "no extractable text, skipping page"),
        }
    }

    ExtractedDocument::from_pages(page_count, contributions)
}

/// Extract from in-memory PDF bytes, keeping failures typed.
pub fn try_extract_bytes(bytes: &[u8]) -> Result<ExtractedDocument, ExtractionError> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| -> Result<_, ExtractionError> {
        let reader = PdfReader::from_bytes(bytes)?;
        Ok(build_document(&reader))
    }));

    let document = result.map_err(ExtractionError::from_panic)??;
    info!(
        pages = document.page_count,
        pages_with_text = document.pages_with_text,
        chars = document.text.chars().count(),
        "extraction finished"
    );
    Ok(document)
}

/// Extract from any byte stream, keeping failures typed.
pub fn try_extract<R: Read>(mut reader: R) -> Result<ExtractedDocument, ExtractionError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    try_extract_bytes(&bytes)
}

pub fn extract_outcome<R: Read>(reader: R) -> ExtractionOutcome {
    log_outcome(try_extract(reader).into())
}

pub fn extract_bytes(bytes: &[u8]) -> ExtractionOutcome {
    log_outcome(try_extract_bytes(bytes).into())
}

pub fn extract_path(path: &Path) -> ExtractionOutcome {
    let outcome = std::fs::File::open(path)
        .map_err(ExtractionError::from)
        .and_then(try_extract);
    log_outcome(outcome.into())
}

/// Extract and collapse to the display string: document text, or a
/// diagnostic when the PDF could not be read.
pub fn extract<R: Read>(reader: R) -> String {
    extract_outcome(reader).into_display_string()
}

fn log_outcome(outcome: ExtractionOutcome) -> ExtractionOutcome {
    if let Some(err) = outcome.error() {
        warn!(error = %err, "PDF extraction failed");
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::DIAGNOSTIC_PREFIX;

    #[test]
    fn garbage_bytes_fail_with_open_error() {
        let err = try_extract_bytes(b"<html>not a pdf</html>").unwrap_err();
        assert!(matches!(err, ExtractionError::Open(_)));
    }

    #[test]
    fn garbage_stream_becomes_diagnostic() {
        let shown = extract(&b"\x00\x01\x02 corrupted"[..]);
        assert!(shown.starts_with(DIAGNOSTIC_PREFIX));
        assert!(shown.len() > DIAGNOSTIC_PREFIX.len());
    }

    #[test]
    fn missing_file_becomes_io_failure() {
        let outcome = extract_path(Path::new("/nonexistent/dir/input.pdf"));
        assert!(matches!(outcome.error(), Some(ExtractionError::Io(_))));
    }

    #[test]
    fn failing_reader_becomes_io_failure() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"))
            }
        }

        let err = try_extract(Broken).unwrap_err();
        assert!(matches!(err, ExtractionError::Io(_)));
        assert!(extract(Broken).ends_with("disk gone"));
    }
}
