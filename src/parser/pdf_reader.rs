use std::collections::btree_map;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use lopdf::{Document, ObjectId};
use tracing::debug;

use crate::core::error::ExtractionError;
use crate::parser::text_extractor::extract_page_text;

/// An opened PDF. Parser resources are released when it is dropped.
#[derive(Debug)]
pub struct PdfReader {
    document: Document,
}

impl PdfReader {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExtractionError> {
        let document = Document::load_mem(bytes)?;
        debug!(bytes = bytes.len(), version = %document.version, "opened PDF");
        Ok(Self { document })
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, ExtractionError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    pub fn open(path: &Path) -> Result<Self, ExtractionError> {
        Self::from_reader(File::open(path)?)
    }

    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Pages in document order. The iterator is single pass.
    pub fn pages(&self) -> Pages<'_> {
        Pages {
            document: &self.document,
            inner: self.document.get_pages().into_iter(),
            next_idx: 0,
        }
    }
}

/// One page of a [`PdfReader`].
#[derive(Debug, Clone, Copy)]
pub struct PdfPage<'a> {
    document: &'a Document,
    page_idx: usize,
    page_number: u32,
}

impl PdfPage<'_> {
    /// Zero-based position in the document.
    pub fn page_idx(&self) -> usize {
        self.page_idx
    }

    /// Plain text of the page, or `None` when it has none to give.
    pub fn text(&self) -> Option<String> {
        extract_page_text(self.document, self.page_number)
    }
}

pub struct Pages<'a> {
    document: &'a Document,
    inner: btree_map::IntoIter<u32, ObjectId>,
    next_idx: usize,
}

impl<'a> Iterator for Pages<'a> {
    type Item = PdfPage<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (page_number, _) = self.inner.next()?;
        let page = PdfPage {
            document: self.document,
            page_idx: self.next_idx,
            page_number,
        };
        self.next_idx += 1;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Pages<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_pdf_bytes() {
        let err = PdfReader::from_bytes(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ExtractionError::Open(_)));
    }

    #[test]
    fn rejects_empty_stream() {
        assert!(PdfReader::from_reader(std::io::empty()).is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = PdfReader::open(Path::new("/nonexistent/input.pdf")).unwrap_err();
        assert!(matches!(err, ExtractionError::Io(_)));
    }
}
