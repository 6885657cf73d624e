use std::panic::{self, AssertUnwindSafe};

use lopdf::Document;
use tracing::debug;

use crate::core::error::panic_message;

/// Text of one page, trimmed of the line breaks the parser appends after
/// text objects. Pages without text, and pages the parser fails on, give
/// `None`.
pub fn extract_page_text(document: &Document, page_number: u32) -> Option<String> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        document.extract_text(&[page_number])
    }));

    let raw = match result {
        Ok(Ok(text)) => text,
        Ok(Err(err)) => {
            debug!(page = page_number, error = %err, "page text extraction failed");
            return None;
        }
        Err(payload) => {
            debug!(
                page = page_number,
                error = %panic_message(payload.as_ref()),
                "page text extraction panicked"
            );
            return None;
        }
    };

    clean_page(&raw)
}

fn clean_page(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }
    Some(raw.trim_end_matches(['\r', '\n']).to_string())
}
