pub mod core;
pub mod parser;
pub mod pipeline;
pub mod shell;

pub use crate::core::error::ExtractionError;
pub use crate::core::model::{ExtractedDocument, ExtractionOutcome, DIAGNOSTIC_PREFIX};
pub use crate::core::normalize::normalize_decimals;
pub use crate::core::session::SessionState;
pub use crate::pipeline::{extract, extract_bytes, extract_outcome, extract_path, try_extract};
