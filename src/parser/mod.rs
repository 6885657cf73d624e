pub mod pdf_reader;
pub mod text_extractor;

pub use pdf_reader::{PdfPage, PdfReader};
