use thiserror::Error;

/// Any fault while opening or reading a PDF stream.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("failed to read PDF stream: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid PDF document: {0}")]
    Open(#[from] lopdf::Error),

    #[error("PDF parser aborted on malformed input: {0}")]
    Panicked(String),
}

impl ExtractionError {
    pub(crate) fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        Self::Panicked(panic_message(payload.as_ref()))
    }
}

pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
