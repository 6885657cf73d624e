use crate::core::model::ExtractionOutcome;

/// Text currently shown to one user.
///
/// Owned by the caller for the lifetime of a session. Each extraction replaces
/// it wholesale; dropping it ends the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    text: String,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the shown text with the outcome's display string. A failed
    /// extraction shows its diagnostic, like a successful one shows its text.
    pub fn record(self, outcome: ExtractionOutcome) -> Self {
        Self {
            text: outcome.into_display_string(),
        }
    }

    /// Store the user's edits to the shown text.
    pub fn edit(self, text: String) -> Self {
        Self { text }
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
