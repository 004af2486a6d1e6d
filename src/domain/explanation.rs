/// Returned when the service answers without any text.
pub const EMPTY_EXPLANATION_FALLBACK: &str = "No explanation could be generated at this time.";

/// Prefix attached to every explanation failure shown to the user.
pub const EXPLANATION_ERROR_PREFIX: &str = "Failed to connect to the future-seeing core";

/// Progress of the explanation for the current prediction.
///
/// At most one of `text` and `error` is set. `is_loading` is only true while
/// a request is in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplanationState {
    text: String,
    is_loading: bool,
    error: Option<String>,
}

impl ExplanationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text if one has been received, `None` while empty.
    pub fn text_opt(&self) -> Option<&str> {
        if self.text.is_empty() { None } else { Some(&self.text) }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Enter the loading state, keeping any previous text but dropping errors.
    pub fn begin_loading(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn succeed(&mut self, text: impl Into<String>) {
        *self = Self { text: text.into(), is_loading: false, error: None };
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = Self { text: String::new(), is_loading: false, error: Some(message.into()) };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
