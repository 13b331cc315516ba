//! REPL configuration.

/// Configuration for a REPL session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Text printed before each input line.
    pub prompt: String,

    /// Whether input lines are lower-cased before parsing.
    ///
    /// Applies to the whole line, keys and values included.
    pub case_insensitive: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            case_insensitive: true,
        }
    }
}

impl ReplConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prompt text.
    #[must_use]
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Sets whether input lines are lower-cased.
    #[must_use]
    pub fn case_insensitive(mut self, value: bool) -> Self {
        self.case_insensitive = value;
        self
    }
}
