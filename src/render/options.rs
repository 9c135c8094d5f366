//! Rendering options.

/// Options for plain text export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextOptions {
    /// Text inserted between pages (none by default)
    pub page_separator: Option<String>,

    /// Drop carriage returns so CRLF input comes out as LF
    pub strip_carriage_returns: bool,
}

impl TextOptions {
    /// Create new text options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page separator.
    pub fn with_page_separator(mut self, separator: impl Into<String>) -> Self {
        self.page_separator = Some(separator.into());
        self
    }

    /// Enable or disable carriage return stripping.
    pub fn with_strip_carriage_returns(mut self, strip: bool) -> Self {
        self.strip_carriage_returns = strip;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_options_builder() {
        let options = TextOptions::new()
            .with_page_separator("\x0c")
            .with_strip_carriage_returns(true);

        assert_eq!(options.page_separator.as_deref(), Some("\x0c"));
        assert!(options.strip_carriage_returns);
    }

    #[test]
    fn test_default_options() {
        let options = TextOptions::default();
        assert!(options.page_separator.is_none());
        assert!(!options.strip_carriage_returns);
    }
}
