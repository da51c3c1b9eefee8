//! Rendering options and configuration.

use crate::model::StyleSheet;

/// Options for rendering a block sequence.
///
/// Page geometry and styling are fixed process-wide configuration carried
/// explicitly by this struct rather than ambient state. The defaults are
/// the house values: A4 paper with 72pt margins on all sides.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Per-kind styling profiles
    pub stylesheet: StyleSheet,

    /// PDF document title metadata
    pub title: Option<String>,

    /// Typst paper name
    pub paper: String,

    /// Uniform page margin in points
    pub margin: f32,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the stylesheet.
    pub fn with_stylesheet(mut self, stylesheet: StyleSheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            stylesheet: StyleSheet::default(),
            title: None,
            paper: "a4".to_string(),
            margin: 72.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.paper, "a4");
        assert_eq!(options.margin, 72.0);
        assert!(options.title.is_none());
    }

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new().with_title("Knowledge Base");
        assert_eq!(options.title.as_deref(), Some("Knowledge Base"));
    }
}
