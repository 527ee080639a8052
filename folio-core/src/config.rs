//! Configuration options for static page rendering

use std::path::PathBuf;

/// Configuration for rendering the hero section to HTML
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// JSON word list to load; the built-in list is used when unset
    pub words_path: Option<PathBuf>,

    /// Document title
    pub title: String,

    /// Stylesheet hrefs linked from the document head
    pub stylesheets: Vec<String>,

    /// Emit only the section markup, without the surrounding document
    pub fragment: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            words_path: None,
            title: "Portfolio".to_string(),
            stylesheets: vec!["/styling/hero.css".to_string()],
            fragment: false,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the word list file
    pub fn with_words_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.words_path = Some(path.into());
        self
    }

    /// Set the document title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    /// Replace the linked stylesheets
    pub fn with_stylesheets<I, S>(mut self, stylesheets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stylesheets = stylesheets.into_iter().map(Into::into).collect();
        self
    }

    /// Emit a bare fragment instead of a full document
    pub fn with_fragment(mut self, fragment: bool) -> Self {
        self.fragment = fragment;
        self
    }
}
