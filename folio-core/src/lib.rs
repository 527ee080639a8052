//! Folio Core Library
//!
//! Pure rendering of a portfolio hero section: a headline with a rotating
//! word list, a description line and a call-to-action link. Everything here
//! maps configuration to a structural [`Node`] tree; styling and animation are
//! left to whatever interprets the emitted class names.

pub mod action_link;
pub mod config;
pub mod error;
pub mod hero;
pub mod node;
pub mod words;

pub use action_link::{render_action_link, ActionLinkConfig};
pub use config::RenderConfig;
pub use error::{FolioError, Result};
pub use hero::{render_hero, HeroContent, HERO_CONTENT};
pub use node::{Element, Node, Tag};
pub use words::{default_words, render_rotating_words, WordEntry, WordList, DEFAULT_WORDS};

use tracing::info;

/// Resolve the word list a render should use
pub fn load_words(config: &RenderConfig) -> Result<WordList> {
    match &config.words_path {
        Some(path) => WordList::load(path),
        None => default_words(),
    }
}

/// High-level page rendering function
pub fn render_page(config: &RenderConfig) -> Result<String> {
    let words = load_words(config)?;
    let section = HERO_CONTENT.render(&words);

    info!("Rendered hero section with {} words", words.len());

    if config.fragment {
        return Ok(section.to_html());
    }
    Ok(html_document(&section, &config.title, &config.stylesheets))
}

/// Wrap a rendered node in a minimal HTML document
pub fn html_document<S: AsRef<str>>(body: &Node, title: &str, stylesheets: &[S]) -> String {
    let mut head = format!(
        "<meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"><title>{}</title>",
        node::escape(title)
    );
    for href in stylesheets {
        head.push_str(&format!(
            "<link rel=\"stylesheet\" href=\"{}\">",
            node::escape(href.as_ref())
        ));
    }
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head>{head}</head><body>{}</body></html>\n",
        body.to_html()
    )
}
