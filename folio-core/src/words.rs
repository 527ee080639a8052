//! Rotating word list: configuration and its row rendering

use crate::action_link::is_blank;
use crate::error::{FolioError, Result};
use crate::node::{Element, Node, Tag};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

pub const ROW_CLASS: &str = "flex items-center md:gap-3 gap-1 pb-2";
pub const ICON_CLASS: &str = "xl:size-12 md:size-10 size-7 md:p-2 p-1 rounded-full bg-white-50";

/// One (label, icon) pair in the rotating headline
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    /// Display text, also the row's identity key
    pub label: Cow<'static, str>,
    /// Path or URL of the icon asset
    #[serde(alias = "icon")]
    pub icon_ref: Cow<'static, str>,
}

impl WordEntry {
    pub fn new<L, I>(label: L, icon_ref: I) -> Self
    where
        L: Into<Cow<'static, str>>,
        I: Into<Cow<'static, str>>,
    {
        Self {
            label: label.into(),
            icon_ref: icon_ref.into(),
        }
    }

    pub const fn from_static(label: &'static str, icon_ref: &'static str) -> Self {
        Self {
            label: Cow::Borrowed(label),
            icon_ref: Cow::Borrowed(icon_ref),
        }
    }

    /// The row for this entry: icon first, then the label text
    pub fn render(&self) -> Node {
        Element::new(Tag::Span)
            .with_key(self.label.as_ref())
            .with_class(ROW_CLASS)
            .with_child(
                Element::new(Tag::Img)
                    .with_attr("src", self.icon_ref.as_ref())
                    .with_attr("alt", self.label.as_ref())
                    .with_class(ICON_CLASS),
            )
            .with_child(self.label.as_ref())
            .into()
    }
}

/// Built-in words shown when no word list is supplied
pub const DEFAULT_WORDS: &[WordEntry] = &[
    WordEntry::from_static("Websites", "/images/icon-web.png"),
    WordEntry::from_static("Mobile Apps", "/images/icon-mobile.png"),
    WordEntry::from_static("Web Apps", "/images/icon-webapp.png"),
    WordEntry::from_static("UI Designs", "/images/icon-design.png"),
    WordEntry::from_static("APIs", "/images/icon-api.png"),
];

/// An ordered word list whose labels are known to be non-empty and unique
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<WordEntry>", into = "Vec<WordEntry>")]
pub struct WordList {
    entries: Vec<WordEntry>,
}

impl WordList {
    /// Validate and wrap `entries`, keeping their order
    pub fn new(entries: Vec<WordEntry>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if is_blank(&entry.label) {
                return Err(FolioError::InvalidConfiguration(format!(
                    "word entry {index} has an empty label"
                )));
            }
            if !seen.insert(entry.label.as_ref()) {
                return Err(FolioError::DuplicateKey(entry.label.to_string()));
            }
        }
        Ok(Self { entries })
    }

    /// Parse a JSON array of `{"label": ..., "iconRef": ...}` objects
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<WordEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Load a word list file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let words = Self::from_json_str(&json)?;
        info!("Loaded {} words from {}", words.len(), path.display());
        Ok(words)
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_ref())
    }

    /// One row per entry, in list order
    pub fn render(&self) -> Vec<Node> {
        debug!(rows = self.entries.len(), "rendering rotating words");
        self.entries.iter().map(WordEntry::render).collect()
    }
}

impl TryFrom<Vec<WordEntry>> for WordList {
    type Error = FolioError;

    fn try_from(entries: Vec<WordEntry>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<WordList> for Vec<WordEntry> {
    fn from(words: WordList) -> Self {
        words.entries
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a WordEntry;
    type IntoIter = std::slice::Iter<'a, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The built-in word list, validated
pub fn default_words() -> Result<WordList> {
    WordList::new(DEFAULT_WORDS.to_vec())
}

/// Validate `entries` and map them to rows in input order
pub fn render_rotating_words(entries: &[WordEntry]) -> Result<Vec<Node>> {
    Ok(WordList::new(entries.to_vec())?.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<WordEntry> {
        vec![
            WordEntry::new("Websites", "/images/icon-web.png"),
            WordEntry::new("Mobile Apps", "/images/icon-mobile.png"),
        ]
    }

    #[test]
    fn test_two_rows_in_order_with_alt_text() {
        let rows = render_rotating_words(&sample()).unwrap();
        assert_eq!(rows.len(), 2);

        for (row, (label, icon)) in rows.iter().zip([
            ("Websites", "/images/icon-web.png"),
            ("Mobile Apps", "/images/icon-mobile.png"),
        ]) {
            let row = row.as_element().unwrap();
            assert_eq!(row.tag, Tag::Span);
            assert_eq!(row.key.as_deref(), Some(label));

            let img = row.child_elements().next().unwrap();
            assert_eq!(img.tag, Tag::Img);
            assert_eq!(img.attr("src"), Some(icon));
            assert_eq!(img.attr("alt"), Some(label));

            // icon precedes the label text
            assert!(row.children[0].as_element().is_some());
            assert_eq!(row.children[1].as_text(), Some(label));
        }
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        assert!(render_rotating_words(&[]).unwrap().is_empty());
        assert!(WordList::new(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_label_is_rejected() {
        let mut entries = sample();
        entries.push(WordEntry::new("Websites", "/images/other.png"));

        let err = render_rotating_words(&entries).unwrap_err();
        assert_eq!(err, FolioError::DuplicateKey("Websites".to_string()));
    }

    #[test]
    fn test_labels_differing_in_case_are_distinct() {
        let entries = vec![WordEntry::new("APIs", "/a.png"), WordEntry::new("apis", "/b.png")];
        assert_eq!(WordList::new(entries).unwrap().len(), 2);
    }

    #[test]
    fn test_empty_label_is_rejected() {
        let entries = vec![WordEntry::new("", "/a.png")];
        let err = WordList::new(entries).unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_default_words_are_valid() {
        let words = default_words().unwrap();
        assert_eq!(words.len(), DEFAULT_WORDS.len());
        assert_eq!(words.labels().next(), Some("Websites"));
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let json = r#"[
            {"label": "Websites", "iconRef": "/images/icon-web.png"},
            {"label": "Mobile Apps", "iconRef": "/images/icon-mobile.png"}
        ]"#;
        let words = WordList::from_json_str(json).unwrap();
        assert_eq!(words.labels().collect::<Vec<_>>(), vec!["Websites", "Mobile Apps"]);

        let back = serde_json::to_string(&words).unwrap();
        assert!(back.starts_with(r#"[{"label":"Websites","iconRef":"/images/icon-web.png"}"#));
    }

    #[test]
    fn test_json_accepts_icon_alias() {
        let words = WordList::from_json_str(r#"[{"label": "A", "icon": "/a.png"}]"#).unwrap();
        assert_eq!(words.entries()[0].icon_ref, "/a.png");

        // serialisation always uses the canonical name
        let back = serde_json::to_string(&words).unwrap();
        assert_eq!(back, r#"[{"label":"A","iconRef":"/a.png"}]"#);
    }

    #[test]
    fn test_json_with_duplicates_fails() {
        let json = r#"[{"label": "A", "iconRef": "/a"}, {"label": "A", "iconRef": "/b"}]"#;
        assert_eq!(
            WordList::from_json_str(json).unwrap_err(),
            FolioError::DuplicateKey("A".to_string())
        );
        // the same check applies when deserializing WordList directly
        assert!(serde_json::from_str::<WordList>(json).is_err());
    }
}
