//! Hero section composition

use crate::action_link::ActionLinkConfig;
use crate::error::Result;
use crate::node::{Element, Node, Tag};
use crate::words::{WordEntry, WordList};
use tracing::debug;

pub const SECTION_CLASS: &str = "relative overflow-hidden";
pub const BACKGROUND_CLASS: &str = "absolute top-0 left-0 z-10";
pub const LAYOUT_CLASS: &str = "hero-layout";
pub const HEADER_CLASS: &str = "flex flex-col justify-center md:w-full w-screen md:px-20 px-5";
pub const STACK_CLASS: &str = "flex flex-col gap-7";
pub const HEADLINE_CLASS: &str = "hero-text";
/// Outer fixed-height clipping region of the rotating words
pub const SLIDE_CLASS: &str = "slide";
/// Inner strip the styling layer moves through the clip region
pub const STRIP_CLASS: &str = "wrapper";
pub const DESCRIPTION_CLASS: &str = "text-white-50 md:text-xl relative z-10 pointer-events-none";
/// Reserved right-hand region, empty for now
pub const RESERVED_CLASS: &str = "hero-model";

/// Static content of the hero section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroContent {
    pub section_id: &'static str,
    pub background_image: &'static str,
    pub background_alt: &'static str,
    /// Three headline lines. The rotating words sit at the start of the second.
    pub headline: [&'static str; 3],
    pub description: &'static str,
    pub cta: ActionLinkConfig,
}

pub const HERO_CONTENT: HeroContent = HeroContent {
    section_id: "hero",
    background_image: "/images/bg.png",
    background_alt: "background",
    headline: ["Shaping", "Into Real Projects", "that Deliver Results"],
    description: "Hi, I'm Reza a developer based in Indonesia with a passion for code",
    cta: ActionLinkConfig::from_static(
        "See My Work",
        Some("md:w-80 md:h-16 w-60 h-12"),
        Some("button"),
    ),
};

impl Default for HeroContent {
    fn default() -> Self {
        HERO_CONTENT
    }
}

impl HeroContent {
    /// Compose the full section around `words`
    pub fn render(&self, words: &WordList) -> Node {
        debug!(words = words.len(), id = self.section_id, "rendering hero section");

        let background = Element::new(Tag::Div).with_class(BACKGROUND_CLASS).with_child(
            Element::new(Tag::Img)
                .with_attr("src", self.background_image)
                .with_attr("alt", self.background_alt),
        );

        let [first, second, third] = self.headline;
        let headline = Element::new(Tag::Div)
            .with_class(HEADLINE_CLASS)
            .with_child(Element::new(Tag::H1).with_child(first))
            .with_child(
                Element::new(Tag::H1)
                    .with_child(rotating_region(words))
                    .with_child(format!(" {second}")),
            )
            .with_child(Element::new(Tag::H1).with_child(third));

        let description = Element::new(Tag::P)
            .with_class(DESCRIPTION_CLASS)
            .with_child(self.description);

        let header = Element::new(Tag::Header).with_class(HEADER_CLASS).with_child(
            Element::new(Tag::Div)
                .with_class(STACK_CLASS)
                .with_child(headline)
                .with_child(description)
                .with_child(self.cta.render()),
        );

        let layout = Element::new(Tag::Div)
            .with_class(LAYOUT_CLASS)
            .with_child(header)
            .with_child(Element::new(Tag::Div).with_class(RESERVED_CLASS));

        Element::new(Tag::Section)
            .with_attr("id", self.section_id)
            .with_class(SECTION_CLASS)
            .with_child(background)
            .with_child(layout)
            .into()
    }
}

/// Clip region wrapping the moving strip of rows. The two levels are part of the contract.
fn rotating_region(words: &WordList) -> Element {
    Element::new(Tag::Span).with_class(SLIDE_CLASS).with_child(
        Element::new(Tag::Span)
            .with_class(STRIP_CLASS)
            .with_children(words.render()),
    )
}

/// Validate `entries` and render the hero section with the built-in content
pub fn render_hero(entries: &[WordEntry]) -> Result<Node> {
    let words = WordList::new(entries.to_vec())?;
    Ok(HERO_CONTENT.render(&words))
}
