use dioxus::prelude::*;
use folio_core::hero::{
    BACKGROUND_CLASS, DESCRIPTION_CLASS, HEADER_CLASS, HEADLINE_CLASS, LAYOUT_CLASS,
    RESERVED_CLASS, SECTION_CLASS, SLIDE_CLASS, STACK_CLASS, STRIP_CLASS,
};
use folio_core::{WordList, HERO_CONTENT};

use crate::{ActionLink, RotatingWords};

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero(words: WordList) -> Element {
    let content = HERO_CONTENT;
    let [first, second, third] = content.headline;

    tracing::debug!("Rendering hero with {} words", words.len());

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section {
            id: content.section_id,
            class: SECTION_CLASS,
            div {
                class: BACKGROUND_CLASS,
                img { src: content.background_image, alt: content.background_alt }
            }
            div {
                class: LAYOUT_CLASS,
                header {
                    class: HEADER_CLASS,
                    div {
                        class: STACK_CLASS,
                        div {
                            class: HEADLINE_CLASS,
                            h1 { "{first}" }
                            h1 {
                                span {
                                    class: SLIDE_CLASS,
                                    span {
                                        class: STRIP_CLASS,
                                        RotatingWords { words: words.clone() }
                                    }
                                }
                                " {second}"
                            }
                            h1 { "{third}" }
                        }
                        p { class: DESCRIPTION_CLASS, "{content.description}" }
                        ActionLink { config: content.cta.clone() }
                    }
                }
                // reserved for a future illustration
                div { class: RESERVED_CLASS }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{default_words, WordEntry, HERO_CONTENT};
    use rstest::rstest;

    fn render(words: WordList) -> String {
        dioxus_ssr::render_element(rsx! { Hero { words } })
    }

    #[test]
    fn test_section_structure() {
        let html = render(default_words().unwrap());

        assert!(html.contains(r#"<section id="hero" class="relative overflow-hidden">"#));
        assert!(html.contains(r#"src="/images/bg.png""#));
        assert!(html.contains(r#"<span class="slide"><span class="wrapper">"#));
        assert!(html.contains("Into Real Projects"));
        assert!(html.contains(r#"class="md:w-80 md:h-16 w-60 h-12 cta-wrapper""#));
        assert!(html.contains(r#"<div class="hero-model"></div>"#));

        let background = html.find("/images/bg.png").unwrap();
        let layout = html.find("hero-layout").unwrap();
        assert!(background < layout);
    }

    #[test]
    fn test_empty_word_list_renders() {
        let html = render(WordList::default());

        assert!(html.contains(r#"<span class="slide"><span class="wrapper">"#));
        assert!(html.contains("See My Work"));
        assert!(!html.contains("rounded-full"));
    }

    /// Fold away serialiser differences that don't change the tree:
    /// self-closing void tags, apostrophe entities and `&` escaping in attributes.
    fn normalize(html: &str) -> String {
        html.replace("/>", ">")
            .replace("&#x27;", "'")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
    }

    #[rstest]
    #[case(default_words().unwrap())]
    #[case(WordList::default())]
    #[case(WordList::new(vec![
        WordEntry::new("A & B", "/images/a.png"),
        WordEntry::new("It's live", "/images/b.png"),
    ]).unwrap())]
    fn test_matches_core_structure(#[case] words: WordList) {
        let component = render(words.clone());
        let core = HERO_CONTENT.render(&words).to_html();

        pretty_assertions::assert_eq!(normalize(&component), normalize(&core));
    }
}
