use dioxus::prelude::*;
use folio_core::words::{ICON_CLASS, ROW_CLASS};
use folio_core::WordList;

/// One keyed row per word, in list order.
///
/// Rows are bare; the clip region and moving strip around them belong to [`crate::Hero`].
#[component]
pub fn RotatingWords(words: WordList) -> Element {
    rsx! {
        for word in words.iter() {
            span {
                key: "{word.label}",
                class: ROW_CLASS,
                img {
                    src: "{word.icon_ref}",
                    alt: "{word.label}",
                    class: ICON_CLASS,
                }
                "{word.label}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::WordEntry;

    #[test]
    fn test_rows_follow_list_order() {
        let words = WordList::new(vec![
            WordEntry::new("Websites", "/images/icon-web.png"),
            WordEntry::new("Mobile Apps", "/images/icon-mobile.png"),
        ])
        .unwrap();
        let html = dioxus_ssr::render_element(rsx! { RotatingWords { words } });

        let web = html.find(r#"alt="Websites""#).unwrap();
        let mobile = html.find(r#"alt="Mobile Apps""#).unwrap();
        assert!(web < mobile);
        assert!(html.contains(r#"src="/images/icon-web.png""#));
        assert_eq!(html.matches("<span").count(), 2);
    }
}
