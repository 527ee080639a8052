use dioxus::prelude::*;
use folio_core::default_words;
use ui::Hero;

#[component]
pub fn Home() -> Element {
    match default_words() {
        Ok(words) => rsx! {
            Hero { words }
        },
        Err(e) => {
            tracing::error!("Invalid word list: {}", e);
            rsx! {
                p { class: "config-error", "Invalid word list: {e}" }
            }
        }
    }
}
