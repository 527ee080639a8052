use dioxus::prelude::*;
use folio_core::action_link::{
    ACCENT_CLASS, ARROW_ALT, ARROW_ICON, BUTTON_CLASS, ICON_WRAPPER_CLASS, LABEL_CLASS,
};
use folio_core::ActionLinkConfig;

/// Call-to-action link styled as a button.
///
/// No `href` is set. Callers that need navigation wrap or target it by id.
#[component]
pub fn ActionLink(config: ActionLinkConfig) -> Element {
    let id = config.element_id().map(str::to_string);
    let class = config.class_name();
    let label = config.label();

    rsx! {
        a {
            id,
            class: "{class}",
            div {
                class: BUTTON_CLASS,
                div { class: ACCENT_CLASS }
                p { class: LABEL_CLASS, "{label}" }
                div {
                    class: ICON_WRAPPER_CLASS,
                    img { src: ARROW_ICON, alt: ARROW_ALT }
                }
            }
        }
    }
}
