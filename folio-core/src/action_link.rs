//! Call-to-action link rendered as a button

use crate::error::{FolioError, Result};
use crate::node::{Element, Node, Tag};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;

/// Classifier always present on the root link
pub const BASE_CLASS: &str = "cta-wrapper";
/// Decorative container; `group` lets the styling layer drive hover effects on children
pub const BUTTON_CLASS: &str = "cta-button group";
pub const ACCENT_CLASS: &str = "bg-circle";
pub const LABEL_CLASS: &str = "text";
pub const ICON_WRAPPER_CLASS: &str = "arrow-wrapper";
pub const ARROW_ICON: &str = "/images/arrow-down.svg";
pub const ARROW_ALT: &str = "arrow";

/// Configuration for a single call-to-action link.
///
/// There is no navigation target. The link is anchor-capable, but whoever
/// mounts it has to supply an `href` (or a click handler) themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawActionLinkConfig")]
#[serde(rename_all = "camelCase")]
pub struct ActionLinkConfig {
    label: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    style_hook: Option<Cow<'static, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    element_id: Option<Cow<'static, str>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawActionLinkConfig {
    label: String,
    #[serde(default)]
    style_hook: Option<String>,
    #[serde(default)]
    element_id: Option<String>,
}

impl TryFrom<RawActionLinkConfig> for ActionLinkConfig {
    type Error = FolioError;

    fn try_from(raw: RawActionLinkConfig) -> Result<Self> {
        let mut config = ActionLinkConfig::new(raw.label)?;
        if let Some(hook) = raw.style_hook {
            config = config.with_style_hook(hook);
        }
        if let Some(id) = raw.element_id {
            config = config.with_element_id(id);
        }
        Ok(config)
    }
}

impl ActionLinkConfig {
    /// Create a configuration, rejecting a blank label
    pub fn new<S: Into<Cow<'static, str>>>(label: S) -> Result<Self> {
        let label = label.into();
        if is_blank(&label) {
            return Err(FolioError::InvalidConfiguration(
                "action link label must not be empty".to_string(),
            ));
        }
        Ok(Self {
            label,
            style_hook: None,
            element_id: None,
        })
    }

    /// Compile-time constructor for literal configurations.
    ///
    /// A blank label fails const evaluation, so a bad literal never builds.
    pub const fn from_static(
        label: &'static str,
        style_hook: Option<&'static str>,
        element_id: Option<&'static str>,
    ) -> Self {
        assert!(!is_blank(label), "action link label must not be empty");
        Self {
            label: Cow::Borrowed(label),
            style_hook: match style_hook {
                Some(hook) if !is_blank(hook) => Some(Cow::Borrowed(hook)),
                _ => None,
            },
            element_id: match element_id {
                Some(id) if !is_blank(id) => Some(Cow::Borrowed(id)),
                _ => None,
            },
        }
    }

    /// Set the extra classifier. A blank hook counts as absent.
    pub fn with_style_hook<S: Into<Cow<'static, str>>>(mut self, hook: S) -> Self {
        let hook = hook.into();
        self.style_hook = (!is_blank(&hook)).then_some(hook);
        self
    }

    /// Set the element id. A blank id counts as absent.
    pub fn with_element_id<S: Into<Cow<'static, str>>>(mut self, id: S) -> Self {
        let id = id.into();
        self.element_id = (!is_blank(&id)).then_some(id);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn style_hook(&self) -> Option<&str> {
        self.style_hook.as_deref()
    }

    pub fn element_id(&self) -> Option<&str> {
        self.element_id.as_deref()
    }

    /// The merged classifier: the hook (if any) followed by the base class
    pub fn class_name(&self) -> String {
        match self.style_hook() {
            Some(hook) => format!("{hook} {BASE_CLASS}"),
            None => BASE_CLASS.to_string(),
        }
    }

    /// Build the link's node tree. The shape never varies with the configuration.
    pub fn render(&self) -> Node {
        debug!(label = %self.label, id = ?self.element_id, "rendering action link");

        let mut root = Element::new(Tag::A);
        if let Some(id) = self.element_id() {
            root = root.with_attr("id", id);
        }
        root = root.with_class(self.class_name());

        let button = Element::new(Tag::Div)
            .with_class(BUTTON_CLASS)
            .with_child(Element::new(Tag::Div).with_class(ACCENT_CLASS))
            .with_child(
                Element::new(Tag::P)
                    .with_class(LABEL_CLASS)
                    .with_child(self.label()),
            )
            .with_child(
                Element::new(Tag::Div).with_class(ICON_WRAPPER_CLASS).with_child(
                    Element::new(Tag::Img)
                        .with_attr("src", ARROW_ICON)
                        .with_attr("alt", ARROW_ALT),
                ),
            );

        root.with_child(button).into()
    }
}

/// Validate the inputs and render an action link in one step
pub fn render_action_link(
    label: &str,
    style_hook: Option<&str>,
    element_id: Option<&str>,
) -> Result<Node> {
    let mut config = ActionLinkConfig::new(label.to_string())?;
    if let Some(hook) = style_hook {
        config = config.with_style_hook(hook.to_string());
    }
    if let Some(id) = element_id {
        config = config.with_element_id(id.to_string());
    }
    Ok(config.render())
}

/// ASCII-whitespace-only or empty. Const so literals are checked at compile time.
pub(crate) const fn is_blank(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_whitespace() {
            return false;
        }
        i += 1;
    }
    true
}
