//! Structural output tree produced by the render operations
//!
//! The tree is deliberately dumb: it records tags, attributes, identity keys
//! and children in order, and knows how to serialise itself to HTML. Styling
//! and animation live entirely in whatever consumes the class names.

use strum::{AsRefStr, Display, EnumString};

/// HTML tags the hero section is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Tag {
    A,
    Div,
    P,
    Img,
    Span,
    Section,
    Header,
    H1,
}

impl Tag {
    /// Void elements have no closing tag and no children
    pub const fn is_void(&self) -> bool {
        matches!(self, Tag::Img)
    }
}

/// A node in the rendered tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with ordered attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    /// Identity key for keyed list rendering. Never serialised.
    pub key: Option<String>,
    pub attributes: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            key: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr<S: Into<String>>(mut self, name: &'static str, value: S) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn with_class<S: Into<String>>(self, class: S) -> Self {
        self.with_attr("class", class)
    }

    pub fn with_key<S: Into<String>>(mut self, key: S) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_child<N: Into<Node>>(mut self, child: N) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.children.extend(children);
        self
    }

    /// Value of the first attribute with the given name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn class(&self) -> Option<&str> {
        self.attr("class")
    }

    /// True if the class attribute lists `class` as one of its tokens
    pub fn has_class(&self, class: &str) -> bool {
        self.class()
            .is_some_and(|c| c.split_whitespace().any(|token| token == class))
    }

    /// Direct children that are elements, in order
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Every element in this subtree (self included) carrying `class`, in document order
    pub fn find_all_by_class<'a>(&'a self, class: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        if self.has_class(class) {
            found.push(self);
        }
        for child in self.child_elements() {
            child.collect_by_class(class, found);
        }
    }

    /// Concatenated text of the subtree
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            match child {
                Node::Text(t) => text.push_str(t),
                Node::Element(e) => text.push_str(&e.text_content()),
            }
        }
        text
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag.as_ref());
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_into(value, out);
            out.push('"');
        }
        out.push('>');

        if self.tag.is_void() {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag.as_ref());
        out.push('>');
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(t) => Some(t),
            Node::Element(_) => None,
        }
    }

    /// Serialise the subtree to HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(e) => e.write_html(out),
            Node::Text(t) => escape_into(t, out),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// Escape text for use in HTML content or a quoted attribute value
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    escape_into(raw, &mut out);
    out
}

fn escape_into(raw: &str, out: &mut String) {
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tag_names() {
        assert_eq!(Tag::H1.to_string(), "h1");
        assert_eq!(Tag::Section.as_ref(), "section");
        assert_eq!("img".parse::<Tag>().unwrap(), Tag::Img);
    }

    #[test]
    fn test_void_element_has_no_closing_tag() {
        let img = Node::from(Element::new(Tag::Img).with_attr("src", "/a.png"));
        assert_eq!(img.to_html(), r#"<img src="/a.png">"#);
    }

    #[test]
    fn test_escaping() {
        let node = Node::from(
            Element::new(Tag::P)
                .with_attr("title", r#"say "hi""#)
                .with_child("Tom & <Jerry>"),
        );
        assert_eq!(
            node.to_html(),
            r#"<p title="say &quot;hi&quot;">Tom &amp; &lt;Jerry&gt;</p>"#
        );
    }

    #[test]
    fn test_key_is_not_serialised() {
        let node = Node::from(Element::new(Tag::Span).with_key("k").with_child("x"));
        assert_eq!(node.to_html(), "<span>x</span>");
    }

    #[test]
    fn test_class_queries() {
        let tree = Element::new(Tag::Div)
            .with_class("outer")
            .with_child(Element::new(Tag::Span).with_class("a b"))
            .with_child(Element::new(Tag::Span).with_class("ab"))
            .with_child(Element::new(Tag::Div).with_child(Element::new(Tag::P).with_class("b")));

        assert!(tree.has_class("outer"));
        assert_eq!(tree.find_all_by_class("b").len(), 2);
        assert_eq!(tree.find_all_by_class("ab").len(), 1);
        assert!(tree.find_all_by_class("missing").is_empty());
    }

    #[test]
    fn test_text_content_is_concatenated_in_order() {
        let tree = Element::new(Tag::H1)
            .with_child("one ")
            .with_child(Element::new(Tag::Span).with_child("two"))
            .with_child(" three");
        assert_eq!(tree.text_content(), "one two three");
    }
}
