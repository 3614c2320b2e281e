//! HTML element tree
//!
//! This module defines the element tree for representing HTML documents.
//! An element owns its attributes, kept in insertion order, and its content
//! entries, each of which is either literal text or an owned child element.

use indexmap::IndexMap;

use crate::{Result, TurnupError};

/// Element kinds, each with its own rendering and append policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Block container rendered over multiple indented lines (html, body, p, ul)
    Block,
    /// Tag rendered as one flat line per content entry (title)
    OneLine,
    /// Self-closing tag that never holds content (hr, br, meta)
    Void,
    /// Anchor tag: one flat line with a required href attribute
    Anchor,
    /// Heading tag with its level baked into the tag name (h1-h6)
    Heading,
    /// List item: one flat line wrapping the whole content sequence
    ListItem,
}

/// One entry inside an element: literal text or an owned child element
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Literal text, written verbatim
    Text(String),
    /// A nested element, rendered recursively
    Element(Element),
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Element> for Content {
    fn from(element: Element) -> Self {
        Content::Element(element)
    }
}

/// An HTML element.
///
/// Elements own their attributes and content outright, so a tree is always
/// a strict tree: a child moved into one parent cannot also appear under
/// another, and cycles are unrepresentable.
///
/// Attributes are set at construction time via [`Element::with_attr`] and
/// are rendered in insertion order. Content grows at construction time via
/// [`Element::with_content`] and, where the kind allows it, afterwards via
/// [`Element::append`].
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub(crate) kind: ElementKind,
    pub(crate) tag: String,
    pub(crate) attrs: IndexMap<String, String>,
    pub(crate) content: Vec<Content>,
}

impl Element {
    fn new(kind: ElementKind, tag: impl Into<String>) -> Self {
        Self {
            kind,
            tag: tag.into(),
            attrs: IndexMap::new(),
            content: Vec::new(),
        }
    }

    /// Create a block container element (html, body, p, head, ul, ...)
    pub fn block(tag: impl Into<String>) -> Self {
        Self::new(ElementKind::Block, tag)
    }

    /// Create a one-line element seeded with one content entry (title, ...)
    pub fn one_line(tag: impl Into<String>, content: impl Into<Content>) -> Self {
        let mut element = Self::new(ElementKind::OneLine, tag);
        element.content.push(content.into());
        element
    }

    /// Create a self-closing element (hr, br, meta, ...)
    pub fn void(tag: impl Into<String>) -> Self {
        Self::new(ElementKind::Void, tag)
    }

    /// Create an anchor element.
    ///
    /// The link becomes the `href` attribute and is rendered before any
    /// attribute added later with [`Element::with_attr`].
    pub fn anchor(link: impl Into<String>, content: impl Into<Content>) -> Self {
        let mut element = Self::new(ElementKind::Anchor, "a");
        element.attrs.insert("href".to_string(), link.into());
        element.content.push(content.into());
        element
    }

    /// Create a heading element; level 1 yields `h1` and so on.
    ///
    /// The level is not range-checked.
    pub fn heading(level: u8, content: impl Into<Content>) -> Self {
        let mut element = Self::new(ElementKind::Heading, format!("h{}", level));
        element.content.push(content.into());
        element
    }

    /// Create a list item element
    pub fn list_item() -> Self {
        Self::new(ElementKind::ListItem, "li")
    }

    /// Add an attribute, preserving insertion order.
    ///
    /// Re-using a name replaces the value but keeps the original position.
    /// Values are rendered between double quotes verbatim, with no escaping.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Add a content entry at construction time.
    ///
    /// Self-closing elements reject all content; anchors and headings take
    /// their single content entry in their constructor and reject more.
    pub fn with_content(mut self, entry: impl Into<Content>) -> Result<Self> {
        match self.kind {
            ElementKind::Block | ElementKind::OneLine | ElementKind::ListItem => {
                self.content.push(entry.into());
                Ok(self)
            }
            ElementKind::Void => Err(TurnupError::InvalidContent(format!(
                "self-closing tag <{}> cannot contain content",
                self.tag
            ))),
            ElementKind::Anchor | ElementKind::Heading => Err(TurnupError::InvalidContent(
                format!("content of <{}> is fixed at construction", self.tag),
            )),
        }
    }

    /// Append a content entry to an already constructed element.
    ///
    /// Legal for block containers and list items. All other kinds return
    /// an error and leave the element untouched.
    pub fn append(&mut self, entry: impl Into<Content>) -> Result<()> {
        match self.kind {
            ElementKind::Block | ElementKind::ListItem => {
                self.content.push(entry.into());
                Ok(())
            }
            ElementKind::Void => Err(TurnupError::UnsupportedOperation(format!(
                "cannot append to self-closing tag <{}>",
                self.tag
            ))),
            ElementKind::OneLine | ElementKind::Anchor | ElementKind::Heading => {
                Err(TurnupError::UnsupportedOperation(format!(
                    "cannot append to one-line tag <{}>",
                    self.tag
                )))
            }
        }
    }

    /// The kind of this element
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The tag name, e.g. "p" or "h2"
    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// The content entries, in document order
    pub fn content(&self) -> &[Content] {
        &self.content
    }
}
