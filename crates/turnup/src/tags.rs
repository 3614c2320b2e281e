//! Concrete HTML tag constructors.
//!
//! Thin wrappers over the `turnup-core` element constructors covering the
//! tag vocabulary the engine ships with. Anything not listed here can be
//! built directly with [`Element::block`], [`Element::one_line`] or
//! [`Element::void`].

use turnup_core::{Content, Element};

/// The document root; renders with a DOCTYPE preamble
pub fn html() -> Element {
    Element::block("html")
}

/// Document head container
pub fn head() -> Element {
    Element::block("head")
}

/// Document body container
pub fn body() -> Element {
    Element::block("body")
}

/// Paragraph
pub fn p() -> Element {
    Element::block("p")
}

/// Unordered list
pub fn ul() -> Element {
    Element::block("ul")
}

/// Document title, rendered on one line
pub fn title(content: impl Into<Content>) -> Element {
    Element::one_line("title", content)
}

/// Anchor; the link is stored as the `href` attribute
pub fn a(link: impl Into<String>, content: impl Into<Content>) -> Element {
    Element::anchor(link, content)
}

/// Heading; `h(2, ...)` renders as `<h2> ... </h2>`
pub fn h(level: u8, content: impl Into<Content>) -> Element {
    Element::heading(level, content)
}

/// List item
pub fn li() -> Element {
    Element::list_item()
}

/// Horizontal rule
pub fn hr() -> Element {
    Element::void("hr")
}

/// Line break
pub fn br() -> Element {
    Element::void("br")
}

/// Meta tag
pub fn meta() -> Element {
    Element::void("meta")
}
