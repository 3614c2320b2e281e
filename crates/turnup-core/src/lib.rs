//! turnup-core - HTML element tree and rendering
//!
//! This crate provides the core data structures and rendering for turnup.
//! It is used by the `turnup` crate, which adds the concrete tag
//! vocabulary and the document-level service API.
//!
//! # Architecture
//!
//! ```text
//! constructors ──▶ ┌──────────────┐
//!                  │              │
//!                  │ Element tree │ ──render──▶ indented HTML text
//! append ────────▶ │              │
//!                  └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use turnup_core::Element;
//!
//! let mut body = Element::block("body");
//! body.append(Element::heading(1, "Hello World")).unwrap();
//! body.append("Some introductory text").unwrap();
//!
//! let mut out = String::new();
//! body.render(&mut out, "").unwrap();
//! assert!(out.starts_with("<body>\n"));
//! assert!(out.contains("<h1> Hello World </h1>"));
//! ```

mod element;
mod render;

pub use element::{Content, Element, ElementKind};
pub use render::INDENT;

/// Error type for turnup operations
#[derive(Debug, thiserror::Error)]
pub enum TurnupError {
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Write error: {0}")]
    Write(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, TurnupError>;
