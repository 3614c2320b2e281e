//! # turnup
//!
//! Build HTML element trees in code and render them to indented HTML.
//!
//! Where [turndown](https://github.com/sebastian-software/turndown-node)
//! tears HTML down to Markdown, turnup goes the other way: element trees
//! assembled through a small typed API are written out as an indented HTML
//! document.
//!
//! ## Design
//!
//! The tree and the render engine live in `turnup-core`; this crate adds
//! the concrete tag vocabulary ([`tags`]) and the document-level service
//! ([`TurnupService`]). There is no HTML parsing anywhere: rendering is
//! one-directional, tree to text.
//!
//! ## Example
//!
//! ```rust
//! use turnup::{tags, TurnupService};
//!
//! let mut page = tags::html();
//! let mut body = tags::body();
//! body.append(tags::h(1, "Hello World")).unwrap();
//! body.append("Welcome to turnup.").unwrap();
//! page.append(body).unwrap();
//!
//! let html = TurnupService::new().render(&page).unwrap();
//! assert!(html.starts_with("<!DOCTYPE html>\n<html>\n"));
//! ```

mod service;
pub mod tags;

pub use service::TurnupService;
pub use turnup_core::{Content, Element, ElementKind, Result, TurnupError, INDENT};
