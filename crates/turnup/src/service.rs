//! TurnupService - the main entry point for rendering element trees.

use std::fmt;

use turnup_core::{Element, Result};

/// The main service for rendering element trees to HTML text
pub struct TurnupService {
    indent_prefix: String,
}

impl TurnupService {
    /// Create a new TurnupService rendering from column zero
    pub fn new() -> Self {
        Self {
            indent_prefix: String::new(),
        }
    }

    /// Create a TurnupService whose output starts at the given indent prefix
    pub fn with_indent_prefix(prefix: impl Into<String>) -> Self {
        Self {
            indent_prefix: prefix.into(),
        }
    }

    /// Render an element tree to a string
    pub fn render(&self, root: &Element) -> Result<String> {
        let mut out = String::new();
        self.render_to(root, &mut out)?;
        Ok(out)
    }

    /// Render an element tree into an existing sink
    pub fn render_to<W: fmt::Write>(&self, root: &Element, out: &mut W) -> Result<()> {
        root.render(out, &self.indent_prefix)
    }
}

impl Default for TurnupService {
    fn default() -> Self {
        Self::new()
    }
}
