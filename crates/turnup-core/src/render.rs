//! Depth-first rendering of element trees
//!
//! Converts an element tree into indented HTML text. Output is written to
//! any [`std::fmt::Write`] sink in strict document order, so a failed sink
//! leaves whatever was already written in place.

use std::fmt::Write;

use crate::element::{Content, Element, ElementKind};
use crate::Result;

/// The fixed indent unit, applied once per nesting level.
pub const INDENT: &str = "    ";

/// Tag name that triggers the DOCTYPE preamble.
const ROOT_TAG: &str = "html";

impl Element {
    /// Render this element and everything below it into `out`.
    ///
    /// `indent` is the starting prefix; pass an empty string for a whole
    /// document. Rendering never mutates the tree, so the same tree renders
    /// to identical output any number of times.
    pub fn render<W: Write>(&self, out: &mut W, indent: &str) -> Result<()> {
        match self.kind {
            ElementKind::Block => render_block(self, out, indent),
            ElementKind::OneLine | ElementKind::Heading => render_one_line(self, out, indent),
            ElementKind::Void => render_void(self, out, indent),
            ElementKind::Anchor => render_anchor(self, out, indent),
            ElementKind::ListItem => render_list_item(self, out, indent),
        }
    }
}

fn render_block<W: Write>(element: &Element, out: &mut W, indent: &str) -> Result<()> {
    // Any element tagged "html" emits the preamble, at any depth.
    if element.tag == ROOT_TAG {
        out.write_str(indent)?;
        out.write_str("<!DOCTYPE html>\n")?;
    }

    if !indent.is_empty() {
        out.write_str(indent)?;
    }
    write!(out, "<{}", element.tag)?;
    write_attrs(out, element)?;
    out.write_str(">\n")?;

    let child_indent = format!("{}{}", indent, INDENT);
    for entry in &element.content {
        match entry {
            Content::Element(child) => child.render(out, &child_indent)?,
            Content::Text(text) => {
                // Text leaves sit one level deeper than their enclosing tag.
                out.write_str(&child_indent)?;
                out.write_str(text)?;
                out.write_char('\n')?;
            }
        }
    }

    if !indent.is_empty() {
        out.write_str(indent)?;
    }
    writeln!(out, "</{}>", element.tag)?;
    Ok(())
}

fn render_one_line<W: Write>(element: &Element, out: &mut W, indent: &str) -> Result<()> {
    if !indent.is_empty() {
        out.write_str(indent)?;
    }
    // Each entry gets its own complete tag pair, all on one flat stream.
    for entry in &element.content {
        write!(out, "<{}> ", element.tag)?;
        render_inline(entry, out)?;
        writeln!(out, " </{}>", element.tag)?;
    }
    Ok(())
}

fn render_anchor<W: Write>(element: &Element, out: &mut W, indent: &str) -> Result<()> {
    if !indent.is_empty() {
        out.write_str(indent)?;
    }
    write!(out, "<{}", element.tag)?;
    write_attrs(out, element)?;
    out.write_char('>')?;
    if let Some(entry) = element.content.first() {
        render_inline(entry, out)?;
    }
    // No trailing newline; callers writing several anchors insert their
    // own separators.
    write!(out, "</{}>", element.tag)?;
    Ok(())
}

fn render_list_item<W: Write>(element: &Element, out: &mut W, indent: &str) -> Result<()> {
    if !indent.is_empty() {
        out.write_str(indent)?;
    }
    write!(out, "<{}", element.tag)?;
    write_attrs(out, element)?;
    out.write_char('>')?;
    // One pair wraps the whole sequence, entries back to back.
    for entry in &element.content {
        render_inline(entry, out)?;
    }
    writeln!(out, "</{}>", element.tag)?;
    Ok(())
}

fn render_void<W: Write>(element: &Element, out: &mut W, indent: &str) -> Result<()> {
    if !indent.is_empty() {
        out.write_str(indent)?;
    }
    write!(out, "<{} ", element.tag)?;
    // Every attribute carries a trailing space, the last one included.
    for (name, value) in &element.attrs {
        write!(out, "{}=\"{}\" ", name, value)?;
    }
    out.write_str("/>\n")?;
    Ok(())
}

/// Render one content entry inline, with no indentation of its own.
fn render_inline<W: Write>(entry: &Content, out: &mut W) -> Result<()> {
    match entry {
        Content::Element(child) => child.render(out, ""),
        Content::Text(text) => {
            out.write_str(text)?;
            Ok(())
        }
    }
}

/// Write attributes as ` name="value"` pairs in insertion order.
///
/// Values go between double quotes verbatim; quote and angle-bracket
/// characters are not escaped.
fn write_attrs<W: Write>(out: &mut W, element: &Element) -> std::fmt::Result {
    for (name, value) in &element.attrs {
        write!(out, " {}=\"{}\"", name, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::TurnupError;

    /// Render with an empty starting indent and return the output.
    fn render_to_string(element: &Element) -> String {
        let mut out = String::new();
        element.render(&mut out, "").unwrap();
        out
    }

    #[test]
    fn test_hr_without_attributes() {
        let hr = Element::void("hr");
        assert_eq!(render_to_string(&hr), "<hr />\n");
    }

    #[test]
    fn test_hr_with_width() {
        let hr = Element::void("hr").with_attr("width", "400");
        assert_eq!(render_to_string(&hr), "<hr width=\"400\" />\n");
    }

    #[test]
    fn test_void_multiple_attributes_all_trailing_spaced() {
        let meta = Element::void("meta")
            .with_attr("charset", "UTF-8")
            .with_attr("name", "viewport");
        assert_eq!(
            render_to_string(&meta),
            "<meta charset=\"UTF-8\" name=\"viewport\" />\n"
        );
    }

    #[test]
    fn test_void_honours_indent_prefix() {
        let br = Element::void("br");
        let mut out = String::new();
        br.render(&mut out, INDENT).unwrap();
        assert_eq!(out, "    <br />\n");
    }

    #[test]
    fn test_anchor_exact_output_no_trailing_newline() {
        let a = Element::anchor("http://google.com", "link to google");
        assert_eq!(
            render_to_string(&a),
            "<a href=\"http://google.com\">link to google</a>"
        );
    }

    #[test]
    fn test_anchor_extra_attributes_follow_href() {
        let a = Element::anchor("http://google.com", "link").with_attr("target", "_blank");
        assert_eq!(
            render_to_string(&a),
            "<a href=\"http://google.com\" target=\"_blank\">link</a>"
        );
    }

    #[test]
    fn test_heading_level_one() {
        let h = Element::heading(1, "important title");
        assert_eq!(render_to_string(&h), "<h1> important title </h1>\n");
    }

    #[test]
    fn test_heading_other_levels() {
        assert_eq!(
            render_to_string(&Element::heading(3, "section")),
            "<h3> section </h3>\n"
        );
    }

    #[test]
    fn test_title_one_line() {
        let title = Element::one_line("title", "PythonClass = Revision 1087:");
        assert_eq!(
            render_to_string(&title),
            "<title> PythonClass = Revision 1087: </title>\n"
        );
    }

    #[test]
    fn test_one_line_multiple_entries_multiple_pairs() {
        let title = Element::one_line("title", "first")
            .with_content("second")
            .unwrap();
        assert_eq!(
            render_to_string(&title),
            "<title> first </title>\n<title> second </title>\n"
        );
    }

    #[test]
    fn test_one_line_indent_written_once_before_first_entry() {
        let title = Element::one_line("title", "first")
            .with_content("second")
            .unwrap();
        let mut out = String::new();
        title.render(&mut out, INDENT).unwrap();
        assert_eq!(out, "    <title> first </title>\n<title> second </title>\n");
    }

    #[test]
    fn test_empty_block() {
        let p = Element::block("p");
        assert_eq!(render_to_string(&p), "<p>\n</p>\n");
    }

    #[test]
    fn test_block_attributes_in_insertion_order() {
        let p = Element::block("p")
            .with_attr("class", "intro")
            .with_attr("id", "first");
        assert_eq!(
            render_to_string(&p),
            "<p class=\"intro\" id=\"first\">\n</p>\n"
        );
    }

    #[test]
    fn test_block_text_indented_one_level_deeper() {
        let mut p = Element::block("p");
        p.append("here is a paragraph of text").unwrap();
        assert_eq!(
            render_to_string(&p),
            "<p>\n    here is a paragraph of text\n</p>\n"
        );
    }

    #[test]
    fn test_block_with_starting_indent_prefix() {
        let mut p = Element::block("p");
        p.append("text").unwrap();
        let mut out = String::new();
        p.render(&mut out, INDENT).unwrap();
        assert_eq!(out, "    <p>\n        text\n    </p>\n");
    }

    #[test]
    fn test_document_nesting_and_doctype() {
        let mut html = Element::block("html");
        let mut p = Element::block("p");
        p.append("some text").unwrap();
        html.append(p).unwrap();

        assert_eq!(
            render_to_string(&html),
            "<!DOCTYPE html>\n\
             <html>\n\
             \x20   <p>\n\
             \x20       some text\n\
             \x20   </p>\n\
             </html>\n"
        );
    }

    #[test]
    fn test_doctype_fires_for_nested_html_tag_too() {
        let mut body = Element::block("body");
        body.append(Element::block("html")).unwrap();

        assert_eq!(
            render_to_string(&body),
            "<body>\n\
             \x20   <!DOCTYPE html>\n\
             \x20   <html>\n\
             \x20   </html>\n\
             </body>\n"
        );
    }

    #[test]
    fn test_list_items_inside_unordered_list() {
        let mut ul = Element::block("ul");
        ul.append(Element::list_item().with_content("one").unwrap())
            .unwrap();
        ul.append(Element::list_item().with_content("two").unwrap())
            .unwrap();

        assert_eq!(
            render_to_string(&ul),
            "<ul>\n\
             \x20   <li>one</li>\n\
             \x20   <li>two</li>\n\
             </ul>\n"
        );
    }

    #[test]
    fn test_list_item_wraps_mixed_content_in_one_pair() {
        let mut li = Element::list_item();
        li.append("see ").unwrap();
        li.append(Element::anchor("http://google.com", "google"))
            .unwrap();
        li.append(" for details").unwrap();

        assert_eq!(
            render_to_string(&li),
            "<li>see <a href=\"http://google.com\">google</a> for details</li>\n"
        );
    }

    #[test]
    fn test_list_item_attributes() {
        let li = Element::list_item()
            .with_attr("style", "color: red")
            .with_content("red item")
            .unwrap();
        assert_eq!(
            render_to_string(&li),
            "<li style=\"color: red\">red item</li>\n"
        );
    }

    #[test]
    fn test_render_is_deterministic_and_non_mutating() {
        let mut body = Element::block("body");
        body.append(Element::heading(2, "PythonClass - Class 6 example"))
            .unwrap();
        body.append("some text").unwrap();
        let before = body.clone();

        let first = render_to_string(&body);
        let second = render_to_string(&body);
        assert_eq!(first, second);
        assert_eq!(body, before);
    }

    #[test]
    fn test_opening_and_closing_tags_balance() {
        let mut html = Element::block("html");
        let mut body = Element::block("body");
        let mut ul = Element::block("ul");
        ul.append(Element::list_item().with_content("entry").unwrap())
            .unwrap();
        body.append(ul).unwrap();
        body.append(Element::block("p").with_content("text").unwrap())
            .unwrap();
        html.append(body).unwrap();

        let out = render_to_string(&html);
        for tag in ["html", "body", "ul", "li", "p"] {
            let opens = out.matches(&format!("<{}>", tag)).count();
            let closes = out.matches(&format!("</{}>", tag)).count();
            assert_eq!(opens, closes, "unbalanced <{}>", tag);
        }
    }

    #[test]
    fn test_attribute_values_are_not_escaped() {
        let p = Element::block("p").with_attr("data-note", "a \"quoted\" <value>");
        assert_eq!(
            render_to_string(&p),
            "<p data-note=\"a \"quoted\" <value>\">\n</p>\n"
        );
    }

    #[test]
    fn test_failing_sink_surfaces_write_error() {
        struct FailingSink;

        impl Write for FailingSink {
            fn write_str(&mut self, _: &str) -> std::fmt::Result {
                Err(std::fmt::Error)
            }
        }

        let p = Element::block("p");
        let err = p.render(&mut FailingSink, "").unwrap_err();
        assert!(matches!(err, TurnupError::Write(_)));
    }
}
