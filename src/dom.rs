//! Document Model Adapter
//!
//! Thin layer over the `dom_query` crate. Parsing is permissive (html5ever),
//! so broken or partial markup still yields a best-effort tree; the only
//! rejected inputs are those that are not markup text at all.
//!
//! Everything downstream works on `Selection`s borrowed from one `Document`,
//! so elements can never outlive the document they came from.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

use crate::error::{Error, Result};

// === Parsing ===

/// Parse HTML text into a document.
///
/// Fails with [`Error::MalformedInput`] only when the input is blank or
/// contains NUL bytes (binary payloads handed over by mistake). Any other
/// text, however broken, parses.
pub fn parse(html: &str) -> Result<Document> {
    if html.trim().is_empty() {
        return Err(Error::MalformedInput("document is empty".to_string()));
    }
    if html.contains('\0') {
        return Err(Error::MalformedInput(
            "document contains NUL bytes; not a text document".to_string(),
        ));
    }
    Ok(Document::from(html))
}

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// First whitespace-separated token of the class attribute.
#[must_use]
pub fn first_class(sel: &Selection) -> Option<String> {
    class_name(sel).and_then(|c| c.split_whitespace().next().map(str::to_string))
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

// === Tag/Node Information ===

/// Get tag name (lowercase) of the first node in the selection.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// True when the first node of the selection is an `<a>` element.
#[must_use]
pub fn is_anchor(sel: &Selection) -> bool {
    tag_name(sel).is_some_and(|t| t == "a")
}

/// Non-empty, trimmed `href` of the first node, if any.
#[must_use]
pub fn href(sel: &Selection) -> Option<String> {
    get_attribute(sel, "href")
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
}

/// Link target of an element: its own `href` when it is an anchor, else the
/// first descendant anchor's.
#[must_use]
pub fn anchor_href(sel: &Selection) -> Option<String> {
    if is_anchor(sel) {
        if let Some(h) = href(sel) {
            return Some(h);
        }
    }
    sel.select("a[href]").iter().find_map(|a| href(&a))
}

// === Text Content ===

/// Combined text content of every node in the selection and their
/// descendants, concatenated without separators.
///
/// Returns `StrTendril`; callers trim through `Deref<Target = str>`.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text content of the first node with surrounding whitespace removed and
/// internal runs of whitespace collapsed to single spaces.
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    let Some(first) = sel.nodes().first() else {
        return String::new();
    };
    collapse_whitespace(&first.text())
}

/// Trim and collapse internal whitespace runs to single spaces.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// === Tree Navigation ===

/// Get direct element children
#[inline]
#[must_use]
pub fn children<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.children()
}

/// Number of direct element children.
#[inline]
#[must_use]
pub fn child_count(sel: &Selection) -> usize {
    sel.children().length()
}

/// Every element of the document in document order.
#[must_use]
pub fn all_elements(doc: &Document) -> Selection<'_> {
    doc.select("*")
}
