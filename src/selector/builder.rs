//! Selector construction for structurally discovered containers.
//!
//! The structural scan finds a parent element whose children look alike and
//! needs a selector string for them. The parent is named by its id, else its
//! first class token, else `tag[role="…"]`, else its bare tag; the items are
//! then addressed as direct children with the dominant child tag.

use std::sync::LazyLock;

use dom_query::Selection;
use regex::Regex;

use crate::dom;

/// Plain CSS identifier that needs no escaping.
#[allow(clippy::expect_used)]
static CSS_IDENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[A-Za-z_][A-Za-z0-9_-]*$").expect("CSS_IDENT regex")
});

/// Attribute values we are willing to embed inside `[role="…"]`.
#[allow(clippy::expect_used)]
static ATTR_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_ -]+$").expect("ATTR_VALUE regex")
});

fn is_css_ident(s: &str) -> bool {
    CSS_IDENT.is_match(s)
}

/// Selector naming `parent`, by preference: id, first class, tag+role, tag.
///
/// Returns `None` only when the selection holds no element.
///
/// # Example
///
/// ```rust
/// use news_extractor::{dom, selector::builder};
///
/// let doc = dom::parse(r#"<ul class="feed items"><li>a</li></ul>"#)?;
/// assert_eq!(builder::parent_selector(&doc.select("ul")).as_deref(), Some("ul.feed"));
/// # Ok::<(), news_extractor::Error>(())
/// ```
#[must_use]
pub fn parent_selector(parent: &Selection) -> Option<String> {
    let tag = dom::tag_name(parent)?;

    if let Some(id) = dom::id(parent).filter(|id| is_css_ident(id)) {
        return Some(format!("#{id}"));
    }

    if let Some(class) = dom::first_class(parent).filter(|c| is_css_ident(c)) {
        return Some(format!("{tag}.{class}"));
    }

    if let Some(role) = dom::get_attribute(parent, "role")
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty() && ATTR_VALUE.is_match(r))
    {
        return Some(format!(r#"{tag}[role="{role}"]"#));
    }

    Some(tag)
}

/// Selector for the repeated children of `parent` that carry `child_tag`.
#[must_use]
pub fn child_items_selector(parent: &Selection, child_tag: &str) -> Option<String> {
    if !is_css_ident(child_tag) {
        return None;
    }
    parent_selector(parent).map(|p| format!("{p} > {child_tag}"))
}
