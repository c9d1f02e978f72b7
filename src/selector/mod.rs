//! Selector Language & Matcher
//!
//! Selectors are plain CSS strings (tag, `.class`, `#id`, `[attr*="x"]`,
//! descendant and `>` child combinators, `*`). A selector is opaque data: it
//! is compared by string equality, used as a map key and never tied to a
//! particular document. Evaluation compiles it into a `dom_query::Matcher`.
//!
//! Invalid syntax surfaces as [`Error::SelectorEvaluation`]. Engine call sites
//! catch it and treat the selector as matching nothing.

use dom_query::{Document, Matcher, Selection};
use tracing::debug;

use crate::dom;
use crate::error::{Error, Result};

pub mod builder;
pub mod catalog;

/// A predicate over a single element.
///
/// Used where a structural property (tag family, child layout) decides
/// membership rather than a selector string.
pub type Rule = fn(&Selection) -> bool;

/// A selector string together with its compiled matcher.
pub struct CompiledSelector {
    source: String,
    matcher: Matcher,
}

impl CompiledSelector {
    /// Compile a selector string.
    pub fn new(css: &str) -> Result<Self> {
        let matcher = Matcher::new(css).map_err(|e| Error::SelectorEvaluation {
            selector: css.to_string(),
            message: format!("{e:?}"),
        })?;
        Ok(Self {
            source: css.to_string(),
            matcher,
        })
    }

    /// The selector as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// All matches in the document, in document order.
    #[must_use]
    pub fn select_in<'a>(&self, doc: &'a Document) -> Selection<'a> {
        doc.select_matcher(&self.matcher)
    }

    /// All matching descendants of `scope`, in document order.
    #[must_use]
    pub fn find<'a>(&self, scope: &Selection<'a>) -> Selection<'a> {
        scope.select_matcher(&self.matcher)
    }

    /// First descendant of `scope` whose trimmed text is non-empty.
    #[must_use]
    pub fn first_text(&self, scope: &Selection) -> Option<String> {
        self.find(scope)
            .iter()
            .map(|m| dom::trimmed_text(&m))
            .find(|t| !t.is_empty())
    }

    /// Text of every match below `scope`, concatenated in document order,
    /// with whitespace collapsed; `None` when that is empty.
    #[must_use]
    pub fn joined_text(&self, scope: &Selection) -> Option<String> {
        let text = dom::collapse_whitespace(&dom::text_content(&self.find(scope)));
        (!text.is_empty()).then_some(text)
    }
}

impl std::fmt::Debug for CompiledSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CompiledSelector").field(&self.source).finish()
    }
}

/// Compile a selector, logging and swallowing syntax errors.
///
/// This is the "treat as non-matching" policy in one place.
#[must_use]
pub fn compile_lenient(css: &str) -> Option<CompiledSelector> {
    match CompiledSelector::new(css) {
        Ok(compiled) => Some(compiled),
        Err(err) => {
            debug!(selector = css, error = %err, "selector rejected");
            None
        }
    }
}

/// Evaluate a selector against the whole document.
///
/// # Example
///
/// ```rust
/// use news_extractor::{dom, selector};
///
/// let doc = dom::parse(r#"<ul><li class="item">1</li><li class="item">2</li></ul>"#)?;
/// assert_eq!(selector::select(&doc, "li.item")?.length(), 2);
/// assert!(selector::select(&doc, "li[").is_err());
/// # Ok::<(), news_extractor::Error>(())
/// ```
pub fn select<'a>(doc: &'a Document, css: &str) -> Result<Selection<'a>> {
    Ok(CompiledSelector::new(css)?.select_in(doc))
}

/// Evaluate a selector restricted to the subtree below `scope`.
pub fn find<'a>(scope: &Selection<'a>, css: &str) -> Result<Selection<'a>> {
    Ok(CompiledSelector::new(css)?.find(scope))
}

/// Number of elements a selector matches; an invalid selector matches zero.
#[must_use]
pub fn count(doc: &Document, css: &str) -> usize {
    compile_lenient(css).map_or(0, |c| c.select_in(doc).length())
}

/// Query for all elements matching the rule
///
/// Iterates through all descendants in document order and collects all
/// elements for which the rule returns true.
#[must_use]
pub fn query_all<'a>(doc: &'a Document, rule: Rule) -> Vec<Selection<'a>> {
    dom::all_elements(doc).iter().filter(|sel| rule(sel)).collect()
}
