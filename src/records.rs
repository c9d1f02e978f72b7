//! Record extraction.
//!
//! Walks every element matched by the container selector and reads one
//! [`NewsRecord`] from it. Each text field is read through a fallback chain:
//!
//! 1. the primary selector (inferred, or configured on the direct path),
//! 2. the explicitly configured selector, when it differs,
//! 3. every selector of the field's catalog in order,
//!
//! stopping at the first non-empty text, otherwise leaving the field empty.
//! Configured selectors read the text of all their matches, concatenated;
//! inferred and catalog selectors read the first non-empty match.
//!
//! Items without a title are dropped, except bare-link items whose own text
//! serves as the title. Matches that wrap other matches of the same
//! container selector are skipped so nested cards are read once. A failure
//! on one item is logged and only that item is skipped.

use dom_query::{Document, Selection};
use tracing::{debug, warn};

use crate::dom;
use crate::error::{Error, Result};
use crate::result::{Field, FieldSelectorSet, NewsRecord};
use crate::selector::{self, catalog, CompiledSelector};
use crate::url_utils::normalize_url;

#[derive(Debug)]
struct ChainLink {
    selector: CompiledSelector,
    /// Read all matches instead of the first non-empty one.
    join_all: bool,
}

impl ChainLink {
    fn text(&self, container: &Selection) -> Option<String> {
        if self.join_all {
            self.selector.joined_text(container)
        } else {
            self.selector.first_text(container)
        }
    }
}

/// Ordered, compiled selectors tried for one field.
#[derive(Debug, Default)]
struct FieldChain {
    links: Vec<ChainLink>,
}

impl FieldChain {
    fn build(
        field: Field,
        inferred: Option<&FieldSelectorSet>,
        explicit: Option<&FieldSelectorSet>,
    ) -> Self {
        let tiers = inferred
            .and_then(|s| s.get(field))
            .map(|css| (css, false))
            .into_iter()
            .chain(explicit.and_then(|s| s.get(field)).map(|css| (css, true)))
            .chain(catalog::for_field(field).iter().map(|css| (*css, false)));

        // first position wins; a configured duplicate still reads all matches
        let mut sources: Vec<(&str, bool)> = Vec::new();
        for (css, join_all) in tiers {
            match sources.iter_mut().find(|(seen, _)| *seen == css) {
                Some((_, join)) => *join |= join_all,
                None => sources.push((css, join_all)),
            }
        }

        let links = sources
            .into_iter()
            .filter_map(|(css, join_all)| {
                let compiled = selector::compile_lenient(css);
                if compiled.is_none() {
                    warn!(%field, selector = css, "ignoring invalid field selector");
                }
                compiled.map(|selector| ChainLink { selector, join_all })
            })
            .collect();

        Self { links }
    }

    fn text(&self, container: &Selection) -> Option<String> {
        self.links.iter().find_map(|link| link.text(container))
    }

    fn href(&self, container: &Selection) -> Option<String> {
        self.links.iter().find_map(|link| {
            link.selector
                .find(container)
                .iter()
                .find_map(|m| dom::anchor_href(&m))
        })
    }
}

/// Field chains for one extraction run.
#[derive(Debug)]
pub struct RecordExtractor {
    title: FieldChain,
    summary: FieldChain,
    date: FieldChain,
    author: FieldChain,
    link: FieldChain,
    source: FieldChain,
}

impl RecordExtractor {
    fn build(inferred: Option<&FieldSelectorSet>, explicit: Option<&FieldSelectorSet>) -> Self {
        Self {
            title: FieldChain::build(Field::Title, inferred, explicit),
            summary: FieldChain::build(Field::Summary, inferred, explicit),
            date: FieldChain::build(Field::Date, inferred, explicit),
            author: FieldChain::build(Field::Author, inferred, explicit),
            link: FieldChain::build(Field::Link, inferred, explicit),
            source: FieldChain::build(Field::Source, inferred, explicit),
        }
    }

    /// Chains for inferred selectors, with the caller's explicit set (if any)
    /// as second tier.
    #[must_use]
    pub fn new(inferred: &FieldSelectorSet, explicit: Option<&FieldSelectorSet>) -> Self {
        Self::build(Some(inferred), explicit)
    }

    /// Chains for a configured selector set used directly.
    #[must_use]
    pub fn configured(explicit: &FieldSelectorSet) -> Self {
        Self::build(None, Some(explicit))
    }

    /// Extract one record per element matched by `container_selector`.
    ///
    /// An invalid container selector yields no records.
    #[must_use]
    pub fn extract(
        &self,
        doc: &Document,
        container_selector: &str,
        base_url: &str,
        default_source: &str,
    ) -> Vec<NewsRecord> {
        let Some(container) = selector::compile_lenient(container_selector) else {
            warn!(selector = container_selector, "invalid container selector");
            return Vec::new();
        };

        let mut records = Vec::new();
        for (index, item) in container.select_in(doc).iter().enumerate() {
            if container.find(&item).exists() {
                debug!(index, "match wraps other matches; skipped");
                continue;
            }
            match self.extract_item(&item, base_url, default_source) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => debug!(index, "item has no title; dropped"),
                Err(err) => warn!(index, error = %err, "skipping item"),
            }
        }

        debug!(selector = container_selector, count = records.len(), "records extracted");
        records
    }

    /// Read a single record from one container element.
    ///
    /// Returns `Ok(None)` when the item has no title.
    pub fn extract_item(
        &self,
        item: &Selection,
        base_url: &str,
        default_source: &str,
    ) -> Result<Option<NewsRecord>> {
        if dom::tag_name(item).is_none() {
            return Err(Error::ItemExtraction(
                "container match is not an element".to_string(),
            ));
        }

        // Items that are themselves anchors (`.list > a`) carry the headline
        // and the link on the container element, out of descendant reach.
        let Some(title) = self.title.text(item).or_else(|| {
            dom::is_anchor(item)
                .then(|| dom::trimmed_text(item))
                .filter(|t| !t.is_empty())
        }) else {
            return Ok(None);
        };

        let href = self
            .link
            .href(item)
            .or_else(|| dom::anchor_href(item))
            .unwrap_or_default();

        Ok(Some(NewsRecord {
            title,
            summary: self.summary.text(item).unwrap_or_default(),
            date: self.date.text(item).unwrap_or_default(),
            author: self.author.text(item).unwrap_or_default(),
            source: self
                .source
                .text(item)
                .unwrap_or_else(|| default_source.to_string()),
            url: normalize_url(&href, base_url),
        }))
    }
}
