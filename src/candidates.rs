//! Container candidate generation.
//!
//! Two strategies propose selectors whose matches could be the records of a
//! news listing:
//!
//! 1. the catalog strategy evaluates known list/article/card patterns;
//! 2. the structural scan, used only when the catalog finds nothing, looks
//!    for block or list elements whose children mostly share one tag.
//!
//! Both keep only selectors whose match count lies in the configured range:
//! fewer is not a list, more is usually a menu or a site index.

use std::collections::HashSet;

use dom_query::{Document, Selection};
use tracing::debug;

use crate::dom;
use crate::options::Options;
use crate::result::{CandidateOrigin, ContainerCandidate};
use crate::selector::{self, builder, catalog::CONTAINER_SELECTORS};

/// Parent tags the structural scan considers.
const SCAN_PARENT_TAGS: &[&str] = &["div", "section", "ul", "ol", "main"];

fn is_scan_parent(sel: &Selection) -> bool {
    dom::tag_name(sel).is_some_and(|t| SCAN_PARENT_TAGS.contains(&t.as_str()))
}

/// Generate container candidates: catalog first, structural scan as fallback.
///
/// Scores are left at zero; see [`crate::scoring`].
#[must_use]
pub fn generate(doc: &Document, opts: &Options) -> Vec<ContainerCandidate> {
    let catalog = from_catalog(doc, opts);
    if !catalog.is_empty() {
        return catalog;
    }
    debug!("container catalog found nothing; running structural scan");
    from_structure(doc, opts)
}

/// Catalog strategy: every catalog selector whose match count is in range.
#[must_use]
pub fn from_catalog(doc: &Document, opts: &Options) -> Vec<ContainerCandidate> {
    CONTAINER_SELECTORS
        .iter()
        .filter_map(|css| {
            let count = selector::count(doc, css);
            if opts.container_count_in_range(count) {
                debug!(selector = css, count, "catalog container candidate");
                Some(ContainerCandidate {
                    selector: (*css).to_string(),
                    match_count: count,
                    score: 0.0,
                    origin: CandidateOrigin::Catalog,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Most frequent child tag of `parent` and its count. Ties go to the tag
/// seen first.
fn dominant_child_tag(parent: &Selection) -> Option<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for child in dom::children(parent).iter() {
        let Some(tag) = dom::tag_name(&child) else {
            continue;
        };
        match counts.iter_mut().find(|(t, _)| *t == tag) {
            Some((_, n)) => *n += 1,
            None => counts.push((tag, 1)),
        }
    }

    let mut best: Option<(String, usize)> = None;
    for (tag, n) in counts {
        if best.as_ref().is_none_or(|(_, b)| n > *b) {
            best = Some((tag, n));
        }
    }
    best
}

/// Structural strategy: parents with 3–30 children, ≥70% sharing one tag.
#[must_use]
pub fn from_structure(doc: &Document, opts: &Options) -> Vec<ContainerCandidate> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for parent in selector::query_all(doc, is_scan_parent) {
        let child_count = dom::child_count(&parent);
        if !opts.container_count_in_range(child_count) {
            continue;
        }

        let Some((tag, same)) = dominant_child_tag(&parent) else {
            continue;
        };
        if (same as f64) / (child_count as f64) < opts.dominant_child_tag_ratio {
            continue;
        }

        let Some(css) = builder::child_items_selector(&parent, &tag) else {
            continue;
        };
        if !seen.insert(css.clone()) {
            continue;
        }

        // The built selector may match more than this parent's children
        // (bare tag fallback), so the count is taken over the document.
        let count = selector::count(doc, &css);
        if opts.container_count_in_range(count) {
            debug!(selector = %css, count, "structural container candidate");
            found.push(ContainerCandidate {
                selector: css,
                match_count: count,
                score: 0.0,
                origin: CandidateOrigin::Structural,
            });
        }
    }

    found
}
