//! Container scoring and ranking.
//!
//! A pure function of (document, candidate) adding up structural and lexical
//! signals observed on the candidate's matches. Only the resulting order is
//! meaningful; individual weights are tunable through
//! [`ScoringWeights`](crate::ScoringWeights).

use std::cmp::Ordering;

use dom_query::{Document, Selection};
use tracing::debug;

use crate::dom;
use crate::options::Options;
use crate::patterns::has_news_keyword;
use crate::result::ContainerCandidate;
use crate::selector::{self, catalog::TITLE_SELECTORS};

fn has_descendant(scope: &Selection, css: &str) -> bool {
    selector::compile_lenient(css).is_some_and(|c| c.find(scope).exists())
}

/// Score one container candidate against `doc`.
///
/// Recomputes the match set; an invalid or non-matching selector scores `0`.
///
/// # Example
///
/// ```rust
/// use news_extractor::{dom, scoring, CandidateOrigin, ContainerCandidate, Options};
///
/// let html = r#"<div class="card"><h2><a href="/1">First story here</a></h2></div>
///               <div class="card"><h2><a href="/2">Second story here</a></h2></div>
///               <div class="card"><h2><a href="/3">Third story here</a></h2></div>"#;
/// let doc = dom::parse(html)?;
/// let candidate = ContainerCandidate {
///     selector: "div.card".into(),
///     match_count: 3,
///     score: 0.0,
///     origin: CandidateOrigin::Catalog,
/// };
/// assert!(scoring::score(&doc, &candidate, &Options::default()) > 0.0);
/// # Ok::<(), news_extractor::Error>(())
/// ```
#[must_use]
pub fn score(doc: &Document, candidate: &ContainerCandidate, opts: &Options) -> f64 {
    let Some(compiled) = selector::compile_lenient(&candidate.selector) else {
        return 0.0;
    };
    let matches = compiled.select_in(doc);
    let count = matches.length();
    if count == 0 {
        return 0.0;
    }

    let w = &opts.weights;
    let mut total = 0.0;

    if (opts.min_container_matches..=opts.well_formed_max_matches).contains(&count) {
        total += w.well_formed_count;
    } else if count > opts.well_formed_max_matches && count <= opts.max_container_matches {
        total += w.acceptable_count;
    }

    let first = matches.first();

    if TITLE_SELECTORS.iter().any(|css| has_descendant(&first, css)) {
        total += w.has_title;
    }
    if has_descendant(&first, "a[href]") {
        total += w.has_link;
    }
    if has_descendant(&first, "p") {
        total += w.has_paragraph;
    }

    if has_news_keyword(&dom::trimmed_text(&first)) {
        total += w.keyword_in_text;
    }
    let attrs = format!(
        "{} {}",
        dom::class_name(&first).unwrap_or_default(),
        dom::id(&first).unwrap_or_default()
    );
    if has_news_keyword(&attrs) {
        total += w.keyword_in_attrs;
    }

    if is_homogeneous(&matches, opts) {
        total += w.homogeneous;
    }

    total
}

/// Whether enough matches have a child count close to the first match's.
fn is_homogeneous(matches: &Selection, opts: &Options) -> bool {
    let counts: Vec<usize> = matches.iter().map(|m| dom::child_count(&m)).collect();
    let Some(&reference) = counts.first() else {
        return false;
    };
    let similar = counts
        .iter()
        .filter(|&&c| c.abs_diff(reference) <= opts.homogeneity_child_tolerance)
        .count();
    (similar as f64) / (counts.len() as f64) >= opts.homogeneity_ratio
}

/// Score, filter and rank candidates, best first.
///
/// Candidates scoring `0` are dropped. Ties keep catalog candidates ahead of
/// structural ones and otherwise preserve generation order. At most
/// `opts.working_set_size` candidates are returned.
#[must_use]
pub fn rank(
    doc: &Document,
    candidates: Vec<ContainerCandidate>,
    opts: &Options,
) -> Vec<ContainerCandidate> {
    let mut scored: Vec<ContainerCandidate> = candidates
        .into_iter()
        .map(|mut c| {
            c.score = score(doc, &c, opts);
            debug!(selector = %c.selector, count = c.match_count, score = c.score, "scored container");
            c
        })
        .filter(|c| c.score > 0.0)
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.origin.cmp(&b.origin))
    });
    scored.truncate(opts.working_set_size);
    scored
}
