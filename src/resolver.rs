//! Field selector resolution.
//!
//! For a fixed container, every field is resolved on its own: each selector
//! of the field's catalog is tried inside every container element and scored
//! by how often it produces content and whether that content looks right for
//! the field. A field that nothing fits resolves to absent, which never
//! affects the other fields.

use dom_query::{Document, Selection};
use tracing::debug;

use crate::dom;
use crate::options::Options;
use crate::patterns::has_digit;
use crate::result::{Field, FieldScore, ResolvedFields};
use crate::selector::{self, catalog, CompiledSelector};

/// What one selector produced inside one container.
struct Sample {
    text: Option<String>,
    href: Option<String>,
}

fn sample(compiled: &CompiledSelector, container: &Selection, field: Field) -> Sample {
    let matches = compiled.find(container);
    let text = matches
        .iter()
        .map(|m| dom::trimmed_text(&m))
        .find(|t| !t.is_empty());
    let href = if field == Field::Link {
        matches.iter().find_map(|m| dom::anchor_href(&m))
    } else {
        None
    };
    Sample { text, href }
}

/// Score one candidate selector for `field` over `containers`.
///
/// Returns `None` when the selector is invalid or its match ratio is below
/// the configured minimum.
fn score_candidate(
    css: &str,
    containers: &[Selection],
    field: Field,
    opts: &Options,
) -> Option<FieldScore> {
    let compiled = selector::compile_lenient(css)?;

    let mut hits = 0usize;
    let mut anchored = 0usize;
    let mut total_len = 0usize;
    let mut concatenated = String::new();

    for container in containers {
        let s = sample(&compiled, container, field);
        if s.text.is_none() && s.href.is_none() {
            continue;
        }
        hits += 1;
        if s.href.is_some() {
            anchored += 1;
        }
        if let Some(text) = s.text {
            total_len += text.chars().count();
            concatenated.push_str(&text);
            concatenated.push(' ');
        }
    }

    let match_ratio = hits as f64 / containers.len() as f64;
    if hits == 0 || match_ratio < opts.min_field_match_ratio {
        return None;
    }
    let average_text_length = total_len as f64 / hits as f64;

    let w = &opts.weights;
    let (valid, bonus) = match field {
        Field::Title => (
            (opts.title_min_len..=opts.title_max_len).contains(&average_text_length),
            w.title_bonus,
        ),
        Field::Summary => (average_text_length >= opts.summary_min_len, w.summary_bonus),
        Field::Date => (
            average_text_length <= opts.date_max_len && has_digit(&concatenated),
            w.date_bonus,
        ),
        Field::Author => (average_text_length <= opts.author_max_len, w.author_bonus),
        Field::Link => (anchored == hits, w.link_bonus),
        Field::Container | Field::Source => (false, 0.0),
    };

    let score = match_ratio * w.field_match_base + if valid { bonus } else { 0.0 };

    Some(FieldScore {
        field,
        selector: css.to_string(),
        match_ratio,
        average_text_length,
        valid,
        score,
    })
}

/// Rank the catalog selectors for `field` over `containers`, best first.
///
/// Candidates below the minimum match ratio are left out; equal scores keep
/// catalog order, so more specific selectors win ties.
#[must_use]
pub fn rank_field(containers: &[Selection], field: Field, opts: &Options) -> Vec<FieldScore> {
    if containers.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<FieldScore> = catalog::for_field(field)
        .iter()
        .filter_map(|css| score_candidate(css, containers, field, opts))
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

/// Resolve every inferable field for the given container elements.
#[must_use]
pub fn resolve_for_containers(containers: &[Selection], opts: &Options) -> ResolvedFields {
    let mut resolved = ResolvedFields::default();

    for field in Field::INFERRED {
        match rank_field(containers, field, opts).into_iter().next() {
            Some(best) => {
                debug!(%field, selector = %best.selector, score = best.score, "field resolved");
                resolved.selectors.set(field, Some(best.selector.clone()));
                resolved.winners.push(best);
            }
            None => debug!(%field, "field unresolved"),
        }
    }

    resolved
}

/// Resolve fields for the container matched by `container_selector` in `doc`.
///
/// The returned selector set has `container` filled in. An invalid container
/// selector resolves nothing.
#[must_use]
pub fn resolve_fields(doc: &Document, container_selector: &str, opts: &Options) -> ResolvedFields {
    let Some(compiled) = selector::compile_lenient(container_selector) else {
        return ResolvedFields::default();
    };
    let containers: Vec<Selection> = compiled.select_in(doc).iter().collect();

    let mut resolved = resolve_for_containers(&containers, opts);
    resolved.selectors.container = Some(container_selector.to_string());
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_page(dates: bool) -> String {
        let body: String = (1..=5)
            .map(|i| {
                let date = if dates {
                    format!(r#"<span class="date">2024-03-0{i}</span>"#)
                } else {
                    String::new()
                };
                format!(
                    r#"<div class="card"><h2><a href="/n/{i}">Model release number {i}</a></h2>{date}<span class="author">Jane Roe</span><p>Researchers describe a new benchmark result {i}.</p></div>"#
                )
            })
            .collect();
        format!("<html><body>{body}</body></html>")
    }

    #[test]
    fn test_resolves_all_fields() {
        let doc = dom::parse(&card_page(true)).unwrap();
        let resolved = resolve_fields(&doc, "div.card", &Options::default());
        let s = &resolved.selectors;

        assert_eq!(s.container.as_deref(), Some("div.card"));
        assert_eq!(s.title.as_deref(), Some("h2 a"));
        assert_eq!(s.link.as_deref(), Some("h2 a"));
        assert_eq!(s.summary.as_deref(), Some("p"));
        assert_eq!(s.date.as_deref(), Some(".date"));
        assert_eq!(s.author.as_deref(), Some(".author"));

        let title = resolved.winner(Field::Title).unwrap();
        assert!(title.valid);
        assert_eq!(title.match_ratio, 1.0);
    }

    #[test]
    fn test_missing_dates_do_not_affect_other_fields() {
        let opts = Options::default();
        let with = dom::parse(&card_page(true)).unwrap();
        let without = dom::parse(&card_page(false)).unwrap();

        let a = resolve_fields(&with, "div.card", &opts);
        let b = resolve_fields(&without, "div.card", &opts);

        assert!(b.selectors.date.is_none());
        for field in [Field::Title, Field::Link] {
            assert_eq!(a.winner(field), b.winner(field), "{field} changed");
        }
    }

    #[test]
    fn test_low_match_ratio_is_discarded() {
        let html = r#"
            <div class="c"><h3>Only the first item has a headline</h3></div>
            <div class="c"><b>x</b></div>
            <div class="c"><b>y</b></div>
        "#;
        let doc = dom::parse(html).unwrap();
        let containers: Vec<Selection> = doc.select("div.c").iter().collect();

        assert!(rank_field(&containers, Field::Title, &Options::default()).is_empty());
    }

    #[test]
    fn test_date_requires_digit() {
        let html = r#"
            <div class="c"><span class="date">yesterday</span></div>
            <div class="c"><span class="date">last week</span></div>
            <div class="c"><span class="date">today</span></div>
        "#;
        let doc = dom::parse(html).unwrap();
        let containers: Vec<Selection> = doc.select("div.c").iter().collect();

        let ranked = rank_field(&containers, Field::Date, &Options::default());
        assert!(!ranked.is_empty());
        assert!(ranked.iter().all(|r| !r.valid));
        assert_eq!(ranked[0].score, 50.0);
    }

    #[test]
    fn test_link_counts_image_only_anchors() {
        let html = r#"
            <li class="i"><a href="/1"><img src="a.png"></a></li>
            <li class="i"><a href="/2"><img src="b.png"></a></li>
            <li class="i"><a href="/3"><img src="c.png"></a></li>
        "#;
        let doc = dom::parse(html).unwrap();
        let containers: Vec<Selection> = doc.select("li.i").iter().collect();

        let ranked = rank_field(&containers, Field::Link, &Options::default());
        assert_eq!(ranked[0].selector, "a[href]");
        assert!(ranked[0].valid);
        assert_eq!(ranked[0].score, 80.0);
    }

    #[test]
    fn test_invalid_container_selector_resolves_nothing() {
        let doc = dom::parse(&card_page(true)).unwrap();
        let resolved = resolve_fields(&doc, "div[", &Options::default());
        assert_eq!(resolved, ResolvedFields::default());
    }

    #[test]
    fn test_empty_containers() {
        assert!(rank_field(&[], Field::Title, &Options::default()).is_empty());
    }
}
