//! Extraction orchestrator.
//!
//! ```text
//! explicit selectors with a container?
//!   yes -> extract directly -> records? done
//!                           -> none: fall through
//! infer structure: catalog candidates -> (none) structural scan
//!                  -> score & rank -> top 1 -> resolve fields
//!   no candidate -> zero records
//!   otherwise    -> extract with inferred selectors
//!                   (explicit field selectors stay in the fallback chain)
//! ```

use dom_query::Document;
use tracing::{debug, info, instrument};

use crate::candidates;
use crate::dom;
use crate::error::Result;
use crate::options::Options;
use crate::records::RecordExtractor;
use crate::resolver;
use crate::result::{Field, FieldSelectorSet, NewsRecord, StructureReport};
use crate::scoring;
use crate::url_utils::extract_hostname;

/// Run structure inference on a parsed document.
///
/// Field selectors are resolved for every candidate in the working set when
/// `resolve_all` is set, otherwise only for the best one.
pub(crate) fn infer(doc: &Document, opts: &Options, resolve_all: bool) -> StructureReport {
    let generated = candidates::generate(doc, opts);
    let ranked = scoring::rank(doc, generated, opts);

    let mut report = StructureReport::default();
    let resolve_count = if resolve_all { ranked.len() } else { ranked.len().min(1) };
    for candidate in ranked.iter().take(resolve_count) {
        let fields = resolver::resolve_fields(doc, &candidate.selector, opts);
        report
            .field_selectors_by_container
            .insert(candidate.selector.clone(), fields);
    }
    report.container_candidates = ranked;

    if let Some(best) = report.best() {
        debug!(selector = %best.selector, score = best.score, "best container");
    }
    report
}

/// Parse `html` and report the inferred structure.
pub(crate) fn infer_structure(html: &str, opts: &Options) -> Result<StructureReport> {
    let doc = dom::parse(html)?;
    Ok(infer(&doc, opts, true))
}

/// End-to-end extraction.
#[instrument(level = "debug", skip_all, fields(base_url = %base_url))]
pub(crate) fn extract_records(
    html: &str,
    base_url: &str,
    explicit: Option<&FieldSelectorSet>,
    opts: &Options,
) -> Result<Vec<NewsRecord>> {
    let doc = dom::parse(html)?;

    let default_source = opts
        .site_name
        .clone()
        .filter(|name| !name.trim().is_empty())
        .or_else(|| extract_hostname(base_url))
        .unwrap_or_default();

    if let Some((explicit, container)) =
        explicit.and_then(|e| e.get(Field::Container).map(|c| (e, c)))
    {
        let records =
            RecordExtractor::configured(explicit).extract(&doc, container, base_url, &default_source);
        if !records.is_empty() {
            info!(container, count = records.len(), "extracted with configured selectors");
            return Ok(records);
        }
        info!(container, "configured selectors yielded no records; inferring structure");
    }

    let report = infer(&doc, opts, false);
    let Some(best) = report.best() else {
        info!("no list-like structure found");
        return Ok(Vec::new());
    };

    let inferred = report.best_fields().unwrap_or_default();
    let records = RecordExtractor::new(&inferred, explicit).extract(
        &doc,
        &best.selector,
        base_url,
        &default_source,
    );

    info!(container = %best.selector, count = records.len(), "extracted with inferred selectors");
    Ok(records)
}
