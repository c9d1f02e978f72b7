//! # news-extractor
//!
//! Finds the list of news items in an arbitrary HTML page and extracts one
//! record (title, summary, date, author, source, link) per item, without
//! knowing the page's markup in advance.
//!
//! ## Quick Start
//!
//! ```rust
//! use news_extractor::extract;
//!
//! let html = r#"<html><body>
//!   <div class="card"><h2><a href="/n/1">First headline</a></h2><p>Summary one.</p></div>
//!   <div class="card"><h2><a href="/n/2">Second headline</a></h2><p>Summary two.</p></div>
//!   <div class="card"><h2><a href="/n/3">Third headline</a></h2><p>Summary three.</p></div>
//! </body></html>"#;
//!
//! let records = extract(html, "https://example.com/news/", None)?;
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[0].url, "https://example.com/n/1");
//! # Ok::<(), news_extractor::Error>(())
//! ```
//!
//! ## How it works
//!
//! - **Container candidates**: known list/card patterns, or a scan for parents
//!   whose children mostly share one tag
//! - **Container scoring**: match count, title/link/paragraph presence,
//!   domain keywords, structural homogeneity
//! - **Field resolution**: per-field selector catalogs scored by match ratio
//!   and text-shape validity
//! - **Record extraction**: fallback chain per field, URL normalization
//!
//! The engine is synchronous and stateless: no I/O, no shared state, every
//! call owns its parsed document.

mod error;
mod extract;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Selector compilation, matching, catalogs and construction.
pub mod selector;

/// Compiled keyword and digit patterns.
pub mod patterns;

/// Container candidate generation.
pub mod candidates;

/// Container scoring and ranking.
pub mod scoring;

/// Field selector resolution.
pub mod resolver;

/// Record extraction with fallback chains.
pub mod records;

/// URL normalization.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{Options, ScoringWeights};
pub use result::{
    CandidateOrigin, ContainerCandidate, Field, FieldScore, FieldSelectorSet, NewsRecord,
    ResolvedFields, SiteProfile, StructureReport,
};

/// Extracts news records from an HTML listing page using default options.
///
/// # Arguments
///
/// * `html` - The HTML document as a string slice
/// * `base_url` - URL the document was fetched from; used to absolutize links
///   and, lacking a site name, as the record source
/// * `explicit` - Optional configured selectors; tried first, with structure
///   inference as fallback when they yield nothing
///
/// # Returns
///
/// The extracted records, possibly empty. Fails only with
/// [`Error::MalformedInput`] when the input is not markup text.
pub fn extract(
    html: &str,
    base_url: &str,
    explicit: Option<&FieldSelectorSet>,
) -> Result<Vec<NewsRecord>> {
    extract_with_options(html, base_url, explicit, &Options::default())
}

/// Extracts news records with custom options.
///
/// # Example
///
/// ```rust
/// use news_extractor::{extract_with_options, Options};
///
/// let options = Options {
///     site_name: Some("Example News".to_string()),
///     ..Options::default()
/// };
/// let records = extract_with_options("<p>No listing here.</p>", "https://example.com/", None, &options)?;
/// assert!(records.is_empty());
/// # Ok::<(), news_extractor::Error>(())
/// ```
pub fn extract_with_options(
    html: &str,
    base_url: &str,
    explicit: Option<&FieldSelectorSet>,
    options: &Options,
) -> Result<Vec<NewsRecord>> {
    extract::extract_records(html, base_url, explicit, options)
}

/// Extracts news records for a configured site.
///
/// Uses the profile's URL as base, its name as default source and its
/// selectors (if any) as the explicit selector set.
pub fn extract_site(html: &str, site: &SiteProfile) -> Result<Vec<NewsRecord>> {
    let options = Options {
        site_name: Some(site.name.clone()).filter(|n| !n.trim().is_empty()),
        ..Options::default()
    };
    extract_with_options(html, &site.url, site.selectors.as_ref(), &options)
}

/// Extracts news records from raw bytes, detecting the character encoding
/// from the document's `<meta>` charset declaration.
///
/// # Example
///
/// ```rust
/// use news_extractor::extract_bytes;
///
/// let html = b"<meta charset=\"windows-1252\"><ul><li><h3>Caf\xE9 opens its doors</h3></li><li><h3>Second item title</h3></li><li><h3>Third item title</h3></li></ul>";
/// let records = extract_bytes(html, "https://example.com/", None)?;
/// assert_eq!(records[0].title, "Café opens its doors");
/// # Ok::<(), news_extractor::Error>(())
/// ```
pub fn extract_bytes(
    html: &[u8],
    base_url: &str,
    explicit: Option<&FieldSelectorSet>,
) -> Result<Vec<NewsRecord>> {
    let html_str = encoding::transcode_to_utf8(html);
    extract(&html_str, base_url, explicit)
}

/// Infers the listing structure of a document without extracting records.
///
/// Returns the ranked working set of container candidates and, for each of
/// them, the resolved field selectors with their scores.
pub fn infer_structure(html: &str) -> Result<StructureReport> {
    infer_structure_with_options(html, &Options::default())
}

/// Infers the listing structure with custom options.
pub fn infer_structure_with_options(html: &str, options: &Options) -> Result<StructureReport> {
    extract::infer_structure(html, options)
}
