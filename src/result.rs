//! Data model for inference artifacts and extracted records.
//!
//! Everything here is plain data. Candidates and field selector sets are
//! produced by one inference pass over one document and are never reused for
//! another input, even from the same site.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Semantic slots a selector can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// The repeating element holding one record.
    Container,
    /// Headline text.
    Title,
    /// Teaser or description text.
    Summary,
    /// Raw, unparsed publication date text.
    Date,
    /// Byline text.
    Author,
    /// Story link (`href`).
    Link,
    /// Publisher name shown inside the item. Explicit-only.
    Source,
}

impl Field {
    /// Fields the resolver infers for a container, in resolution order.
    pub const INFERRED: [Field; 5] = [
        Field::Title,
        Field::Summary,
        Field::Date,
        Field::Author,
        Field::Link,
    ];

    /// Lowercase name as used in site configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Container => "container",
            Field::Title => "title",
            Field::Summary => "summary",
            Field::Date => "date",
            Field::Author => "author",
            Field::Link => "link",
            Field::Source => "source",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a container candidate was proposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateOrigin {
    /// From the fixed container catalog.
    Catalog,
    /// From the generic sibling scan.
    Structural,
}

/// A selector hypothesised to match the repeating record elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerCandidate {
    /// Selector matching every record element.
    pub selector: String,

    /// Number of elements `selector` matched in the evaluated document.
    pub match_count: usize,

    /// Plausibility score; zero until scored.
    pub score: f64,

    /// Which generation strategy proposed it.
    pub origin: CandidateOrigin,
}

/// Optional selector per field. Absence means "not found" or "not configured".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSelectorSet {
    pub container: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    pub link: Option<String>,
    pub source: Option<String>,
}

impl FieldSelectorSet {
    /// Selector configured for `field`, ignoring blank strings.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        let slot = match field {
            Field::Container => &self.container,
            Field::Title => &self.title,
            Field::Summary => &self.summary,
            Field::Date => &self.date,
            Field::Author => &self.author,
            Field::Link => &self.link,
            Field::Source => &self.source,
        };
        slot.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Set or clear the selector for `field`.
    pub fn set(&mut self, field: Field, selector: Option<String>) {
        let slot = match field {
            Field::Container => &mut self.container,
            Field::Title => &mut self.title,
            Field::Summary => &mut self.summary,
            Field::Date => &mut self.date,
            Field::Author => &mut self.author,
            Field::Link => &mut self.link,
            Field::Source => &mut self.source,
        };
        *slot = selector;
    }
}

/// Score breakdown for one field selector candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldScore {
    pub field: Field,
    pub selector: String,
    /// Share of containers in which the selector produced content.
    pub match_ratio: f64,
    /// Mean character length of the produced text.
    pub average_text_length: f64,
    /// Whether the field's validity predicate held.
    pub valid: bool,
    /// `match_ratio * base + bonus`.
    pub score: f64,
}

/// Fields resolved for one container, with the winning scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedFields {
    pub selectors: FieldSelectorSet,
    pub winners: Vec<FieldScore>,
}

impl ResolvedFields {
    /// Winning score entry for `field`, if the field resolved.
    #[must_use]
    pub fn winner(&self, field: Field) -> Option<&FieldScore> {
        self.winners.iter().find(|w| w.field == field)
    }
}

/// Output of structure inference, for diagnostic callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureReport {
    /// Working set of scored containers, best first.
    pub container_candidates: Vec<ContainerCandidate>,

    /// Field selectors per container selector in the working set.
    pub field_selectors_by_container: BTreeMap<String, ResolvedFields>,
}

impl StructureReport {
    /// Best container candidate, if any.
    #[must_use]
    pub fn best(&self) -> Option<&ContainerCandidate> {
        self.container_candidates.first()
    }

    /// Field selector set for the best container, with `container` filled in.
    #[must_use]
    pub fn best_fields(&self) -> Option<FieldSelectorSet> {
        let best = self.best()?;
        self.field_selectors_by_container
            .get(&best.selector)
            .map(|r| r.selectors.clone())
    }
}

/// One extracted news item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsRecord {
    /// Never empty after trimming.
    pub title: String,
    pub summary: String,
    /// Raw date text as shown on the page.
    pub date: String,
    pub author: String,
    pub source: String,
    /// Absolute URL, or empty when no link was found.
    pub url: String,
}

/// Caller-supplied description of a site, in the crawler's `sites.json` shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteProfile {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub selectors: Option<FieldSelectorSet>,
}

impl SiteProfile {
    /// Parse a JSON array of site profiles.
    ///
    /// # Example
    ///
    /// ```rust
    /// use news_extractor::SiteProfile;
    ///
    /// let sites = SiteProfile::parse_list(r#"[
    ///     {"name": "Example", "url": "https://example.com/news",
    ///      "selectors": {"container": "div.card", "title": "h2"}}
    /// ]"#)?;
    /// assert_eq!(sites[0].selectors.as_ref().and_then(|s| s.container.as_deref()), Some("div.card"));
    /// # Ok::<(), news_extractor::Error>(())
    /// ```
    pub fn parse_list(json: &str) -> Result<Vec<SiteProfile>> {
        Ok(serde_json::from_str(json)?)
    }
}
