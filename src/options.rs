//! Configuration options for structure inference and extraction.
//!
//! Every threshold and weight the heuristics use lives here. The weights are
//! empirically chosen defaults; what matters is the ranking they produce, not
//! their absolute values.

// === Container generation ===

/// Fewest matches for a selector to count as a list.
pub const MIN_CONTAINER_MATCHES: usize = 3;
/// Most matches before a selector is assumed to be a menu or index.
pub const MAX_CONTAINER_MATCHES: usize = 30;
/// Upper bound of the "well-formed" match-count band.
pub const WELL_FORMED_MAX_MATCHES: usize = 20;
/// Share of a parent's children that must share one tag in the structural scan.
pub const DOMINANT_CHILD_TAG_RATIO: f64 = 0.7;

// === Container scoring ===

/// Allowed child-count drift from the first match for homogeneity.
pub const HOMOGENEITY_CHILD_TOLERANCE: usize = 2;
/// Share of matches that must be within tolerance for the homogeneity bonus.
pub const HOMOGENEITY_RATIO: f64 = 0.7;
/// Candidates kept after ranking.
pub const WORKING_SET_SIZE: usize = 3;

// === Field resolution ===

/// Containers in which a field selector must produce content.
pub const MIN_FIELD_MATCH_RATIO: f64 = 0.5;
/// Title length band (characters).
pub const TITLE_MIN_LEN: f64 = 10.0;
pub const TITLE_MAX_LEN: f64 = 100.0;
/// Minimum average summary length.
pub const SUMMARY_MIN_LEN: f64 = 30.0;
/// Maximum average date length.
pub const DATE_MAX_LEN: f64 = 30.0;
/// Maximum average author length.
pub const AUTHOR_MAX_LEN: f64 = 30.0;

/// Additive weights used by the container scorer and field resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringWeights {
    /// Match count within `[min, well_formed_max]`.
    pub well_formed_count: f64,
    /// Match count within `(well_formed_max, max]`.
    pub acceptable_count: f64,
    /// First match has a title-like descendant.
    pub has_title: f64,
    /// First match has a link.
    pub has_link: f64,
    /// First match has a paragraph.
    pub has_paragraph: f64,
    /// Domain keyword in the first match's text.
    pub keyword_in_text: f64,
    /// Domain keyword in the first match's class or id.
    pub keyword_in_attrs: f64,
    /// Matches have similar child counts.
    pub homogeneous: f64,

    /// Multiplier for a field selector's match ratio.
    pub field_match_base: f64,
    pub title_bonus: f64,
    pub summary_bonus: f64,
    pub date_bonus: f64,
    pub author_bonus: f64,
    pub link_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            well_formed_count: 20.0,
            acceptable_count: 10.0,
            has_title: 15.0,
            has_link: 10.0,
            has_paragraph: 8.0,
            keyword_in_text: 5.0,
            keyword_in_attrs: 10.0,
            homogeneous: 15.0,
            field_match_base: 50.0,
            title_bonus: 30.0,
            summary_bonus: 20.0,
            date_bonus: 25.0,
            author_bonus: 15.0,
            link_bonus: 30.0,
        }
    }
}

/// Configuration options for extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use news_extractor::Options;
///
/// let options = Options {
///     site_name: Some("Example News".to_string()),
///     max_container_matches: 50,
///     ..Options::default()
/// };
/// assert_eq!(options.min_container_matches, 3);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Name used for `NewsRecord::source` when an item carries none.
    ///
    /// When `None`, the host of the base URL is used.
    ///
    /// Default: `None`
    pub site_name: Option<String>,

    /// Minimum matches for a container candidate.
    ///
    /// Default: `3`
    pub min_container_matches: usize,

    /// Maximum matches for a container candidate.
    ///
    /// Default: `30`
    pub max_container_matches: usize,

    /// Upper end of the well-formed match-count band.
    ///
    /// Default: `20`
    pub well_formed_max_matches: usize,

    /// Required share of same-tag children in the structural scan.
    ///
    /// Default: `0.7`
    pub dominant_child_tag_ratio: f64,

    /// Child-count tolerance for the homogeneity signal.
    ///
    /// Default: `2`
    pub homogeneity_child_tolerance: usize,

    /// Required share of matches within tolerance.
    ///
    /// Default: `0.7`
    pub homogeneity_ratio: f64,

    /// Number of ranked containers retained.
    ///
    /// Default: `3`
    pub working_set_size: usize,

    /// Minimum match ratio for a field selector.
    ///
    /// Default: `0.5`
    pub min_field_match_ratio: f64,

    /// Title average-length band.
    ///
    /// Default: `10.0..=100.0`
    pub title_min_len: f64,
    pub title_max_len: f64,

    /// Minimum summary average length.
    ///
    /// Default: `30.0`
    pub summary_min_len: f64,

    /// Maximum date average length.
    ///
    /// Default: `30.0`
    pub date_max_len: f64,

    /// Maximum author average length.
    ///
    /// Default: `30.0`
    pub author_max_len: f64,

    /// Score weights.
    pub weights: ScoringWeights,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            site_name: None,
            min_container_matches: MIN_CONTAINER_MATCHES,
            max_container_matches: MAX_CONTAINER_MATCHES,
            well_formed_max_matches: WELL_FORMED_MAX_MATCHES,
            dominant_child_tag_ratio: DOMINANT_CHILD_TAG_RATIO,
            homogeneity_child_tolerance: HOMOGENEITY_CHILD_TOLERANCE,
            homogeneity_ratio: HOMOGENEITY_RATIO,
            working_set_size: WORKING_SET_SIZE,
            min_field_match_ratio: MIN_FIELD_MATCH_RATIO,
            title_min_len: TITLE_MIN_LEN,
            title_max_len: TITLE_MAX_LEN,
            summary_min_len: SUMMARY_MIN_LEN,
            date_max_len: DATE_MAX_LEN,
            author_max_len: AUTHOR_MAX_LEN,
            weights: ScoringWeights::default(),
        }
    }
}

impl Options {
    /// Whether `count` lies inside the container match-count bounds.
    #[must_use]
    pub fn container_count_in_range(&self, count: usize) -> bool {
        (self.min_container_matches..=self.max_container_matches).contains(&count)
    }
}
