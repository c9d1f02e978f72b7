//! Selector catalogs
//!
//! Fixed, ordered lists of selectors that commonly mark a news listing and
//! its fields. Order matters everywhere: ties in scoring are broken by the
//! position in these lists, and field catalogs run most-specific first.

use crate::result::Field;

/// Container patterns, tried in order by the catalog strategy.
pub static CONTAINER_SELECTORS: &[&str] = &[
    "div.article-item",
    "div.news-item",
    "div.post-item",
    "div.article",
    "li.article",
    "div.card",
    "div.item",
    "li.item",
    "div.post",
    "article",
    ".article-list > *",
    ".content-list > *",
    ".news-list > *",
    ".post-list > *",
    ".list > *",
];

/// Title locators. Anchors inside headings come first so a winning title
/// selector also points at the story link.
pub static TITLE_SELECTORS: &[&str] = &[
    "h2 a",
    "h3 a",
    "h1 a",
    "h4 a",
    ".title a",
    ".headline a",
    "a.title",
    "h2",
    "h3",
    "h1",
    "h4",
    ".title",
    ".headline",
    r#"[class*="title"]"#,
    r#"[class*="headline"]"#,
    "a[title]",
];

/// Summary locators.
pub static SUMMARY_SELECTORS: &[&str] = &[
    "p.summary",
    ".summary",
    ".desc",
    ".description",
    ".excerpt",
    r#"[class*="summary"]"#,
    r#"[class*="desc"]"#,
    r#"[class*="excerpt"]"#,
    "p",
];

/// Date locators.
pub static DATE_SELECTORS: &[&str] = &[
    "time",
    ".date",
    ".time",
    ".pubdate",
    ".publish-time",
    r#"[class*="date"]"#,
    r#"[class*="time"]"#,
    "[datetime]",
];

/// Author locators.
pub static AUTHOR_SELECTORS: &[&str] = &[
    ".author",
    ".byline",
    r#"[rel="author"]"#,
    r#"[class*="author"]"#,
    ".writer",
    r#"[class*="writer"]"#,
];

/// Link locators.
pub static LINK_SELECTORS: &[&str] = &[
    "h2 a",
    "h3 a",
    "h1 a",
    "h4 a",
    ".title a",
    "a[href]",
];

/// Catalog for a field. `Container` and `Source` have no field catalog.
#[must_use]
pub fn for_field(field: Field) -> &'static [&'static str] {
    match field {
        Field::Title => TITLE_SELECTORS,
        Field::Summary => SUMMARY_SELECTORS,
        Field::Date => DATE_SELECTORS,
        Field::Author => AUTHOR_SELECTORS,
        Field::Link => LINK_SELECTORS,
        Field::Container | Field::Source => &[],
    }
}
