//! Edge case integration tests
//!
//! Tests for unusual listing shapes, boundary conditions and link forms.

#![allow(clippy::unwrap_used)]

use news_extractor::{extract, infer_structure, CandidateOrigin, Field, FieldSelectorSet};

#[test]
fn test_items_that_are_anchors() {
    let html = r#"<html><body><div class="list">
        <a href="/v/1"><h3>Video story number one</h3></a>
        <a href="/v/2"><h3>Video story number two</h3></a>
        <a href="/v/3"><h3>Video story number three</h3></a>
    </div></body></html>"#;

    let records = extract(html, "https://example.com/video/", None).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].title, "Video story number one");
    assert_eq!(records[2].url, "https://example.com/v/3");
}

#[test]
fn test_plain_text_anchor_items() {
    let html = r#"<html><body><div class="list">
        <a href="/1">Plain anchor story one</a>
        <a href="/2">Plain anchor story two</a>
        <a href="/3">Plain anchor story three</a>
    </div></body></html>"#;

    let records = extract(html, "https://example.com/", None).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[1].title, "Plain anchor story two");
    assert_eq!(records[1].url, "https://example.com/2");
}

#[test]
fn test_nested_containers_yield_one_record_each() {
    let inner: String = (1..=3)
        .map(|i| format!(r#"<article><h2><a href="/s/{i}">Inner story headline {i}</a></h2></article>"#))
        .collect();
    let html = format!(r#"<html><body><article class="outer">{inner}</article></body></html>"#);

    let records = extract(&html, "https://example.com/", None).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].title, "Inner story headline 1");
    assert_eq!(records[2].url, "https://example.com/s/3");
}

#[test]
fn test_structural_scan_without_known_classes() {
    let html = r#"<html><body>
        <section id="feed">
            <div><h4><a href="/p/1">First entry in the feed</a></h4></div>
            <div><h4><a href="/p/2">Second entry in the feed</a></h4></div>
            <div><h4><a href="/p/3">Third entry in the feed</a></h4></div>
            <div><h4><a href="/p/4">Fourth entry in the feed</a></h4></div>
        </section>
    </body></html>"#;

    let report = infer_structure(html).unwrap();
    let best = report.best().unwrap();
    assert_eq!(best.selector, "#feed > div");
    assert_eq!(best.origin, CandidateOrigin::Structural);

    let records = extract(html, "https://example.com/", None).unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[3].title, "Fourth entry in the feed");
    assert_eq!(records[3].url, "https://example.com/p/4");
}

#[test]
fn test_link_forms_are_normalized() {
    let hrefs = [
        "https://other.example.org/abs",
        "//cdn.example.com/proto",
        "/root/path",
        "relative/page.html",
    ];
    let items: String = hrefs
        .iter()
        .enumerate()
        .map(|(i, href)| {
            format!(r#"<div class="news-item"><h3><a href="{href}">Link form headline {i}</a></h3></div>"#)
        })
        .collect();

    let records = extract(&items, "http://example.com:8080/section/list.html", None).unwrap();
    let urls: Vec<&str> = records.iter().map(|r| r.url.as_str()).collect();

    assert_eq!(
        urls,
        vec![
            "https://other.example.org/abs",
            "http://cdn.example.com/proto",
            "http://example.com:8080/root/path",
            "http://example.com:8080/section/relative/page.html",
        ]
    );
}

#[test]
fn test_items_without_link_have_empty_url() {
    let items: String = (1..=3)
        .map(|i| format!(r#"<div class="card"><h2>Unlinked card title {i}</h2></div>"#))
        .collect();

    let records = extract(&items, "https://example.com/", None).unwrap();
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.url.is_empty()));
}

#[test]
fn test_whitespace_in_titles_is_collapsed() {
    let items: String = (1..=3)
        .map(|i| format!("<div class=\"card\"><h2>\n   Multi\n   line   title {i}\n</h2></div>"))
        .collect();

    let records = extract(&items, "https://example.com/", None).unwrap();
    assert_eq!(records[0].title, "Multi line title 1");
}

#[test]
fn test_image_only_link_still_resolves_link_field() {
    let items: String = (1..=3)
        .map(|i| {
            format!(
                r#"<div class="card"><a class="thumb" href="/img/{i}"><img src="/t/{i}.jpg"></a><h2>Thumbnail story {i} here</h2></div>"#
            )
        })
        .collect();

    let report = infer_structure(&items).unwrap();
    let fields = report.best_fields().unwrap();
    assert_eq!(fields.get(Field::Link), Some("a[href]"));

    let records = extract(&items, "https://example.com/", None).unwrap();
    assert_eq!(records[1].url, "https://example.com/img/2");
}

#[test]
fn test_explicit_field_selectors_without_container() {
    let items: String = (1..=3)
        .map(|i| {
            format!(
                r#"<div class="card"><h2>Card headline number {i}</h2><em class="kicker">Opinion</em></div>"#
            )
        })
        .collect();
    let explicit = FieldSelectorSet {
        source: Some("em.kicker".to_string()),
        ..FieldSelectorSet::default()
    };

    let records = extract(&items, "https://example.com/", Some(&explicit)).unwrap();
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.source == "Opinion"));
}

#[test]
fn test_working_set_is_bounded() {
    let rows = |class: &str| -> String {
        (0..4)
            .map(|i| format!(r#"<div class="{class}"><h3><a href="/{class}/{i}">Entry {i} in {class}</a></h3></div>"#))
            .collect()
    };
    let html = format!(
        "{}{}{}{}",
        rows("article-item"),
        rows("news-item"),
        rows("post-item"),
        rows("card")
    );

    let report = infer_structure(&html).unwrap();
    assert_eq!(report.container_candidates.len(), 3);
    assert_eq!(report.field_selectors_by_container.len(), 3);
    assert!(report
        .container_candidates
        .windows(2)
        .all(|w| w[0].score >= w[1].score));
}
