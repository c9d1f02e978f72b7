//! Integration tests for realistic listing pages
//!
//! Tests extraction from HTML shaped like blog archives, portal channel
//! pages and tech news indexes.

#![allow(clippy::unwrap_used)]

use news_extractor::{extract, extract_site, infer_structure, Field, SiteProfile};

fn blog_archive() -> String {
    let posts = [
        ("2024-05-01", "May 1, 2024", "Jane Roe", "Scaling inference clusters on a budget"),
        ("2024-05-03", "May 3, 2024", "John Doe", "What we learned shipping a recommender"),
        ("2024-05-07", "May 7, 2024", "Ann Lee", "Evaluating retrieval quality offline"),
        ("2024-05-09", "May 9, 2024", "Bo Chen", "A field guide to tokenizer bugs"),
        ("2024-05-12", "May 12, 2024", "Jane Roe", "Notes from the spring robotics meetup"),
        ("2024-05-15", "May 15, 2024", "Sam Park", "Migrating our pipeline to streaming"),
    ];
    let articles: String = posts
        .iter()
        .enumerate()
        .map(|(i, (iso, shown, author, title))| {
            format!(
                r#"<article class="post">
                     <h2 class="entry-title"><a href="/2024/05/post-{i}/">{title}</a></h2>
                     <div class="meta"><time datetime="{iso}">{shown}</time> <span class="author">By {author}</span></div>
                     <p class="excerpt">An excerpt long enough to look like a real summary of post {i}.</p>
                   </article>"#
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head><meta charset="utf-8"><title>Engineering Blog</title></head>
        <body>
          <header>
            <ul class="menu">
              <li><a href="/">Home</a></li><li><a href="/about">About</a></li>
              <li><a href="/jobs">Jobs</a></li><li><a href="/rss">RSS</a></li>
            </ul>
          </header>
          <div class="post-list">{articles}</div>
          <footer><p>© 2024 Example Engineering</p></footer>
        </body>
        </html>"#
    )
}

#[test]
fn test_blog_archive_structure() {
    let report = infer_structure(&blog_archive()).unwrap();

    let best = report.best().unwrap();
    assert_eq!(best.selector, "article");
    assert_eq!(best.match_count, 6);

    let fields = report.best_fields().unwrap();
    assert_eq!(fields.get(Field::Title), Some("h2 a"));
    assert_eq!(fields.get(Field::Summary), Some(".excerpt"));
    assert_eq!(fields.get(Field::Date), Some("time"));
    assert_eq!(fields.get(Field::Author), Some(".author"));
    assert_eq!(fields.get(Field::Link), Some("h2 a"));
}

#[test]
fn test_blog_archive_records() {
    let records = extract(&blog_archive(), "https://blog.example.com/archive/", None).unwrap();

    assert_eq!(records.len(), 6);
    let first = &records[0];
    assert_eq!(first.title, "Scaling inference clusters on a budget");
    assert_eq!(first.date, "May 1, 2024");
    assert_eq!(first.author, "By Jane Roe");
    assert_eq!(first.summary, "An excerpt long enough to look like a real summary of post 0.");
    assert_eq!(first.source, "blog.example.com");
    assert_eq!(first.url, "https://blog.example.com/2024/05/post-0/");
    assert!(records.iter().all(|r| !r.title.contains("Home")));
}

fn portal_channel() -> String {
    let titles = [
        "人工智能大模型发布会今日举行",
        "国产芯片企业公布最新研发进展",
        "多地推出人工智能产业扶持政策",
        "研究团队发布开源机器人平台",
        "科技企业加快布局智能驾驶领域",
    ];
    let items: String = titles
        .iter()
        .enumerate()
        .map(|(i, t)| {
            format!(
                r#"<li><a href="content_{i}.htm" title="{t}" target="_blank">{t}</a><span class="time">2024-06-1{i}</span></li>"#
            )
        })
        .collect();

    format!(
        r#"<html><head><meta charset="utf-8"></head><body>
           <div class="nav"><a href="/">首页</a><a href="/tech/">科技</a></div>
           <ul class="list">{items}</ul>
        </body></html>"#
    )
}

#[test]
fn test_portal_channel_page() {
    let site = SiteProfile {
        name: "示例科技频道".to_string(),
        url: "https://tech.example.cn/ai/index.html".to_string(),
        selectors: None,
    };

    let records = extract_site(&portal_channel(), &site).unwrap();

    assert_eq!(records.len(), 5);
    assert_eq!(records[0].title, "人工智能大模型发布会今日举行");
    assert_eq!(records[0].date, "2024-06-10");
    assert_eq!(records[0].source, "示例科技频道");
    assert_eq!(records[4].url, "https://tech.example.cn/ai/content_4.htm");
}

#[test]
fn test_catalog_beats_generic_on_tech_index() {
    let rich: String = (1..=8)
        .map(|i| {
            format!(
                r#"<div class="news-item">
                     <h3><a href="/ai/{i}">AI startup roundup, part {i} of the series</a></h3>
                     <p>Funding, launches and research notes collected for week {i}.</p>
                     <span class="date">2024-07-{i:02}</span>
                   </div>"#
            )
        })
        .collect();
    let sidebar: String = (1..=5)
        .map(|i| format!(r#"<div class="item">Tag {i}</div>"#))
        .collect();
    let html = format!(r#"<html><body><main>{rich}</main><aside>{sidebar}</aside></body></html>"#);

    let report = infer_structure(&html).unwrap();
    assert_eq!(report.best().unwrap().selector, "div.news-item");
    assert!(report
        .container_candidates
        .iter()
        .any(|c| c.selector == "div.item"));

    let records = extract(&html, "https://technews.example.com/", None).unwrap();
    assert_eq!(records.len(), 8);
    assert_eq!(records[7].date, "2024-07-08");
    assert_eq!(records[7].url, "https://technews.example.com/ai/8");
}
