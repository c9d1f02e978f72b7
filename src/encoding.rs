//! Character encoding detection and transcoding for byte input.
//!
//! Listing pages from Chinese-language sites are still often served as GBK
//! or GB2312. The charset is taken from the document's own `<meta>`
//! declaration; undeclared input is treated as UTF-8.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use tracing::debug;

/// Bytes inspected for a charset declaration.
const SNIFF_LEN: usize = 2048;

/// `<meta charset="...">` or the `charset=` inside a Content-Type `content`.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+?charset\s*=\s*["']?\s*([A-Za-z0-9_:.\-]+)"#).expect("META_CHARSET regex")
});

/// Encoding declared in the first bytes of `html`, or UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    // UTF-8 byte order mark wins over any declaration
    if html.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return UTF_8;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    META_CHARSET
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode `html` to UTF-8, replacing undecodable sequences with U+FFFD.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, used, had_errors): (Cow<'_, str>, _, _) = encoding.decode(html);
    if had_errors {
        debug!(encoding = used.name(), "replaced undecodable bytes");
    }
    decoded.into_owned()
}
