//! Simple CLI that reads an HTML listing page from stdin and prints the
//! extracted records (or, with `--infer`, the inferred structure) as JSON.
//!
//! Usage: `news_stdin <base_url> [site_name] [--infer] < page.html`
//!
//! Log verbosity follows `RUST_LOG` (default `warn`); logs go to stderr.

use std::io::{self, Read};
use std::process::ExitCode;

use news_extractor::{extract_bytes, extract_with_options, infer_structure, Options};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let mut infer = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--infer" {
            infer = true;
        } else {
            positional.push(arg);
        }
    }

    let Some(base_url) = positional.first().cloned() else {
        eprintln!("usage: news_stdin <base_url> [site_name] [--infer] < page.html");
        return ExitCode::from(2);
    };
    let site_name = positional.get(1).cloned();

    // Read raw bytes so non-UTF-8 pages are transcoded from their declared charset
    let mut bytes = Vec::new();
    if io::stdin().read_to_end(&mut bytes).is_err() {
        eprintln!("Failed to read from stdin");
        return ExitCode::FAILURE;
    }

    let json = if infer {
        let html = news_extractor::encoding::transcode_to_utf8(&bytes);
        infer_structure(&html).and_then(|report| Ok(serde_json::to_string_pretty(&report)?))
    } else if site_name.is_some() {
        let html = news_extractor::encoding::transcode_to_utf8(&bytes);
        let options = Options {
            site_name,
            ..Options::default()
        };
        extract_with_options(&html, &base_url, None, &options)
            .and_then(|records| Ok(serde_json::to_string_pretty(&records)?))
    } else {
        extract_bytes(&bytes, &base_url, None)
            .and_then(|records| Ok(serde_json::to_string_pretty(&records)?))
    };

    match json {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
