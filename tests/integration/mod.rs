//! Integration tests for news-extractor
//!
//! These tests verify the complete inference and extraction pipeline works
//! end-to-end with realistic listing pages from various kinds of sites.

mod edge_cases;
mod real_world_listings;
