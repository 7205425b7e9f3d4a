//! Jumla News
//!
//! Everything between a feed URL and a list of topics: the built-in feed
//! catalog, an RSS/Atom parser, HTML summary stripping and the HTTP client.

pub mod client;
pub mod error;
pub mod feeds;
pub mod html;
pub mod parser;
pub mod topics;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{NewsError, NewsResult};

// ── Feeds ──────────────────────────────────────────────────────────────
pub use client::{FetchOutcome, NewsClient};
pub use feeds::{default_feeds, find_feed, FeedSource};
pub use parser::{parse_date, parse_feed, FeedEntry};

// ── Topics ─────────────────────────────────────────────────────────────
pub use html::html_to_text;
pub use topics::{Topic, TopicMap, DEFAULT_MAX_ENTRIES, DEFAULT_MIN_SUMMARY_CHARS};
