//! Integration Tests Module
//!
//! End-to-end tests across the workspace crates: transcript parsing and
//! styling, feed-to-chat pipeline with a mock provider, rendering, and the
//! config service driven through the CLI.

// Transcript parser and style table through the public API
mod transcript_test;

// Feed parsing, topic filtering and chat generation with a mock LLM
mod pipeline_test;

// HTML and terminal rendering of generated chats
mod render_test;

// Config file and `jumla config` commands
mod config_test;
