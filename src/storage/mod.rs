//! Storage Layer
//!
//! Handles data persistence. Jumla only persists its JSON config.

pub mod config;

pub use config::*;
