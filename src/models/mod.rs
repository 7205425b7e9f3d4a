//! Data Models
//!
//! Contains the data structures used throughout the application.

pub mod satire;
pub mod settings;

pub use satire::*;
pub use settings::*;
