//! Services
//!
//! Business logic services for the application.
//! Services handle the core functionality and are called by commands.

pub mod generator;
pub mod prompts;
pub mod session;

pub use generator::ContentGenerator;
pub use session::{ChatSession, GeneratedChat};
