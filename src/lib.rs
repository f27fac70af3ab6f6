// langmap - resolve language names to syntax highlighting engines
// Re-export public modules and types

pub mod cli;
pub mod config;
pub mod engine;
pub mod languages;

// Re-export main types for convenience
pub use config::Config;
pub use engine::{EngineCategory, EngineHandle, Highlight, Span, TokenKind};
pub use languages::LanguageRegistry;
