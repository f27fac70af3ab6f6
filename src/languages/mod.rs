pub mod catalog;
pub mod grammars;
pub mod modes;
pub mod registry;

pub use catalog::CATALOG;
pub use registry::LanguageRegistry;
