pub mod grammar;
pub mod stream;

pub use grammar::{GrammarLanguage, HighlightQuery};
pub use stream::{StreamLanguage, StreamMode};

use anyhow::Result;
use std::fmt;

/// Which provider family produced an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineCategory {
    /// Line-oriented tokenizer wrapped through [`StreamLanguage::define`]
    Stream,
    /// Parser-backed tree-sitter grammar
    Grammar,
}

impl EngineCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineCategory::Stream => "stream",
            EngineCategory::Grammar => "grammar",
        }
    }
}

impl fmt::Display for EngineCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a highlighted region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Atom,
    Builtin,
    Comment,
    String,
    Number,
    Operator,
    Tag,
    Attribute,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Atom => "atom",
            TokenKind::Builtin => "builtin",
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::Tag => "tag",
            TokenKind::Attribute => "attribute",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A highlighted byte range of the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub kind: TokenKind,
}

impl Span {
    pub fn new(start: usize, end: usize, kind: TokenKind) -> Self {
        Self { start, end, kind }
    }

    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// Shared surface of every engine the registry hands out
pub trait Highlight {
    /// Tokenize `source` into sorted, non-overlapping spans.
    ///
    /// Text not covered by any span is plain.
    fn highlight(&self, source: &str) -> Result<Vec<Span>>;
}

/// Opaque engine returned by [`crate::LanguageRegistry::resolve`]
#[derive(Debug, Clone)]
pub enum EngineHandle {
    Stream(StreamLanguage),
    Grammar(GrammarLanguage),
}

impl EngineHandle {
    pub fn category(&self) -> EngineCategory {
        match self {
            EngineHandle::Stream(_) => EngineCategory::Stream,
            EngineHandle::Grammar(_) => EngineCategory::Grammar,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            EngineHandle::Stream(language) => language.name(),
            EngineHandle::Grammar(language) => language.name(),
        }
    }
}

impl Highlight for EngineHandle {
    fn highlight(&self, source: &str) -> Result<Vec<Span>> {
        match self {
            EngineHandle::Stream(language) => language.highlight(source),
            EngineHandle::Grammar(language) => language.highlight(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names() {
        assert_eq!(EngineCategory::Stream.to_string(), "stream");
        assert_eq!(EngineCategory::Grammar.to_string(), "grammar");
    }

    #[test]
    fn test_span_text() {
        let source = "let x = 1;";
        let span = Span::new(0, 3, TokenKind::Keyword);
        assert_eq!(span.text(source), "let");
        assert_eq!(span.kind.as_str(), "keyword");
    }
}
