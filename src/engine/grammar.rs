use super::{Highlight, Span, TokenKind};
use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use std::cmp::Reverse;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tree_sitter::{Language, Node, Parser, Query, QueryCursor, StreamingIterator, Tree};

/// Highlights query source, compiled against its grammar on first use
pub struct HighlightQuery {
    source: String,
    compiled: OnceCell<CompiledQuery>,
}

struct CompiledQuery {
    query: Query,
    /// Token kind per capture index
    kinds: Vec<Option<TokenKind>>,
}

impl fmt::Debug for HighlightQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HighlightQuery")
            .field("len", &self.source.len())
            .field("compiled", &self.compiled.get().is_some())
            .finish()
    }
}

impl HighlightQuery {
    /// Join query sources in order.
    pub fn new(parts: &[&str]) -> Self {
        Self {
            source: parts.join("\n"),
            compiled: OnceCell::new(),
        }
    }

    fn compiled(&self, language: &Language, name: &str) -> Result<&CompiledQuery> {
        self.compiled.get_or_try_init(|| {
            let query = Query::new(language, &self.source)
                .with_context(|| format!("Invalid highlights query for '{name}'"))?;
            let kinds = query
                .capture_names()
                .iter()
                .map(|capture| capture_kind(capture))
                .collect();
            Ok(CompiledQuery { query, kinds })
        })
    }
}

/// A tree-sitter grammar ready for parsing
#[derive(Clone)]
pub struct GrammarLanguage {
    name: String,
    language: Language,
    highlights: Option<Arc<HighlightQuery>>,
}

impl fmt::Debug for GrammarLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrammarLanguage")
            .field("name", &self.name)
            .field("abi_version", &self.language.abi_version())
            .field("highlights", &self.highlights.is_some())
            .finish()
    }
}

impl GrammarLanguage {
    pub fn new(name: &str, language: Language) -> Self {
        Self {
            name: name.to_string(),
            language,
            highlights: None,
        }
    }

    /// Highlight through `query` instead of guessing from node kinds.
    pub fn with_highlights(mut self, query: Arc<HighlightQuery>) -> Self {
        self.highlights = Some(query);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn has_highlights(&self) -> bool {
        self.highlights.is_some()
    }

    pub fn parse(&self, source: &str) -> Result<Tree> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .with_context(|| format!("Failed to set parser language '{}'", self.name))?;

        parser
            .parse(source, None)
            .with_context(|| format!("Failed to parse source as '{}'", self.name))
    }
}

impl Highlight for GrammarLanguage {
    fn highlight(&self, source: &str) -> Result<Vec<Span>> {
        let tree = self.parse(source)?;

        let spans = match &self.highlights {
            Some(highlights) => {
                let compiled = highlights.compiled(&self.language, &self.name)?;
                query_spans(compiled, &tree, source)
            }
            None => {
                let mut spans = Vec::new();
                collect_spans(tree.root_node(), &mut spans);
                spans.sort_by_key(|span| span.start);
                spans
            }
        };
        Ok(spans)
    }
}

fn query_spans(compiled: &CompiledQuery, tree: &Tree, source: &str) -> Vec<Span> {
    let mut captured = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut captures = cursor.captures(&compiled.query, tree.root_node(), source.as_bytes());
    while let Some((query_match, index)) = captures.next() {
        let capture = &query_match.captures[*index];
        let Some(kind) = compiled.kinds[capture.index as usize] else {
            continue;
        };
        let node = capture.node;
        if node.end_byte() > node.start_byte() {
            captured.push(Span::new(node.start_byte(), node.end_byte(), kind));
        }
    }

    // Outermost capture wins where captures overlap.
    captured.sort_by_key(|span| (span.start, Reverse(span.end)));
    let mut spans: Vec<Span> = Vec::with_capacity(captured.len());
    for span in captured {
        if spans.last().is_none_or(|last| span.start >= last.end) {
            spans.push(span);
        }
    }
    spans
}

/// Map a highlights capture name like `constant.builtin` to a token kind.
fn capture_kind(name: &str) -> Option<TokenKind> {
    let mut parts = name.split('.');
    let head = parts.next().unwrap_or_default();
    let tail = parts.next();

    match (head, tail) {
        ("comment", _) => Some(TokenKind::Comment),
        ("string" | "escape", _) | ("text", Some("literal")) | ("markup", Some("raw")) => {
            Some(TokenKind::String)
        }
        ("number" | "float", _) => Some(TokenKind::Number),
        ("constant" | "boolean", _) => Some(TokenKind::Atom),
        ("keyword" | "import" | "charset" | "media" | "keyframes" | "supports", _) => {
            Some(TokenKind::Keyword)
        }
        ("variable" | "type" | "function" | "module", Some("builtin")) => Some(TokenKind::Builtin),
        ("tag", _) | ("text", Some("title")) | ("markup", Some("heading")) => Some(TokenKind::Tag),
        ("attribute" | "property", _) => Some(TokenKind::Attribute),
        ("operator", _) => Some(TokenKind::Operator),
        _ => None,
    }
}

/// Node-kind walk for grammars loaded without a highlights query
fn collect_spans(root: Node, spans: &mut Vec<Span>) {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        let kind = classify(&node);

        if let Some(kind) = kind {
            if node.end_byte() > node.start_byte() {
                spans.push(Span::new(node.start_byte(), node.end_byte(), kind));
            }
        }

        // Highlighted nodes are leaves as far as spans are concerned.
        if kind.is_none() && cursor.goto_first_child() {
            continue;
        }

        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

fn classify(node: &Node) -> Option<TokenKind> {
    let kind = node.kind();

    if kind.contains("comment") {
        return Some(TokenKind::Comment);
    }

    if node.is_named() {
        return match kind {
            "string" | "string_literal" | "raw_string_literal" | "char_literal"
            | "character_literal" | "template_string" | "encapsed_string"
            | "string_value" | "quoted_attribute_value" | "AttValue" | "fenced_code_block" => {
                Some(TokenKind::String)
            }
            "integer" | "float" | "number" | "integer_literal" | "float_literal"
            | "number_literal" | "decimal_integer_literal" | "decimal_floating_point_literal"
            | "hex_integer_literal" | "integer_value" | "float_value" => Some(TokenKind::Number),
            "true" | "false" | "null" | "none" | "boolean" | "boolean_literal" | "null_literal"
            | "nil" => Some(TokenKind::Atom),
            "tag_name" | "Name" | "atx_heading" | "setext_heading" => Some(TokenKind::Tag),
            "attribute_name" | "property_name" => Some(TokenKind::Attribute),
            "primitive_type" | "builtin_type" | "self" | "this" => Some(TokenKind::Builtin),
            _ => None,
        };
    }

    if node.child_count() == 0 && !kind.is_empty() {
        if kind.chars().all(|c| c.is_ascii_alphabetic() || c == '_')
            && kind.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        {
            return Some(TokenKind::Keyword);
        }
        if kind.chars().all(|c| "+-*/%=<>!&|^~?:".contains(c)) {
            return Some(TokenKind::Operator);
        }
    }

    None
}

/// Load a compiled tree-sitter grammar from a shared library.
///
/// Tries `symbol` when given, then `tree_sitter_<name>`.
pub fn load_library(name: &str, path: &Path, symbol: Option<&str>) -> Result<Language> {
    if !path.exists() {
        anyhow::bail!("Library path does not exist: {}", path.display());
    }

    use libloading::Library;

    let default_symbol = format!("tree_sitter_{}", name.replace(['-', '.', '+', '#', '/'], "_"));
    let candidates: Vec<&str> = symbol
        .into_iter()
        .chain(std::iter::once(default_symbol.as_str()))
        .collect();

    unsafe {
        let lib = Library::new(path)
            .with_context(|| format!("Failed to load library from {}", path.display()))?;

        for symbol_name in &candidates {
            if let Ok(func) = lib
                .get::<unsafe extern "C" fn() -> *const tree_sitter::ffi::TSLanguage>(
                    symbol_name.as_bytes(),
                )
            {
                let language = Language::from_raw(func());

                // The language borrows static data from the library.
                std::mem::forget(lib);

                return Ok(language);
            }
        }
    }

    anyhow::bail!(
        "No tree-sitter language function ({}) found in library {}",
        candidates.join(", "),
        path.display()
    )
}
