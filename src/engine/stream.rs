use super::{Highlight, Span, TokenKind};
use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;

const DEFAULT_IDENTIFIER: &str = r"[A-Za-z_][A-Za-z0-9_]*";
const NUMBER: &str =
    r"^(?:0[xX][0-9a-fA-F_]+|0[bB][01_]+|\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?)";
const DEFAULT_OPERATORS: &str = "+-*/%=<>!&|^~?:";

/// Declarative definition of a line-oriented tokenizer
///
/// Modes are plain data: comment markers, string delimiters and word lists.
/// The matchers they need are compiled on first use and cached on the mode.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StreamMode {
    pub name: String,
    pub line_comment: Vec<String>,
    pub block_comment: Vec<(String, String)>,
    /// String delimiters. Triple delimiters and backticks may span lines.
    pub strings: Vec<String>,
    /// Delimiters whose contents ignore `escape`, like Go's backtick strings
    pub raw_strings: Vec<String>,
    pub escape: Option<char>,
    pub keywords: Vec<String>,
    pub atoms: Vec<String>,
    pub builtins: Vec<String>,
    pub case_insensitive: bool,
    /// Unanchored regex for a word; defaults to C-style identifiers
    pub identifier: Option<String>,
    pub operators: Option<String>,
    #[serde(skip)]
    compiled: OnceCell<CompiledMode>,
}

impl Default for StreamMode {
    fn default() -> Self {
        Self {
            name: String::new(),
            line_comment: Vec::new(),
            block_comment: Vec::new(),
            strings: Vec::new(),
            raw_strings: Vec::new(),
            escape: Some('\\'),
            keywords: Vec::new(),
            atoms: Vec::new(),
            builtins: Vec::new(),
            case_insensitive: false,
            identifier: None,
            operators: None,
            compiled: OnceCell::new(),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|&s| s.to_string()).collect()
}

impl StreamMode {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn line_comment(mut self, markers: &[&str]) -> Self {
        self.line_comment = owned(markers);
        self
    }

    pub fn block_comment(mut self, open: &str, close: &str) -> Self {
        self.block_comment.push((open.to_string(), close.to_string()));
        self
    }

    pub fn strings(mut self, delimiters: &[&str]) -> Self {
        self.strings = owned(delimiters);
        self
    }

    pub fn raw_strings(mut self, delimiters: &[&str]) -> Self {
        self.raw_strings = owned(delimiters);
        self
    }

    pub fn escape(mut self, escape: Option<char>) -> Self {
        self.escape = escape;
        self
    }

    pub fn keywords(mut self, words: &[&str]) -> Self {
        self.keywords = owned(words);
        self
    }

    pub fn atoms(mut self, words: &[&str]) -> Self {
        self.atoms = owned(words);
        self
    }

    pub fn builtins(mut self, words: &[&str]) -> Self {
        self.builtins = owned(words);
        self
    }

    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    pub fn identifier(mut self, pattern: &str) -> Self {
        self.identifier = Some(pattern.to_string());
        self
    }

    pub fn operators(mut self, chars: &str) -> Self {
        self.operators = Some(chars.to_string());
        self
    }

    /// Rename a mode, discarding any cached matchers.
    pub fn renamed(&self, name: &str) -> Self {
        Self {
            name: name.to_string(),
            compiled: OnceCell::new(),
            ..self.clone()
        }
    }

    /// Check that the mode compiles, caching the result.
    pub fn validate(&self) -> Result<()> {
        self.compiled().map(|_| ())
    }

    fn compiled(&self) -> Result<&CompiledMode> {
        self.compiled
            .get_or_try_init(|| CompiledMode::new(self))
            .with_context(|| format!("Failed to compile stream mode '{}'", self.name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    Normal,
    BlockComment(usize),
    String(usize),
}

#[derive(Debug, Clone)]
struct CompiledMode {
    identifier: Regex,
    number: Regex,
    keywords: HashSet<String>,
    atoms: HashSet<String>,
    builtins: HashSet<String>,
    line_comment: Vec<String>,
    block_comment: Vec<(String, String)>,
    /// Delimiter and whether it is raw
    strings: Vec<(String, bool)>,
    operators: Vec<char>,
    escape: Option<char>,
    case_insensitive: bool,
}

impl CompiledMode {
    fn new(mode: &StreamMode) -> Result<Self> {
        let pattern = mode.identifier.as_deref().unwrap_or(DEFAULT_IDENTIFIER);
        let identifier = Regex::new(&format!("^(?:{pattern})"))
            .with_context(|| format!("Invalid identifier pattern: {pattern}"))?;
        let number = Regex::new(NUMBER).context("Invalid number pattern")?;

        let words = |list: &[String]| -> HashSet<String> {
            list.iter()
                .map(|w| {
                    if mode.case_insensitive {
                        w.to_lowercase()
                    } else {
                        w.clone()
                    }
                })
                .collect()
        };

        // Longest markers first so `"""` wins over `"`.
        let mut line_comment = mode.line_comment.clone();
        line_comment.retain(|m| !m.is_empty());
        line_comment.sort_by_key(|m| std::cmp::Reverse(m.len()));

        let mut block_comment = mode.block_comment.clone();
        block_comment.retain(|(open, close)| !open.is_empty() && !close.is_empty());
        block_comment.sort_by_key(|(open, _)| std::cmp::Reverse(open.len()));

        let mut strings: Vec<(String, bool)> = mode
            .strings
            .iter()
            .map(|d| (d.clone(), mode.raw_strings.contains(d)))
            .collect();
        for raw in &mode.raw_strings {
            if !mode.strings.contains(raw) {
                strings.push((raw.clone(), true));
            }
        }
        strings.retain(|(d, _)| !d.is_empty());
        strings.sort_by_key(|(d, _)| std::cmp::Reverse(d.len()));

        Ok(Self {
            identifier,
            number,
            keywords: words(&mode.keywords),
            atoms: words(&mode.atoms),
            builtins: words(&mode.builtins),
            line_comment,
            block_comment,
            strings,
            operators: mode
                .operators
                .as_deref()
                .unwrap_or(DEFAULT_OPERATORS)
                .chars()
                .collect(),
            escape: mode.escape,
            case_insensitive: mode.case_insensitive,
        })
    }

    fn classify(&self, word: &str) -> Option<TokenKind> {
        let lowered;
        let word = if self.case_insensitive {
            lowered = word.to_lowercase();
            lowered.as_str()
        } else {
            word
        };

        if self.keywords.contains(word) {
            Some(TokenKind::Keyword)
        } else if self.atoms.contains(word) {
            Some(TokenKind::Atom)
        } else if self.builtins.contains(word) {
            Some(TokenKind::Builtin)
        } else {
            None
        }
    }

    /// Byte offset just past the closing `delim`, searching from `from`.
    fn string_end(&self, line: &str, from: usize, delim: &str, raw: bool) -> Option<usize> {
        let escape = if raw { None } else { self.escape };
        let mut chars = line[from..].char_indices();
        while let Some((i, ch)) = chars.next() {
            if Some(ch) == escape {
                chars.next();
                continue;
            }
            if line[from + i..].starts_with(delim) {
                return Some(from + i + delim.len());
            }
        }
        None
    }

    fn tokenize_line(
        &self,
        line: &str,
        base: usize,
        mut state: LineState,
        spans: &mut Vec<Span>,
    ) -> LineState {
        let mut push = |start: usize, end: usize, kind: TokenKind| {
            if end > start {
                spans.push(Span::new(base + start, base + end, kind));
            }
        };

        let mut pos = 0;
        while pos < line.len() {
            match state {
                LineState::BlockComment(i) => {
                    let close = self.block_comment[i].1.as_str();
                    match line[pos..].find(close) {
                        Some(found) => {
                            let end = pos + found + close.len();
                            push(pos, end, TokenKind::Comment);
                            pos = end;
                            state = LineState::Normal;
                        }
                        None => {
                            push(pos, line.len(), TokenKind::Comment);
                            return state;
                        }
                    }
                    continue;
                }
                LineState::String(i) => {
                    let (delim, raw) = &self.strings[i];
                    match self.string_end(line, pos, delim, *raw) {
                        Some(end) => {
                            push(pos, end, TokenKind::String);
                            pos = end;
                            state = LineState::Normal;
                        }
                        None => {
                            push(pos, line.len(), TokenKind::String);
                            return state;
                        }
                    }
                    continue;
                }
                LineState::Normal => {}
            }

            let rest = &line[pos..];
            let Some(ch) = rest.chars().next() else {
                break;
            };

            if ch.is_whitespace() {
                pos += ch.len_utf8();
                continue;
            }

            if let Some(i) = self
                .block_comment
                .iter()
                .position(|(open, _)| rest.starts_with(open.as_str()))
            {
                let (open, close) = &self.block_comment[i];
                let body = pos + open.len();
                match line[body..].find(close.as_str()) {
                    Some(found) => {
                        let end = body + found + close.len();
                        push(pos, end, TokenKind::Comment);
                        pos = end;
                    }
                    None => {
                        push(pos, line.len(), TokenKind::Comment);
                        return LineState::BlockComment(i);
                    }
                }
                continue;
            }

            if self
                .line_comment
                .iter()
                .any(|marker| rest.starts_with(marker.as_str()))
            {
                push(pos, line.len(), TokenKind::Comment);
                return LineState::Normal;
            }

            if let Some(i) = self
                .strings
                .iter()
                .position(|(delim, _)| rest.starts_with(delim.as_str()))
            {
                let (delim, raw) = &self.strings[i];
                match self.string_end(line, pos + delim.len(), delim, *raw) {
                    Some(end) => {
                        push(pos, end, TokenKind::String);
                        pos = end;
                    }
                    None => {
                        push(pos, line.len(), TokenKind::String);
                        return if spans_lines(delim) {
                            LineState::String(i)
                        } else {
                            LineState::Normal
                        };
                    }
                }
                continue;
            }

            if ch.is_ascii_digit() {
                if let Some(m) = self.number.find(rest) {
                    push(pos, pos + m.end(), TokenKind::Number);
                    pos += m.end().max(1);
                    continue;
                }
            }

            if let Some(m) = self.identifier.find(rest).filter(|m| m.end() > 0) {
                if let Some(kind) = self.classify(m.as_str()) {
                    push(pos, pos + m.end(), kind);
                }
                pos += m.end();
                continue;
            }

            if self.operators.contains(&ch) {
                let run: usize = rest
                    .chars()
                    .take_while(|c| self.operators.contains(c))
                    .map(char::len_utf8)
                    .sum();
                push(pos, pos + run, TokenKind::Operator);
                pos += run;
                continue;
            }

            pos += ch.len_utf8();
        }

        state
    }
}

fn spans_lines(delim: &str) -> bool {
    delim == "`" || delim.chars().count() >= 3
}

/// Uniform adapter over a [`StreamMode`]
///
/// Every stream engine the registry hands out has this type, whichever mode
/// backs it. Cloning is cheap and clones share the compiled matchers.
#[derive(Debug, Clone)]
pub struct StreamLanguage {
    mode: Arc<StreamMode>,
}

impl StreamLanguage {
    pub fn define(mode: Arc<StreamMode>) -> Self {
        Self { mode }
    }

    pub fn name(&self) -> &str {
        &self.mode.name
    }

    pub fn mode(&self) -> &StreamMode {
        &self.mode
    }
}

impl Highlight for StreamLanguage {
    fn highlight(&self, source: &str) -> Result<Vec<Span>> {
        let compiled = self.mode.compiled()?;

        let mut spans = Vec::new();
        let mut state = LineState::Normal;
        let mut offset = 0;
        for line in source.split_inclusive('\n') {
            let text = line.trim_end_matches(['\n', '\r']);
            state = compiled.tokenize_line(text, offset, state, &mut spans);
            offset += line.len();
        }

        Ok(spans)
    }
}
