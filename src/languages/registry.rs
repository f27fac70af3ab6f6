use crate::config::{Config, LanguageEntry};
use crate::engine::grammar::load_library;
use crate::engine::{
    EngineCategory, EngineHandle, GrammarLanguage, HighlightQuery, StreamLanguage, StreamMode,
};
use crate::languages::catalog::CATALOG;
use crate::languages::grammars::{self, BuiltinGrammar, GrammarFn};
use crate::languages::modes;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::sync::Arc;
use tracing::{debug, warn};
use tree_sitter::Language;

#[derive(Clone)]
enum GrammarInit {
    Builtin(GrammarFn),
    Loaded(Language),
}

#[derive(Clone)]
struct GrammarProvider {
    name: String,
    init: GrammarInit,
    highlights: Option<Arc<HighlightQuery>>,
}

impl GrammarProvider {
    fn builtin(grammar: &BuiltinGrammar) -> Self {
        Self {
            name: grammar.name.to_string(),
            init: GrammarInit::Builtin(grammar.init),
            highlights: Some(Arc::new(HighlightQuery::new(grammar.highlights))),
        }
    }

    fn initialize(&self) -> GrammarLanguage {
        let language = match &self.init {
            GrammarInit::Builtin(init) => init(),
            GrammarInit::Loaded(language) => language.clone(),
        };
        let grammar = GrammarLanguage::new(&self.name, language);
        match &self.highlights {
            Some(query) => grammar.with_highlights(Arc::clone(query)),
            None => grammar,
        }
    }
}

/// Immutable map from language identifiers to highlighting engines
///
/// Build it once and share it by reference; nothing mutates it afterwards.
pub struct LanguageRegistry {
    catalog: Vec<String>,
    stream: HashMap<String, Arc<StreamMode>>,
    grammar: HashMap<String, GrammarProvider>,
}

impl LanguageRegistry {
    /// Registry with the builtin catalog and engines only.
    pub fn new() -> Self {
        let registry = Self::builtin();
        registry.log_summary();
        registry
    }

    /// Builtin registry extended with the languages declared in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut registry = Self::builtin();

        for (identifier, entry) in &config.languages {
            registry
                .register_configured(identifier, entry)
                .with_context(|| format!("Failed to register language '{identifier}'"))?;
        }

        if !config.global.list_unresolved {
            let Self {
                catalog,
                stream,
                grammar,
            } = &mut registry;
            catalog.retain(|id| stream.contains_key(id) || grammar.contains_key(id));
        }

        registry.log_summary();
        Ok(registry)
    }

    fn builtin() -> Self {
        let stream = modes::builtin_modes()
            .map(|(id, mode)| (id.to_string(), Arc::new(mode)))
            .collect();

        let grammar = grammars::BUILTIN_GRAMMARS
            .iter()
            .map(|entry| (entry.identifier.to_string(), GrammarProvider::builtin(entry)))
            .collect();

        Self {
            catalog: CATALOG.iter().map(|id| id.to_string()).collect(),
            stream,
            grammar,
        }
    }

    fn register_configured(&mut self, identifier: &str, entry: &LanguageEntry) -> Result<()> {
        match entry {
            LanguageEntry::Stream { mode, definition } => {
                let stream_mode = match (mode, definition) {
                    (Some(name), None) => modes::builtin_mode(name)
                        .with_context(|| format!("Unknown builtin stream mode '{name}'"))?,
                    (None, Some(definition)) if definition.name.is_empty() => {
                        definition.renamed(identifier)
                    }
                    (None, Some(definition)) => definition.clone(),
                    _ => anyhow::bail!("Stream language needs exactly one of 'mode' or 'definition'"),
                };
                stream_mode.validate()?;

                if self.grammar.contains_key(identifier) {
                    warn!(
                        language = identifier,
                        "stream engine shadows a grammar engine with the same identifier"
                    );
                }
                if self.stream.contains_key(identifier) {
                    warn!(language = identifier, "replacing existing stream engine");
                }
                self.stream
                    .insert(identifier.to_string(), Arc::new(stream_mode));
            }
            LanguageEntry::Grammar {
                builtin,
                library,
                symbol,
                highlights,
            } => {
                let provider = match (builtin, library) {
                    (Some(name), None) => {
                        let grammar = grammars::builtin_grammar(name)
                            .with_context(|| format!("Unknown builtin grammar '{name}'"))?;
                        GrammarProvider::builtin(grammar)
                    }
                    (None, Some(path)) => {
                        let language = load_library(identifier, path, symbol.as_deref())
                            .with_context(|| {
                                format!("Failed to load grammar library {}", path.display())
                            })?;
                        let highlights = match highlights {
                            Some(query_path) => {
                                let source = fs::read_to_string(query_path).with_context(|| {
                                    format!(
                                        "Failed to read highlights query {}",
                                        query_path.display()
                                    )
                                })?;
                                Some(Arc::new(HighlightQuery::new(&[source.as_str()])))
                            }
                            None => None,
                        };
                        GrammarProvider {
                            name: identifier.to_string(),
                            init: GrammarInit::Loaded(language),
                            highlights,
                        }
                    }
                    _ => anyhow::bail!(
                        "Grammar language needs exactly one of 'builtin' or 'library'"
                    ),
                };

                if self.stream.contains_key(identifier) {
                    warn!(
                        language = identifier,
                        "grammar engine is shadowed by a stream engine with the same identifier"
                    );
                }
                if self.grammar.contains_key(identifier) {
                    warn!(language = identifier, "replacing existing grammar engine");
                }
                self.grammar.insert(identifier.to_string(), provider);
            }
        }

        if !self.catalog.iter().any(|id| id == identifier) {
            self.catalog.push(identifier.to_string());
        }
        Ok(())
    }

    fn log_summary(&self) {
        debug!(
            catalog = self.catalog.len(),
            stream = self.stream.len(),
            grammar = self.grammar.len(),
            unresolved = self.unresolved_languages().len(),
            "language registry ready"
        );
    }

    /// Catalog identifiers in display order.
    pub fn supported_languages(&self) -> &[String] {
        &self.catalog
    }

    /// Resolve `identifier` to an engine.
    ///
    /// Stream engines are checked before grammar engines. Unknown or
    /// unresolvable identifiers yield `None`.
    pub fn resolve(&self, identifier: &str) -> Option<EngineHandle> {
        if let Some(mode) = self.stream.get(identifier) {
            return Some(EngineHandle::Stream(StreamLanguage::define(Arc::clone(mode))));
        }

        self.grammar
            .get(identifier)
            .map(|provider| EngineHandle::Grammar(provider.initialize()))
    }

    /// Category `resolve` would produce, without building an engine.
    pub fn category(&self, identifier: &str) -> Option<EngineCategory> {
        if self.stream.contains_key(identifier) {
            Some(EngineCategory::Stream)
        } else if self.grammar.contains_key(identifier) {
            Some(EngineCategory::Grammar)
        } else {
            None
        }
    }

    pub fn is_supported(&self, identifier: &str) -> bool {
        self.category(identifier).is_some()
    }

    /// Catalog entries that have no engine.
    pub fn unresolved_languages(&self) -> Vec<&str> {
        self.catalog
            .iter()
            .filter(|id| !self.is_supported(id))
            .map(String::as_str)
            .collect()
    }

    /// Catalog entries that resolve to stream engines, in catalog order.
    pub fn stream_languages(&self) -> impl Iterator<Item = &str> {
        self.languages_in(EngineCategory::Stream)
    }

    /// Catalog entries that resolve to grammar engines, in catalog order.
    pub fn grammar_languages(&self) -> impl Iterator<Item = &str> {
        self.languages_in(EngineCategory::Grammar)
    }

    fn languages_in(&self, category: EngineCategory) -> impl Iterator<Item = &str> {
        self.catalog
            .iter()
            .map(String::as_str)
            .filter(move |id| self.category(id) == Some(category))
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const UNRESOLVED: &[&str] = &["pgp", "django", "maths", "sass", "latex", "text", "vue"];

    #[test]
    fn test_registry_creation() {
        let registry = LanguageRegistry::new();
        assert_eq!(registry.supported_languages().len(), CATALOG.len());
        assert!(!registry.stream.is_empty());
        assert!(!registry.grammar.is_empty());
    }

    #[test]
    fn test_tables_are_disjoint() {
        let registry = LanguageRegistry::new();
        for id in registry.stream.keys() {
            assert!(!registry.grammar.contains_key(id), "'{id}' is in both tables");
        }
    }

    #[test]
    fn test_every_engine_is_catalogued() {
        let registry = LanguageRegistry::new();
        for id in registry.stream.keys().chain(registry.grammar.keys()) {
            assert!(
                registry.supported_languages().contains(id),
                "'{id}' has an engine but is not in the catalog"
            );
        }
    }

    #[test]
    fn test_catalog_length_accounts_for_unresolved() {
        let registry = LanguageRegistry::new();
        assert_eq!(
            registry.supported_languages().len(),
            registry.stream.len() + registry.grammar.len() + UNRESOLVED.len()
        );
    }

    #[test]
    fn test_unresolved_languages() {
        let registry = LanguageRegistry::new();
        assert_eq!(registry.unresolved_languages(), UNRESOLVED);
    }

    #[test]
    fn test_resolve_categories() {
        let registry = LanguageRegistry::new();

        assert_eq!(
            registry.resolve("python").map(|h| h.category()),
            Some(EngineCategory::Grammar)
        );
        assert_eq!(
            registry.resolve("cobol").map(|h| h.category()),
            Some(EngineCategory::Stream)
        );
        assert!(registry.resolve("not-a-real-language").is_none());
    }

    #[test]
    fn test_category_matches_resolve() {
        let registry = LanguageRegistry::new();
        for id in registry.supported_languages() {
            assert_eq!(
                registry.category(id),
                registry.resolve(id).map(|h| h.category()),
                "category and resolve disagree for '{id}'"
            );
        }
    }

    #[test]
    fn test_partitions_follow_catalog_order() {
        let registry = LanguageRegistry::new();
        let stream: Vec<_> = registry.stream_languages().collect();
        let grammar: Vec<_> = registry.grammar_languages().collect();

        assert_eq!(stream.len(), 41);
        assert_eq!(&stream[..4], &["apl", "asn", "cmake", "c"]);
        assert_eq!(
            grammar,
            vec![
                "c++", "java", "css/scss", "html", "javascript", "json", "ecma", "markdown",
                "php", "python", "rust", "xml",
            ]
        );
    }

    #[test]
    fn test_stream_handles_share_mode() {
        let registry = LanguageRegistry::new();
        let Some(EngineHandle::Stream(first)) = registry.resolve("go") else {
            panic!("go should be a stream engine");
        };
        let Some(EngineHandle::Stream(second)) = registry.resolve("go") else {
            panic!("go should be a stream engine");
        };
        assert!(std::ptr::eq(first.mode(), second.mode()));
    }

    #[test]
    fn test_registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LanguageRegistry>();
        assert_send_sync::<EngineHandle>();
    }
}
