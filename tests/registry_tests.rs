use langmap::{Config, EngineCategory, EngineHandle, Highlight, LanguageRegistry, TokenKind};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const UNRESOLVED: &[&str] = &["pgp", "django", "maths", "sass", "latex", "text", "vue"];

/// Every catalog entry resolves, except the documented placeholders
#[test]
fn test_catalog_has_no_dead_links() {
    let registry = LanguageRegistry::new();

    for id in registry.supported_languages() {
        let handle = registry.resolve(id);
        if UNRESOLVED.contains(&id.as_str()) {
            assert!(handle.is_none(), "'{id}' should stay unresolved");
        } else {
            assert!(handle.is_some(), "'{id}' is catalogued but does not resolve");
        }
    }
}

#[test]
fn test_unknown_identifiers_resolve_to_none() {
    let registry = LanguageRegistry::new();

    for id in ["not-a-real-language", "", " ", "Python", "RUST", "c ", "css", "scss", "\u{0}"] {
        assert!(registry.resolve(id).is_none(), "'{id:?}' should not resolve");
        assert!(!registry.is_supported(id));
    }
}

#[test]
fn test_documented_examples() {
    let registry = LanguageRegistry::new();

    assert!(matches!(registry.resolve("python"), Some(EngineHandle::Grammar(_))));
    assert!(matches!(registry.resolve("cobol"), Some(EngineHandle::Stream(_))));
    assert!(registry.resolve("not-a-real-language").is_none());

    let ecma = registry.resolve("ecma").unwrap();
    assert_eq!(ecma.category(), EngineCategory::Grammar);
    assert_eq!(ecma.name(), "javascript");
}

#[test]
fn test_resolve_is_deterministic() {
    let registry = LanguageRegistry::new();

    for id in registry.supported_languages() {
        let first = registry.resolve(id).map(|h| h.category());
        let second = registry.resolve(id).map(|h| h.category());
        assert_eq!(first, second, "category changed between calls for '{id}'");
    }
}

#[test]
fn test_catalog_is_stable() {
    let registry = LanguageRegistry::new();
    let first = registry.supported_languages().to_vec();
    let second = registry.supported_languages().to_vec();
    assert_eq!(first, second);

    let other = LanguageRegistry::new();
    assert_eq!(first, other.supported_languages());
}

#[test]
fn test_catalog_length_matches_tables() {
    let registry = LanguageRegistry::new();
    let stream = registry.stream_languages().count();
    let grammar = registry.grammar_languages().count();

    assert_eq!(
        registry.supported_languages().len(),
        stream + grammar + registry.unresolved_languages().len()
    );
}

#[test]
fn test_concurrent_resolution() {
    let registry = LanguageRegistry::new();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for id in registry.supported_languages() {
                    if let Some(handle) = registry.resolve(id) {
                        handle.highlight("x = 1 # note\n").unwrap();
                    }
                }
            });
        }
    });
}

#[test]
fn test_stream_precedence_when_both_tables_match() {
    let config = Config::parse(
        r#"
[languages.python]
engine = "stream"
mode = "shell"

[languages.cobol]
engine = "grammar"
builtin = "rust"
"#,
    )
    .unwrap();
    let registry = LanguageRegistry::from_config(&config).unwrap();

    assert_eq!(registry.category("python"), Some(EngineCategory::Stream));
    assert_eq!(
        registry.resolve("python").map(|h| h.category()),
        Some(EngineCategory::Stream)
    );
    assert_eq!(
        registry.resolve("cobol").map(|h| h.category()),
        Some(EngineCategory::Stream)
    );
    assert_eq!(registry.resolve("cobol").unwrap().name(), "cobol");
}

#[test]
fn test_config_appends_to_catalog() {
    let config = Config::parse(
        r##"
[languages.nim]
engine = "stream"

[languages.nim.definition]
line_comment = ["#"]
keywords = ["proc"]

[languages.ini]
engine = "stream"
mode = "properties"
"##,
    )
    .unwrap();
    let registry = LanguageRegistry::from_config(&config).unwrap();
    let catalog = registry.supported_languages();

    assert_eq!(&catalog[catalog.len() - 2..], &["ini", "nim"]);

    let nim = registry.resolve("nim").unwrap();
    assert_eq!(nim.name(), "nim");
    let source = "proc main() # entry";
    let spans = nim.highlight(source).unwrap();
    assert_eq!(spans[0].text(source), "proc");
    assert_eq!(spans[0].kind, TokenKind::Keyword);
    assert_eq!(spans[1].kind, TokenKind::Comment);

    assert_eq!(registry.resolve("ini").unwrap().name(), "properties");
}

#[test]
fn test_config_gives_placeholder_an_engine() {
    let config = Config::parse(
        r#"
[languages.vue]
engine = "grammar"
builtin = "html"
"#,
    )
    .unwrap();
    let registry = LanguageRegistry::from_config(&config).unwrap();

    assert_eq!(registry.supported_languages().len(), 60);
    assert!(!registry.unresolved_languages().contains(&"vue"));
    assert_eq!(registry.resolve("vue").unwrap().name(), "html");
}

#[test]
fn test_hiding_unresolved_entries() {
    let config = Config::parse("[global]\nlist_unresolved = false\n").unwrap();
    let registry = LanguageRegistry::from_config(&config).unwrap();

    assert_eq!(registry.supported_languages().len(), 60 - UNRESOLVED.len());
    assert!(registry.unresolved_languages().is_empty());
    for id in registry.supported_languages() {
        assert!(registry.resolve(id).is_some());
    }
}

#[test]
fn test_invalid_inline_mode_is_reported() {
    let config = Config::parse(
        r#"
[languages.broken]
engine = "stream"

[languages.broken.definition]
identifier = "[a-"
"#,
    )
    .unwrap();

    let err = match LanguageRegistry::from_config(&config) {
        Ok(_) => panic!("invalid identifier pattern should fail"),
        Err(err) => format!("{err:#}"),
    };
    assert!(err.contains("broken"));
}

#[test]
fn test_missing_grammar_library_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("langmap.toml");
    fs::write(
        &config_path,
        r#"
[languages.zig]
engine = "grammar"
library = "/nonexistent/libtree-sitter-zig.so"
"#,
    )
    .unwrap();

    let config = Config::from_file(&config_path).unwrap();
    let err = match LanguageRegistry::from_config(&config) {
        Ok(_) => panic!("missing library should fail"),
        Err(err) => format!("{err:#}"),
    };
    assert!(err.contains("zig"));
    assert!(err.contains("Library path does not exist"));
}

#[test]
fn test_grammar_engines_highlight() {
    let registry = LanguageRegistry::new();

    let python = registry.resolve("python").unwrap();
    let source = "def f():\n    return None  # done\n";
    let spans = python.highlight(source).unwrap();
    let found: Vec<_> = spans.iter().map(|s| (s.text(source), s.kind)).collect();

    assert!(found.contains(&("def", TokenKind::Keyword)));
    assert!(found.contains(&("return", TokenKind::Keyword)));
    assert!(found.contains(&("# done", TokenKind::Comment)));

    let json = registry.resolve("json").unwrap();
    let source = r#"{"a": [1, true, null]}"#;
    let spans = json.highlight(source).unwrap();
    let found: Vec<_> = spans.iter().map(|s| (s.text(source), s.kind)).collect();

    assert!(found.contains(&("\"a\"", TokenKind::String)));
    assert!(found.contains(&("1", TokenKind::Number)));
    assert!(found.contains(&("true", TokenKind::Atom)));
    assert!(found.contains(&("null", TokenKind::Atom)));
}

#[test]
fn test_builtin_grammars_highlight_through_queries() {
    let registry = LanguageRegistry::new();

    for id in registry.grammar_languages() {
        let Some(EngineHandle::Grammar(grammar)) = registry.resolve(id) else {
            panic!("'{id}' should resolve to a grammar engine");
        };
        assert!(grammar.has_highlights(), "'{id}' has no highlights query");
        grammar.highlight("x").unwrap();
    }

    let cpp = registry.resolve("c++").unwrap();
    let source = "// c\nint main() { if (x) return 1; }";
    let spans = cpp.highlight(source).unwrap();
    let found: Vec<_> = spans.iter().map(|s| (s.text(source), s.kind)).collect();

    assert!(found.contains(&("// c", TokenKind::Comment)));
    assert!(found.contains(&("int", TokenKind::Builtin)));
    assert!(found.contains(&("if", TokenKind::Keyword)));
    assert!(found.contains(&("return", TokenKind::Keyword)));
    assert!(found.contains(&("1", TokenKind::Number)));
}
