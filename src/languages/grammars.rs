use tree_sitter::Language;

/// Initializer for a statically linked grammar
pub type GrammarFn = fn() -> Language;

/// Base C constructs the C++ highlights query leaves to the C grammar's own query.
const CPP_BASE_QUERY: &str = r##"
(comment) @comment
[(string_literal) (char_literal) (system_lib_string) (raw_string_literal)] @string
(number_literal) @number
[(true) (false) (null)] @constant.builtin
(primitive_type) @type.builtin
[
  "if" "else" "for" "while" "do" "return" "break" "continue" "switch" "case"
  "default" "struct" "enum" "union" "typedef" "static" "const" "sizeof" "goto"
  "extern" "inline" "volatile"
] @keyword
["#include" "#define" "#if" "#ifdef" "#ifndef" "#else" "#endif"] @keyword
"##;

/// Statically linked grammar with the highlights queries it ships
#[derive(Clone, Copy)]
pub struct BuiltinGrammar {
    pub identifier: &'static str,
    pub name: &'static str,
    pub init: GrammarFn,
    /// Query sources, joined in order
    pub highlights: &'static [&'static str],
}

const fn grammar(
    identifier: &'static str,
    name: &'static str,
    init: GrammarFn,
    highlights: &'static [&'static str],
) -> BuiltinGrammar {
    BuiltinGrammar {
        identifier,
        name,
        init,
        highlights,
    }
}

fn php() -> Language {
    tree_sitter_php::LANGUAGE_PHP.into()
}

fn html() -> Language {
    tree_sitter_html::LANGUAGE.into()
}

fn rust() -> Language {
    tree_sitter_rust::LANGUAGE.into()
}

fn javascript() -> Language {
    tree_sitter_javascript::LANGUAGE.into()
}

fn java() -> Language {
    tree_sitter_java::LANGUAGE.into()
}

fn json() -> Language {
    tree_sitter_json::LANGUAGE.into()
}

fn xml() -> Language {
    tree_sitter_xml::LANGUAGE_XML.into()
}

fn cpp() -> Language {
    tree_sitter_cpp::LANGUAGE.into()
}

fn css() -> Language {
    tree_sitter_css::LANGUAGE.into()
}

fn markdown() -> Language {
    tree_sitter_md::LANGUAGE.into()
}

fn python() -> Language {
    tree_sitter_python::LANGUAGE.into()
}

/// Builtin grammar engines keyed by catalog identifier.
pub const BUILTIN_GRAMMARS: &[BuiltinGrammar] = &[
    grammar("php", "php", php, &[tree_sitter_php::HIGHLIGHTS_QUERY]),
    grammar("html", "html", html, &[tree_sitter_html::HIGHLIGHTS_QUERY]),
    grammar("rust", "rust", rust, &[tree_sitter_rust::HIGHLIGHTS_QUERY]),
    grammar(
        "javascript",
        "javascript",
        javascript,
        &[tree_sitter_javascript::HIGHLIGHT_QUERY],
    ),
    grammar("java", "java", java, &[tree_sitter_java::HIGHLIGHTS_QUERY]),
    grammar("json", "json", json, &[tree_sitter_json::HIGHLIGHTS_QUERY]),
    grammar("xml", "xml", xml, &[tree_sitter_xml::XML_HIGHLIGHT_QUERY]),
    grammar(
        "c++",
        "cpp",
        cpp,
        &[CPP_BASE_QUERY, tree_sitter_cpp::HIGHLIGHT_QUERY],
    ),
    grammar("css/scss", "css", css, &[tree_sitter_css::HIGHLIGHTS_QUERY]),
    grammar(
        "markdown",
        "markdown",
        markdown,
        &[tree_sitter_md::HIGHLIGHT_QUERY_BLOCK],
    ),
    grammar("python", "python", python, &[tree_sitter_python::HIGHLIGHTS_QUERY]),
    // ECMAScript shares the JavaScript grammar.
    grammar(
        "ecma",
        "javascript",
        javascript,
        &[tree_sitter_javascript::HIGHLIGHT_QUERY],
    ),
];

/// Look up a builtin grammar by catalog identifier.
pub fn builtin_grammar(identifier: &str) -> Option<&'static BuiltinGrammar> {
    BUILTIN_GRAMMARS
        .iter()
        .find(|entry| entry.identifier == identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Query;

    #[test]
    fn test_all_builtin_grammars_initialize() {
        for entry in BUILTIN_GRAMMARS {
            let language = (entry.init)();
            assert!(
                language.node_kind_count() > 0,
                "Grammar for '{}' ({}) has no node kinds",
                entry.identifier,
                entry.name
            );
        }
    }

    #[test]
    fn test_all_highlight_queries_compile() {
        for entry in BUILTIN_GRAMMARS {
            let source = entry.highlights.join("\n");
            let query = Query::new(&(entry.init)(), &source);
            assert!(
                query.is_ok(),
                "Highlights query for '{}' failed: {:?}",
                entry.identifier,
                query.err()
            );
        }
    }

    #[test]
    fn test_ecma_uses_javascript_grammar() {
        let ecma = builtin_grammar("ecma").unwrap();
        assert_eq!(ecma.name, "javascript");

        let js = builtin_grammar("javascript").unwrap();
        assert_eq!((ecma.init)().node_kind_count(), (js.init)().node_kind_count());
        assert_eq!(ecma.highlights, js.highlights);
    }

    #[test]
    fn test_unknown_builtin_grammar() {
        assert!(builtin_grammar("cobol").is_none());
        assert!(builtin_grammar("Python").is_none());
    }
}
