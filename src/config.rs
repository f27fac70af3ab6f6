use crate::engine::StreamMode;
use crate::languages::{grammars, modes};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File names searched for, nearest directory first
pub const CONFIG_FILE_NAMES: &[&str] = &[".langmaprc.toml", "langmap.toml"];

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Settings that apply to the whole registry
    #[serde(default)]
    pub global: GlobalConfig,

    /// Extra languages appended to the builtin catalog, keyed by identifier
    #[serde(default)]
    pub languages: BTreeMap<String, LanguageEntry>,
}

/// Global configuration settings
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalConfig {
    /// Keep catalog entries that have no engine
    #[serde(default = "default_true")]
    pub list_unresolved: bool,
}

/// Engine declaration for a configured language
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "engine", rename_all = "lowercase", deny_unknown_fields)]
pub enum LanguageEntry {
    /// Line-oriented engine: reuse a builtin `mode` or give a `definition`
    Stream {
        #[serde(default)]
        mode: Option<String>,
        #[serde(default)]
        definition: Option<StreamMode>,
    },
    /// Tree-sitter engine: reuse a `builtin` grammar or load a compiled `library`
    Grammar {
        #[serde(default)]
        builtin: Option<String>,
        #[serde(default)]
        library: Option<PathBuf>,
        /// Exported language function, defaults to `tree_sitter_<identifier>`
        #[serde(default)]
        symbol: Option<String>,
        /// Highlights query file for a `library` grammar
        #[serde(default)]
        highlights: Option<PathBuf>,
    },
}

fn default_true() -> bool {
    true
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            list_unresolved: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        Self::parse(&content)
            .with_context(|| format!("Invalid configuration in: {}", path.as_ref().display()))
    }

    /// Parse and validate configuration text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for (identifier, entry) in &self.languages {
            if identifier.is_empty() {
                anyhow::bail!("Language identifier must not be empty");
            }

            match entry {
                LanguageEntry::Stream { mode, definition } => match (mode, definition) {
                    (Some(_), Some(_)) | (None, None) => anyhow::bail!(
                        "Language '{identifier}' must set exactly one of 'mode' or 'definition'"
                    ),
                    (Some(name), None) if modes::builtin_mode(name).is_none() => {
                        anyhow::bail!(
                            "Language '{identifier}' refers to unknown stream mode '{name}'"
                        )
                    }
                    _ => {}
                },
                LanguageEntry::Grammar {
                    builtin,
                    library,
                    symbol,
                    highlights,
                } => match (builtin, library) {
                    (Some(_), Some(_)) | (None, None) => anyhow::bail!(
                        "Language '{identifier}' must set exactly one of 'builtin' or 'library'"
                    ),
                    (Some(name), None) if grammars::builtin_grammar(name).is_none() => {
                        anyhow::bail!(
                            "Language '{identifier}' refers to unknown builtin grammar '{name}'"
                        )
                    }
                    (Some(_), None) if symbol.is_some() => anyhow::bail!(
                        "Language '{identifier}' sets 'symbol' without 'library'"
                    ),
                    (Some(_), None) if highlights.is_some() => anyhow::bail!(
                        "Language '{identifier}' sets 'highlights' without 'library'"
                    ),
                    _ => {}
                },
            }
        }

        Ok(())
    }

    /// Nearest config file in `start` or one of its ancestors
    pub fn find_local(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(|dir| {
            CONFIG_FILE_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|candidate| candidate.is_file())
        })
    }

    /// Get the global configuration file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("langmap").join("config.toml"))
    }

    /// Load the nearest local config, falling back to the global one
    pub fn discover(start: &Path) -> Result<Option<(PathBuf, Config)>> {
        let path = Self::find_local(start)
            .or_else(|| Self::global_config_path().filter(|path| path.is_file()));

        match path {
            Some(path) => {
                let config = Self::from_file(&path)?;
                Ok(Some((path, config)))
            }
            None => Ok(None),
        }
    }

    /// Create a template configuration
    pub fn template() -> String {
        r##"# langmap configuration
#
# Languages declared here are appended to the builtin catalog.
# Stream engines win over grammar engines declared for the same identifier.

[global]
list_unresolved = true  # keep catalog entries that have no engine

# Reuse a builtin stream mode under a new name
[languages.ini]
engine = "stream"
mode = "properties"

# Reuse a builtin grammar, giving "vue" an engine
[languages.vue]
engine = "grammar"
builtin = "html"

# Declare a stream mode inline
[languages.nim]
engine = "stream"

[languages.nim.definition]
line_comment = ["#"]
block_comment = [["#[", "]#"]]
strings = ['"""', '"', "'"]
keywords = ["proc", "func", "let", "var", "const", "if", "elif", "else", "for", "while", "return"]
atoms = ["true", "false", "nil"]

# Load a compiled tree-sitter grammar
# [languages.zig]
# engine = "grammar"
# library = "/usr/local/lib/libtree-sitter-zig.so"
# symbol = "tree_sitter_zig"
# highlights = "/usr/local/share/tree-sitter-zig/queries/highlights.scm"
"##
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.global.list_unresolved);
        assert!(config.languages.is_empty());
    }

    #[test]
    fn test_empty_file_parses() {
        let config = Config::parse("").unwrap();
        assert!(config.global.list_unresolved);
    }

    #[test]
    fn test_template_is_valid() {
        let config = Config::parse(&Config::template()).unwrap();
        assert_eq!(config.languages.len(), 3);
        assert!(matches!(
            config.languages["vue"],
            LanguageEntry::Grammar { ref builtin, .. } if builtin.as_deref() == Some("html")
        ));

        let LanguageEntry::Stream {
            definition: Some(ref nim),
            ..
        } = config.languages["nim"]
        else {
            panic!("nim should declare a stream definition");
        };
        assert_eq!(nim.block_comment, vec![("#[".to_string(), "]#".to_string())]);
        assert!(nim.keywords.contains(&"proc".to_string()));
    }

    #[test]
    fn test_stream_entry_needs_exactly_one_source() {
        let err = Config::parse(
            r#"
[languages.x]
engine = "stream"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("exactly one of 'mode' or 'definition'"));
    }

    #[test]
    fn test_unknown_builtin_mode() {
        let err = Config::parse(
            r#"
[languages.x]
engine = "stream"
mode = "klingon"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown stream mode 'klingon'"));
    }

    #[test]
    fn test_grammar_entry_validation() {
        let err = Config::parse(
            r#"
[languages.x]
engine = "grammar"
builtin = "rust"
library = "/tmp/lib.so"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("exactly one of 'builtin' or 'library'"));

        let err = Config::parse(
            r#"
[languages.x]
engine = "grammar"
builtin = "rust"
symbol = "tree_sitter_x"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("'symbol' without 'library'"));

        let err = Config::parse(
            r#"
[languages.x]
engine = "grammar"
builtin = "cobol"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown builtin grammar 'cobol'"));
    }

    #[test]
    fn test_unknown_entry_key_is_rejected() {
        let err = Config::parse(
            r#"
[languages.x]
engine = "grammar"
builtin = "rust"
symbl = "oops"
"#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("symbl"));

        let result = Config::parse(
            r#"
[languages.y]
engine = "stream"
mode = "go"
keywords = ["oops"]
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_highlights_needs_library() {
        let err = Config::parse(
            r#"
[languages.x]
engine = "grammar"
builtin = "rust"
highlights = "queries/highlights.scm"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("'highlights' without 'library'"));
    }

    #[test]
    fn test_unknown_engine_is_rejected() {
        let result = Config::parse(
            r#"
[languages.x]
engine = "magic"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_definition_field_is_rejected() {
        let result = Config::parse(
            r#"
[languages.x]
engine = "stream"

[languages.x.definition]
keywordz = ["oops"]
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("langmap.toml");
        fs::write(&config_path, "[global\n").unwrap();

        let err = Config::from_file(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("langmap.toml"));
    }

    #[test]
    fn test_find_local_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join("langmap.toml"), "").unwrap();

        let found = Config::find_local(&nested).unwrap();
        assert_eq!(found, temp_dir.path().join("langmap.toml"));
    }

    #[test]
    fn test_find_local_prefers_rc_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("langmap.toml"), "").unwrap();
        fs::write(temp_dir.path().join(".langmaprc.toml"), "").unwrap();

        let found = Config::find_local(temp_dir.path()).unwrap();
        assert_eq!(found, temp_dir.path().join(".langmaprc.toml"));
    }

    #[test]
    fn test_discover_loads_local_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("langmap.toml"),
            "[global]\nlist_unresolved = false\n",
        )
        .unwrap();

        let (path, config) = Config::discover(temp_dir.path()).unwrap().unwrap();
        assert!(path.ends_with("langmap.toml"));
        assert!(!config.global.list_unresolved);
    }
}
