use crate::config::Config;
use crate::engine::{EngineCategory, EngineHandle, Highlight};
use crate::languages::LanguageRegistry;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};

/// Command-line interface for the langmap tool
#[derive(Parser, Debug)]
#[command(
    name = "langmap",
    version,
    about = "Resolve language names to syntax highlighting engines."
)]
pub struct Cli {
    /// Configuration file to load instead of discovering one
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Ignore configuration files and use the builtin catalog only
    #[arg(long, global = true, default_value_t = false, conflicts_with = "config")]
    pub no_config: bool,

    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List catalog identifiers in display order
    List {
        /// Only list languages backed by this kind of engine
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,

        /// Print the engine category next to each identifier
        #[arg(long, default_value_t = false)]
        show_category: bool,
    },

    /// Print the engine category an identifier resolves to
    Resolve {
        identifier: String,
    },

    /// Highlight files with the engine resolved for an identifier
    Highlight {
        identifier: String,

        /// Files to highlight
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print unsupported languages as plain text instead of failing
        #[arg(long, default_value_t = false)]
        plain_fallback: bool,
    },

    /// Write a starter configuration file
    Init {
        /// Where to write the configuration
        #[arg(short, long, default_value = "langmap.toml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryArg {
    Stream,
    Grammar,
}

impl From<CategoryArg> for EngineCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Stream => EngineCategory::Stream,
            CategoryArg::Grammar => EngineCategory::Grammar,
        }
    }
}

/// Execute a parsed command line
pub fn run(cli: &Cli) -> Result<ExitCode> {
    match &cli.command {
        Command::Init { output, force } => {
            init_config(output, *force)?;
            println!("Created configuration file: {}", output.display());
            Ok(ExitCode::SUCCESS)
        }
        Command::List {
            category,
            show_category,
        } => {
            let registry = load_registry(cli)?;
            let lines = render_list(&registry, category.map(Into::into), *show_category);
            for line in lines {
                println!("{line}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Resolve { identifier } => {
            let registry = load_registry(cli)?;
            match registry.category(identifier) {
                Some(category) => {
                    println!("{category}");
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    println!("unsupported");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Highlight {
            identifier,
            files,
            plain_fallback,
        } => {
            let registry = load_registry(cli)?;
            let handle = registry.resolve(identifier);
            if handle.is_none() && !plain_fallback {
                anyhow::bail!("Unsupported language '{identifier}'");
            }
            if let Some(handle) = &handle {
                debug!(language = %identifier, engine = handle.name(), category = %handle.category(), "resolved engine");
            }

            let outputs = files
                .par_iter()
                .map(|path| highlight_file(handle.as_ref(), path))
                .collect::<Result<Vec<_>>>()?;

            for (path, output) in files.iter().zip(outputs) {
                if files.len() > 1 {
                    println!("==> {} <==", path.display());
                }
                print!("{output}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Build the registry from `--config`, discovery, or builtins only
pub fn load_registry(cli: &Cli) -> Result<LanguageRegistry> {
    if cli.no_config {
        return Ok(LanguageRegistry::new());
    }

    let config = match &cli.config {
        Some(path) => Some((path.clone(), Config::from_file(path)?)),
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            Config::discover(&cwd)?
        }
    };

    match config {
        Some((path, config)) => {
            info!(path = %path.display(), languages = config.languages.len(), "loaded configuration");
            LanguageRegistry::from_config(&config)
                .with_context(|| format!("Failed to apply configuration {}", path.display()))
        }
        None => Ok(LanguageRegistry::new()),
    }
}

/// One line per catalog entry, optionally filtered by category
pub fn render_list(
    registry: &LanguageRegistry,
    category: Option<EngineCategory>,
    show_category: bool,
) -> Vec<String> {
    registry
        .supported_languages()
        .iter()
        .filter_map(|id| {
            let resolved = registry.category(id);
            if category.is_some() && resolved != category {
                return None;
            }

            Some(if show_category {
                let label = resolved.map_or("unsupported", |c| c.as_str());
                format!("{id}\t{label}")
            } else {
                id.clone()
            })
        })
        .collect()
}

/// Highlight one file, or return it verbatim when there is no engine
pub fn highlight_file(handle: Option<&EngineHandle>, path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let Some(handle) = handle else {
        return Ok(content);
    };

    let spans = handle
        .highlight(&content)
        .with_context(|| format!("Failed to highlight {}", path.display()))?;

    let mut output = String::new();
    for span in spans {
        output.push_str(&format!(
            "{}..{} {} {:?}\n",
            span.start,
            span.end,
            span.kind,
            span.text(&content)
        ));
    }
    Ok(output)
}

/// Write the configuration template, refusing to clobber without `force`
pub fn init_config(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            output.display()
        );
    }

    fs::write(output, Config::template())
        .with_context(|| format!("Failed to write {}", output.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["langmap", "resolve", "python"]);
        assert!(matches!(cli.command, Command::Resolve { ref identifier } if identifier == "python"));
        assert!(cli.config.is_none());
        assert!(!cli.verbose);

        let cli = Cli::parse_from(["langmap", "-v", "list", "--category", "stream"]);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Command::List {
                category: Some(CategoryArg::Stream),
                show_category: false
            }
        ));
    }

    #[test]
    fn test_highlight_requires_files() {
        assert!(Cli::try_parse_from(["langmap", "highlight", "rust"]).is_err());
    }

    #[test]
    fn test_config_conflicts_with_no_config() {
        assert!(
            Cli::try_parse_from(["langmap", "--no-config", "--config", "x.toml", "list"]).is_err()
        );
    }

    #[test]
    fn test_render_list_filters_by_category() {
        let registry = LanguageRegistry::new();

        let all = render_list(&registry, None, false);
        assert_eq!(all.len(), registry.supported_languages().len());
        assert_eq!(all[0], "apl");

        let grammar = render_list(&registry, Some(EngineCategory::Grammar), false);
        assert_eq!(grammar.len(), 12);
        assert!(grammar.contains(&"python".to_string()));
        assert!(!grammar.contains(&"cobol".to_string()));
    }

    #[test]
    fn test_render_list_shows_categories() {
        let registry = LanguageRegistry::new();
        let lines = render_list(&registry, None, true);

        assert_eq!(lines[0], "apl\tstream");
        assert_eq!(lines[1], "pgp\tunsupported");
        assert!(lines.contains(&"rust\tgrammar".to_string()));
    }

    #[test]
    fn test_highlight_file_with_engine() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("query.sql");
        fs::write(&path, "SELECT 1;").unwrap();

        let registry = LanguageRegistry::new();
        let handle = registry.resolve("sql");
        let output = highlight_file(handle.as_ref(), &path).unwrap();

        assert_eq!(output, "0..6 keyword \"SELECT\"\n7..8 number \"1\"\n");
    }

    #[test]
    fn test_highlight_file_plain_fallback() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "just text\n").unwrap();

        let output = highlight_file(None, &path).unwrap();
        assert_eq!(output, "just text\n");
    }

    #[test]
    fn test_highlight_missing_file() {
        let err = highlight_file(None, Path::new("/nonexistent/file.rs")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_init_config_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("langmap.toml");

        init_config(&path, false).unwrap();
        assert!(Config::from_file(&path).is_ok());

        let err = init_config(&path, false).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        init_config(&path, true).unwrap();
    }
}
