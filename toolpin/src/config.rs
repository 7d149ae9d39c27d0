//! Optional `toolpin.toml` configuration.

use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;

/// Result type for config loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<ConfigError>>;

/// Packages and settings read from a config file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Output file, relative to the config file's directory.
    pub output: Option<PathBuf>,
    /// Tool reference written in the generated header.
    pub tool_ref: Option<String>,
    /// Packages to pin.
    #[serde(default)]
    pub packages: Vec<String>,
}

impl Config {
    /// Read and parse a config file.
    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            Box::new(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse config content, attributing errors to `filename`.
    pub fn parse(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|source: toml::de::Error| {
            let span = source.span().map(SourceSpan::from);
            Box::new(ConfigError::Parse {
                src: NamedSource::new(filename, content.to_string()),
                span,
                source,
            })
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(toolpin::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    #[diagnostic(
        code(toolpin::config::parse),
        help("supported keys are: output, tool_ref, packages")
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
            output = "internal/tools/tools.go"
            tool_ref = "toolpin"
            packages = ["github.com/a/b", "github.com/c/d"]
            "#,
            "toolpin.toml",
        )
        .unwrap();

        assert_eq!(config.output, Some(PathBuf::from("internal/tools/tools.go")));
        assert_eq!(config.tool_ref.as_deref(), Some("toolpin"));
        assert_eq!(config.packages, ["github.com/a/b", "github.com/c/d"]);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("", "toolpin.toml").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let err = Config::parse("pkgs = [\"a\"]", "toolpin.toml").unwrap_err();

        match *err {
            ConfigError::Parse { source, .. } => {
                assert!(source.to_string().contains("unknown field `pkgs`"))
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_wrong_type() {
        let err = Config::parse("packages = \"a\"", "toolpin.toml").unwrap_err();
        assert!(matches!(*err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_open_missing_file() {
        let err = Config::open(Path::new("does/not/exist.toml")).unwrap_err();
        assert_eq!(err.to_string(), "failed to read 'does/not/exist.toml'");
    }
}
