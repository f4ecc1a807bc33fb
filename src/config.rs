//! Builder settings, optionally read from a JSON file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a JSON settings file.
pub const CONFIG_ENV: &str = "RAD_CANVAS_CONFIG";

/// Largest accepted `codegen.indent_width`.
pub const MAX_INDENT_WIDTH: usize = 16;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Code generation output format
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodegenFormat {
    /// Whole function component wrapping the tree
    #[default]
    Component,
    /// Only the node tags
    MarkupOnly,
    /// The tree itself as JSON
    Json,
}

impl CodegenFormat {
    pub const ALL: [CodegenFormat; 3] = [
        CodegenFormat::Component,
        CodegenFormat::MarkupOnly,
        CodegenFormat::Json,
    ];

    pub const fn display_name(&self) -> &'static str {
        match self {
            CodegenFormat::Component => "TSX Component",
            CodegenFormat::MarkupOnly => "Markup Only",
            CodegenFormat::Json => "JSON Tree",
        }
    }

    /// Suggested file extension for exports.
    pub const fn extension(&self) -> &'static str {
        match self {
            CodegenFormat::Component | CodegenFormat::MarkupOnly => "tsx",
            CodegenFormat::Json => "json",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenOptions {
    pub component_name: String,
    /// Class list of the wrapper `<div>`.
    pub root_class: String,
    /// Spaces per nesting level, capped at [`MAX_INDENT_WIDTH`].
    pub indent_width: usize,
    pub format: CodegenFormat,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            component_name: "GeneratedComponent".into(),
            root_class: "p-4".into(),
            indent_width: 2,
            format: CodegenFormat::Component,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub codegen: CodegenOptions,
    pub syntax_highlighting: bool,
    /// Regenerate the preview after every change instead of on demand.
    pub auto_generate: bool,
    pub theme: Theme,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            codegen: CodegenOptions::default(),
            syntax_highlighting: true,
            auto_generate: true,
            theme: Theme::Dark,
        }
    }
}

impl BuilderConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if config.codegen.indent_width > MAX_INDENT_WIDTH {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                reason: format!(
                    "codegen.indent_width is {}, at most {MAX_INDENT_WIDTH} is allowed",
                    config.codegen.indent_width
                ),
            });
        }
        Ok(config)
    }

    /// Settings from [`CONFIG_ENV`] when set, defaults otherwise. A file that
    /// cannot be used is logged and ignored.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV).map(PathBuf::from) else {
            return Self::default();
        };
        match Self::from_file(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BuilderConfig::default();
        assert_eq!(config.codegen.component_name, "GeneratedComponent");
        assert_eq!(config.codegen.indent_width, 2);
        assert_eq!(config.codegen.format, CodegenFormat::Component);
        assert!(config.syntax_highlighting);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: BuilderConfig = serde_json::from_str(
            r#"{ "codegen": { "component_name": "Landing", "format": "markup_only" }, "theme": "light" }"#,
        )
        .unwrap();
        assert_eq!(config.codegen.component_name, "Landing");
        assert_eq!(config.codegen.root_class, "p-4");
        assert_eq!(config.codegen.format, CodegenFormat::MarkupOnly);
        assert_eq!(config.theme, Theme::Light);
        assert!(config.auto_generate);
    }

    #[test]
    fn test_from_file_missing() {
        let err = BuilderConfig::from_file(Path::new("/nonexistent/rad-canvas.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(CodegenFormat::Json.extension(), "json");
        assert_eq!(CodegenFormat::Component.extension(), "tsx");
    }
}
