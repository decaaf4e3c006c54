//! Configuration for the Word Quest tools.
//!
//! Loaded from an optional `wordquest.toml`. Every field has a default, so a
//! missing file behaves the same as an empty one.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "wordquest.toml";

/// Tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub audio: AudioConfig,

    #[serde(default)]
    pub guardrails: GuardrailConfig,
}

/// How located audio paths are written into the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PathStyle {
    /// `{audio_root}/{folder}/{file}` exactly as joined from the given root.
    #[default]
    Joined,
    /// Relative to the audio root's parent, e.g. `audio/words/cat.mp3`.
    RootRelative,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Miss lists longer than this are truncated on screen and written to a
    /// sidecar file.
    #[serde(default = "default_missing_display_limit")]
    pub missing_display_limit: usize,

    /// Try the uppercase spelling between lowercase and as-written.
    #[serde(default = "default_true")]
    pub try_uppercase: bool,

    /// Use `display_word` when `word` is missing or empty.
    #[serde(default = "default_true")]
    pub display_word_fallback: bool,

    #[serde(default)]
    pub path_style: PathStyle,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            missing_display_limit: default_missing_display_limit(),
            try_uppercase: true,
            display_word_fallback: true,
            path_style: PathStyle::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardrailConfig {
    /// Paths that may change freely (theme surface area).
    #[serde(default = "default_allow")]
    pub allow: Vec<String>,

    /// Paths whose changes are blocked unless the override file exists.
    #[serde(default = "default_protect")]
    pub protect: Vec<String>,

    /// Marker file at the repository root that disables enforcement.
    #[serde(default = "default_override_file")]
    pub override_file: String,
}

impl Default for GuardrailConfig {
    fn default() -> Self {
        Self {
            allow: default_allow(),
            protect: default_protect(),
            override_file: default_override_file(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_missing_display_limit() -> usize {
    15
}

fn default_allow() -> Vec<String> {
    vec![
        "style/themes.css".to_string(),
        "js/styleTokens.js".to_string(),
        "README.md".to_string(),
        "CONTRIBUTING.md".to_string(),
        "STYLE_EDITING_RULES.md".to_string(),
    ]
}

fn default_protect() -> Vec<String> {
    vec![
        "style/components.css".to_string(),
        "style/modes.css".to_string(),
        "index.html".to_string(),
        "js/".to_string(),
    ]
}

fn default_override_file() -> String {
    "ALLOW_UI_STRUCTURE_CHANGES".to_string()
}

impl Config {
    /// Load config from an explicit path, or from `wordquest.toml` in the
    /// working directory when no path is given.
    ///
    /// An explicit path must exist; the implicit one falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::ConfigNotFound(path.to_path_buf()));
                }
                Self::load_from(path)
            }
            None => {
                let path = Self::default_path();
                if !path.exists() {
                    return Ok(Self::default());
                }
                Self::load_from(&path)
            }
        }
    }

    /// Parse a config file.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Path to the implicit config file.
    pub fn default_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.audio.missing_display_limit, 15);
        assert!(config.audio.try_uppercase);
        assert!(config.audio.display_word_fallback);
        assert_eq!(config.audio.path_style, PathStyle::Joined);
        assert_eq!(config.guardrails.override_file, "ALLOW_UI_STRUCTURE_CHANGES");
        assert!(config.guardrails.protect.contains(&"js/".to_string()));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            "[audio]\nmissing_display_limit = 20\npath_style = \"root_relative\"\n",
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.audio.missing_display_limit, 20);
        assert_eq!(config.audio.path_style, PathStyle::RootRelative);
        assert!(config.audio.try_uppercase);
        assert_eq!(config.guardrails.allow.len(), 5);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(matches!(
            Config::load(Some(path.as_path())),
            Err(Error::ConfigNotFound(_))
        ));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[audio\n").unwrap();
        assert!(matches!(
            Config::load(Some(path.as_path())),
            Err(Error::ConfigParse(_))
        ));
    }
}
