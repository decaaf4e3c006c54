//! Audio file lookup by word.

use std::path::{Path, PathBuf};

use crate::audio::AudioKind;
use crate::config::{AudioConfig, PathStyle};

/// Finds audio files for a word under an audio root.
///
/// Candidates are checked as `{root}/{folder}/{candidate}.mp3`, in order:
/// lowercase, uppercase (optional), then the word as written. Words are not
/// sanitized; spaces and punctuation go straight into the file name.
#[derive(Debug, Clone)]
pub struct AudioLocator {
    root: PathBuf,
    try_uppercase: bool,
    path_style: PathStyle,
}

impl AudioLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            try_uppercase: true,
            path_style: PathStyle::Joined,
        }
    }

    /// Build a locator with the lookup settings from config.
    pub fn from_config(root: impl Into<PathBuf>, config: &AudioConfig) -> Self {
        Self::new(root)
            .with_uppercase(config.try_uppercase)
            .with_path_style(config.path_style)
    }

    pub fn with_uppercase(mut self, try_uppercase: bool) -> Self {
        self.try_uppercase = try_uppercase;
        self
    }

    pub fn with_path_style(mut self, path_style: PathStyle) -> Self {
        self.path_style = path_style;
        self
    }

    /// File stems to try for a word, in order, without duplicates.
    pub fn candidates(&self, word: &str) -> Vec<String> {
        let mut names = vec![word.to_lowercase()];
        if self.try_uppercase {
            names.push(word.to_uppercase());
        }
        names.push(word.to_string());

        let mut unique: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        unique
    }

    /// Return the path of the first existing candidate, formatted per the
    /// configured path style, or `None` if no candidate exists.
    pub fn locate(&self, kind: AudioKind, word: &str) -> Option<String> {
        let folder = self.root.join(kind.folder());
        self.candidates(word)
            .into_iter()
            .map(|name| folder.join(format!("{}.mp3", name)))
            .find(|path| path.is_file())
            .map(|path| self.format_path(path))
    }

    fn format_path(&self, path: PathBuf) -> String {
        let path = match self.path_style {
            PathStyle::Joined => path,
            PathStyle::RootRelative => match self.root.parent() {
                Some(parent) => path
                    .strip_prefix(parent)
                    .map(Path::to_path_buf)
                    .unwrap_or(path),
                None => path,
            },
        };
        path.to_string_lossy().into_owned()
    }
}
