//! The fixed registry of audio kinds.

/// One category of pronunciation audio.
///
/// The set is closed; order matters for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioKind {
    Word,
    Def,
    Sentence,
    Fun,
    Syllables,
}

impl AudioKind {
    /// All kinds, in registry order.
    pub fn all() -> &'static [AudioKind] {
        &[
            AudioKind::Word,
            AudioKind::Def,
            AudioKind::Sentence,
            AudioKind::Fun,
            AudioKind::Syllables,
        ]
    }

    /// Key used in an entry's `audio` object.
    pub fn key(&self) -> &'static str {
        match self {
            AudioKind::Word => "word",
            AudioKind::Def => "def",
            AudioKind::Sentence => "sentence",
            AudioKind::Fun => "fun",
            AudioKind::Syllables => "syllables",
        }
    }

    /// Folder under the audio root holding this kind's files.
    pub fn folder(&self) -> &'static str {
        match self {
            AudioKind::Word => "words",
            AudioKind::Def => "defs",
            AudioKind::Sentence => "sentences",
            AudioKind::Fun => "fun",
            AudioKind::Syllables => "syllables",
        }
    }

    /// Folder names of every kind, in registry order.
    pub fn folders() -> Vec<&'static str> {
        Self::all().iter().map(|k| k.folder()).collect()
    }
}

impl std::fmt::Display for AudioKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
