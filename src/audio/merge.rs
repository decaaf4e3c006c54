//! Fill missing audio paths into word entries.

use serde_json::{Map, Value};
use tracing::debug;

use crate::audio::database::entries_mut;
use crate::audio::{AudioKind, AudioLocator};
use crate::error::Error;

/// Merge behavior switches.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Use `display_word` when `word` is missing or empty.
    pub display_word_fallback: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            display_word_fallback: true,
        }
    }
}

/// Coverage of one audio kind.
#[derive(Debug, Clone)]
pub struct KindCoverage {
    pub kind: AudioKind,
    /// Entries that have this kind, whether pre-set or found on disk.
    pub covered: usize,
    /// Lookup keys of entries lacking this kind, in entry order.
    pub missing: Vec<String>,
}

/// Per-kind coverage for one merge run.
#[derive(Debug, Clone)]
pub struct CoverageStats {
    /// Every entry in the document, including ones without a word.
    pub total: usize,
    /// Entries with a non-empty word.
    pub processed: usize,
    /// One record per kind, in registry order.
    pub kinds: Vec<KindCoverage>,
}

impl CoverageStats {
    fn new(total: usize) -> Self {
        Self {
            total,
            processed: 0,
            kinds: AudioKind::all()
                .iter()
                .map(|&kind| KindCoverage {
                    kind,
                    covered: 0,
                    missing: Vec::new(),
                })
                .collect(),
        }
    }

    pub fn get(&self, kind: AudioKind) -> &KindCoverage {
        self.kinds
            .iter()
            .find(|c| c.kind == kind)
            .unwrap_or_else(|| unreachable!("every kind is registered"))
    }

    /// Covered share of all entries, in percent.
    pub fn percent(&self, kind: AudioKind) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.get(kind).covered as f64 / self.total as f64 * 100.0
    }
}

/// Fill every entry's missing audio paths from disk.
///
/// Populated values are never touched, so re-running is a no-op for entries
/// already covered. Entries without a word are skipped and not counted.
pub fn merge_audio(
    doc: &mut Value,
    locator: &AudioLocator,
    options: &MergeOptions,
) -> Result<CoverageStats, Error> {
    let entries = entries_mut(doc)?;
    let mut stats = CoverageStats::new(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        let obj = entry.as_object_mut().ok_or_else(|| Error::InvalidEntry {
            index,
            reason: "entry is not an object".to_string(),
        })?;

        let word = entry_word(obj, options.display_word_fallback).to_string();
        if word.is_empty() {
            debug!(index, "Skipping entry without a word");
            continue;
        }
        let key = word.to_lowercase();
        stats.processed += 1;

        let audio = audio_object(obj).ok_or_else(|| Error::InvalidEntry {
            index,
            reason: format!("'audio' of '{}' is not an object", key),
        })?;

        for coverage in stats.kinds.iter_mut() {
            let kind = coverage.kind;
            if audio.get(kind.key()).is_some_and(is_populated) {
                coverage.covered += 1;
                continue;
            }
            match locator.locate(kind, &word) {
                Some(path) => {
                    debug!(word = %key, kind = %kind, path = %path, "Found audio");
                    audio.insert(kind.key().to_string(), Value::String(path));
                    coverage.covered += 1;
                }
                None => coverage.missing.push(key.clone()),
            }
        }
    }

    Ok(stats)
}

/// The entry's word, trimmed, falling back to `display_word` when enabled.
fn entry_word(entry: &Map<String, Value>, display_word_fallback: bool) -> &str {
    let field = |name: &str| {
        entry
            .get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    };

    let word = match field("word") {
        Some(word) => Some(word),
        None if display_word_fallback => field("display_word"),
        None => None,
    };
    word.unwrap_or("").trim()
}

/// The entry's `audio` object, created when absent or empty.
///
/// Returns `None` when `audio` holds some other non-empty value.
fn audio_object(entry: &mut Map<String, Value>) -> Option<&mut Map<String, Value>> {
    let audio = entry
        .entry("audio")
        .or_insert_with(|| Value::Object(Map::new()));
    if !is_populated(audio) {
        *audio = Value::Object(Map::new());
    }
    audio.as_object_mut()
}

/// Whether a JSON value counts as set: not null, false, zero or empty.
fn is_populated(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
