//! Coverage and miss reporting.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::audio::{AudioKind, CoverageStats};
use crate::error::Error;

/// Width of the coverage bar in blocks; one block per 5%.
const BAR_WIDTH: usize = 20;

/// Words shown on screen for a miss list that overflows to a sidecar file.
const MISSING_PREVIEW: usize = 10;

/// Fixed-width bar for a percentage, rounded down to the nearest 5%.
pub fn coverage_bar(percent: f64) -> String {
    let filled = ((percent / 5.0).floor().max(0.0) as usize).min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

impl fmt::Display for CoverageStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coverage ({} entries):", self.total)?;
        for coverage in &self.kinds {
            let percent = self.percent(coverage.kind);
            write!(
                f,
                "\n  {:<12} {}  {:>5}/{}  ({:.1}%)",
                coverage.kind.key(),
                coverage_bar(percent),
                coverage.covered,
                self.total,
                percent
            )?;
        }
        Ok(())
    }
}

/// Sidecar file holding the full miss list of one kind.
pub fn missing_file_path(out_dir: &Path, kind: AudioKind) -> PathBuf {
    out_dir.join(format!("missing_{}.txt", kind.key()))
}

/// Print every non-empty miss list.
///
/// Lists longer than `display_limit` are cut to a preview of at most ten
/// words (never more than `display_limit`) and written in full to
/// `missing_{kind}.txt` in `out_dir`. Returns the sidecar files written.
pub fn report_missing<W: Write>(
    out: &mut W,
    stats: &CoverageStats,
    out_dir: &Path,
    display_limit: usize,
) -> Result<Vec<PathBuf>, Error> {
    let mut written = Vec::new();

    for coverage in &stats.kinds {
        let words = &coverage.missing;
        if words.is_empty() {
            continue;
        }

        writeln!(out)?;
        writeln!(
            out,
            "Missing '{}' audio: {} words",
            coverage.kind.key(),
            words.len()
        )?;

        if words.len() <= display_limit {
            for word in words {
                writeln!(out, "    {}", word)?;
            }
            continue;
        }

        let shown = words.len().min(MISSING_PREVIEW).min(display_limit);
        for word in words.iter().take(shown) {
            writeln!(out, "    {}", word)?;
        }
        writeln!(out, "    ... and {} more", words.len() - shown)?;

        let path = missing_file_path(out_dir, coverage.kind);
        fs::write(&path, words.join("\n"))?;
        info!(kind = %coverage.kind, count = words.len(), path = %path.display(), "Wrote miss list");
        writeln!(out, "    Full list -> {}", path.display())?;
        written.push(path);
    }

    Ok(written)
}

/// Presence and size of one kind's audio folder.
#[derive(Debug, Clone)]
pub struct FolderStatus {
    pub kind: AudioKind,
    /// Number of `.mp3` files, or `None` if the folder does not exist.
    pub mp3_count: Option<usize>,
}

impl fmt::Display for FolderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mp3_count {
            Some(count) => write!(f, "   {:<12} found, {} mp3s", self.kind.folder(), count),
            None => write!(f, "   {:<12} NOT FOUND", self.kind.folder()),
        }
    }
}

/// Inventory the per-kind folders under the audio root.
pub fn scan_folders(audio_root: &Path) -> Result<Vec<FolderStatus>, Error> {
    AudioKind::all()
        .iter()
        .map(|&kind| -> Result<FolderStatus, Error> {
            let dir = audio_root.join(kind.folder());
            if !dir.is_dir() {
                return Ok(FolderStatus {
                    kind,
                    mp3_count: None,
                });
            }
            let mut count = 0;
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.extension().is_some_and(|ext| ext == "mp3") {
                    count += 1;
                }
            }
            Ok(FolderStatus {
                kind,
                mp3_count: Some(count),
            })
        })
        .collect()
}
