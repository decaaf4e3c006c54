//! Inject audio file paths into the word database.

use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::audio::database;
use crate::audio::report::{report_missing, scan_folders};
use crate::audio::{merge_audio, AudioKind, AudioLocator, CoverageStats, MergeOptions};
use crate::config::AudioConfig;
use crate::error::Error;

/// Default input database, relative to the app build directory.
pub const DEFAULT_JSON: &str = "app_ready_database_FINAL.json";

/// Default audio root.
pub const DEFAULT_AUDIO_ROOT: &str = "assets/audio";

/// Run the audio command, printing to stdout. Returns the exit code.
pub fn run(
    json_path: &Path,
    audio_root: &Path,
    out_path: Option<&Path>,
    config: &AudioConfig,
) -> Result<i32, Error> {
    let mut stdout = io::stdout().lock();
    run_to(&mut stdout, json_path, audio_root, out_path, config)
}

/// Run the audio command against any writer.
///
/// Missing input paths are reported and yield exit code 1 before any work is
/// done. Everything after that is either a success or a fatal error.
pub fn run_to<W: Write>(
    out: &mut W,
    json_path: &Path,
    audio_root: &Path,
    out_path: Option<&Path>,
    config: &AudioConfig,
) -> Result<i32, Error> {
    let out_path = match out_path {
        Some(path) => path.to_path_buf(),
        None => database::default_output_path(json_path),
    };

    if !json_path.exists() {
        writeln!(out, "JSON not found: {}", json_path.display())?;
        return Ok(1);
    }
    if !audio_root.exists() {
        writeln!(out, "Audio folder not found: {}", audio_root.display())?;
        writeln!(out, "   Expected subfolders: {:?}", AudioKind::folders())?;
        return Ok(1);
    }

    writeln!(out)?;
    writeln!(out, "Audio subfolders found:")?;
    for folder in scan_folders(audio_root)? {
        writeln!(out, "{}", folder)?;
    }

    writeln!(out)?;
    writeln!(out, "Reading: {}", json_path.display())?;
    let stats = process(json_path, audio_root, &out_path, config)?;
    writeln!(out, "Written: {}", out_path.display())?;
    writeln!(out)?;
    writeln!(out, "{}", stats)?;

    let out_dir = out_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    report_missing(out, &stats, out_dir, config.missing_display_limit)?;

    Ok(0)
}

/// Load, merge and write. The input file is only read.
pub fn process(
    json_path: &Path,
    audio_root: &Path,
    out_path: &Path,
    config: &AudioConfig,
) -> Result<CoverageStats, Error> {
    let mut doc = database::load(json_path)?;

    let locator = AudioLocator::from_config(audio_root, config);
    let options = MergeOptions {
        display_word_fallback: config.display_word_fallback,
    };
    let stats = merge_audio(&mut doc, &locator, &options)?;

    database::write(&doc, out_path, json_path)?;
    info!(
        entries = stats.total,
        processed = stats.processed,
        path = %out_path.display(),
        "Injected audio paths"
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        dir: TempDir,
    }

    impl Fixture {
        fn new(db: &str) -> Self {
            let dir = TempDir::new().unwrap();
            fs::write(dir.path().join("db.json"), db).unwrap();
            fs::create_dir_all(dir.path().join("audio")).unwrap();
            Self { dir }
        }

        fn json(&self) -> std::path::PathBuf {
            self.dir.path().join("db.json")
        }

        fn audio(&self) -> std::path::PathBuf {
            self.dir.path().join("audio")
        }

        fn touch(&self, folder: &str, name: &str) {
            let dir = self.audio().join(folder);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(name), b"").unwrap();
        }

        fn run(&self, out_path: Option<&Path>, config: &AudioConfig) -> (i32, String) {
            let mut out = Vec::new();
            let code = run_to(&mut out, &self.json(), &self.audio(), out_path, config).unwrap();
            (code, String::from_utf8(out).unwrap())
        }
    }

    #[test]
    fn test_end_to_end_single_word() {
        let fixture = Fixture::new(r#"[{"word":"cat"}]"#);
        fixture.touch("words", "cat.mp3");

        let (code, text) = fixture.run(None, &AudioConfig::default());
        assert_eq!(code, 0);

        let out_path = fixture.dir.path().join("db_with_audio.json");
        let doc: Value = serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
        let audio = doc[0]["audio"].as_object().unwrap();
        let expected = fixture.audio().join("words").join("cat.mp3");
        assert_eq!(audio["word"], json!(expected.to_string_lossy()));
        for key in ["def", "sentence", "fun", "syllables"] {
            assert!(audio.get(key).is_none());
            assert!(text.contains(&format!("Missing '{}' audio: 1 words\n    cat\n", key)));
        }
        assert!(text.contains("Coverage (1 entries):"));
        assert!(text.contains("words        found, 1 mp3s"));
        assert!(text.contains("defs         NOT FOUND"));
    }

    #[test]
    fn test_input_file_unchanged() {
        let original = "[\n{\"word\": \"cat\", \"note\": \"ünïcode\"}\n]";
        let fixture = Fixture::new(original);
        fixture.touch("words", "cat.mp3");

        fixture.run(None, &AudioConfig::default());
        assert_eq!(fs::read_to_string(fixture.json()).unwrap(), original);
    }

    #[test]
    fn test_rerun_on_output_is_stable() {
        let fixture = Fixture::new(r#"[{"word":"cat"},{"word":"dog"}]"#);
        fixture.touch("words", "cat.mp3");
        fixture.touch("fun", "dog.mp3");

        let first = fixture.dir.path().join("first.json");
        let second = fixture.dir.path().join("second.json");
        let config = AudioConfig::default();

        process(&fixture.json(), &fixture.audio(), &first, &config).unwrap();
        process(&first, &fixture.audio(), &second, &config).unwrap();
        assert_eq!(
            fs::read_to_string(&first).unwrap(),
            fs::read_to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_missing_paths_exit_one() {
        let fixture = Fixture::new("[]");
        let config = AudioConfig::default();

        let mut out = Vec::new();
        let missing = fixture.dir.path().join("nope.json");
        let code = run_to(&mut out, &missing, &fixture.audio(), None, &config).unwrap();
        assert_eq!(code, 1);
        assert!(String::from_utf8_lossy(&out).contains("JSON not found"));

        let mut out = Vec::new();
        let missing = fixture.dir.path().join("no-audio");
        let code = run_to(&mut out, &fixture.json(), &missing, None, &config).unwrap();
        assert_eq!(code, 1);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("Audio folder not found"));
        assert!(text.contains("\"syllables\""));
        assert!(!fixture.dir.path().join("db_with_audio.json").exists());
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        let fixture = Fixture::new("{not json");
        let mut out = Vec::new();
        let result = run_to(
            &mut out,
            &fixture.json(),
            &fixture.audio(),
            None,
            &AudioConfig::default(),
        );
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_sidecar_written_next_to_output() {
        let words: Vec<String> = (0..18).map(|i| format!("{{\"word\":\"w{}\"}}", i)).collect();
        let fixture = Fixture::new(&format!("[{}]", words.join(",")));
        let out_dir = fixture.dir.path().join("build");
        fs::create_dir_all(&out_dir).unwrap();
        let out_path = out_dir.join("out.json");

        let (code, _) = fixture.run(Some(out_path.as_path()), &AudioConfig::default());
        assert_eq!(code, 0);
        for kind in AudioKind::all() {
            let sidecar = out_dir.join(format!("missing_{}.txt", kind.key()));
            let content = fs::read_to_string(&sidecar).unwrap();
            assert_eq!(content.lines().count(), 18);
        }
    }
}
