//! Word database loading and writing.
//!
//! The database is either a top-level array of entries or an object whose
//! values are entries. It is handled as a `serde_json::Value` so unknown
//! fields and key order survive the round trip.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::Error;

/// Suffix appended to the input stem for the default output file.
const OUTPUT_SUFFIX: &str = "_with_audio";

/// Parse the database file.
pub fn load(path: &Path) -> Result<Value, Error> {
    let content = fs::read_to_string(path)?;
    let doc: Value = serde_json::from_str(&content)?;
    debug!(path = %path.display(), "Loaded word database");
    Ok(doc)
}

/// Mutable references to every entry in the document.
///
/// Object keys are kept in the document; only the values are iterated.
pub fn entries_mut(doc: &mut Value) -> Result<Vec<&mut Value>, Error> {
    match doc {
        Value::Array(items) => Ok(items.iter_mut().collect()),
        Value::Object(map) => Ok(map.values_mut().collect()),
        other => Err(Error::InvalidDatabase(format!(
            "expected an array or object at top level, found {}",
            type_name(other)
        ))),
    }
}

/// Write the document as pretty JSON with non-ASCII characters kept literal.
///
/// Refuses to overwrite the input file.
pub fn write(doc: &Value, out_path: &Path, input_path: &Path) -> Result<(), Error> {
    if same_file(out_path, input_path) {
        return Err(Error::OutputIsInput(out_path.to_path_buf()));
    }
    let output = serde_json::to_string_pretty(doc)?;
    fs::write(out_path, output)?;
    debug!(path = %out_path.display(), "Wrote word database");
    Ok(())
}

/// `{stem}_with_audio.json` next to the input file.
pub fn default_output_path(json_path: &Path) -> PathBuf {
    let stem = json_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    json_path.with_file_name(format!("{}{}.json", stem, OUTPUT_SUFFIX))
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("data/app_ready_database_FINAL.json")),
            PathBuf::from("data/app_ready_database_FINAL_with_audio.json")
        );
        assert_eq!(
            default_output_path(Path::new("words")),
            PathBuf::from("words_with_audio.json")
        );
    }

    #[test]
    fn test_entries_of_array_and_object() {
        let mut doc = json!([{"word": "a"}, {"word": "b"}]);
        assert_eq!(entries_mut(&mut doc).unwrap().len(), 2);

        let mut doc = json!({"x": {"word": "a"}, "y": {"word": "b"}, "z": {}});
        assert_eq!(entries_mut(&mut doc).unwrap().len(), 3);

        let mut doc = json!(42);
        assert!(matches!(
            entries_mut(&mut doc),
            Err(Error::InvalidDatabase(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        fs::write(&path, "[{\"word\": ").unwrap();
        assert!(matches!(load(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_write_keeps_unicode_and_key_order() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("db.json");
        let out = dir.path().join("out.json");
        fs::write(&input, r#"[{"word":"café","zeta":1,"alpha":2}]"#).unwrap();

        let doc = load(&input).unwrap();
        write(&doc, &out, &input).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert!(written.contains("café"));
        assert!(written.find("zeta").unwrap() < written.find("alpha").unwrap());
        assert!(written.starts_with("[\n  {\n    \"word\""));
    }

    #[test]
    fn test_write_refuses_input_path() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("db.json");
        fs::write(&input, "[]").unwrap();

        let doc = load(&input).unwrap();
        let err = write(&doc, &input, &input).unwrap_err();
        assert!(matches!(err, Error::OutputIsInput(_)));

        let sneaky = dir.path().join(".").join("db.json");
        assert!(matches!(
            write(&doc, &sneaky, &input),
            Err(Error::OutputIsInput(_))
        ));
        assert_eq!(fs::read_to_string(&input).unwrap(), "[]");
    }
}
