//! Path classification against allow and protect lists.
//!
//! Entries match on path-component boundaries, not raw string prefixes:
//! `js/` covers `js/app.js` but not `jsconfig.json`, and `README.md` does
//! not cover `README.md.bak`. Raw prefix matching would treat both as listed.

use crate::config::GuardrailConfig;

/// Allow-list and protect-list of path prefixes.
///
/// An entry matches a path that equals it or lies beneath it as a
/// directory. Trailing slashes on entries are ignored.
#[derive(Debug, Clone)]
pub struct GuardrailPolicy {
    allow: Vec<String>,
    protect: Vec<String>,
    override_file: String,
}

impl GuardrailPolicy {
    pub fn new(allow: Vec<String>, protect: Vec<String>, override_file: impl Into<String>) -> Self {
        Self {
            allow,
            protect,
            override_file: override_file.into(),
        }
    }

    pub fn from_config(config: &GuardrailConfig) -> Self {
        Self::new(
            config.allow.clone(),
            config.protect.clone(),
            config.override_file.clone(),
        )
    }

    /// Marker file name that disables enforcement.
    pub fn override_file(&self) -> &str {
        &self.override_file
    }

    pub fn is_allowed(&self, path: &str) -> bool {
        self.allow.iter().any(|prefix| matches_prefix(path, prefix))
    }

    pub fn is_protected(&self, path: &str) -> bool {
        self.protect.iter().any(|prefix| matches_prefix(path, prefix))
    }

    /// Changed paths that are protected and not allow-listed.
    pub fn violations(&self, changed: &[String]) -> Vec<String> {
        changed
            .iter()
            .filter(|path| !self.is_allowed(path) && self.is_protected(path))
            .cloned()
            .collect()
    }
}

fn matches_prefix(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return false;
    }
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}
