//! UI guardrails: block changes to protected files.
//!
//! Changed paths come from git. A path that is protected and not allow-listed
//! is a violation, unless the override marker file exists at the repository
//! root.

pub mod changes;
pub mod policy;

use std::path::Path;

pub use changes::{changed_files, parse_name_only};
pub use policy::GuardrailPolicy;

/// Result of a guardrail check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardrailOutcome {
    /// Git reported no changed files.
    NoChanges,
    /// The override marker is present; enforcement skipped.
    Overridden,
    /// No protected file changed.
    Passed,
    /// Protected files that changed, in diff order.
    Blocked(Vec<String>),
}

impl GuardrailOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            GuardrailOutcome::Blocked(_) => 1,
            _ => 0,
        }
    }
}

/// Classify a set of changed paths.
pub fn evaluate(
    policy: &GuardrailPolicy,
    changed: &[String],
    repo_root: &Path,
) -> GuardrailOutcome {
    if changed.is_empty() {
        return GuardrailOutcome::NoChanges;
    }

    if repo_root.join(policy.override_file()).exists() {
        return GuardrailOutcome::Overridden;
    }

    let violations = policy.violations(changed);
    if violations.is_empty() {
        GuardrailOutcome::Passed
    } else {
        GuardrailOutcome::Blocked(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GuardrailConfig;
    use tempfile::TempDir;

    fn changed(paths: &[&str]) -> Vec<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_no_changes() {
        let dir = TempDir::new().unwrap();
        let policy = GuardrailPolicy::from_config(&GuardrailConfig::default());
        assert_eq!(
            evaluate(&policy, &[], dir.path()),
            GuardrailOutcome::NoChanges
        );
    }

    #[test]
    fn test_blocked_and_passed() {
        let dir = TempDir::new().unwrap();
        let policy = GuardrailPolicy::from_config(&GuardrailConfig::default());

        let outcome = evaluate(
            &policy,
            &changed(&["style/themes.css", "js/app.js", "docs/notes.md", "index.html"]),
            dir.path(),
        );
        assert_eq!(
            outcome,
            GuardrailOutcome::Blocked(changed(&["js/app.js", "index.html"]))
        );
        assert_eq!(outcome.exit_code(), 1);

        let outcome = evaluate(
            &policy,
            &changed(&["style/themes.css", "js/styleTokens.js", "README.md"]),
            dir.path(),
        );
        assert_eq!(outcome, GuardrailOutcome::Passed);
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn test_override_marker_skips_enforcement() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("ALLOW_UI_STRUCTURE_CHANGES"), "").unwrap();
        let policy = GuardrailPolicy::from_config(&GuardrailConfig::default());

        let outcome = evaluate(&policy, &changed(&["index.html"]), dir.path());
        assert_eq!(outcome, GuardrailOutcome::Overridden);
        assert_eq!(outcome.exit_code(), 0);
    }
}
