//! Check changed files against the UI guardrail policy.

use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::config::GuardrailConfig;
use crate::error::Error;
use crate::guardrail::{changed_files, evaluate, GuardrailOutcome, GuardrailPolicy};

/// Run the guardrail check against git, printing to stdout. Returns the exit
/// code.
pub fn run(repo_root: &Path, base: Option<&str>, config: &GuardrailConfig) -> Result<i32, Error> {
    let changed = changed_files(repo_root, base)?;
    info!(count = changed.len(), base = ?base, "Collected changed files");

    let mut stdout = io::stdout().lock();
    report(&mut stdout, &changed, repo_root, config)
}

/// Evaluate an already collected change set and print the verdict.
pub fn report<W: Write>(
    out: &mut W,
    changed: &[String],
    repo_root: &Path,
    config: &GuardrailConfig,
) -> Result<i32, Error> {
    let policy = GuardrailPolicy::from_config(config);
    let outcome = evaluate(&policy, changed, repo_root);
    let flag = policy.override_file();

    match &outcome {
        GuardrailOutcome::NoChanges => {
            writeln!(out, "UI guardrails: no changes detected.")?;
        }
        GuardrailOutcome::Overridden => {
            writeln!(out, "UI guardrails: {} present; skipping enforcement.", flag)?;
        }
        GuardrailOutcome::Passed => {
            writeln!(out, "UI guardrails passed.")?;
        }
        GuardrailOutcome::Blocked(violations) => {
            writeln!(out, "UI guardrails blocked this change.")?;
            writeln!(out, "Protected files changed without {} flag:", flag)?;
            for path in violations {
                writeln!(out, " - {}", path)?;
            }
            writeln!(out)?;
            writeln!(
                out,
                "If this is intentional, add an empty file named {} at repo root for this PR/commit.",
                flag
            )?;
        }
    }

    Ok(outcome.exit_code())
}
