//! Changed-file discovery through git.

use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

use crate::error::Error;

/// Files changed relative to `base`, or the staged changes when no base is
/// given.
///
/// With a base ref this is `git diff --name-only {base}...HEAD`. Without one,
/// `git diff --name-only --cached` is tried first and the working tree diff is
/// used only if that command fails.
pub fn changed_files(repo_root: &Path, base: Option<&str>) -> Result<Vec<String>, Error> {
    let output = match base.filter(|b| !b.is_empty()) {
        Some(base) => {
            let range = format!("{}...HEAD", base);
            git_diff(repo_root, &[range.as_str()])?
        }
        None => match git_diff(repo_root, &["--cached"]) {
            Ok(output) => output,
            Err(e) => {
                warn!(error = %e, "Staged diff failed, using working tree diff");
                git_diff(repo_root, &[])?
            }
        },
    };
    Ok(parse_name_only(&output))
}

/// Non-empty, trimmed lines of `git diff --name-only` output.
pub fn parse_name_only(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn git_diff(repo_root: &Path, extra: &[&str]) -> Result<String, Error> {
    let mut cmd = Command::new("git");
    cmd.arg("diff").arg("--name-only").args(extra).current_dir(repo_root);
    debug!(?extra, root = %repo_root.display(), "Running git diff");

    let output = cmd
        .output()
        .map_err(|e| Error::git(format!("failed to run git: {}", e)))?;
    if !output.status.success() {
        return Err(Error::git(format!(
            "git diff --name-only {} failed: {}",
            extra.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
