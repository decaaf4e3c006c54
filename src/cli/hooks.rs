//! Git pre-commit hook that runs the UI guardrails.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Error;

/// Marker line identifying our section of the hook.
const HOOK_MARKER: &str = "# Word Quest UI guardrails (auto-installed)";

/// Command line the hook runs.
const HOOK_COMMAND: &str = "wq guardrails || exit 1";

/// Pre-commit hook script content.
fn hook_section() -> String {
    format!(
        "{}\n# Blocks commits that touch protected UI files\n{}\n",
        HOOK_MARKER, HOOK_COMMAND
    )
}

fn hook_path(project_root: &Path) -> PathBuf {
    project_root.join(".git").join("hooks").join("pre-commit")
}

/// Check if git is initialized in the project.
pub fn has_git(project_root: &Path) -> bool {
    project_root.join(".git").exists()
}

/// Check if the guardrail hook is already installed.
pub fn hook_installed(project_root: &Path) -> bool {
    fs::read_to_string(hook_path(project_root))
        .map(|content| content.contains(HOOK_MARKER))
        .unwrap_or(false)
}

/// Install the guardrail pre-commit hook, preserving any existing hook.
///
/// Our section is appended after the existing body, so a hook that exits
/// unconditionally before it never runs the guardrails.
pub fn install_hook(project_root: &Path) -> Result<(), Error> {
    if !has_git(project_root) {
        return Err(Error::git(format!(
            "not a git repository: {}",
            project_root.display()
        )));
    }

    let path = hook_path(project_root);
    if let Some(hooks_dir) = path.parent() {
        fs::create_dir_all(hooks_dir)?;
    }

    let content = if path.exists() {
        let existing = fs::read_to_string(&path)?;

        // Already has our hook
        if existing.contains(HOOK_MARKER) {
            return Ok(());
        }

        format!("{}\n\n{}", existing.trim_end(), hook_section())
    } else {
        format!("#!/bin/sh\n{}", hook_section())
    };

    fs::write(&path, content)?;
    make_executable(&path)?;
    info!(path = %path.display(), "Installed pre-commit hook");

    Ok(())
}

/// Remove our section from the pre-commit hook. Returns whether anything was
/// removed.
pub fn uninstall_hook(project_root: &Path) -> Result<bool, Error> {
    let path = hook_path(project_root);
    if !path.exists() {
        return Ok(false);
    }

    let content = fs::read_to_string(&path)?;
    if !content.contains(HOOK_MARKER) {
        return Ok(false);
    }

    let cleaned = remove_hook_section(&content);
    if cleaned.trim().is_empty() || cleaned.trim() == "#!/bin/sh" {
        fs::remove_file(&path)?;
    } else {
        fs::write(&path, format!("{}\n", cleaned.trim_end()))?;
    }
    info!(path = %path.display(), "Removed pre-commit hook");

    Ok(true)
}

/// Whether an unconditional top-level `exit` precedes our section.
fn section_unreachable(content: &str) -> bool {
    content
        .lines()
        .take_while(|line| *line != HOOK_MARKER)
        .any(|line| line == "exit" || line.starts_with("exit "))
}

/// Remove our lines from hook content.
fn remove_hook_section(content: &str) -> String {
    let section = hook_section();
    let ours: Vec<&str> = section.lines().collect();
    content
        .lines()
        .filter(|line| !ours.contains(line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), Error> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), Error> {
    Ok(())
}

/// Run hooks command.
pub fn run(action: &str, project_root: &Path) -> Result<i32, Error> {
    match action {
        "show" => {
            if hook_installed(project_root) {
                let path = hook_path(project_root);
                println!("Guardrail hook installed: {}", path.display());
                if fs::read_to_string(&path).is_ok_and(|content| section_unreachable(&content)) {
                    println!("Warning: the hook exits before the guardrail section; move it above the exit.");
                }
            } else {
                println!("Guardrail hook not installed.");
                println!("Install it with 'wq hooks install'.");
            }
        }

        "install" => {
            install_hook(project_root)?;
            println!("Guardrail hook installed.");
        }

        "uninstall" => {
            if uninstall_hook(project_root)? {
                println!("Guardrail hook removed.");
            } else {
                println!("No guardrail hook found.");
            }
        }

        _ => {
            println!("Unknown action: {}", action);
            println!("Usage: wq hooks [show|install|uninstall]");
            return Ok(2);
        }
    }

    Ok(0)
}
