//! CLI commands for the Word Quest tools.

pub mod audio;
pub mod guardrails;
pub mod hooks;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Word Quest tools - audio path injection and UI guardrails
#[derive(Parser)]
#[command(name = "wq")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./wordquest.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inject audio file paths into the word database
    Audio {
        /// Input JSON database
        #[arg(long, default_value = audio::DEFAULT_JSON)]
        json: PathBuf,

        /// Audio root folder (contains words/, defs/, sentences/, fun/, syllables/)
        #[arg(long, default_value = audio::DEFAULT_AUDIO_ROOT)]
        audio: PathBuf,

        /// Output JSON path (default: <input>_with_audio.json)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Don't fall back to display_word when word is empty
        #[arg(long)]
        no_display_word: bool,
    },

    /// Block changes to protected UI files
    Guardrails {
        /// Base ref to diff against (default: staged changes)
        #[arg(long, env = "GUARDRAIL_BASE")]
        base: Option<String>,

        /// Repository root
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// Manage the guardrail pre-commit hook
    Hooks {
        /// Action: show, install or uninstall
        #[arg(default_value = "show")]
        action: String,

        /// Repository root
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}
