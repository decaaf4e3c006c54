//! Word Quest tools - audio path injection and UI guardrails.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use wordquest_tools::cli::{self, Cli, Commands};
use wordquest_tools::config::Config;
use wordquest_tools::Error;

fn main() -> Result<(), Error> {
    // Initialize logging; stdout is reserved for reports
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("wordquest_tools=info,wq=info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;

    let exit_code = match cli.command {
        None => {
            // Show help when no command provided
            Cli::command().print_help()?;
            println!();
            0
        }
        Some(Commands::Audio {
            json,
            audio,
            out,
            no_display_word,
        }) => {
            if no_display_word {
                config.audio.display_word_fallback = false;
            }
            cli::audio::run(&json, &audio, out.as_deref(), &config.audio)?
        }
        Some(Commands::Guardrails { base, root }) => {
            cli::guardrails::run(&root, base.as_deref(), &config.guardrails)?
        }
        Some(Commands::Hooks { action, root }) => cli::hooks::run(&action, &root)?,
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
