//! Command-line interface parsing and handling
//!
//! This module parses arguments, installs logging, and dispatches to the chat
//! loop or one of the one-shot commands.

pub mod say;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::cli::say::run_say;
use crate::core::backend::EndpointMode;
use crate::core::config::data::{path_display, Config};
use crate::core::config::defaults::RuntimeOverrides;
use crate::core::constants::VERSION;
use crate::logging::{init_tracing, LogSink};
use crate::ui::chat_loop::run_chat;

#[derive(Parser)]
#[command(name = "solace")]
#[command(version = VERSION)]
#[command(about = "A terminal companion chat backed by a hosted language model")]
#[command(
    long_about = "Solace is a full-screen terminal chat with a supportive, therapist-style \
assistant. Prompts go either to a local proxy (the default, no API key needed) or directly \
to a hosted inference endpoint.\n\n\
Environment Variables:\n\
  SOLACE_PROXY_URL   Override the proxy URL (default http://localhost:3001/predict)\n\
  SOLACE_HOSTED_URL  Override the hosted endpoint base URL\n\
  HF_TOKEN           Bearer token for hosted mode (name configurable via token-env)\n\
  RUST_LOG           Log filter, overrides -v\n\n\
Controls:\n\
  Enter             Send the message\n\
  Alt+Enter         Insert a newline\n\
  Tab/Shift+Tab     Cycle preset prompts on an empty chat\n\
  PageUp/PageDown   Scroll the conversation\n\
  Ctrl+B            Open or focus the navigation drawer\n\
  Ctrl+C            Quit the application"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Where to send prompts for this run
    #[arg(long, global = true, value_name = "MODE")]
    pub mode: Option<EndpointMode>,

    /// URL for the selected mode, overriding config and environment
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Append diagnostic logs to this file
    #[arg(short = 'l', long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// Send a single prompt and print the reply
    Say {
        /// Prompt text (multiple words are joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        prompt: Vec<String>,
    },
    /// Print the effective configuration
    Config,
    /// Set a configuration value
    Set {
        /// Configuration key to set
        key: String,
        /// Value to set (multiple words are joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        value: Vec<String>,
    },
    /// Remove a configuration value, restoring its default
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

impl Args {
    pub fn overrides(&self) -> RuntimeOverrides {
        RuntimeOverrides {
            mode: self.mode,
            endpoint: self.endpoint.clone(),
        }
    }

    /// Logs must stay off the terminal while the TUI owns it.
    fn log_sink(&self) -> LogSink<'_> {
        match (&self.log_file, &self.command) {
            (Some(path), _) => LogSink::File(path),
            (None, Some(Commands::Chat) | None) => LogSink::Discard,
            (None, Some(_)) => LogSink::Stderr,
        }
    }
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose, args.log_sink())?;

    let overrides = args.overrides();
    let config = Config::load()?;
    debug!(?overrides, "loaded configuration");

    match args.command.unwrap_or(Commands::Chat) {
        Commands::Chat => run_chat(config, overrides).await,
        Commands::Say { prompt } => run_say(prompt, &config, &overrides).await,
        Commands::Config => {
            let path = Config::get_config_path()?;
            println!("Config file: {}", path_display(&path));
            config.print_all();
            Ok(())
        }
        Commands::Set { key, value } => {
            let value = value.join(" ");
            let mut config = config;
            config.set_key(&key, &value)?;
            config.save()?;
            println!("✅ Set {key} to: {value}");
            Ok(())
        }
        Commands::Unset { key } => {
            let mut config = config;
            config.unset_key(&key)?;
            config.save()?;
            println!("✅ Unset {key}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;
