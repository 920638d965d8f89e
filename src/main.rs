//! Tunefind - find the song stuck in your head
//!
//! Command-line front end over the tunefind library: identify a song from a
//! description or transcribed humming and suggest related songs.

use anyhow::Result;
use clap::{CommandFactory, Parser};

use tunefind::cli::{Cli, Command};
use tunefind::commands;
use tunefind::config;
use tunefind::runtime::set_provider;
use tunefind::ui::{self, Log};

fn main() {
	if let Err(e) = run() {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	let cli = Cli::parse();

	Log::set_verbose(cli.verbose);
	set_provider(cli.provider);

	if let Some(dir) = cli.data {
		config::set_data_dir(dir);
	}
	if let Some(dir) = cli.models {
		config::set_model_dir(dir);
	}

	match cli.command {
		Command::Search { query, json } => commands::search::run(&query, json),
		Command::Hum { transcript, file, json } => {
			commands::hum::run(transcript.as_deref(), file.as_deref(), json)
		}
		Command::Repl => commands::repl::run(),
		Command::Info => commands::info::run(),
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			match subcommand {
				Some(sub) => match cmd.find_subcommand_mut(&sub) {
					Some(sub_cmd) => sub_cmd.print_help()?,
					None => {
						ui::error(&format!("Unknown subcommand: {}", sub));
						cmd.print_help()?;
					}
				},
				None => cmd.print_help()?,
			}
			Ok(())
		}
	}
}
