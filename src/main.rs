use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use crate::cmd_convert::cls_convert;
use crate::cmd_create::cls_create;
use crate::cmd_preset::{cls_examples, cls_preset};
use crate::cmd_show::cls_show;
use crate::commands::{Cli, Commands};

mod cmd_convert;
mod cmd_create;
mod cmd_preset;
mod cmd_show;
mod commands;
mod common;
mod presets;
mod preview;

fn init_logging(debug: bool) {
	let level = if debug { LevelFilter::Debug } else { LevelFilter::Warn };

	env_logger::Builder::new()
		.filter_level(level)
		.parse_default_env()
		.format_timestamp(None)
		.init();
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.debug);

	let result = match &cli.command {
		Some(Commands::Create(args)) => cls_create(args),
		Some(Commands::Preset(args)) => cls_preset(args),
		Some(Commands::Examples(args)) => cls_examples(args),
		Some(Commands::Convert(args)) => cls_convert(args),
		Some(Commands::Show(args)) => cls_show(args),
		None => {
			return ExitCode::FAILURE;
		}
	};

	match result {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("execution failed: {e:#}");
			ExitCode::FAILURE
		}
	}
}
