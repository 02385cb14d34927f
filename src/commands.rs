use clap::Parser;
use clap::Subcommand;
use const_format::formatcp;
use std::path::PathBuf;

use cls_rs::palettes::DEFAULT_PALETTE_NAME;

use crate::presets::BuiltInPalette;

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Creates and inspects Clip Studio Paint color sets")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	#[arg(long, global = true, help = "Prints decoder diagnostics. RUST_LOG takes precedence.")]
	pub debug: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct CreateArgs {
	#[arg(help = "The output file.")]
	pub output: PathBuf,

	#[arg(short, long, help = "The color set name shown in Clip Studio Paint.", default_value = DEFAULT_PALETTE_NAME)]
	pub name: String,

	#[arg(short, long = "color", help = "Adds a color. Format RRGGBB or RRGGBBAA, optionally prefixed with # or 0x.")]
	pub colors: Vec<String>,

	#[arg(short, long, help = "The alpha value of colors given without an alpha component. (0 or 255)", default_value_t = 255,
	value_parser = clap::value_parser!(u8))]
	pub alpha: u8,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct PresetArgs {
	#[arg(value_enum, help = "The built-in color set.")]
	pub preset: BuiltInPalette,

	#[arg(help = "The output file.")]
	pub output: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ExamplesArgs {
	#[arg(help = "The directory the example color sets are written to.", default_value = ".")]
	pub dir: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ConvertArgs {
	#[arg(help = "The input file. (.cls, .hex, .json)")]
	pub input: PathBuf,
	#[arg(help = "The output file. (.cls, .hex, .json)")]
	pub output: PathBuf,

	#[arg(short, long, help = "Renames the color set.")]
	pub name: Option<String>,

	#[arg(long, help = "Rejects .cls files with inconsistent header lengths.")]
	pub strict: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ShowArgs {
	#[arg(help = "The input file. (.cls, .hex, .json)")]
	pub input: PathBuf,

	#[arg(long, help = "Prints the color set as JSON instead of a preview.")]
	pub json: bool,

	#[arg(long, help = "Rejects .cls files with inconsistent header lengths.")]
	pub strict: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Builds a color set from hexadecimal colors.")]
	Create(CreateArgs),

	#[command(about = "Writes one of the built-in color sets.")]
	Preset(PresetArgs),

	#[command(about = "Writes and previews all built-in color sets.")]
	Examples(ExamplesArgs),

	#[command(about = "Converts between color set formats.")]
	Convert(ConvertArgs),

	#[command(about = "Previews a color set in the terminal.")]
	Show(ShowArgs),
}
