use anyhow::{bail, Result};

use cls_rs::palettes::palette::Palette;

use crate::commands::ConvertArgs;
use crate::common::{load_palette, save_palette};

pub(crate) fn cls_convert(args: &ConvertArgs) -> Result<()> {
	if Palette::guess_format(&args.output).is_none() {
		bail!("unsupported output format: {}", args.output.display());
	}

	let mut pal = load_palette(&args.input, args.strict)?;
	log::debug!("Loaded \"{}\" with {} colors", pal.name, pal.len());

	if let Some(name) = &args.name {
		pal.name = name.clone();
	}

	save_palette(&pal, &args.output)
}
