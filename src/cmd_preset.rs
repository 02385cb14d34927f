use anyhow::{Context, Result};
use std::fs;

use crate::commands::{ExamplesArgs, PresetArgs};
use crate::common::save_palette;
use crate::presets::{get_builtin_palette, BuiltInPalette};
use crate::preview::print_preview;

pub(crate) fn cls_preset(args: &PresetArgs) -> Result<()> {
	let pal = get_builtin_palette(args.preset);
	save_palette(&pal, &args.output)
}

pub(crate) fn cls_examples(args: &ExamplesArgs) -> Result<()> {
	fs::create_dir_all(&args.dir)
		.with_context(|| format!("can't create {}", args.dir.display()))?;

	for preset in BuiltInPalette::ALL {
		let pal = get_builtin_palette(preset);
		print_preview(&pal);
		save_palette(&pal, args.dir.join(preset.file_name()))?;
	}

	Ok(())
}
