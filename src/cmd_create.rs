use anyhow::{Context, Result};

use cls_rs::palettes::palette::Palette;

use crate::commands::CreateArgs;
use crate::common::save_palette;

pub(crate) fn cls_create(args: &CreateArgs) -> Result<()> {
	let mut pal = Palette::new(args.name.clone());

	for color in &args.colors {
		pal.add_color_from_hex(color, args.alpha as i32)
			.with_context(|| format!("invalid color argument {color}"))?;
	}

	if pal.is_empty() {
		eprintln!("NOTE: The color set is empty!")
	}

	save_palette(&pal, &args.output)
}
