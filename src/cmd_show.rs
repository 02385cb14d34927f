use anyhow::Result;

use crate::commands::ShowArgs;
use crate::common::load_palette;
use crate::preview::print_preview;

pub(crate) fn cls_show(args: &ShowArgs) -> Result<()> {
	let pal = load_palette(&args.input, args.strict)?;

	if args.json {
		println!("{}", serde_json::to_string_pretty(&pal)?);
	} else {
		print_preview(&pal);
	}

	Ok(())
}
