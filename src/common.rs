use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use humansize::DECIMAL;

use cls_rs::palettes::palette::{Palette, PaletteFormat};

/// Loads any supported palette file. `strict` only affects .cls files.
pub(crate) fn load_palette<P: AsRef<Path>>(path: P, strict: bool) -> Result<Palette> {
	let path = path.as_ref();
	let pal = if strict && Palette::guess_format(path) == Some(PaletteFormat::Cls) {
		Palette::from_cls_file_strict(path)
	} else {
		Palette::load_from_file(path)
	};

	pal.with_context(|| format!("can't read {}", path.display()))
}

/// Writes the palette in the format implied by the file extension and reports the file size.
pub(crate) fn save_palette<P: AsRef<Path>>(pal: &Palette, path: P) -> Result<()> {
	let path = path.as_ref();
	pal.save_to_file(path)
		.with_context(|| format!("can't write {}", path.display()))?;

	match fs::metadata(path) {
		Ok(m) => {
			let size = humansize::format_size(m.len(), DECIMAL);
			println!("Saved {} colors to {} ({size})", pal.len(), path.display());
		}
		Err(err) => {
			eprintln!("Can't determine output file size: {err}");
		}
	}

	Ok(())
}
