use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::palettes::palette::Palette;
use crate::palettes::error::PaletteError;
use crate::palettes::color::Color;

// https://github.com/aseprite/aseprite/blob/8323a555007e1db9670b098ce4b1b9c5f8b3d7ad/src/doc/file/hex_file.cpp

impl Palette {
	fn from_hex_internal<R: Read + BufRead>(reader: R) -> Result<Palette, PaletteError> {
		let mut pal = Palette::default();

		for (i, line) in reader.lines().enumerate() {
			let trimmed_line = line?.trim().to_owned();
			if trimmed_line.is_empty() || trimmed_line.starts_with(";") {
				continue;
			}

			let color = trimmed_line.parse::<Color>()
				.map_err(|_| PaletteError::InvalidTextLine { line: i + 1, msg: "Not a hexadecimal color value".to_string() })?;

			pal.push_color(color);
		}

		Ok(pal)
	}

	pub(crate) fn from_hex_file<P: AsRef<Path>>(path: P) -> Result<Palette, PaletteError> {
		let f = File::open(path)?;
		let reader = BufReader::new(f);
		Self::from_hex_internal(reader)
	}

	pub fn from_hex_string<S: Into<String>>(s: S) -> Result<Palette, PaletteError> {
		let s = s.into();
		let reader = BufReader::new(s.as_bytes());
		Self::from_hex_internal(reader)
	}

	/// One color per line, with the alpha byte appended only where it isn't fully opaque.
	pub fn to_hex_string(&self) -> String {
		let mut out = String::new();
		for c in &self.colors {
			let hex = if c.a == 255 { c.to_string() } else { c.to_hex_rgba() };
			out.push_str(&hex[1..]);
			out.push('\n');
		}
		out
	}
}
