use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::palettes::color::Color;
use crate::palettes::error::PaletteError;
use crate::palettes::palette::Palette;

impl Palette {
	fn from_json_internal<R: Read + BufRead>(reader: R) -> Result<Palette, PaletteError> {
		let colors: Vec<String> = serde_json::from_reader(reader)?;

		let colors = colors.iter().enumerate().map(|(i, c)| {
			c.parse::<Color>().map_err(|e| PaletteError::InvalidJsonEntry {
				index: i,
				msg: e.to_string(),
			})
		}).collect::<Result<Vec<Color>, PaletteError>>()?;

		Ok(Palette::from(colors))
	}

	pub(crate) fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Palette, PaletteError> {
		let f = File::open(path)?;
		let reader = BufReader::new(f);
		Self::from_json_internal(reader)
	}

	pub fn from_json_string<S: Into<String>>(s: S) -> Result<Palette, PaletteError> {
		let s = s.into();
		let reader = BufReader::new(s.as_bytes());
		Self::from_json_internal(reader)
	}

	/// A JSON array of `#RRGGBB` strings, `#RRGGBBAA` for colors that aren't fully opaque.
	pub fn to_json_string(&self) -> Result<String, PaletteError> {
		let colors = self.colors.iter()
			.map(|c| if c.a == 255 { c.to_string() } else { c.to_hex_rgba() })
			.collect::<Vec<String>>();

		Ok(serde_json::to_string_pretty(&colors)?)
	}
}
