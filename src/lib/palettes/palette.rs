use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

use serde::{Serialize, Serializer};
use serde::ser::SerializeSeq;

use crate::palettes::color::{Color, ColorParseError};
use crate::palettes::error::PaletteError;
use crate::palettes::DEFAULT_PALETTE_NAME;

/// A named, ordered color set. Order is the on-screen order in Clip Studio Paint; duplicates are fine.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Palette {
	pub name: String,
	#[serde(serialize_with = "serialize_colors")]
	pub colors: Vec<Color>,
}

fn serialize_colors<S: Serializer>(colors: &[Color], serializer: S) -> Result<S::Ok, S::Error> {
	let mut seq = serializer.serialize_seq(Some(colors.len()))?;
	for c in colors {
		seq.serialize_element(&c.to_hex_rgba())?;
	}
	seq.end()
}

impl Default for Palette {
	fn default() -> Self {
		Self::new(DEFAULT_PALETTE_NAME)
	}
}

impl Palette {
	pub fn new<S: Into<String>>(name: S) -> Self {
		Self {
			name: name.into(),
			colors: Vec::new(),
		}
	}

	pub fn push_color(&mut self, c: Color) {
		self.colors.push(c);
	}

	/// Appends a color, clamping each channel into 0..=255.
	pub fn add_color(&mut self, r: i32, g: i32, b: i32, a: i32) -> &mut Self {
		self.push_color(Color::new(r, g, b, a));
		self
	}

	/// Appends a color from `RRGGBB` or `RRGGBBAA`. An explicit alpha component wins over `alpha`.
	pub fn add_color_from_hex(&mut self, hex: &str, alpha: i32) -> Result<&mut Self, ColorParseError> {
		let mut color: Color = hex.parse()?;

		let trimmed = hex.trim();
		let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
		let digits = digits.strip_prefix("#").unwrap_or(digits);
		if digits.len() == 6 {
			color.a = Color::new(0, 0, 0, alpha).a;
		}

		self.push_color(color);
		Ok(self)
	}

	/// Appends opaque colors from `(r, g, b)` tuples.
	pub fn add_colors_from_list(&mut self, colors: &[(i32, i32, i32)]) -> &mut Self {
		for &(r, g, b) in colors {
			self.push_color(Color::rgb(r, g, b));
		}
		self
	}

	pub fn clear(&mut self) -> &mut Self {
		self.colors.clear();
		self
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	pub fn guess_format<P: AsRef<Path>>(path: P) -> Option<PaletteFormat> {
		let ext = path.as_ref()
			.extension()?
			.to_str()?
			.to_lowercase();

		match ext.as_str() {
			"cls" => Some(PaletteFormat::Cls),
			"hex" => Some(PaletteFormat::Hex),
			"json" => Some(PaletteFormat::Json),
			_ => None
		}
	}

	/// Text formats don't carry a name, so those palettes are named after the file.
	fn name_from_path<P: AsRef<Path>>(path: P) -> String {
		path.as_ref()
			.file_stem()
			.map(|s| s.to_string_lossy().into_owned())
			.unwrap_or_else(|| DEFAULT_PALETTE_NAME.to_string())
	}

	pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Palette, PaletteError> {
		let mut pal = match Self::guess_format(&path) {
			Some(PaletteFormat::Cls) => return Self::from_cls_file(&path),
			Some(PaletteFormat::Hex) => Self::from_hex_file(&path)?,
			Some(PaletteFormat::Json) => Self::from_json_file(&path)?,
			None => return Err(PaletteError::InvalidFile),
		};

		pal.name = Self::name_from_path(&path);
		Ok(pal)
	}

	pub fn load_from_string<S: Into<String>>(s: S, format: PaletteFormat) -> Result<Palette, PaletteError> {
		match format {
			PaletteFormat::Hex => Self::from_hex_string(s.into()),
			PaletteFormat::Json => Self::from_json_string(s.into()),
			PaletteFormat::Cls => Err(PaletteError::UnsupportedFormat),
		}
	}

	pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PaletteError> {
		match Self::guess_format(&path) {
			Some(PaletteFormat::Cls) => self.save_cls_file(&path),
			Some(PaletteFormat::Hex) => Ok(fs::write(&path, self.to_hex_string())?),
			Some(PaletteFormat::Json) => Ok(fs::write(&path, self.to_json_string()?)?),
			None => Err(PaletteError::InvalidFile),
		}
	}
}

impl From<Vec<Color>> for Palette {
	fn from(v: Vec<Color>) -> Self {
		Palette {
			colors: v,
			..Default::default()
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaletteFormat {
	Cls, // .cls
	Hex, // .hex
	Json, // .json
}

impl Display for PaletteFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteFormat::Cls => write!(f, "cls"),
			PaletteFormat::Hex => write!(f, "hex"),
			PaletteFormat::Json => write!(f, "json"),
		}
	}
}
