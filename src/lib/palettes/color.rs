use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A single RGBA color. Channels are plain bytes, so a [Color] can never hold an out-of-range value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: u8,
}

impl Default for Color {
	fn default() -> Self {
		Self { r: 0, g: 0, b: 0, a: 255 }
	}
}

fn clamp_channel(v: i32) -> u8 {
	v.clamp(0, 255) as u8
}

impl Color {
	/// Creates a color, silently clamping every channel into 0..=255.
	pub fn new(r: i32, g: i32, b: i32, a: i32) -> Self {
		Self {
			r: clamp_channel(r),
			g: clamp_channel(g),
			b: clamp_channel(b),
			a: clamp_channel(a),
		}
	}

	/// Creates a fully opaque color.
	pub fn rgb(r: i32, g: i32, b: i32) -> Self {
		Self::new(r, g, b, 255)
	}

	/// Clip Studio Paint treats any non-zero alpha as fully opaque.
	pub fn is_opaque(&self) -> bool {
		self.a != 0
	}

	pub fn to_hex_rgba(&self) -> String {
		format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
	}
}

impl From<[u8; 4]> for Color {
	fn from(v: [u8; 4]) -> Self {
		Self {
			r: v[0],
			g: v[1],
			b: v[2],
			a: v[3],
		}
	}
}

impl From<u32> for Color {
	fn from(v: u32) -> Self {
		Self {
			r: ((v >> 16) & 0xFF) as u8,
			g: ((v >> 8) & 0xFF) as u8,
			b: (v & 0xFF) as u8,
			a: 255,
		}
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut rgb = self.r as u32;
		rgb = (rgb << 8) | self.g as u32;
		rgb = (rgb << 8) | self.b as u32;
		write!(f, "#{:06X}", rgb)
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorParseError(pub String);

impl Display for ColorParseError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "\"{}\" is not a valid hexadecimal color value", self.0)
	}
}

impl Error for ColorParseError {}

impl FromStr for Color {
	type Err = ColorParseError;

	/// Accepts `RRGGBB` and `RRGGBBAA`, optionally prefixed with `#` or `0x`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		let stripped = trimmed.strip_prefix("0x").unwrap_or(trimmed);
		let stripped = stripped.strip_prefix("#").unwrap_or(stripped);

		if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
			return Err(ColorParseError(stripped.to_string()));
		}

		let parsed_int = u32::from_str_radix(stripped, 16)
			.map_err(|_| ColorParseError(stripped.to_string()))?;

		match stripped.len() {
			6 => Ok(Color::from(parsed_int)),
			8 => Ok(Color::from(parsed_int.to_be_bytes())),
			_ => Err(ColorParseError(stripped.to_string())),
		}
	}
}
