use std::fs;
use std::io::Cursor;
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::palettes::color::Color;
use crate::palettes::error::{FormatError, PaletteError};
use crate::palettes::palette::Palette;

// https://github.com/Equbuxu/CLSEncoderDecoder

const SIGNATURE: &[u8; 4] = b"SLCC";
const VERSION: u16 = 256;
const CHANNEL_COUNT: u32 = 4;
/// Payload size of a color block, excluding its own length field.
const COLOR_BLOCK_LENGTH: u32 = 8;
const COLOR_ENTRY_SIZE: usize = 12;
const ASCII_PLACEHOLDER: u8 = b'?';

/// Both name fields carry u16 byte lengths.
fn fit_name(name: &str) -> &str {
	let max = u16::MAX as usize;
	if name.len() <= max {
		return name;
	}

	let mut end = max;
	while !name.is_char_boundary(end) {
		end -= 1;
	}
	&name[..end]
}

fn to_ascii_lossy(name: &str) -> Vec<u8> {
	name.chars()
		.map(|c| if c.is_ascii() { c as u8 } else { ASCII_PLACEHOLDER })
		.collect()
}

fn from_ascii_lossy(bytes: &[u8]) -> String {
	bytes.iter()
		.map(|&b| if b.is_ascii() { b as char } else { char::REPLACEMENT_CHARACTER })
		.collect()
}

fn put_u16(buf: &mut Vec<u8>, v: u16) {
	buf.extend_from_slice(&v.to_le_bytes());
}

fn put_u32(buf: &mut Vec<u8>, v: u32) {
	buf.extend_from_slice(&v.to_le_bytes());
}

/// Serializes a color set into the `.cls` byte layout.
///
/// Names longer than 65535 UTF-8 bytes are cut at the last character boundary that still fits.
pub fn encode(name: &str, colors: &[Color]) -> Vec<u8> {
	let name = fit_name(name);
	let ascii_name = to_ascii_lossy(name);
	let utf8_name = name.as_bytes();

	let header_length = 2 + ascii_name.len() + 4 + 2 + utf8_name.len();
	let colors_length = colors.len() * COLOR_ENTRY_SIZE;

	let mut buf = Vec::with_capacity(SIGNATURE.len() + 2 + 4 + header_length + 12 + colors_length);

	buf.extend_from_slice(SIGNATURE);
	put_u16(&mut buf, VERSION);

	put_u32(&mut buf, header_length as u32);
	put_u16(&mut buf, ascii_name.len() as u16);
	buf.extend_from_slice(&ascii_name);
	put_u32(&mut buf, 0);
	put_u16(&mut buf, utf8_name.len() as u16);
	buf.extend_from_slice(utf8_name);

	put_u32(&mut buf, CHANNEL_COUNT);
	put_u32(&mut buf, colors.len() as u32);
	put_u32(&mut buf, colors_length as u32);

	for color in colors {
		put_u32(&mut buf, COLOR_BLOCK_LENGTH);
		buf.extend_from_slice(&[color.r, color.g, color.b, color.a]);
		put_u32(&mut buf, 0);
	}

	buf
}

struct ClsReader<'a> {
	cursor: Cursor<&'a [u8]>,
}

impl<'a> ClsReader<'a> {
	fn new(data: &'a [u8]) -> Self {
		Self { cursor: Cursor::new(data) }
	}

	fn position(&self) -> usize {
		self.cursor.position() as usize
	}

	fn remaining(&self) -> usize {
		self.cursor.get_ref().len().saturating_sub(self.position())
	}

	// an in-memory cursor can only fail by running out of data
	fn u16(&mut self) -> Result<u16, FormatError> {
		self.cursor.read_u16::<LittleEndian>().map_err(|_| FormatError::Truncated)
	}

	fn u32(&mut self) -> Result<u32, FormatError> {
		self.cursor.read_u32::<LittleEndian>().map_err(|_| FormatError::Truncated)
	}

	fn bytes(&mut self, len: usize) -> Result<&'a [u8], FormatError> {
		if len > self.remaining() {
			return Err(FormatError::Truncated);
		}

		let data: &'a [u8] = *self.cursor.get_ref();
		let start = self.position();
		self.cursor.set_position((start + len) as u64);
		Ok(&data[start..start + len])
	}
}

fn decode_internal(data: &[u8], strict: bool) -> Result<(String, Vec<Color>), FormatError> {
	let mut reader = ClsReader::new(data);

	// a short prefix that doesn't spell out the signature is still the wrong file type
	let sig = reader.bytes(SIGNATURE.len().min(data.len()))?;
	if sig != SIGNATURE {
		return Err(FormatError::BadSignature);
	}

	let version = reader.u16()?;
	if version != VERSION {
		log::warn!("Unexpected version marker {version:#06X}, reading anyway");
	}

	let header_length = reader.u32()?;
	let header_start = reader.position();

	let ascii_len = reader.u16()? as usize;
	let ascii_name = from_ascii_lossy(reader.bytes(ascii_len)?);
	reader.u32()?; // reserved
	let utf8_len = reader.u16()? as usize;
	let utf8_name = String::from_utf8_lossy(reader.bytes(utf8_len)?).into_owned();

	let consumed = (reader.position() - header_start) as u32;
	log::debug!("Header: version {version}, declared length {header_length}, actual length {consumed}");
	if consumed != header_length {
		if strict {
			return Err(FormatError::HeaderLengthMismatch { declared: header_length, actual: consumed });
		}
		log::warn!("Header length mismatch: declared {header_length}, found {consumed}");
	}

	let name = if utf8_name.is_empty() { ascii_name } else { utf8_name };

	let channels = reader.u32()?;
	if channels != CHANNEL_COUNT {
		log::warn!("Unexpected channel count {channels}");
	}

	let color_count = reader.u32()? as usize;
	let colors_length = reader.u32()?;
	if colors_length as u64 != color_count as u64 * COLOR_ENTRY_SIZE as u64 {
		log::warn!("Colors section length {colors_length} doesn't match {color_count} colors");
	}
	log::debug!("Color set \"{name}\" declares {color_count} colors");

	// the declared count can't be trusted to size the allocation
	let mut colors = Vec::with_capacity(color_count.min(reader.remaining() / COLOR_ENTRY_SIZE));
	for i in 0..color_count {
		let block_length = reader.u32()?;
		if block_length != COLOR_BLOCK_LENGTH {
			log::debug!("Color {i} has block length {block_length}");
		}

		let rgba = reader.bytes(4)?;
		colors.push(Color::from([rgba[0], rgba[1], rgba[2], rgba[3]]));
		reader.u32()?; // reserved
	}

	if reader.remaining() > 0 {
		log::debug!("Ignoring {} trailing bytes", reader.remaining());
	}

	Ok((name, colors))
}

/// Parses the `.cls` byte layout. Length, version and reserved fields are read but not validated.
pub fn decode(data: &[u8]) -> Result<(String, Vec<Color>), FormatError> {
	decode_internal(data, false)
}

/// Like [decode], but also rejects files whose declared header length disagrees with the name fields.
pub fn decode_strict(data: &[u8]) -> Result<(String, Vec<Color>), FormatError> {
	decode_internal(data, true)
}

impl Palette {
	pub fn to_cls_bytes(&self) -> Vec<u8> {
		encode(&self.name, &self.colors)
	}

	pub fn from_cls_bytes(data: &[u8]) -> Result<Palette, FormatError> {
		let (name, colors) = decode(data)?;
		Ok(Palette { name, colors })
	}

	pub fn from_cls_bytes_strict(data: &[u8]) -> Result<Palette, FormatError> {
		let (name, colors) = decode_strict(data)?;
		Ok(Palette { name, colors })
	}

	pub fn from_cls_file<P: AsRef<Path>>(path: P) -> Result<Palette, PaletteError> {
		let data = fs::read(path)?;
		Ok(Self::from_cls_bytes(&data)?)
	}

	pub fn from_cls_file_strict<P: AsRef<Path>>(path: P) -> Result<Palette, PaletteError> {
		let data = fs::read(path)?;
		Ok(Self::from_cls_bytes_strict(&data)?)
	}

	pub fn save_cls_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PaletteError> {
		fs::write(path, self.to_cls_bytes())?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ascii_placeholder() {
		assert_eq!(to_ascii_lossy("Rainbow"), b"Rainbow");
		assert_eq!(to_ascii_lossy("火山 A"), b"?? A");
		assert_eq!(from_ascii_lossy(b"a\xFFb"), "a\u{FFFD}b");
	}

	#[test]
	fn long_names_are_cut_on_char_boundaries() {
		let name = "é".repeat(40_000);
		let fitted = fit_name(&name);
		assert_eq!(fitted.len(), 65_534);
		assert_eq!(fitted.chars().count(), 32_767);
		assert_eq!(fit_name("short"), "short");
	}

	#[test]
	fn header_length_counts_bytes() {
		let bytes = encode("火山", &[]);
		// 2 + 2 ("??") + 4 + 2 + 6 (UTF-8)
		assert_eq!(&bytes[6..10], &16_u32.to_le_bytes());
		assert_eq!(&bytes[10..12], &2_u16.to_le_bytes());
		assert_eq!(&bytes[12..14], b"??");
		assert_eq!(&bytes[18..20], &6_u16.to_le_bytes());
		assert_eq!(&bytes[20..26], "火山".as_bytes());
	}

	#[test]
	fn huge_declared_count_is_truncated_not_allocated() {
		let mut bytes = encode("x", &[]);
		let count_offset = bytes.len() - 8;
		bytes[count_offset..count_offset + 4].copy_from_slice(&u32::MAX.to_le_bytes());
		assert_eq!(decode(&bytes), Err(FormatError::Truncated));
	}
}
