use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised while decoding the binary `.cls` layout.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
	BadSignature,
	Truncated,
	/// Only reported by the strict decoder.
	HeaderLengthMismatch { declared: u32, actual: u32 },
}

impl Display for FormatError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			FormatError::BadSignature => write!(f, "bad signature"),
			FormatError::Truncated => write!(f, "truncated"),
			FormatError::HeaderLengthMismatch { declared, actual } => {
				write!(f, "header length mismatch (declared {declared}, found {actual})")
			}
		}
	}
}

impl Error for FormatError {}

#[derive(Debug)]
pub enum PaletteError {
	Format(FormatError),
	UnsupportedFormat,
	InvalidFile,
	InvalidTextLine { line: usize, msg: String },
	InvalidJsonEntry { index: usize, msg: String },
	IoErr(std::io::Error),
}

impl Display for PaletteError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteError::Format(e) => write!(f, "Invalid color set file: {e}"),
			PaletteError::UnsupportedFormat => write!(f, "Tried reading a binary format as text or vice versa, which is not supported"),
			PaletteError::InvalidFile => write!(f, "Invalid file"),
			PaletteError::InvalidTextLine { line, msg } => write!(f, "Invalid data in line {line}: {msg}"),
			PaletteError::InvalidJsonEntry { index, msg } => write!(f, "Invalid JSON array item at index {index}: {msg}"),
			PaletteError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl Error for PaletteError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			PaletteError::Format(e) => Some(e),
			PaletteError::IoErr(e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for PaletteError {
	fn from(e: std::io::Error) -> Self {
		PaletteError::IoErr(e)
	}
}

impl From<FormatError> for PaletteError {
	fn from(e: FormatError) -> Self {
		PaletteError::Format(e)
	}
}

impl From<serde_json::Error> for PaletteError {
	fn from(_: serde_json::Error) -> Self {
		PaletteError::InvalidFile
	}
}
