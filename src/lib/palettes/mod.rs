pub mod color;
pub mod error;
pub(crate) mod pal_cls;
pub(crate) mod pal_hex;
pub(crate) mod pal_json;
pub mod palette;

pub use pal_cls::{decode, decode_strict, encode};

/// Default name given to palettes that weren't named explicitly.
pub const DEFAULT_PALETTE_NAME: &str = "Custom Palette";
