use std::fs;
use std::path::PathBuf;

use cls_rs::palettes::color::Color;
use cls_rs::palettes::palette::{Palette, PaletteFormat};

const FILE_FORMATS: [PaletteFormat; 3] = [PaletteFormat::Cls, PaletteFormat::Hex, PaletteFormat::Json];
const TEXT_FORMATS: [PaletteFormat; 2] = [PaletteFormat::Hex, PaletteFormat::Json];

fn test_file(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/palettes").join(name)
}

#[test]
fn palette_parsing() {
	for palette_type in FILE_FORMATS {
		println!("Testing {} from file…", palette_type.to_string().to_uppercase());

		let pal = Palette::load_from_file(test_file(&format!("rainbow.{palette_type}"))).unwrap();

		// text formats are named after the file
		if palette_type == PaletteFormat::Cls {
			assert_eq!(pal.name, "Rainbow");
		} else {
			assert_eq!(pal.name, "rainbow");
		}

		assert_eq!(pal.len(), 7);
		assert_eq!(pal.colors[0].to_string(), "#FF0000");
		assert_eq!(pal.colors[6].to_string(), "#9400D3");
		assert!(pal.colors.iter().all(|c| c.is_opaque()));
	}
}

#[test]
fn palette_parsing_from_string() {
	for palette_type in TEXT_FORMATS {
		println!("Testing {} from String…", palette_type.to_string().to_uppercase());

		let pal_contents = fs::read_to_string(test_file(&format!("rainbow.{palette_type}"))).unwrap();
		let pal = Palette::load_from_string(pal_contents, palette_type).unwrap();

		assert_eq!(pal.len(), 7);
		assert_eq!(pal.colors[1], Color::rgb(255, 127, 0));
	}
}

#[test]
#[should_panic(expected = "UnsupportedFormat")]
fn binary_format_from_string() {
	Palette::load_from_string("SLCC", PaletteFormat::Cls).unwrap();
}

#[test]
#[should_panic(expected = "InvalidFile")]
fn unknown_extension() {
	Palette::load_from_file(test_file("rainbow.gpl")).unwrap();
}

#[test]
#[should_panic(expected = "InvalidTextLine { line: 2, msg: \"Not a hexadecimal color value\" }")]
fn palette_parsing_broken_hex() {
	Palette::load_from_file(test_file("broken.hex")).unwrap();
}

#[test]
#[should_panic(expected = "InvalidJsonEntry { index: 1, msg: \"\\\"not a color\\\" is not a valid hexadecimal color value\" }")]
fn palette_parsing_broken_json() {
	Palette::load_from_file(test_file("broken.json")).unwrap();
}

#[test]
fn save_and_reload() {
	let dir = tempfile::tempdir().unwrap();

	let mut pal = Palette::new("Grayscale");
	for i in (0..256).step_by(32) {
		pal.add_color(i, i, i, 255);
	}
	pal.add_color(10, 20, 30, 0);

	for palette_type in FILE_FORMATS {
		let path = dir.path().join(format!("Grayscale.{palette_type}"));
		pal.save_to_file(&path).unwrap();

		let reloaded = Palette::load_from_file(&path).unwrap();
		assert_eq!(reloaded, pal, "{palette_type}");
	}

	let hex = fs::read_to_string(dir.path().join("Grayscale.hex")).unwrap();
	assert!(hex.starts_with("000000\n202020\n"));
	assert!(hex.ends_with("0A141E00\n"));
}

#[test]
fn renaming_keeps_colors() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("renamed.cls");

	let mut pal = Palette::load_from_file(test_file("rainbow.json")).unwrap();
	pal.name = "Regenbogen – 彩虹".to_string();
	pal.save_cls_file(&path).unwrap();

	let reloaded = Palette::from_cls_file(&path).unwrap();
	assert_eq!(reloaded.name, "Regenbogen – 彩虹");
	assert_eq!(reloaded.colors, pal.colors);
}
