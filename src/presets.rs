use cls_rs::palettes::color::Color;
use cls_rs::palettes::palette::Palette;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum BuiltInPalette {
	Rainbow,
	Pastels,
	Grayscale,
}

impl BuiltInPalette {
	pub(crate) const ALL: [BuiltInPalette; 3] = [BuiltInPalette::Rainbow, BuiltInPalette::Pastels, BuiltInPalette::Grayscale];

	pub(crate) fn file_name(&self) -> &'static str {
		match self {
			BuiltInPalette::Rainbow => "rainbow.cls",
			BuiltInPalette::Pastels => "pastels.cls",
			BuiltInPalette::Grayscale => "grayscale.cls",
		}
	}
}

pub(crate) fn get_builtin_palette(palette: BuiltInPalette) -> Palette {
	match palette {
		BuiltInPalette::Rainbow => {
			let mut pal = Palette::new("Rainbow");
			pal.add_colors_from_list(&[
				(255, 0, 0), // red
				(255, 127, 0), // orange
				(255, 255, 0), // yellow
				(0, 255, 0), // green
				(0, 0, 255), // blue
				(75, 0, 130), // indigo
				(148, 0, 211), // violet
			]);
			pal
		}
		BuiltInPalette::Pastels => {
			let mut pal = Palette::new("Pastel Dreams");
			for c in [0xFFB3BA_u32, 0xFFDFBA, 0xFFFFBA, 0xBAFFC9, 0xBAE1FF] {
				pal.push_color(Color::from(c));
			}
			pal
		}
		BuiltInPalette::Grayscale => {
			let mut pal = Palette::new("Grayscale");
			for i in (0..256).step_by(32) {
				pal.add_color(i, i, i, 255);
			}
			pal
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtin_sizes() {
		assert_eq!(get_builtin_palette(BuiltInPalette::Rainbow).len(), 7);
		assert_eq!(get_builtin_palette(BuiltInPalette::Pastels).len(), 5);

		let grays = get_builtin_palette(BuiltInPalette::Grayscale);
		assert_eq!(grays.len(), 8);
		assert_eq!(grays.colors.last(), Some(&Color::rgb(224, 224, 224)));
	}
}
