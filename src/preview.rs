use colored::Colorize;

use cls_rs::palettes::palette::Palette;

const RULE_WIDTH: usize = 60;
const SWATCH: &str = "█████";

pub(crate) fn print_preview(pal: &Palette) {
	let rule = "=".repeat(RULE_WIDTH);

	println!("\n{rule}");
	println!("Color Set: {}", pal.name.bold());
	println!("Total Colors: {}", pal.len());
	println!("{rule}\n");

	for (i, color) in pal.colors.iter().enumerate() {
		let swatch = SWATCH.truecolor(color.r, color.g, color.b);
		print!("{:>3}. {color} RGB({:3}, {:3}, {:3}) {swatch}", i + 1, color.r, color.g, color.b);

		if !color.is_opaque() {
			print!(" {}", "(transparent)".dimmed());
		}
		println!();
	}

	println!("\n{rule}\n");
}
