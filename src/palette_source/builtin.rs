use tracing::debug;

use crate::color::Color;
use crate::error::HueSortError;
use crate::pipeline::classify::ReferencePalette;

use super::PaletteSource;

/// The 16 basic HTML colors, in the order the HTML 4.01 table lists them.
const BASIC_COLORS: [(&str, Color); 16] = [
    ("White", Color { r: 255, g: 255, b: 255 }),
    ("Silver", Color { r: 192, g: 192, b: 192 }),
    ("Gray", Color { r: 128, g: 128, b: 128 }),
    ("Black", Color { r: 0, g: 0, b: 0 }),
    ("Red", Color { r: 255, g: 0, b: 0 }),
    ("Maroon", Color { r: 128, g: 0, b: 0 }),
    ("Yellow", Color { r: 255, g: 255, b: 0 }),
    ("Olive", Color { r: 128, g: 128, b: 0 }),
    ("Lime", Color { r: 0, g: 255, b: 0 }),
    ("Green", Color { r: 0, g: 128, b: 0 }),
    ("Aqua", Color { r: 0, g: 255, b: 255 }),
    ("Teal", Color { r: 0, g: 128, b: 128 }),
    ("Blue", Color { r: 0, g: 0, b: 255 }),
    ("Navy", Color { r: 0, g: 0, b: 128 }),
    ("Fuchsia", Color { r: 255, g: 0, b: 255 }),
    ("Purple", Color { r: 128, g: 0, b: 128 }),
];

/// Offline palette of the basic web colors.
pub struct BuiltinPalette;

impl PaletteSource for BuiltinPalette {
    fn name(&self) -> &str {
        "builtin"
    }

    fn fetch(&self) -> Result<ReferencePalette, HueSortError> {
        let mut palette = ReferencePalette::new();
        for (name, color) in BASIC_COLORS {
            debug!(name, color = %color, "reference color");
            palette.insert_color(name, color);
        }
        Ok(palette)
    }
}
