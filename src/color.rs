use anyhow::{bail, Result};
use palette::{FromColor, Hsv, Srgb};

/// Largest hue that fits the 8-bit HSV encoding (two degrees per step).
pub const MAX_HUE: u8 = 179;

/// Number of distinct encoded hues; adding this many steps is a full turn.
pub const HUE_RANGE: u16 = 180;

/// Core color type used throughout the pipeline.
/// Wraps sRGB u8 components; channel order is R, G, B everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A pixel in the 8-bit HSV encoding.
///
/// Hue covers `0..=179` (degrees halved), saturation and value cover `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hsv8 {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like `#ff8800` or `#FF8800`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            bail!(
                "invalid hex color: expected 6 hex digits, got {}",
                hex.len()
            );
        }
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Self { r, g, b })
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as a floating-point triple, the representation used for comparison.
    pub fn to_triple(self) -> [f64; 3] {
        [self.r as f64, self.g as f64, self.b as f64]
    }

    /// Convert to the 8-bit HSV encoding.
    ///
    /// Greyscale and black pixels get hue 0 (and saturation 0).
    pub fn to_hsv8(self) -> Hsv8 {
        let srgb: Srgb<f32> = Srgb::new(self.r, self.g, self.b).into_format();
        let hsv: Hsv = Hsv::from_color(srgb);

        let s = (hsv.saturation.clamp(0.0, 1.0) * 255.0).round() as u8;
        let v = (hsv.value.clamp(0.0, 1.0) * 255.0).round() as u8;
        let h = if s == 0 {
            0
        } else {
            let half_degrees = (hsv.hue.into_positive_degrees() / 2.0).round() as u16;
            (half_degrees % HUE_RANGE) as u8
        };

        Hsv8 { h, s, v }
    }

    /// Convert back from the 8-bit HSV encoding.
    pub fn from_hsv8(hsv: Hsv8) -> Self {
        let hsv: Hsv = Hsv::new(
            hsv.h as f32 * 2.0,
            hsv.s as f32 / 255.0,
            hsv.v as f32 / 255.0,
        );
        let srgb_f32: Srgb<f32> = Srgb::from_color(hsv);
        Self::from_srgb_f32_clamped(srgb_f32)
    }

    /// Clamp an Srgb<f32> to [0, 1] and convert to Color.
    fn from_srgb_f32_clamped(srgb: Srgb<f32>) -> Self {
        let r = (srgb.red.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (srgb.green.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (srgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { r, g, b }
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(px: image::Rgb<u8>) -> Self {
        Self::new(px[0], px[1], px[2])
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(c: Color) -> Self {
        image::Rgb([c.r, c.g, c.b])
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    fn assert_close(original: Color, recovered: Color, tolerance: u16) {
        for (name, a, b) in [
            ("R", original.r, recovered.r),
            ("G", original.g, recovered.g),
            ("B", original.b, recovered.b),
        ] {
            assert!(
                (a as i16 - b as i16).unsigned_abs() <= tolerance,
                "{name} mismatch for {original:?}: {a} vs {b}"
            );
        }
    }

    #[test]
    fn primaries_map_to_expected_hues() {
        assert_eq!(Color::new(255, 0, 0).to_hsv8(), Hsv8 { h: 0, s: 255, v: 255 });
        assert_eq!(Color::new(0, 255, 0).to_hsv8(), Hsv8 { h: 60, s: 255, v: 255 });
        assert_eq!(Color::new(0, 0, 255).to_hsv8(), Hsv8 { h: 120, s: 255, v: 255 });
    }

    #[test]
    fn black_and_grey_have_zero_hue_and_saturation() {
        assert_eq!(BLACK.to_hsv8(), Hsv8 { h: 0, s: 0, v: 0 });
        let grey = Color::new(90, 90, 90).to_hsv8();
        assert_eq!(grey.h, 0);
        assert_eq!(grey.s, 0);
        assert_eq!(grey.v, 90);
        assert_eq!(WHITE.to_hsv8(), Hsv8 { h: 0, s: 0, v: 255 });
    }

    #[test]
    fn hue_never_exceeds_encoding() {
        // Hue just below 360 degrees rounds up to a full turn and must wrap.
        let hsv = Color::new(255, 0, 1).to_hsv8();
        assert!(hsv.h <= MAX_HUE, "hue out of range: {}", hsv.h);
    }

    #[test]
    fn hsv_round_trip_on_even_degree_hues() {
        let colors = [
            Color::new(255, 0, 0),
            Color::new(0, 255, 0),
            Color::new(0, 0, 255),
            Color::new(200, 100, 50),
            Color::new(50, 200, 200),
            Color::new(128, 64, 192),
            Color::new(128, 128, 128),
            BLACK,
            WHITE,
        ];
        for original in colors {
            let recovered = Color::from_hsv8(original.to_hsv8());
            assert_close(original, recovered, 1);
        }
    }

    #[test]
    fn hsv_round_trip_error_is_bounded_by_hue_step() {
        // A 2-degree hue step moves the middle channel by at most chroma / 60.
        let colors = [
            Color::new(17, 203, 99),
            Color::new(250, 31, 140),
            Color::new(3, 77, 141),
        ];
        for original in colors {
            let recovered = Color::from_hsv8(original.to_hsv8());
            assert_close(original, recovered, 5);
        }
    }

    #[test]
    fn hex_round_trip() {
        let original = Color::from_hex("#FF8800").unwrap();
        assert_eq!(original, Color::new(255, 136, 0));
        assert_eq!(original.to_hex(), "#ff8800");
    }

    #[test]
    fn hex_without_hash() {
        assert_eq!(Color::from_hex("008080").unwrap(), Color::new(0, 128, 128));
    }

    #[test]
    fn hex_invalid_input() {
        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("#gggggg").is_err());
        assert!(Color::from_hex("n/a").is_err());
    }

    #[test]
    fn display_matches_to_hex() {
        let color = Color::new(171, 205, 239);
        assert_eq!(format!("{color}"), color.to_hex());
    }

    #[test]
    fn triple_keeps_channel_order() {
        assert_eq!(Color::new(1, 2, 3).to_triple(), [1.0, 2.0, 3.0]);
    }
}
