use image::RgbImage;

use crate::color::{Color, Hsv8};
use crate::error::HueSortError;

/// An image held in the 8-bit HSV encoding, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct HsvImage {
    width: u32,
    height: u32,
    pixels: Vec<Hsv8>,
}

impl HsvImage {
    /// Wrap row-major pixels, rejecting a pixel count that does not match
    /// `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Hsv8>) -> Result<Self, HueSortError> {
        let len = pixels.len();
        if len != (width as usize) * (height as usize) {
            return Err(HueSortError::InvalidPixelBuffer { width, height, len });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Hsv8] {
        &self.pixels
    }

    /// Build a new image of the same size by mapping every pixel.
    pub fn map(&self, f: impl Fn(Hsv8) -> Hsv8) -> HsvImage {
        HsvImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&p| f(p)).collect(),
        }
    }
}

/// Convert every pixel of an RGB image to the 8-bit HSV encoding.
pub fn to_hsv(image: &RgbImage) -> HsvImage {
    HsvImage {
        width: image.width(),
        height: image.height(),
        pixels: image.pixels().map(|&p| Color::from(p).to_hsv8()).collect(),
    }
}

/// Convert an HSV image back to RGB.
pub fn from_hsv(hsv: &HsvImage) -> RgbImage {
    RgbImage::from_fn(hsv.width, hsv.height, |x, y| {
        let idx = (y as usize) * (hsv.width as usize) + x as usize;
        Color::from_hsv8(hsv.pixels[idx]).into()
    })
}

/// Build an RGB image from a raw `[r, g, b, r, g, b, ...]` buffer,
/// rejecting buffers that do not match the dimensions.
#[cfg(test)]
pub(crate) fn image_from_raw(width: u32, height: u32, buf: Vec<u8>) -> Result<RgbImage, HueSortError> {
    let len = buf.len();
    let expected = (width as usize) * (height as usize) * 3;
    if len != expected {
        return Err(HueSortError::InvalidPixelBuffer { width, height, len });
    }
    RgbImage::from_raw(width, height, buf).ok_or(HueSortError::InvalidPixelBuffer {
        width,
        height,
        len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsv_image_keeps_dimensions() {
        let img = RgbImage::from_fn(3, 2, |x, y| image::Rgb([x as u8 * 80, y as u8 * 100, 10]));
        let hsv = to_hsv(&img);
        assert_eq!(hsv.width(), 3);
        assert_eq!(hsv.height(), 2);
        assert_eq!(hsv.pixels().len(), 6);

        let back = from_hsv(&hsv);
        assert_eq!(back.dimensions(), (3, 2));
    }

    #[test]
    fn round_trip_preserves_saturated_pixels() {
        let colors = [[200, 100, 50], [255, 0, 0], [0, 0, 255], [128, 64, 192]];
        let img = RgbImage::from_fn(4, 1, |x, _| image::Rgb(colors[x as usize]));

        let back = from_hsv(&to_hsv(&img));

        for (a, b) in img.pixels().zip(back.pixels()) {
            for c in 0..3 {
                assert!(
                    (a[c] as i16 - b[c] as i16).abs() <= 1,
                    "channel {c} drifted: {a:?} vs {b:?}"
                );
            }
        }
    }

    #[test]
    fn pixel_order_is_row_major() {
        let img = RgbImage::from_fn(2, 2, |x, y| {
            if (x, y) == (1, 0) {
                image::Rgb([255, 0, 0])
            } else {
                image::Rgb([0, 0, 0])
            }
        });
        let hsv = to_hsv(&img);
        assert_eq!(hsv.pixels()[1].v, 255);
        assert_eq!(from_hsv(&hsv).get_pixel(1, 0), &image::Rgb([255, 0, 0]));
    }

    #[test]
    fn raw_buffer_must_match_dimensions() {
        assert!(image_from_raw(2, 2, vec![0; 12]).is_ok());
        let err = image_from_raw(2, 2, vec![0; 11]).unwrap_err();
        assert!(matches!(
            err,
            HueSortError::InvalidPixelBuffer { width: 2, height: 2, len: 11 }
        ));
    }

    #[test]
    fn hsv_pixels_must_match_dimensions() {
        let hsv = HsvImage::new(2, 1, vec![Hsv8 { h: 0, s: 255, v: 255 }; 2]).unwrap();
        assert_eq!(from_hsv(&hsv).get_pixel(1, 0), &image::Rgb([255, 0, 0]));

        let err = HsvImage::new(3, 3, vec![Hsv8::default(); 8]).unwrap_err();
        assert!(matches!(
            err,
            HueSortError::InvalidPixelBuffer { width: 3, height: 3, len: 8 }
        ));
    }
}
