use image::RgbImage;

use crate::error::HueSortError;

/// Mean of each channel over all pixels, in the image's channel order (R, G, B).
///
/// A flat mean over the grid; equal to the mean of row means since every row
/// has the same width.
pub fn average_color(image: &RgbImage) -> Result<[f64; 3], HueSortError> {
    let count = image.width() as u64 * image.height() as u64;
    if count == 0 {
        return Err(HueSortError::EmptyImage);
    }

    let mut sums = [0u64; 3];
    for px in image.pixels() {
        for (sum, &channel) in sums.iter_mut().zip(px.0.iter()) {
            *sum += channel as u64;
        }
    }

    let n = count as f64;
    Ok(sums.map(|s| s as f64 / n))
}
