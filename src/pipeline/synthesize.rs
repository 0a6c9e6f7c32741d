use std::path::Path;

use anyhow::{Context, Result};
use image::RgbImage;
use rand::Rng;
use tracing::{debug, info};

use crate::cli::SaturationMode;
use crate::color::{Hsv8, HUE_RANGE, MAX_HUE};
use crate::pipeline::hsv::{from_hsv, to_hsv, HsvImage};
use crate::pipeline::ImageCollection;

/// Prototype looked up in the sample directory when none is named.
pub const DEFAULT_PROTOTYPE: &str = "04-nature_721703848.jpg";

/// Extension given to every synthesized copy.
pub const COPY_EXTENSION: &str = "jpg";

/// Saturation factors for [`SaturationMode::Snapped`]; full saturation is drawn most often.
const SNAPPED_SATURATION: [f32; 6] = [0.25, 0.5, 0.75, 1.0, 1.0, 1.0];

/// One randomly drawn recoloring, applied uniformly to every pixel of a copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perturbation {
    /// Added to every hue, in encoded steps (`0..=179`).
    pub hue_shift: u8,
    /// Multiplies every saturation.
    pub saturation_scale: f32,
    /// Multiplies every value.
    pub value_scale: f32,
}

impl Perturbation {
    /// Draw a perturbation from `rng`.
    ///
    /// The value factor is the square root of a uniform draw, so brighter
    /// copies are more likely than darker ones.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R, mode: SaturationMode) -> Self {
        let hue_shift = rng.gen_range(0..=MAX_HUE);
        let saturation_scale = match mode {
            SaturationMode::Continuous => rng.gen::<f32>(),
            SaturationMode::Snapped => {
                SNAPPED_SATURATION[rng.gen_range(0..SNAPPED_SATURATION.len())]
            }
        };
        let value_scale = rng.gen::<f32>().sqrt();

        Self {
            hue_shift,
            saturation_scale,
            value_scale,
        }
    }

    /// Apply to a single pixel. Scaled channels are truncated, not rounded.
    pub fn apply(&self, px: Hsv8) -> Hsv8 {
        let mut h = px.h as u16 + self.hue_shift as u16;
        if h > MAX_HUE as u16 {
            h -= HUE_RANGE;
        }
        Hsv8 {
            h: h as u8,
            s: (px.s as f32 * self.saturation_scale) as u8,
            v: (px.v as f32 * self.value_scale) as u8,
        }
    }

    pub fn apply_to_hsv(&self, hsv: &HsvImage) -> HsvImage {
        hsv.map(|px| self.apply(px))
    }

    pub fn apply_to_image(&self, image: &RgbImage) -> RgbImage {
        from_hsv(&self.apply_to_hsv(&to_hsv(image)))
    }
}

/// Name of the `index`-th synthesized copy: `copy0.jpg`, `copy1.jpg`, ...
pub fn copy_name(index: usize) -> String {
    format!("copy{index}.{COPY_EXTENSION}")
}

/// Produce `count` independently recolored copies of `prototype`.
pub fn synthesize<R: Rng + ?Sized>(
    prototype: &RgbImage,
    count: usize,
    mode: SaturationMode,
    rng: &mut R,
) -> ImageCollection {
    let mut images = ImageCollection::new();
    if count == 0 {
        return images;
    }

    let hsv = to_hsv(prototype);
    for i in 0..count {
        let perturbation = Perturbation::draw(rng, mode);
        debug!(copy = i, ?perturbation, "synthesizing copy");
        images.insert(copy_name(i), from_hsv(&perturbation.apply_to_hsv(&hsv)));
    }
    images
}

/// Load the prototype `dir/filename` and synthesize `count` copies of it.
pub fn generate_images<R: Rng + ?Sized>(
    dir: &Path,
    filename: Option<&str>,
    count: usize,
    mode: SaturationMode,
    rng: &mut R,
) -> Result<ImageCollection> {
    let path = dir.join(filename.unwrap_or(DEFAULT_PROTOTYPE));
    let prototype = image::open(&path)
        .with_context(|| format!("failed to load prototype image: {}", path.display()))?
        .to_rgb8();

    let images = synthesize(&prototype, count, mode, rng);
    info!(count = images.len(), prototype = %path.display(), "generated image copies");
    Ok(images)
}
