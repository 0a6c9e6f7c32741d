pub mod average;
pub mod classify;
pub mod collect;
pub mod hsv;
pub mod sort;
pub mod synthesize;

use std::collections::BTreeMap;

use image::RgbImage;

/// Images keyed by file name, unique within a run.
pub type ImageCollection = BTreeMap<String, RgbImage>;
