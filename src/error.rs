use thiserror::Error;

/// Errors raised by the color-matching core and the palette sources.
#[derive(Debug, Error)]
pub enum HueSortError {
    #[error("reference palette is empty; no color can be matched")]
    EmptyPalette,

    #[error("image has no pixels")]
    EmptyImage,

    #[error("pixel buffer of {len} values does not fit a {width}x{height} image")]
    InvalidPixelBuffer { width: u32, height: u32, len: usize },

    #[error("failed to parse reference palette: {0}")]
    PaletteParse(String),

    #[error("failed to fetch reference palette")]
    PaletteFetch(#[from] reqwest::Error),
}
