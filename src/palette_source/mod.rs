pub mod builtin;
pub mod web;

pub use builtin::BuiltinPalette;
pub use web::WebColorsSource;

use crate::cli::PaletteKind;
use crate::error::HueSortError;
use crate::pipeline::classify::ReferencePalette;

/// Something that can supply the named reference colors for a run.
pub trait PaletteSource {
    /// Human-readable source name, used in logs.
    fn name(&self) -> &str;

    /// Produce the palette. Called once per run.
    fn fetch(&self) -> Result<ReferencePalette, HueSortError>;
}

/// The source selected on the command line.
pub fn source_for(kind: PaletteKind) -> Box<dyn PaletteSource> {
    match kind {
        PaletteKind::Builtin => Box::new(BuiltinPalette),
        PaletteKind::Web => Box::new(WebColorsSource::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_names() {
        assert_eq!(source_for(PaletteKind::Builtin).name(), "builtin");
        assert_eq!(source_for(PaletteKind::Web).name(), "web colors");
    }
}
