use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Sort images into folders by their closest matching named color.
#[derive(Parser, Debug)]
#[command(name = "hue-sort", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand, Debug)]
pub enum Action {
    /// Generate recolored copies of a prototype image, then sort them
    Generate {
        /// Number of generated images
        #[arg(long, default_value_t = 10)]
        count: usize,

        /// File name of the prototype image inside --path
        #[arg(long)]
        filename: Option<String>,

        /// How saturation factors are drawn
        #[arg(long, value_enum, default_value_t = SaturationMode::Continuous)]
        saturation: SaturationMode,

        /// Seed for reproducible generation (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        common: CommonArgs,
    },
    /// Sort the images already present in --path
    UseExisting {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(ClapArgs, Debug)]
pub struct CommonArgs {
    /// Folder containing the sample image(s)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Folder that receives one subfolder per color
    #[arg(long, default_value = "colors")]
    pub dest: PathBuf,

    /// Where the named reference colors come from
    #[arg(long, value_enum, default_value_t = PaletteKind::Builtin)]
    pub palette: PaletteKind,

    /// Show debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Action {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Action::Generate { common, .. } | Action::UseExisting { common } => common,
        }
    }
}

/// How the saturation scale factor of a synthesized copy is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SaturationMode {
    /// Uniform in `[0, 1)`
    #[default]
    Continuous,
    /// One of a few fixed factors, biased toward full saturation
    Snapped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PaletteKind {
    /// The 16 basic HTML colors, no network needed
    Builtin,
    /// Fetch the basic color table from the Web colors article
    Web,
}
