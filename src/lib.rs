pub mod cli;
pub mod color;
pub mod error;
pub mod palette_source;
pub mod pipeline;
