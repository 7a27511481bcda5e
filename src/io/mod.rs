/// Command-line parsing and batch output
pub mod cli;
/// Generation parameters, defaults and validation
pub mod configuration;
/// Error types
pub mod error;
/// PNG preview export
pub mod image;
/// Colors shared by the renderers
pub mod palette;
/// Batch progress display
pub mod progress;
/// SVG map rendering
pub mod svg;
