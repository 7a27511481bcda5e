//! Seeded procedural dungeon map generation
//!
//! A seed string and a handful of parameters produce a deterministic raster of
//! rooms, doors, corridors and stairs, which is then drawn as an SVG document.

#![forbid(unsafe_code)]

/// Generation pipeline: rooms, doors, corridors, stairs and cleanup
pub mod algorithm;
/// Configuration, rendering, command line and error handling
pub mod io;
/// Seeded random source
pub mod math;
/// Cell flags, directions and the dungeon grid
pub mod spatial;

pub use algorithm::executor::Dungeon;
pub use io::configuration::{DungeonConfig, DungeonLayout, RoomLayout};
pub use io::error::{DungeonError, Result};
pub use io::svg::RenderStyle;

/// Generate a dungeon and render it to SVG text
///
/// # Errors
///
/// Returns `InvalidParameter` if the configuration is rejected
pub fn generate(config: &DungeonConfig) -> Result<String> {
    let dungeon = Dungeon::generate(config)?;
    Ok(io::svg::render(&dungeon, &RenderStyle::from_config(config)))
}
