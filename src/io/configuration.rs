//! Generation parameters, runtime defaults and validation

use clap::ValueEnum;

use crate::io::error::{Result, invalid_parameter};

/// Highest room id a single generation may allocate
pub const MAX_ROOMS: usize = 999;

// Door kind roll table: arch, open, locked, trapped, secret, portcullis
/// Exclusive upper bound of the door kind roll
pub const DOOR_ROLL_RANGE: usize = 110;

/// Default seed string
pub const DEFAULT_SEED: &str = "dungeon";
/// Default step rows
pub const DEFAULT_ROW_COUNT: usize = 39;
/// Default step columns
pub const DEFAULT_COLUMN_COUNT: usize = 39;
/// Default smallest room side (cells)
pub const DEFAULT_MINIMUM_ROOM_SIZE: usize = 3;
/// Default largest room side (cells)
pub const DEFAULT_MAXIMUM_ROOM_SIZE: usize = 9;
/// Default chance of continuing a corridor straight
pub const DEFAULT_CORRIDOR_LAYOUT: i32 = 50;
/// Default chance of collapsing a dead end
pub const DEFAULT_REMOVE_DEADENDS_RATIO: i32 = 50;
/// Default number of stairs
pub const DEFAULT_STAIR_COUNT: usize = 2;
/// Default rendered cell size in pixels
pub const DEFAULT_CELL_SIZE: u32 = 18;

/// Status lines shown below the batch progress bar
pub const MAX_VISIBLE_MAPS: usize = 5;
/// Pixels per grid cell in PNG previews
pub const PNG_PIXELS_PER_CELL: u32 = 4;
/// Vector output extension
pub const SVG_EXTENSION: &str = "svg";
/// Raster preview extension
pub const PNG_EXTENSION: &str = "png";

/// Overall dungeon silhouette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DungeonLayout {
    /// Use the full rectangle
    #[default]
    None,
    /// Rectangle with the central ninth blocked
    Box,
    /// Plus-shaped outline
    Cross,
    /// Circle inscribed in the grid
    Round,
}

/// Room placement strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RoomLayout {
    /// Fixed number of random placements
    #[default]
    Scattered,
    /// One attempt per lattice slot
    Packed,
}

/// Validated generation and rendering parameters
#[derive(Debug, Clone, PartialEq)]
pub struct DungeonConfig {
    /// Seed string keying the random stream
    pub seed: String,
    /// Step rows (must be odd)
    pub row_count: usize,
    /// Step columns (must be odd)
    pub column_count: usize,
    /// Dungeon silhouette
    pub dungeon_layout: DungeonLayout,
    /// Smallest room side in cells
    pub minimum_room_size: usize,
    /// Largest room side in cells
    pub maximum_room_size: usize,
    /// Room placement strategy
    pub room_layout: RoomLayout,
    /// Percent chance of continuing in the previous direction (0-100)
    pub corridor_layout: i32,
    /// Percent of dead ends to collapse (0-100)
    pub remove_deadends_ratio: i32,
    /// Stairs to place
    pub add_stair_count: usize,
    /// Rendered cell size in pixels
    pub cell_size: u32,
    /// Extra margin around the drawing in pixels
    pub map_padding: u32,
    /// Multiplier applied to the cell size when rendering
    pub scale: f32,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED.to_string(),
            row_count: DEFAULT_ROW_COUNT,
            column_count: DEFAULT_COLUMN_COUNT,
            dungeon_layout: DungeonLayout::None,
            minimum_room_size: DEFAULT_MINIMUM_ROOM_SIZE,
            maximum_room_size: DEFAULT_MAXIMUM_ROOM_SIZE,
            room_layout: RoomLayout::Scattered,
            corridor_layout: DEFAULT_CORRIDOR_LAYOUT,
            remove_deadends_ratio: DEFAULT_REMOVE_DEADENDS_RATIO,
            add_stair_count: DEFAULT_STAIR_COUNT,
            cell_size: DEFAULT_CELL_SIZE,
            map_padding: 0,
            scale: 1.0,
        }
    }
}

impl DungeonConfig {
    /// Check every parameter before any grid is allocated
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first offending field
    pub fn validate(&self) -> Result<()> {
        if self.row_count % 2 == 0 {
            return Err(invalid_parameter(
                "row_count",
                &self.row_count,
                &"must be odd",
            ));
        }
        if self.column_count % 2 == 0 {
            return Err(invalid_parameter(
                "column_count",
                &self.column_count,
                &"must be odd",
            ));
        }
        if !(0..=100).contains(&self.remove_deadends_ratio) {
            return Err(invalid_parameter(
                "remove_deadends_ratio",
                &self.remove_deadends_ratio,
                &"must be between 0 and 100",
            ));
        }
        if !(0..=100).contains(&self.corridor_layout) {
            return Err(invalid_parameter(
                "corridor_layout",
                &self.corridor_layout,
                &"must be between 0 and 100",
            ));
        }
        if self.minimum_room_size == 0 {
            return Err(invalid_parameter(
                "minimum_room_size",
                &self.minimum_room_size,
                &"must be positive",
            ));
        }
        if self.minimum_room_size > self.maximum_room_size {
            return Err(invalid_parameter(
                "maximum_room_size",
                &self.maximum_room_size,
                &format!("must be at least minimum_room_size ({})", self.minimum_room_size),
            ));
        }
        if self.cell_size == 0 {
            return Err(invalid_parameter(
                "cell_size",
                &self.cell_size,
                &"must be positive",
            ));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(invalid_parameter(
                "scale",
                &self.scale,
                &"must be a positive number",
            ));
        }
        Ok(())
    }

    /// Configuration with a different seed
    #[must_use]
    pub fn with_seed(&self, seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            ..self.clone()
        }
    }
}
