//! Spatial data structures for the dungeon raster
//!
//! This module contains spatial-related functionality including:
//! - Cell attribute flags and composite predicates
//! - Cardinal directions and template rotation
//! - The double-resolution grid
//! - Layout silhouettes

/// Cell flags and packed room id / label fields
pub mod cell;
/// Cardinal directions on the step grid
pub mod direction;
/// Double-resolution grid storage
pub mod grid;
/// Box, cross and round dungeon silhouettes
pub mod mask;

pub use cell::{Cell, CellFlags};
pub use direction::Direction;
pub use grid::DungeonGrid;
