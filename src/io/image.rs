//! PNG preview export
//!
//! One square block of pixels per grid cell with a one-cell margin, the same
//! framing the vector renderer uses.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::algorithm::executor::Dungeon;
use crate::io::error::{DungeonError, Result, invalid_parameter};
use crate::io::palette::{Color, Palette};

/// Rasterize a dungeon, one `pixels_per_cell` block per cell
///
/// Stairs take priority over doors, doors over floor.
///
/// # Errors
///
/// Returns `InvalidParameter` if `pixels_per_cell` is zero
pub fn rasterize(dungeon: &Dungeon, palette: &Palette, pixels_per_cell: u32) -> Result<RgbaImage> {
    if pixels_per_cell == 0 {
        return Err(invalid_parameter(
            "pixels_per_cell",
            &pixels_per_cell,
            &"must be positive",
        ));
    }

    let grid = &dungeon.grid;
    let width = (grid.width() as u32 + 2) * pixels_per_cell;
    let height = (grid.height() as u32 + 2) * pixels_per_cell;
    let mut img = RgbaImage::from_pixel(width, height, Rgba(palette.background.rgba()));

    for ((r, c), cell) in grid.indexed_cells() {
        if cell.is_open_space() {
            fill_cell(&mut img, r, c, pixels_per_cell, palette.floor);
        }
    }
    for door in &dungeon.doors {
        fill_cell(&mut img, door.row, door.col, pixels_per_cell, palette.door);
    }
    for stair in &dungeon.stairs {
        fill_cell(&mut img, stair.row, stair.col, pixels_per_cell, palette.stair);
    }

    Ok(img)
}

fn fill_cell(img: &mut RgbaImage, row: usize, col: usize, pixels_per_cell: u32, color: Color) {
    let left = (col as u32 + 1) * pixels_per_cell;
    let top = (row as u32 + 1) * pixels_per_cell;
    for y in top..top + pixels_per_cell {
        for x in left..left + pixels_per_cell {
            if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
                *pixel = Rgba(color.rgba());
            }
        }
    }
}

/// Export a dungeon as a PNG preview
///
/// # Errors
///
/// Returns an error if:
/// - `pixels_per_cell` is zero
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(
    dungeon: &Dungeon,
    palette: &Palette,
    pixels_per_cell: u32,
    output_path: &Path,
) -> Result<()> {
    let img = rasterize(dungeon, palette, pixels_per_cell)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| DungeonError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| DungeonError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
