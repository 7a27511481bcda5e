//! Dungeon silhouettes applied before any room or corridor work

use crate::io::configuration::DungeonLayout;
use crate::spatial::cell::CellFlags;
use crate::spatial::grid::DungeonGrid;

const BOX_TEMPLATE: [[bool; 3]; 3] = [[true, true, true], [true, false, true], [true, true, true]];

const CROSS_TEMPLATE: [[bool; 3]; 3] = [
    [false, true, false],
    [true, true, true],
    [false, true, false],
];

/// Block every cell outside the requested silhouette
pub fn apply_layout(grid: &mut DungeonGrid, layout: DungeonLayout) {
    match layout {
        DungeonLayout::None => {}
        DungeonLayout::Box => mask_cells(grid, &BOX_TEMPLATE),
        DungeonLayout::Cross => mask_cells(grid, &CROSS_TEMPLATE),
        DungeonLayout::Round => round_mask(grid),
    }
}

/// Scale a 3×3 template over the grid by nearest-neighbor sampling
fn mask_cells(grid: &mut DungeonGrid, template: &[[bool; 3]; 3]) {
    let row_ratio = 3.0 / grid.height() as f64;
    let col_ratio = 3.0 / grid.width() as f64;

    for r in 0..grid.height() {
        let template_row = template.get((r as f64 * row_ratio) as usize);
        for c in 0..grid.width() {
            let keep = template_row
                .and_then(|row| row.get((c as f64 * col_ratio) as usize))
                .copied()
                .unwrap_or(false);
            if !keep {
                grid.insert(r as i32, c as i32, CellFlags::BLOCKED);
            }
        }
    }
}

/// Block cells farther than half the column count from the center
fn round_mask(grid: &mut DungeonGrid) {
    let center_r = (grid.n_rows() / 2) as f64;
    let center_c = (grid.n_cols() / 2) as f64;

    for r in 0..grid.height() {
        for c in 0..grid.width() {
            let distance = (r as f64 - center_r).hypot(c as f64 - center_c);
            if distance > center_c {
                grid.insert(r as i32, c as i32, CellFlags::BLOCKED);
            }
        }
    }
}
