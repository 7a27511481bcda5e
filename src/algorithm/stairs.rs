//! Stair placement at straight corridor termini

use log::debug;

use crate::math::random::RandomSource;
use crate::spatial::cell::CellFlags;
use crate::spatial::direction::Direction;
use crate::spatial::grid::DungeonGrid;

// Templates for a terminus whose closed end faces north; other directions
// are rotations of these offsets.
const WALLED: [[i32; 2]; 7] = [[1, -1], [0, -1], [-1, -1], [-1, 0], [-1, 1], [0, 1], [1, 1]];
const CORRIDOR: [[i32; 2]; 3] = [[0, 0], [1, 0], [2, 0]];
const NEXT: [i32; 2] = [1, 0];

/// Stair direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StairKind {
    /// Leads to a lower level
    Down,
    /// Leads to a higher level
    Up,
}

impl StairKind {
    /// Cell flag stamped for this kind
    pub const fn flag(self) -> CellFlags {
        match self {
            Self::Down => CellFlags::STAIR_DOWN,
            Self::Up => CellFlags::STAIR_UP,
        }
    }

    /// Label character stored in the cell
    pub const fn label(self) -> u8 {
        match self {
            Self::Down => b'd',
            Self::Up => b'u',
        }
    }
}

/// A placed stair tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stair {
    /// Stair cell row
    pub row: usize,
    /// Stair cell column
    pub col: usize,
    /// Adjoining corridor cell row
    pub next_row: usize,
    /// Adjoining corridor cell column
    pub next_col: usize,
    /// Up or down
    pub kind: StairKind,
}

/// Candidate stair location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StairEnd {
    /// Terminus row
    pub row: usize,
    /// Terminus column
    pub col: usize,
    /// Corridor cell the stair leads away from
    pub next_row: usize,
    /// Corridor cell the stair leads away from
    pub next_col: usize,
}

/// Whether `(r, c)` is a straight terminus closed on the `direction` side
pub fn is_stair_end(grid: &DungeonGrid, r: i32, c: i32, direction: Direction) -> bool {
    let corridor = CORRIDOR.iter().all(|&offset| {
        let [dr, dc] = direction.rotate(offset);
        grid.cell(r + dr, c + dc).is_bare_corridor()
    });
    corridor
        && WALLED.iter().all(|&offset| {
            let [dr, dc] = direction.rotate(offset);
            !grid.is_open(r + dr, c + dc)
        })
}

/// Scan step cells for stair candidates, first matching direction per cell
pub fn stair_ends(grid: &DungeonGrid) -> Vec<StairEnd> {
    let mut ends = Vec::new();

    for i in 0..grid.n_i() {
        for j in 0..grid.n_j() {
            let (r, c) = DungeonGrid::step_cell(i, j);
            if !grid.cell(r, c).is_bare_corridor() {
                continue;
            }
            let found = Direction::ALL
                .into_iter()
                .find(|&direction| is_stair_end(grid, r, c, direction));
            if let Some(direction) = found {
                let [dr, dc] = direction.rotate(NEXT);
                ends.push(StairEnd {
                    row: r as usize,
                    col: c as usize,
                    next_row: (r + dr) as usize,
                    next_col: (c + dc) as usize,
                });
            }
        }
    }

    ends
}

/// Place up to `count` stairs on randomly chosen termini
///
/// The first pick is always down and the second always up; later picks are
/// a coin flip.
pub fn place_stairs(grid: &mut DungeonGrid, rng: &mut RandomSource, count: usize) -> Vec<Stair> {
    if count == 0 {
        return Vec::new();
    }

    let mut ends = stair_ends(grid);
    let mut stairs = Vec::with_capacity(count.min(ends.len()));

    for pick in 0..count {
        let Some(end) = rng.take(&mut ends) else {
            break;
        };
        let kind = match pick {
            0 => StairKind::Down,
            1 => StairKind::Up,
            _ if rng.below(2) == 0 => StairKind::Down,
            _ => StairKind::Up,
        };

        if let Some(cell) = grid.get_mut(end.row as i32, end.col as i32) {
            cell.flags.insert(kind.flag());
            cell.label = kind.label();
        }
        stairs.push(Stair {
            row: end.row,
            col: end.col,
            next_row: end.next_row,
            next_col: end.next_col,
            kind,
        });
    }

    debug!("placed {} of {count} requested stairs", stairs.len());
    stairs
}
