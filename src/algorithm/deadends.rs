//! Dead-end collapsing and final door bookkeeping
//!
//! Collapsing retracts open space one cell at a time from a dead end back to
//! the nearest junction. Doors are only finalized afterwards, since a
//! collapse may have closed the corridor a door opened onto.

use bitvec::prelude::*;
use log::debug;

use crate::algorithm::doors::Door;
use crate::algorithm::rooms::Room;
use crate::math::random::RandomSource;
use crate::spatial::cell::Cell;
use crate::spatial::direction::Direction;
use crate::spatial::grid::{BoundingBox, DungeonGrid};

// Dead end opening to the north: everything else around the cell is closed
const WALLED: [[i32; 2]; 5] = [[0, -1], [1, -1], [1, 0], [1, 1], [0, 1]];
const RECURSE: [i32; 2] = [-1, 0];

/// Whether `(r, c)` is closed on every side except `direction`
pub fn is_dead_end(grid: &DungeonGrid, r: i32, c: i32, direction: Direction) -> bool {
    WALLED.iter().all(|&offset| {
        let [dr, dc] = direction.rotate(offset);
        !grid.is_open(r + dr, c + dc)
    })
}

/// Collapse roughly `ratio` percent of dead ends (100 collapses all)
///
/// Returns the number of open cells that were closed.
pub fn remove_deadends(grid: &mut DungeonGrid, rng: &mut RandomSource, ratio: u32) -> usize {
    if ratio == 0 {
        return 0;
    }
    let all = ratio >= 100;
    let mut closed = 0;

    for i in 0..grid.n_i() {
        for j in 0..grid.n_j() {
            let (r, c) = DungeonGrid::step_cell(i, j);
            let cell = grid.cell(r, c);
            if !cell.is_open_space() || cell.is_stairs() {
                continue;
            }
            if !(all || rng.percent(ratio)) {
                continue;
            }
            closed += collapse(grid, r, c);
        }
    }

    debug!("collapsed {closed} dead-end cells at {ratio}%");
    closed
}

/// Retract a dead end starting at `(r, c)`
///
/// Room cells retract like corridor cells, so only rooms one step wide can
/// shrink. Stair cells stop the retraction, and the cell leading onto a
/// stair is never closed.
fn collapse(grid: &mut DungeonGrid, r: i32, c: i32) -> usize {
    let mut closed = 0;
    let mut stack = vec![(r, c, 0_usize)];

    while let Some(frame) = stack.last_mut() {
        let (r, c, next) = *frame;
        let Some(&direction) = Direction::ALL.get(next) else {
            stack.pop();
            continue;
        };
        frame.2 += 1;

        if !is_dead_end(grid, r, c, direction) {
            continue;
        }
        let [dr, dc] = direction.rotate(RECURSE);
        let (nr, nc) = (r + dr, c + dc);
        let neighbor = grid.cell(nr, nc);
        // The approach to a stair stays open
        if neighbor.is_stairs() {
            continue;
        }

        if grid.is_open(r, c) {
            closed += 1;
        }
        grid.clear(r, c);

        if neighbor.is_open_space() {
            stack.push((nr, nc, 0));
        }
    }

    closed
}

/// Shrink each room to the cells it still owns after collapsing
///
/// Rooms left without any cell are dropped.
pub fn fit_rooms(grid: &DungeonGrid, rooms: &mut Vec<Room>) {
    let before = rooms.len();
    rooms.retain_mut(|room| {
        let b = room.bounds;
        let owned = (b.north..=b.south)
            .flat_map(|r| (b.west..=b.east).map(move |c| (r, c)))
            .filter(|&(r, c)| {
                let cell = grid.cell(r as i32, c as i32);
                cell.is_room() && usize::from(cell.room_id) == room.id
            });

        let mut fitted: Option<BoundingBox> = None;
        for (r, c) in owned {
            fitted = Some(fitted.map_or(
                BoundingBox {
                    north: r,
                    south: r,
                    west: c,
                    east: c,
                },
                |f| BoundingBox {
                    north: f.north.min(r),
                    south: f.south.max(r),
                    west: f.west.min(c),
                    east: f.east.max(c),
                },
            ));
        }

        if let Some(bounds) = fitted {
            room.bounds = bounds;
        }
        fitted.is_some()
    });

    if rooms.len() < before {
        debug!("dropped {} collapsed rooms", before - rooms.len());
    }
}

/// Keep doors that still connect open space on both sides
///
/// Kept doors linking two rooms are mirrored onto the neighbor's opposite
/// wall. Returns each surviving door once.
pub fn fix_doors(grid: &DungeonGrid, rooms: &mut [Room]) -> Vec<Door> {
    let mut fixed = bitvec![0; grid.height() * grid.width()];
    let mut unique = Vec::new();
    let mut mirrored = Vec::new();

    for room in rooms.iter_mut() {
        let room_id = room.id;
        for direction in Direction::ALL {
            let Some(doors) = room.doors_mut(direction) else {
                continue;
            };
            let recorded = std::mem::take(doors);
            let mut kept = Vec::with_capacity(recorded.len());

            for door in recorded {
                if !door_is_open(grid, &door, direction) {
                    continue;
                }
                let index = door.row * grid.width() + door.col;
                if fixed.get(index).as_deref() != Some(&true) {
                    fixed.set(index, true);
                    if let Some(out_id) = door.out_id {
                        let mirror = Door {
                            out_id: Some(room_id),
                            ..door
                        };
                        mirrored.push((out_id, direction.opposite(), mirror));
                    }
                    unique.push(door);
                }
                kept.push(door);
            }

            *doors = kept;
        }
    }

    for (out_id, direction, door) in mirrored {
        if let Some(room) = rooms.iter_mut().find(|room| room.id == out_id) {
            room.add_door(direction, door);
        }
    }

    debug!("kept {} doors", unique.len());
    unique
}

/// Door cell and both cells across the opening are open space
pub fn door_is_open(grid: &DungeonGrid, door: &Door, direction: Direction) -> bool {
    let (r, c) = (door.row as i32, door.col as i32);
    let (dr, dc) = (direction.di(), direction.dj());
    grid.is_open(r, c) && grid.is_open(r - dr, c - dc) && grid.is_open(r + dr, c + dc)
}

/// Reset every cell still marked blocked to empty
pub fn empty_blocks(grid: &mut DungeonGrid) {
    for cell in grid.cells_mut() {
        if cell.is_blocked() {
            *cell = Cell::NOTHING;
        }
    }
}
