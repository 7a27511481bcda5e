//! Randomized depth-first corridor carving
//!
//! The backtracker runs on an explicit frame stack. Each frame draws its
//! direction order when it is entered, exactly where a recursive version
//! would, so the seed-to-maze mapping does not depend on stack depth.

use log::debug;

use crate::math::random::RandomSource;
use crate::spatial::cell::CellFlags;
use crate::spatial::direction::Direction;
use crate::spatial::grid::DungeonGrid;

struct Frame {
    i: usize,
    j: usize,
    directions: Vec<Direction>,
    next: usize,
}

/// Fill every reachable step cell with corridor
///
/// `straightness` is the percent chance (0-100) of trying the previous
/// direction first. Returns the number of tunnels started.
pub fn carve_corridors(grid: &mut DungeonGrid, rng: &mut RandomSource, straightness: u32) -> usize {
    let mut tunnels = 0;

    for i in 1..grid.n_i() {
        for j in 1..grid.n_j() {
            let (r, c) = DungeonGrid::step_cell(i, j);
            let cell = grid.cell(r, c);
            if cell.is_corridor() || cell.is_blocked() {
                continue;
            }
            tunnel(grid, rng, i, j, straightness);
            tunnels += 1;
        }
    }

    debug!("carved corridors from {tunnels} starting cells");
    tunnels
}

fn tunnel(grid: &mut DungeonGrid, rng: &mut RandomSource, i: usize, j: usize, straightness: u32) {
    let mut stack = vec![Frame {
        i,
        j,
        directions: tunnel_directions(rng, None, straightness),
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(&direction) = frame.directions.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;

        if let Some((next_i, next_j)) = open_tunnel(grid, frame.i, frame.j, direction) {
            let directions = tunnel_directions(rng, Some(direction), straightness);
            stack.push(Frame {
                i: next_i,
                j: next_j,
                directions,
                next: 0,
            });
        }
    }
}

/// Shuffled directions, with the previous one moved to the front on a
/// successful straightness roll
pub fn tunnel_directions(
    rng: &mut RandomSource,
    last: Option<Direction>,
    straightness: u32,
) -> Vec<Direction> {
    let mut directions = Direction::ALL.to_vec();
    rng.shuffle(&mut directions);

    if let Some(last) = last {
        if straightness > 0 && rng.percent(straightness) {
            directions.retain(|&direction| direction != last);
            directions.insert(0, last);
        }
    }

    directions
}

/// Carve from step `(i, j)` one step in `direction` if the way is clear
fn open_tunnel(
    grid: &mut DungeonGrid,
    i: usize,
    j: usize,
    direction: Direction,
) -> Option<(usize, usize)> {
    let next_i = usize::try_from(i as i32 + direction.di()).ok()?;
    let next_j = usize::try_from(j as i32 + direction.dj()).ok()?;

    let (this_r, this_c) = DungeonGrid::step_cell(i, j);
    let (next_r, next_c) = DungeonGrid::step_cell(next_i, next_j);
    let (mid_r, mid_c) = ((this_r + next_r) / 2, (this_c + next_c) / 2);

    if !sound_tunnel(grid, [mid_r, mid_c], [next_r, next_c]) {
        return None;
    }

    for (r, c) in [(this_r, this_c), (mid_r, mid_c), (next_r, next_c)] {
        grid.remove(r, c, CellFlags::ENTRANCE);
        grid.insert(r, c, CellFlags::CORRIDOR);
    }
    Some((next_i, next_j))
}

fn sound_tunnel(grid: &DungeonGrid, mid: [i32; 2], next: [i32; 2]) -> bool {
    [mid, next]
        .into_iter()
        .all(|[r, c]| grid.get(r, c).is_some_and(|cell| !cell.blocks_corridor()))
}
